// ABOUTME: Core types and constants for the Brighten wellbeing platform
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

#![deny(unsafe_code)]

//! # Brighten Core
//!
//! Foundation crate providing shared types and constants for the Brighten
//! wellbeing platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Core data models (`Activity`, `ActivityCategory`, `ActivityPreferences`)
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (activities and user leisure preferences)
pub mod models;

/// Application constants and configuration values organized by domain
pub mod constants;
