// ABOUTME: Core data models for the Brighten wellbeing platform
// ABOUTME: Re-exports Activity, ActivityCategory, and ActivityPreferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! # Data Models
//!
//! Core data structures shared across the Brighten platform. Both models are
//! read-only snapshots for the duration of one recommendation computation:
//! the engine holds no state between invocations.
//!
//! ## Design Principles
//!
//! - **Store Agnostic**: Models abstract away the remote document store
//! - **Tolerant**: Optional fields accommodate partially filled records
//! - **Serializable**: All models support JSON serialization
//!
//! ## Core Models
//!
//! - `Activity`: A single catalog entry (song, book, film, exercise, ...)
//! - `ActivityCategory`: Fixed category tag set with display helpers
//! - `ActivityPreferences`: A user's per-axis leisure preferences

// Domain modules
mod activity;
mod preferences;

pub use activity::{Activity, ActivityBuilder, ActivityCategory};
pub use preferences::{parse_interest_tags, ActivityPreferences};
