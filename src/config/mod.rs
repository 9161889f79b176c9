// ABOUTME: Configuration modules for the Brighten application layer
// ABOUTME: Environment-variable driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Configuration management

/// Environment-based configuration parsing
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};
