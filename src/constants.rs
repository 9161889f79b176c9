// ABOUTME: Application-level constants for the Brighten root crate
// ABOUTME: Environment variable names and logging defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Constants for the application layer

/// Environment variable names recognized by `AppConfig::from_env`
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "BRIGHTEN_ENVIRONMENT";
    /// Log level override (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "BRIGHTEN_LOG_LEVEL";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "BRIGHTEN_LOG_FORMAT";
    /// Target number of suggestions per recommendation
    pub const RECOMMENDATION_COUNT: &str = "BRIGHTEN_RECOMMENDATION_COUNT";
}
