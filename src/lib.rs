// ABOUTME: Main library entry point for the Brighten wellbeing platform core
// ABOUTME: Wires collaborator providers, the recommendation service, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

#![deny(unsafe_code)]

//! # Brighten
//!
//! The application-facing crate of the Brighten wellbeing platform core. The
//! recommendation engine itself lives in `brighten-intelligence` and the
//! shared domain types in `brighten-core`; this crate supplies everything
//! around them: the collaborator interfaces that stand in for the remote
//! document store, the service that wires fetch → engine → result, and the
//! ambient configuration and logging stack.
//!
//! ## Architecture
//!
//! - **Providers**: Read interfaces for preference records and the static
//!   activity catalog, with in-memory and seed-data implementations
//! - **Services**: The recommendation service driving the engine
//! - **Config**: Environment-based runtime configuration
//! - **Logging**: Structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brighten::providers::{MemoryPreferenceStore, StaticCatalog};
//! use brighten::services::RecommendationService;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> brighten::errors::AppResult<()> {
//!     let service =
//!         RecommendationService::new(MemoryPreferenceStore::new(), StaticCatalog::default());
//!     let suggestions = service.recommend_for_user(Uuid::new_v4()).await?;
//!     for activity in suggestions {
//!         println!("{}", activity.title.unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```

/// Collaborator read interfaces and their shipped implementations
pub mod providers;

/// Application services driving the recommendation engine
pub mod services;

/// Environment-based runtime configuration
pub mod config;

/// Structured logging configuration
pub mod logging;

/// Application constants
pub mod constants;

// Re-export the foundation crates under their familiar paths
pub use brighten_core::{constants as core_constants, errors, models};
pub use brighten_intelligence as intelligence;
