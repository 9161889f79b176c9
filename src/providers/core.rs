// ABOUTME: Core provider traits for preference and catalog read access
// ABOUTME: Defines the collaborator contract the recommendation service depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! # Provider Traits
//!
//! The two read operations the core depends on. Both return already-resolved,
//! in-memory values; fetching, retrying, and caching are the provider's
//! concern, never the engine's.
//!
//! ## Error Contract
//!
//! - A user who has never set preferences yields the EMPTY record, not an
//!   error. Only genuine transport failures surface as `AppError`.
//! - The catalog is assumed small enough to hold entirely in memory (tens to
//!   low hundreds of entries).

use async_trait::async_trait;
use uuid::Uuid;

use brighten_core::errors::AppResult;
use brighten_core::models::{Activity, ActivityPreferences};

/// Read access to per-user preference records
#[async_trait]
pub trait PreferenceProvider: Send + Sync {
    /// Fetch the preference record for one user
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures; a missing record is the
    /// empty record.
    async fn get_user_preferences(&self, user_id: Uuid) -> AppResult<ActivityPreferences>;
}

/// Read access to the static activity catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full activity catalog snapshot
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures; an empty catalog is a
    /// valid (if unhelpful) snapshot.
    async fn get_activity_catalog(&self) -> AppResult<Vec<Activity>>;
}
