// ABOUTME: Recommendation service wiring preference and catalog fetches into the engine
// ABOUTME: Owns the collaborator calls, randomness source, and structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Activity recommendation service
//!
//! The service owns what the engine deliberately does not: fetching the two
//! collaborator snapshots and supplying a source of randomness. Each call is
//! independent; "refresh suggestions" is simply calling again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use uuid::Uuid;

use brighten_core::errors::AppResult;
use brighten_core::models::Activity;
use brighten_intelligence::RecommendationEngine;

use crate::providers::{CatalogProvider, PreferenceProvider};

/// Recommendation service over a preference provider and a catalog provider
pub struct RecommendationService<P, C> {
    preferences: P,
    catalog: C,
    engine: RecommendationEngine,
}

impl<P, C> RecommendationService<P, C>
where
    P: PreferenceProvider,
    C: CatalogProvider,
{
    /// Create a service with the default engine configuration
    pub fn new(preferences: P, catalog: C) -> Self {
        Self {
            preferences,
            catalog,
            engine: RecommendationEngine::new(),
        }
    }

    /// Create a service with a custom target suggestion count
    pub fn with_count(preferences: P, catalog: C, count: usize) -> Self {
        Self {
            preferences,
            catalog,
            engine: RecommendationEngine::with_count(count),
        }
    }

    /// The configured target suggestion count
    #[must_use]
    pub const fn count(&self) -> usize {
        self.engine.count()
    }

    /// Compute suggestions for one user with a fresh random source
    ///
    /// # Errors
    ///
    /// Propagates collaborator transport failures. A user without a stored
    /// preference record is NOT a failure; the engine falls back to a random
    /// catalog draw for them.
    pub async fn recommend_for_user(&self, user_id: Uuid) -> AppResult<Vec<Activity>> {
        let mut rng = StdRng::from_entropy();
        self.recommend_for_user_with_rng(user_id, &mut rng).await
    }

    /// Compute suggestions for one user with an injected random source
    ///
    /// Used by tests (and the CLI's `--seed`) to make draws reproducible.
    ///
    /// # Errors
    ///
    /// Propagates collaborator transport failures.
    pub async fn recommend_for_user_with_rng<R: Rng + ?Sized + Send>(
        &self,
        user_id: Uuid,
        rng: &mut R,
    ) -> AppResult<Vec<Activity>> {
        let preferences = self.preferences.get_user_preferences(user_id).await?;
        let catalog = self.catalog.get_activity_catalog().await?;

        debug!(
            %user_id,
            catalog = catalog.len(),
            preferences_empty = preferences.is_empty(),
            "computing activity suggestions"
        );

        let suggestions = self.engine.recommend(&preferences, &catalog, rng);

        info!(
            %user_id,
            suggested = suggestions.len(),
            requested = self.engine.count(),
            "activity suggestions computed"
        );

        Ok(suggestions)
    }
}
