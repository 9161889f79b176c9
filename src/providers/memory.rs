// ABOUTME: In-memory preference store backed by a concurrent map
// ABOUTME: Stands in for the remote user-record document store in tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use brighten_core::errors::AppResult;
use brighten_core::models::ActivityPreferences;

use super::core::PreferenceProvider;

/// In-memory preference store
///
/// Concurrent reads and writes are safe; each record is an independent value
/// snapshot. A user without a stored record reads back as the empty record,
/// matching the remote store's contract.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    records: DashMap<Uuid, ActivityPreferences>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) one user's preference record
    pub fn set(&self, user_id: Uuid, preferences: ActivityPreferences) {
        self.records.insert(user_id, preferences);
    }

    /// Remove one user's preference record
    pub fn remove(&self, user_id: Uuid) {
        self.records.remove(&user_id);
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PreferenceProvider for MemoryPreferenceStore {
    async fn get_user_preferences(&self, user_id: Uuid) -> AppResult<ActivityPreferences> {
        Ok(self
            .records
            .get(&user_id)
            .map(|record| record.value().clone())
            .unwrap_or_default())
    }
}
