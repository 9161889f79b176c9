// ABOUTME: Activity recommendation engine for the Brighten wellbeing platform
// ABOUTME: Pure preference matching, uniform sampling, and backfill over catalog snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

#![deny(unsafe_code)]

//! # Brighten Intelligence
//!
//! The activity recommendation engine: a stateless function of a user's
//! preference record, a catalog snapshot, and an injected source of
//! randomness. It performs no I/O, holds no state between invocations, and is
//! total over its input domain (empty catalogs, empty preference records, and
//! malformed catalog entries all have defined, non-panicking outcomes).

/// Preference matching, selection, and backfill
pub mod recommendation_engine;

pub use recommendation_engine::{
    matches_preferences, recommend, RecommendationConfig, RecommendationEngine,
};
