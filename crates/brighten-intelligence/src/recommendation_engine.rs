// ABOUTME: Activity recommendation engine mapping preference records and catalog snapshots to suggestions
// ABOUTME: Rule-table preference matching, uniform shuffle selection, and id-complement backfill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Activity recommendation engine for personalized leisure suggestions
//!
//! The engine is a pure function of three inputs: a preference record, a
//! catalog snapshot, and an injected `Rng`. Production callers supply a real
//! random source; tests supply a seeded generator and get reproducible draws.

use std::collections::HashSet;

use brighten_core::constants::defaults::DEFAULT_RECOMMENDATION_COUNT;
use brighten_core::models::{Activity, ActivityCategory, ActivityPreferences};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Predicate deciding whether one activity satisfies one category rule
type CategoryPredicate = fn(&Activity, &ActivityPreferences) -> bool;

/// One row of the category rule table
struct CategoryRule {
    category: ActivityCategory,
    fires: CategoryPredicate,
}

/// Category match rules, evaluated uniformly
///
/// Adding a category is a data change here, not a new conditional. The
/// cross-category interest-tag rule lives outside the table because it
/// applies to every category.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: ActivityCategory::Music,
        fires: music_rule,
    },
    CategoryRule {
        category: ActivityCategory::Books,
        fires: books_rule,
    },
    CategoryRule {
        category: ActivityCategory::Movies,
        fires: movies_rule,
    },
    CategoryRule {
        category: ActivityCategory::Physical,
        fires: physical_rule,
    },
];

/// Shared rule shape for the three genre axes
///
/// A genre-less entry counts as a match whenever the axis carries at least
/// one accepted genre. Preserved exactly as the product behaves today; see
/// the open questions in DESIGN.md before changing it.
fn genre_axis_fires(genre: Option<&str>, accepted: Option<&[String]>) -> bool {
    let Some(accepted) = accepted else {
        return false;
    };
    match genre {
        Some(genre) => accepted.iter().any(|g| g == genre),
        None => !accepted.is_empty(),
    }
}

fn music_rule(activity: &Activity, preferences: &ActivityPreferences) -> bool {
    genre_axis_fires(activity.genre.as_deref(), preferences.music_genres.as_deref())
}

fn books_rule(activity: &Activity, preferences: &ActivityPreferences) -> bool {
    genre_axis_fires(activity.genre.as_deref(), preferences.book_genres.as_deref())
}

fn movies_rule(activity: &Activity, preferences: &ActivityPreferences) -> bool {
    genre_axis_fires(activity.genre.as_deref(), preferences.movie_genres.as_deref())
}

/// Physical activities match on exact title membership
fn physical_rule(activity: &Activity, preferences: &ActivityPreferences) -> bool {
    let Some(accepted) = preferences.physical_activities.as_deref() else {
        return false;
    };
    activity
        .title
        .as_deref()
        .is_some_and(|title| accepted.iter().any(|t| t == title))
}

/// Cross-category rule: any tag intersection with the user's interests
fn interests_fire(activity: &Activity, preferences: &ActivityPreferences) -> bool {
    let Some(interests) = preferences.other_interests.as_deref() else {
        return false;
    };
    activity
        .tags
        .iter()
        .any(|tag| interests.iter().any(|interest| interest == tag))
}

/// Whether an activity satisfies at least one match rule
///
/// Malformed entries (missing category, or missing/empty title) never match.
#[must_use]
pub fn matches_preferences(activity: &Activity, preferences: &ActivityPreferences) -> bool {
    if !activity.is_well_formed() {
        return false;
    }
    let category_fires = activity.category.is_some_and(|category| {
        CATEGORY_RULES
            .iter()
            .any(|rule| rule.category == category && (rule.fires)(activity, preferences))
    });
    category_fires || interests_fire(activity, preferences)
}

/// Configuration for the recommendation engine
#[derive(Debug, Clone, Copy)]
pub struct RecommendationConfig {
    /// Target number of suggestions per computation
    pub count: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }
}

/// Activity recommendation engine
///
/// Stateless between invocations; concurrent calls with independent inputs
/// never interfere. Result length is always `min(count, catalog len)`, zero
/// only for an empty catalog, and never contains duplicate ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    /// Create an engine with the default target count
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom target count
    #[must_use]
    pub const fn with_count(count: usize) -> Self {
        Self {
            config: RecommendationConfig { count },
        }
    }

    /// Create an engine with a full configuration
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// The configured target count
    #[must_use]
    pub const fn count(&self) -> usize {
        self.config.count
    }

    /// Compute suggestions for one preference record and catalog snapshot
    #[must_use]
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        preferences: &ActivityPreferences,
        catalog: &[Activity],
        rng: &mut R,
    ) -> Vec<Activity> {
        recommend(preferences, catalog, self.config.count, rng)
    }
}

/// Compute up to `count` activity suggestions
///
/// Three steps:
///
/// 1. **Filter** well-formed catalog entries through the category rule table
///    and the cross-category interest-tag rule (OR-combined).
/// 2. **Select** by uniform shuffle: from the matched set when anything
///    matched, otherwise from the full catalog.
/// 3. **Backfill** a short matched draw from the id-complement of the
///    selection. The fallback branch already draws from everything and is
///    never backfilled.
///
/// Order of the result is draw order; it carries no meaning beyond display.
#[must_use]
pub fn recommend<R: Rng + ?Sized>(
    preferences: &ActivityPreferences,
    catalog: &[Activity],
    count: usize,
    rng: &mut R,
) -> Vec<Activity> {
    let matched: Vec<Activity> = catalog
        .iter()
        .filter(|activity| matches_preferences(activity, preferences))
        .cloned()
        .collect();

    if matched.is_empty() {
        debug!(
            catalog = catalog.len(),
            "no preference match, sampling from the full catalog"
        );
        let mut pool = catalog.to_vec();
        pool.shuffle(rng);
        pool.truncate(count);
        return pool;
    }

    debug!(
        matched = matched.len(),
        catalog = catalog.len(),
        "sampling from preference-matched activities"
    );
    let mut selection = matched;
    selection.shuffle(rng);
    selection.truncate(count);

    if selection.len() < count {
        let needed = count - selection.len();
        let chosen: HashSet<String> = selection.iter().map(|a| a.id.clone()).collect();
        let mut extras: Vec<Activity> = catalog
            .iter()
            .filter(|activity| !chosen.contains(&activity.id))
            .cloned()
            .collect();
        extras.shuffle(rng);
        extras.truncate(needed);
        debug!(backfilled = extras.len(), "topping up short selection");
        selection.extend(extras);
    }

    selection
}
