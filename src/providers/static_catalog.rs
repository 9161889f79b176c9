// ABOUTME: Built-in static activity catalog and JSON snapshot loading
// ABOUTME: Seed data standing in for the remote staticActivities collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Static activity catalog provider
//!
//! The catalog is a small, static collection: tens of entries spanning the
//! five categories. `StaticCatalog::default()` carries the built-in seed set;
//! `from_json_slice` loads a catalog snapshot exported from the document
//! store instead.

use async_trait::async_trait;

use brighten_core::errors::AppResult;
use brighten_core::models::{Activity, ActivityBuilder, ActivityCategory};

use super::core::CatalogProvider;

/// Catalog provider serving a fixed in-memory activity list
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    activities: Vec<Activity>,
}

impl StaticCatalog {
    /// Create a catalog from an explicit activity list
    #[must_use]
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Load a catalog from a JSON snapshot (an array of activity documents)
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the snapshot is not valid JSON for
    /// an activity array. Individual malformed entries (missing category or
    /// title) are kept: the engine excludes them from matching but they still
    /// participate in fallback draws.
    pub fn from_json_slice(bytes: &[u8]) -> AppResult<Self> {
        let activities: Vec<Activity> = serde_json::from_slice(bytes)?;
        Ok(Self::new(activities))
    }

    /// The catalog entries
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(builtin_catalog())
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn get_activity_catalog(&self) -> AppResult<Vec<Activity>> {
        Ok(self.activities.clone())
    }
}

/// The built-in seed catalog
///
/// Physical entries use the exact titles offered by the preference form so
/// stored preferences can match them.
#[allow(clippy::too_many_lines)]
fn builtin_catalog() -> Vec<Activity> {
    vec![
        // Music
        ActivityBuilder::new("music-kind-of-blue", "Kind of Blue", ActivityCategory::Music)
            .genre("Jazz")
            .tag("relaxation")
            .description("Miles Davis's landmark modal album, an easy landing after a long day.")
            .link("https://open.spotify.com/album/1weenld61qoidwYuZ1GESA")
            .build(),
        ActivityBuilder::new("music-abbey-road", "Abbey Road", ActivityCategory::Music)
            .genre("Rock")
            .description("The Beatles' final studio sessions, side two in one sitting.")
            .link("https://open.spotify.com/album/0ETFjACtuP2ADo6LFhL6HN")
            .build(),
        ActivityBuilder::new("music-goldberg", "Goldberg Variations", ActivityCategory::Music)
            .genre("Classical")
            .tag("focus")
            .description("Glenn Gould's 1981 recording, quiet concentration in music form.")
            .build(),
        ActivityBuilder::new("music-midnight-mix", "Midnight City Mix", ActivityCategory::Music)
            .genre("Electronic")
            .tag("energy")
            .description("An hour of synth-driven tracks for an evening lift.")
            .build(),
        ActivityBuilder::new("music-lofi-radio", "Lo-fi Focus Radio", ActivityCategory::Music)
            .tag("focus")
            .tag("relaxation")
            .description("A genre-blending stream for studying or unwinding.")
            .build(),
        // Books
        ActivityBuilder::new("book-the-hobbit", "The Hobbit", ActivityCategory::Books)
            .genre("Fantasy")
            .tag("adventure")
            .description("Tolkien's there-and-back-again, comfort reading at its finest.")
            .build(),
        ActivityBuilder::new("book-hail-mary", "Project Hail Mary", ActivityCategory::Books)
            .genre("Sci-Fi")
            .tag("curiosity")
            .description("A lone astronaut puzzles his way across the galaxy.")
            .build(),
        ActivityBuilder::new("book-big-sleep", "The Big Sleep", ActivityCategory::Books)
            .genre("Mystery")
            .description("Raymond Chandler's Marlowe debut, best read on a rainy evening.")
            .build(),
        ActivityBuilder::new(
            "book-short-history",
            "A Short History of Nearly Everything",
            ActivityCategory::Books,
        )
        .genre("Non-Fiction")
        .tag("curiosity")
        .description("Bill Bryson walks the whole of science with a grin.")
        .build(),
        // Movies
        ActivityBuilder::new("movie-spirited-away", "Spirited Away", ActivityCategory::Movies)
            .genre("Animation")
            .tag("family")
            .description("Miyazaki's bathhouse odyssey, gentle and strange.")
            .build(),
        ActivityBuilder::new(
            "movie-grand-budapest",
            "The Grand Budapest Hotel",
            ActivityCategory::Movies,
        )
        .genre("Comedy")
        .description("A pastel caper about a concierge and his lobby boy.")
        .build(),
        ActivityBuilder::new("movie-arrival", "Arrival", ActivityCategory::Movies)
            .genre("Sci-Fi")
            .tag("curiosity")
            .description("A linguist learns to read a language that bends time.")
            .build(),
        ActivityBuilder::new("movie-paddington", "Paddington 2", ActivityCategory::Movies)
            .genre("Comedy")
            .tag("family")
            .description("A bear, a pop-up book, and unreasonable kindness.")
            .build(),
        // Physical
        ActivityBuilder::new("physical-walking", "Walking", ActivityCategory::Physical)
            .tag("outdoors")
            .tag("fresh-air")
            .description("Twenty unhurried minutes around the block or the park.")
            .build(),
        ActivityBuilder::new("physical-yoga", "Yoga", ActivityCategory::Physical)
            .tag("mindfulness")
            .description("A short beginner flow to loosen shoulders and breath.")
            .link("https://www.youtube.com/results?search_query=beginner+yoga+20+minutes")
            .build(),
        ActivityBuilder::new("physical-cycling", "Cycling", ActivityCategory::Physical)
            .tag("outdoors")
            .description("An easy loop on quiet roads, no destination required.")
            .build(),
        ActivityBuilder::new("physical-swimming", "Swimming", ActivityCategory::Physical)
            .description("Laps at your own pace; the water does half the thinking.")
            .build(),
        ActivityBuilder::new("physical-dancing", "Dancing", ActivityCategory::Physical)
            .tag("social")
            .tag("energy")
            .description("Kitchen disco counts. Three songs, full commitment.")
            .build(),
        // Other
        ActivityBuilder::new("other-meditation", "Guided Meditation", ActivityCategory::Other)
            .tag("mindfulness")
            .tag("relaxation")
            .description("Ten minutes of guided breathing to reset the day.")
            .build(),
        ActivityBuilder::new("other-journaling", "Journaling", ActivityCategory::Other)
            .tag("reflection")
            .tag("mindfulness")
            .description("Three pages, no editing, no audience.")
            .build(),
        ActivityBuilder::new("other-birdwatching", "Birdwatching", ActivityCategory::Other)
            .tag("outdoors")
            .tag("nature")
            .description("A window, a field guide, and whoever shows up.")
            .build(),
        ActivityBuilder::new("other-sketching", "Sketching", ActivityCategory::Other)
            .tag("creativity")
            .description("Draw the nearest object badly, then draw it again.")
            .build(),
    ]
}
