// ABOUTME: Per-user leisure preference record with one optional field per preference axis
// ABOUTME: Absent axes mean "no opinion"; present-but-empty axes never fire a match rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

use serde::{Deserialize, Serialize};

/// A user's stored leisure preferences
///
/// Every field is optional: an absent axis means the user has expressed no
/// opinion there, and no rule for that axis can fire. An axis that is present
/// but empty also never fires. The record is a read-only snapshot for the
/// duration of one recommendation computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPreferences {
    /// Accepted music genres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_genres: Option<Vec<String>>,
    /// Accepted book genres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_genres: Option<Vec<String>>,
    /// Accepted movie genres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_genres: Option<Vec<String>>,
    /// Accepted physical activity titles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activities: Option<Vec<String>>,
    /// Free-form interests matched against activity tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_interests: Option<Vec<String>>,
}

impl ActivityPreferences {
    /// Whether every axis is absent or empty
    ///
    /// An empty record matches nothing, which sends the engine down its
    /// full-catalog fallback path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.music_genres,
            &self.book_genres,
            &self.movie_genres,
            &self.physical_activities,
            &self.other_interests,
        ]
        .iter()
        .all(|axis| axis.as_ref().is_none_or(Vec::is_empty))
    }
}

/// Split a free-form comma-separated interest string into tags
///
/// The preference form stores "other interests" as a single text input;
/// segments are trimmed and empty segments are dropped.
///
/// # Examples
///
/// ```rust
/// use brighten_core::models::parse_interest_tags;
///
/// let tags = parse_interest_tags("mindfulness, gardening, ,board games");
/// assert_eq!(tags, vec!["mindfulness", "gardening", "board games"]);
/// ```
#[must_use]
pub fn parse_interest_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
