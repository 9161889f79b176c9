// ABOUTME: Static activity catalog models including Activity, ActivityBuilder, and ActivityCategory
// ABOUTME: Category display helpers and well-formedness checks for catalog snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed category tag set for catalog activities
///
/// Serialized as lowercase strings. Catalog snapshots may carry category
/// strings outside the known set; those parse to `Other` and are only ever
/// matchable through the interest-tag rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCategory {
    /// Songs, albums, playlists
    Music,
    /// Books and reading suggestions
    Books,
    /// Films and series
    Movies,
    /// Physical activities (walks, yoga, ...)
    Physical,
    /// Everything else, matched by interest tags only
    Other,
}

impl ActivityCategory {
    /// Parse a category string from the document store
    #[must_use]
    pub fn from_store_string(category: &str) -> Self {
        match category {
            "music" => Self::Music,
            "books" => Self::Books,
            "movies" => Self::Movies,
            "physical" => Self::Physical,
            _ => Self::Other,
        }
    }

    /// The canonical store string for this category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Books => "books",
            Self::Movies => "movies",
            Self::Physical => "physical",
            Self::Other => "other",
        }
    }

    /// Get the display symbol for this category
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Music => "\u{1f3b5}",    // 🎵
            Self::Books => "\u{1f4da}",    // 📚
            Self::Movies => "\u{1f3ac}",   // 🎬
            Self::Physical => "\u{1f4aa}", // 💪
            Self::Other => "\u{2728}",     // ✨
        }
    }

    /// Get the call-to-action label shown next to an activity link
    #[must_use]
    pub const fn link_label(&self) -> &'static str {
        match self {
            Self::Music => "Listen Now",
            Self::Books => "Read More",
            Self::Movies => "Watch Now",
            Self::Physical | Self::Other => "Start Activity",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ActivityCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_store_string(&raw))
    }
}

/// A single immutable catalog entry
///
/// Activities come from the remote document store as JSON documents; fields
/// other than `id` may be absent on malformed entries. An entry missing its
/// `category` or `title` is not matchable and is excluded from preference
/// filtering (it still participates in fallback and backfill draws).
///
/// Use `ActivityBuilder` to construct instances in seed data and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier, stable across catalog fetches
    pub id: String,
    /// Category tag; absent on malformed entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ActivityCategory>,
    /// Display name; also the match key for `physical` activities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Genre, present for music/books/movies entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Free-form interest tags for open-ended matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Presentation-only description, opaque to the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Presentation-only external link, opaque to the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Activity {
    /// Whether this entry carries the fields required for preference matching
    ///
    /// An activity without a category, or without a non-empty title, is
    /// treated as malformed catalog data and never matches any rule.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.category.is_some() && self.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Fluent builder for `Activity` instances
///
/// # Examples
///
/// ```rust
/// use brighten_core::models::{ActivityBuilder, ActivityCategory};
///
/// let activity = ActivityBuilder::new("act_42", "Kind of Blue", ActivityCategory::Music)
///     .genre("Jazz")
///     .tag("relaxation")
///     .description("A landmark modal jazz album.")
///     .link("https://example.org/kind-of-blue")
///     .build();
///
/// assert!(activity.is_well_formed());
/// ```
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Start building an activity with the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: ActivityCategory) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                category: Some(category),
                title: Some(title.into()),
                genre: None,
                tags: Vec::new(),
                description: None,
                link: None,
            },
        }
    }

    /// Set the genre
    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.activity.genre = Some(genre.into());
        self
    }

    /// Append an interest tag
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.activity.tags.push(tag.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.activity.description = Some(description.into());
        self
    }

    /// Set the external link
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.activity.link = Some(link.into());
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
