// ABOUTME: Application-wide constants for the Brighten platform organized by domain
// ABOUTME: Recommendation defaults, preference form option lists, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Application constants organized by domain

/// Recommendation defaults
pub mod defaults {
    /// Target number of suggestions per recommendation computation
    pub const DEFAULT_RECOMMENDATION_COUNT: usize = 3;
}

/// Selectable option lists offered by the preference form
///
/// Informational only: the engine matches whatever strings a preference
/// record carries and never restricts matching to these lists.
pub mod preference_options {
    /// Music genres offered as checkboxes
    pub const MUSIC_GENRES: &[&str] = &[
        "Pop",
        "Rock",
        "Classical",
        "Jazz",
        "Hip Hop",
        "Electronic",
        "Country",
    ];

    /// Book genres offered as checkboxes
    pub const BOOK_GENRES: &[&str] = &[
        "Fiction",
        "Non-Fiction",
        "Fantasy",
        "Sci-Fi",
        "Mystery",
        "Thriller",
        "Biography",
    ];

    /// Movie genres offered as checkboxes
    pub const MOVIE_GENRES: &[&str] = &[
        "Action",
        "Comedy",
        "Drama",
        "Horror",
        "Sci-Fi",
        "Thriller",
        "Animation",
    ];

    /// Physical activities offered as checkboxes
    pub const PHYSICAL_ACTIVITIES: &[&str] = &[
        "Walking",
        "Running",
        "Yoga",
        "Cycling",
        "Swimming",
        "Dancing",
        "Hiking",
    ];
}

/// Service names for structured logging
pub mod service_names {
    /// The Brighten application service
    pub const BRIGHTEN: &str = "brighten";
}
