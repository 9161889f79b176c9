// ABOUTME: Collaborator read interfaces for preference records and the activity catalog
// ABOUTME: Shipped implementations backed by seed data and an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! # Data Access Providers
//!
//! The recommendation core consumes two read interfaces from the surrounding
//! application: "read a user's preference record" and "read the static
//! activity catalog". The remote document store itself is out of scope; the
//! implementations here stand in for it with seed data and an in-memory map.

/// Core provider traits
pub mod core;

/// In-memory preference store
pub mod memory;

/// Built-in static activity catalog
pub mod static_catalog;

pub use core::{CatalogProvider, PreferenceProvider};
pub use memory::MemoryPreferenceStore;
pub use static_catalog::StaticCatalog;
