// ABOUTME: Application services for the Brighten platform core
// ABOUTME: Business logic between the collaborator providers and the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//! Application services

/// Activity recommendation service
pub mod recommendations;

pub use recommendations::RecommendationService;
