// ABOUTME: Brighten CLI - command-line tool for browsing the catalog and previewing suggestions
// ABOUTME: Loads a preference record from JSON and runs the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brighten Wellbeing

//!
//! Usage:
//! ```bash
//! # List the built-in activity catalog
//! brighten-cli catalog list
//!
//! # Preview suggestions for a preference record
//! brighten-cli recommend --preferences prefs.json
//!
//! # Reproducible draw with a fixed seed and custom count
//! brighten-cli recommend --preferences prefs.json --count 5 --seed 42
//!
//! # Suggestions with no stored preferences (random catalog draw)
//! brighten-cli recommend
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use brighten::config::AppConfig;
use brighten::logging::LoggingConfig;
use brighten::models::{Activity, ActivityPreferences};
use brighten::providers::StaticCatalog;
use brighten_intelligence::recommend;

#[derive(Parser)]
#[command(
    name = "brighten-cli",
    about = "Brighten activity recommendation CLI",
    long_about = "Command-line tool for browsing the Brighten activity catalog and previewing recommendation draws."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Catalog inspection commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Preview activity suggestions
    Recommend {
        /// Path to a preference record JSON file; omit for an empty record
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Target number of suggestions
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible draw; omit for a random one
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// Print every catalog entry
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Catalog { action } => match action {
            CatalogCommand::List => list_catalog(),
        },
        Command::Recommend {
            preferences,
            count,
            seed,
        } => recommend_command(preferences, count, seed),
    }
}

fn list_catalog() -> Result<()> {
    let catalog = StaticCatalog::default();
    println!("Catalog ({} activities):", catalog.len());
    for activity in catalog.activities() {
        print_activity(activity);
    }
    Ok(())
}

fn recommend_command(
    preferences_path: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let preferences = match preferences_path {
        Some(path) => {
            let bytes = fs::read(&path)
                .with_context(|| format!("failed to read preference file {}", path.display()))?;
            serde_json::from_slice::<ActivityPreferences>(&bytes)
                .with_context(|| format!("invalid preference record in {}", path.display()))?
        }
        None => ActivityPreferences::default(),
    };

    let count = count.unwrap_or_else(|| AppConfig::from_env().recommendation_count);
    let catalog = StaticCatalog::default();

    let suggestions = match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            recommend(&preferences, catalog.activities(), count, &mut rng)
        }
        None => {
            let mut rng = StdRng::from_entropy();
            recommend(&preferences, catalog.activities(), count, &mut rng)
        }
    };

    if suggestions.is_empty() {
        println!("No activities available to recommend from.");
        return Ok(());
    }

    println!("Suggestions ({} of {} requested):", suggestions.len(), count);
    for activity in &suggestions {
        print_activity(activity);
    }
    Ok(())
}

fn print_activity(activity: &Activity) {
    let icon = activity.category.map_or("\u{2728}", |c| c.icon());
    let title = activity.title.as_deref().unwrap_or("(untitled)");
    println!("  {icon} {title}");
    if let Some(genre) = &activity.genre {
        println!("      genre: {genre}");
    }
    if !activity.tags.is_empty() {
        println!("      tags: {}", activity.tags.join(", "));
    }
    if let Some(description) = &activity.description {
        println!("      {description}");
    }
    if let (Some(link), Some(category)) = (&activity.link, activity.category) {
        println!("      {}: {link}", category.link_label());
    }
}
