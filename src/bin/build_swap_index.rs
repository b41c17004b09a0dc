// ABOUTME: Offline smart-swap index build utility
// ABOUTME: Fits the k-NN index over a meal corpus file and writes the serving blob
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Smart-swap index builder.
//!
//! This binary fits the nearest-neighbor index over a meal corpus snapshot
//! and writes the opaque blob the serving process loads at startup.
//! Run it whenever the meal corpus changes.
//!
//! Usage:
//! ```bash
//! # Fit the index from a corpus export
//! cargo run --bin build-swap-index -- --meals data/meals.json --out models/swap_index.json
//!
//! # Verbose output
//! cargo run --bin build-swap-index -- --meals data/meals.json --out models/swap_index.json -v
//! ```

use clap::Parser;
use nutriplan::config::SwapIndexConfig;
use nutriplan::errors::{AppError, AppResult};
use nutriplan::intelligence::SmartSwapIndex;
use nutriplan::logging::{init_logging, LoggingConfig};
use nutriplan::models::MealCandidate;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "build-swap-index",
    about = "Nutriplan smart-swap index builder",
    long_about = "Fit the smart-swap nearest-neighbor index over a meal corpus JSON file"
)]
struct BuildArgs {
    /// Path to the meal corpus JSON file (array of meal documents)
    #[arg(long)]
    meals: PathBuf,

    /// Output path for the fitted index blob
    #[arg(long)]
    out: PathBuf,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn run(args: &BuildArgs) -> AppResult<()> {
    let raw = std::fs::read(&args.meals).map_err(|e| {
        AppError::invalid_input(format!("cannot read corpus file {}", args.meals.display()))
            .with_source(e)
    })?;

    let meals: Vec<MealCandidate> = serde_json::from_slice(&raw).map_err(|e| {
        AppError::invalid_input(format!("corpus file {} is not a meal array", args.meals.display()))
            .with_source(e)
    })?;

    info!(corpus = meals.len(), "loaded meal corpus");

    let index = SmartSwapIndex::fit(meals, &SwapIndexConfig::default())?;
    index.save(&args.out)?;

    info!(out = %args.out.display(), "smart-swap index written");
    Ok(())
}

fn main() -> ExitCode {
    let args = BuildArgs::parse();

    let logging = LoggingConfig {
        level: if args.verbose { "debug".into() } else { "info".into() },
        ..LoggingConfig::default()
    };
    if let Err(e) = init_logging(&logging) {
        eprintln!("logging init failed: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("index build failed: {e}");
            ExitCode::FAILURE
        }
    }
}
