// ABOUTME: Main library entry point for the nutriplan nutrition engine
// ABOUTME: Adaptive targets, calorie banking, meal planning, and smart-swap k-NN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! An adaptive nutrition engine: daily calorie/macro targets derived from a
//! user profile, corrected by a rolling window of past intake deviation
//! ("calorie banking"), assembled into meal plans under per-meal calorie
//! budgets, with nearest-neighbor smart swaps over the meal corpus.
//!
//! ## Architecture
//!
//! - **Models**: profiles, targets, meal candidates, plans, and log entries
//! - **Intelligence**: the pure algorithmic core (targets, banking,
//!   planning, swap index)
//! - **Store**: the narrow async persistence seam plus an in-memory backend
//! - **Services**: request-scoped orchestration mirroring the API surface
//! - **Config**: typed tunables with documented defaults
//!
//! Every store read a request depends on is a potentially-failing call;
//! services perform them sequentially and propagate failures as typed
//! [`errors::AppError`] values. The smart-swap index is built offline (see
//! the `build-swap-index` binary), loaded once at process start, and never
//! mutated afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriplan::config::NutritionConfig;
//! use nutriplan::services::TargetService;
//! use nutriplan::store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> nutriplan::errors::AppResult<()> {
//!     let store = MemoryStore::new();
//!     let targets = TargetService::new(store, NutritionConfig::default());
//!     let daily = targets.calculate_daily_target("user-1").await?;
//!     println!("today's calories: {}", daily.calories);
//!     Ok(())
//! }
//! ```

/// Configuration management for the engine's tunables
pub mod config;

/// Unified error handling system
pub mod errors;

/// Nutrition intelligence algorithms
pub mod intelligence;

/// Logging configuration and setup
pub mod logging;

/// Common data structures for nutrition data
pub mod models;

/// Request-scoped orchestration services
pub mod services;

/// Persistence seam and store backends
pub mod store;
