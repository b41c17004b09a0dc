// ABOUTME: Request-scoped orchestration over the store and the algorithmic core
// ABOUTME: Target computation, plan generation, smart swaps, and intake tracking services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Business logic extracted from route handlers.
//!
//! Each service is a thin struct over a [`NutritionStore`](crate::store::NutritionStore)
//! handle. Every operation validates its request fields before touching the
//! store, performs its reads sequentially, and propagates store failures
//! untouched.

pub mod meal_plans;
pub mod swaps;
pub mod targets;
pub mod tracker;

pub use meal_plans::MealPlanService;
pub use swaps::{SwapService, SwapSuggestions};
pub use targets::TargetService;
pub use tracker::{TrackerService, TrackerSummary};
