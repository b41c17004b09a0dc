// ABOUTME: Algorithmic core of the nutrition engine
// ABOUTME: Target computation, calorie banking, meal planning, and smart-swap k-NN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition intelligence algorithms
//!
//! Every function in this module is pure over its inputs: store access
//! happens behind narrow traits or at the service boundary, and randomness
//! arrives as an explicit parameter.

pub mod calorie_banking;
pub mod meal_planner;
pub mod smart_swap;
pub mod target_calculator;

pub use calorie_banking::{apply_calorie_banking, BankingHistory};
pub use meal_planner::{build_meal, generate_full_meal_plan};
pub use smart_swap::SmartSwapIndex;
pub use target_calculator::{compute_base_targets, mifflin_st_jeor};
