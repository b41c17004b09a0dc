// ABOUTME: Configuration module for the nutrition engine
// ABOUTME: Typed configuration structs with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management for the nutrition engine

pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BankingConfig, BmrConfig, GoalOffsetsConfig, MacroSplitConfig,
    MealSplitConfig, NutritionConfig, SwapIndexConfig,
};
