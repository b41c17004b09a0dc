// ABOUTME: Domain models for the nutrition engine
// ABOUTME: User profiles, nutrient targets, meal candidates, plans, and log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common data structures for nutrition data

pub mod meal;
pub mod nutrition;
pub mod profile;

pub use meal::{CandidateFilter, GlycemicIndex, MealCandidate, MealPlan, MealType, PlannedMeal};
pub use nutrition::{DailyLogTotals, MealLogEntry, MealLogSource, NutrientTarget};
pub use profile::{
    ActivityLevel, DietaryGoal, DietaryRestrictions, HealthConditions, Sex, UserProfile,
};
