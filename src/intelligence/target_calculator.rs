// ABOUTME: Base nutrition target computation from a user profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TEE, goal offset, and macro derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Base Target Calculator
//!
//! Derives the daily calorie and macronutrient targets a profile implies,
//! before any banking adjustment.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use crate::config::{ActivityFactorsConfig, BmrConfig, GoalOffsetsConfig, NutritionConfig};
use crate::models::nutrition::round1;
use crate::models::{ActivityLevel, DietaryGoal, NutrientTarget, Sex, UserProfile};
use tracing::debug;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Otherwise: -161
///
/// Every input defaults safely upstream; this is a total function.
#[must_use]
pub fn mifflin_st_jeor(
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
    };

    config.weight_coef * weight_kg
        + config.height_coef * height_cm
        + config.age_coef * f64::from(age_years)
        + sex_constant
}

/// Activity multiplier for a profile's activity level
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calorie offset for a profile's dietary goal
#[must_use]
pub const fn goal_offset(goal: DietaryGoal, config: &GoalOffsetsConfig) -> f64 {
    match goal {
        DietaryGoal::LoseWeight => config.lose_weight,
        DietaryGoal::Maintain => config.maintain,
        DietaryGoal::GainWeight => config.gain_weight,
    }
}

/// Compute base daily targets from a profile
///
/// TEE = BMR x activity factor; calories = max(floor, round(TEE + goal
/// offset)); macros split the calorie budget 25/45/30 by energy and are
/// reported in grams to one decimal (4 kcal/g protein and carbs, 9 kcal/g
/// fat).
///
/// Pure and deterministic; no error paths.
#[must_use]
pub fn compute_base_targets(profile: &UserProfile, config: &NutritionConfig) -> NutrientTarget {
    let bmr = mifflin_st_jeor(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        &config.bmr,
    );

    let tee = bmr * activity_factor(profile.activity_level, &config.activity_factors);
    let offset = goal_offset(profile.dietary_goal, &config.goal_offsets);

    let split = &config.macro_split;
    let calories = (tee + offset).round().max(split.min_calories);

    let target = NutrientTarget {
        calories,
        protein_g: round1(split.protein_fraction * calories / split.protein_kcal_per_g),
        carbs_g: round1(split.carbs_fraction * calories / split.carbs_kcal_per_g),
        fat_g: round1(split.fat_fraction * calories / split.fat_kcal_per_g),
    };

    debug!(
        bmr,
        tee,
        calories = target.calories,
        "computed base nutrition targets"
    );

    target
}
