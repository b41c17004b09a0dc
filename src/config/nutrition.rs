// ABOUTME: Nutrition engine configuration for target computation, banking, planning, and swaps
// ABOUTME: Configures BMR coefficients, activity factors, goal offsets, macro split, and k-NN defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Engine Configuration
//!
//! Typed configuration for every tunable the engine consumes: BMR formula
//! coefficients, TDEE activity multipliers, dietary goal calorie offsets,
//! the fixed macro energy split, calorie-banking bounds, per-meal calorie
//! proportions, and smart-swap index defaults.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use crate::errors::{AppError, AppResult};
use crate::models::MealType;
use serde::{Deserialize, Serialize};

/// Nutrition engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie offsets per dietary goal
    pub goal_offsets: GoalOffsetsConfig,
    /// Fixed macronutrient energy split
    pub macro_split: MacroSplitConfig,
    /// Calorie banking window and bounds
    pub banking: BankingConfig,
    /// Per-meal-type calorie proportions
    pub meal_split: MealSplitConfig,
    /// Smart-swap nearest-neighbor index settings
    pub swap_index: SwapIndexConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. American Journal of Clinical Nutrition, 51(2), 241-247.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light activity (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderately_active: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Calorie offsets applied to TEE per dietary goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOffsetsConfig {
    /// Weight loss deficit (kcal): -500
    pub lose_weight: f64,
    /// Maintenance (kcal): 0
    pub maintain: f64,
    /// Weight gain surplus (kcal): +500
    pub gain_weight: f64,
}

impl Default for GoalOffsetsConfig {
    fn default() -> Self {
        Self {
            lose_weight: -500.0,
            maintain: 0.0,
            gain_weight: 500.0,
        }
    }
}

/// Fixed macronutrient energy split applied to daily calories
///
/// Percentages are fractions of total calorie energy; gram conversion uses
/// 4 kcal/g for protein and carbohydrates and 9 kcal/g for fat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share of calories: 0.25
    pub protein_fraction: f64,
    /// Carbohydrate share of calories: 0.45
    pub carbs_fraction: f64,
    /// Fat share of calories: 0.30
    pub fat_fraction: f64,
    /// Energy density of protein (kcal/g): 4
    pub protein_kcal_per_g: f64,
    /// Energy density of carbohydrates (kcal/g): 4
    pub carbs_kcal_per_g: f64,
    /// Energy density of fat (kcal/g): 9
    pub fat_kcal_per_g: f64,
    /// Floor on computed daily calories: 1200
    pub min_calories: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_fraction: 0.25,
            carbs_fraction: 0.45,
            fat_fraction: 0.30,
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
            min_calories: 1200.0,
        }
    }
}

impl MacroSplitConfig {
    /// Validate that the macro fractions sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the fractions do not sum to 1.0 within
    /// floating-point tolerance.
    pub fn validate(&self) -> AppResult<()> {
        let sum = self.protein_fraction + self.carbs_fraction + self.fat_fraction;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(AppError::invalid_input(format!(
                "macro fractions must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Calorie banking window and adjustment bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankingConfig {
    /// Number of preceding calendar days inspected: 3
    pub window_days: u32,
    /// Divisor spreading the average deviation across upcoming days: 3
    pub spread_divisor: f64,
    /// Maximum absolute per-day adjustment (kcal): 150
    pub max_adjustment: i64,
    /// Floor on banked daily calories: 1100
    pub min_calories: f64,
}

impl Default for BankingConfig {
    fn default() -> Self {
        Self {
            window_days: 3,
            spread_divisor: 3.0,
            max_adjustment: 150,
            min_calories: 1100.0,
        }
    }
}

/// Per-meal-type calorie proportions and the greedy stop threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share of daily calories: 0.25
    pub breakfast: f64,
    /// Lunch share of daily calories: 0.35
    pub lunch: f64,
    /// Dinner share of daily calories: 0.30
    pub dinner: f64,
    /// Snack share of daily calories: 0.10
    pub snack: f64,
    /// Accumulation stops once this fraction of the meal budget is reached: 0.90
    pub stop_fraction: f64,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
            stop_fraction: 0.90,
        }
    }
}

impl MealSplitConfig {
    /// Calorie share for a meal type; types outside the daily split get 0
    #[must_use]
    pub const fn fraction_for(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
            MealType::Other => 0.0,
        }
    }
}

/// Smart-swap nearest-neighbor index settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapIndexConfig {
    /// Neighbors retrieved per fitted index by default: 6
    pub retrieval_neighbors: usize,
    /// Default replacement count when the caller does not specify k: 5
    pub default_k: usize,
}

impl Default for SwapIndexConfig {
    fn default() -> Self {
        Self {
            retrieval_neighbors: 6,
            default_k: 5,
        }
    }
}
