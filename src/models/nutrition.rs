// ABOUTME: Nutrient target and intake logging models
// ABOUTME: NutrientTarget, DailyLogTotals, MealLogEntry, and MealLogSource definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Round to one decimal place, the precision macro grams are reported at
#[must_use]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Daily calorie and macronutrient targets
///
/// Produced by the base target calculator and refined by calorie banking.
/// `calories` always holds an integral value; macro grams are reported to
/// one decimal place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientTarget {
    /// Daily calorie target (kcal)
    pub calories: f64,
    /// Daily protein target (grams)
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Daily fat target (grams)
    #[serde(rename = "fat")]
    pub fat_g: f64,
}

impl NutrientTarget {
    /// Total energy implied by the macro grams (4/4/9 kcal per gram)
    #[must_use]
    pub fn macro_energy(&self) -> f64 {
        4.0 * self.protein_g + 4.0 * self.carbs_g + 9.0 * self.fat_g
    }
}

/// Per-day intake totals summed from logged meals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyLogTotals {
    /// Total calories consumed (kcal)
    pub calories: f64,
    /// Total protein consumed (grams)
    pub protein: f64,
    /// Total carbohydrates consumed (grams)
    pub carbs: f64,
    /// Total fat consumed (grams)
    pub fat: f64,
}

/// Origin of a logged meal entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealLogSource {
    /// Entry produced by plan generation
    Ai,
    /// Entry produced by a smart-swap replacement
    KnnSwap,
    /// Entry logged by hand
    Manual,
}

impl Default for MealLogSource {
    fn default() -> Self {
        Self::Manual
    }
}

/// A single logged meal for a user and day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealLogEntry {
    /// Owning user identifier
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Calendar day the meal belongs to
    pub date: NaiveDate,
    /// Meal name
    #[serde(rename = "mealName")]
    pub meal_name: String,
    /// Meal type label
    #[serde(rename = "mealType")]
    pub meal_type: MealType,
    /// Calories (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (grams)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs: f64,
    /// Fat (grams)
    #[serde(default)]
    pub fat: f64,
    /// Where the entry came from
    #[serde(default)]
    pub source: MealLogSource,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round1_reports_one_decimal() {
        assert!((round1(170.1249) - 170.1).abs() < f64::EPSILON);
        assert!((round1(90.65) - 90.7).abs() < f64::EPSILON);
    }

    #[test]
    fn target_serializes_wire_field_names() {
        let target = NutrientTarget {
            calories: 2000.0,
            protein_g: 125.0,
            carbs_g: 225.0,
            fat_g: 66.7,
        };
        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["protein"], 125.0);
        assert_eq!(value["carbs"], 225.0);
        assert_eq!(value["fat"], 66.7);
    }
}
