// ABOUTME: Meal corpus and meal plan models
// ABOUTME: MealType, MealCandidate, PlannedMeal, MealPlan, and candidate filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type of meal
///
/// Corpus documents carry the capitalized labels (`"Breakfast"`); parsing
/// is lossy and case-insensitive, with unrecognized labels mapping to
/// [`MealType::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl From<String> for MealType {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Canonical plan order: Breakfast, Lunch, Dinner, Snack
    pub const PLAN_TYPES: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lower-case label used as the meal plan key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Other => "other",
        }
    }
}

/// Glycemic index band carried on corpus meals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GlycemicIndex {
    /// Low glycemic load
    Low,
    /// Medium glycemic load
    Medium,
    /// High glycemic load
    High,
}

/// A meal from the external corpus, read-only to the engine
///
/// Field names follow the corpus document shape (`mealName`,
/// `validMealTypes`); numeric fields absent from a document default to 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealCandidate {
    /// Unique meal name
    #[serde(rename = "mealName")]
    pub name: String,
    /// Calories per serving (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein per serving (grams)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    #[serde(default)]
    pub carbs: f64,
    /// Fat per serving (grams)
    #[serde(default)]
    pub fat: f64,
    /// Meal types this candidate is eligible for
    #[serde(rename = "validMealTypes", default)]
    pub valid_meal_types: Vec<MealType>,
    /// Vegetarian-safe flag
    #[serde(default)]
    pub is_vegetarian: bool,
    /// Vegan-safe flag
    #[serde(default)]
    pub is_vegan: bool,
    /// Gluten-free flag
    #[serde(default)]
    pub is_gluten_free: bool,
    /// Nut-free flag
    #[serde(default)]
    pub is_nut_free: bool,
    /// Glycemic index band, when the corpus provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glycemic_index: Option<GlycemicIndex>,
}

/// One assembled meal inside a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedMeal {
    /// Selected candidates in pick order
    pub items: Vec<MealCandidate>,
    /// Accumulated calories of the selected items (1dp)
    #[serde(rename = "mealCalories")]
    pub meal_calories: f64,
}

/// A full daily meal plan keyed by lower-case meal type label
///
/// Serializes to the flat wire shape
/// `{"breakfast": {...}, "lunch": {...}, ..., "totalCalories": n}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Built meals by lower-case label; empty pools are omitted entirely
    #[serde(flatten)]
    pub meals: BTreeMap<String, PlannedMeal>,
    /// Sum of all `mealCalories` (1dp)
    #[serde(rename = "totalCalories")]
    pub total_calories: f64,
}

/// Predicate derived from a profile's restrictions and health conditions
///
/// Mirrors the corpus query the meal fetch applies per meal type: each
/// enabled flag narrows the pool, and the diabetes condition limits the
/// glycemic index band to meals explicitly marked Low or Medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    /// Require `is_vegetarian`
    pub vegetarian: bool,
    /// Require `is_vegan`
    pub vegan: bool,
    /// Require `is_gluten_free`
    pub gluten_free: bool,
    /// Require `is_nut_free`
    pub nut_free: bool,
    /// Require a Low or Medium glycemic index
    pub low_glycemic_only: bool,
}

impl CandidateFilter {
    /// Build the filter a profile implies
    #[must_use]
    pub const fn for_profile(profile: &UserProfile) -> Self {
        Self {
            vegetarian: profile.dietary_restrictions.vegetarian,
            vegan: profile.dietary_restrictions.vegan,
            gluten_free: profile.dietary_restrictions.gluten_free,
            nut_free: profile.dietary_restrictions.nut_allergy,
            low_glycemic_only: profile.health_conditions.diabetes,
        }
    }

    /// Whether a candidate passes every enabled restriction
    #[must_use]
    pub fn matches(&self, meal: &MealCandidate) -> bool {
        if self.vegetarian && !meal.is_vegetarian {
            return false;
        }
        if self.vegan && !meal.is_vegan {
            return false;
        }
        if self.gluten_free && !meal.is_gluten_free {
            return false;
        }
        if self.nut_free && !meal.is_nut_free {
            return false;
        }
        if self.low_glycemic_only {
            // Meals without a recorded glycemic index are excluded, matching
            // the corpus query's `in ["Low", "Medium"]` semantics.
            return matches!(
                meal.glycemic_index,
                Some(GlycemicIndex::Low | GlycemicIndex::Medium)
            );
        }
        true
    }
}
