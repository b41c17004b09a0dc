// ABOUTME: User profile models for target computation
// ABOUTME: Sex, ActivityLevel, DietaryGoal enums and the UserProfile record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Sex classification for BMR calculations
///
/// This is deliberately a two-way classification: profile payloads carry a
/// free-form string, and any value whose first character is not `m`/`M`
/// maps to [`Sex::Female`] rather than an error. The non-matching case
/// selects the lower Mifflin-St Jeor constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female, and every value that does not prefix-match "m"
    Female,
}

impl Sex {
    /// Parse sex from a free-form profile string
    ///
    /// Case-insensitive prefix match against `m`; everything else is
    /// [`Sex::Female`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.trim().to_lowercase().starts_with('m') {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

/// Activity level for TEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Light activity (1-3 days/week)
    Light,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Active (6-7 days/week)
    Active,
    /// Very active (hard training 2x/day)
    VeryActive,
}

impl ActivityLevel {
    /// Parse activity level from a profile string
    ///
    /// Unknown or missing values default to [`ActivityLevel::Sedentary`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "moderately_active" => Self::ModeratelyActive,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Sedentary
    }
}

/// Dietary goal driving the calorie offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DietaryGoal {
    /// Caloric deficit (-500 kcal)
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus (+500 kcal)
    GainWeight,
}

impl DietaryGoal {
    /// Parse dietary goal from a profile string
    ///
    /// Unknown or missing values default to [`DietaryGoal::Maintain`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose_weight" => Self::LoseWeight,
            "gain_weight" => Self::GainWeight,
            _ => Self::Maintain,
        }
    }
}

impl From<String> for DietaryGoal {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl Default for DietaryGoal {
    fn default() -> Self {
        Self::Maintain
    }
}

/// Dietary restriction flags carried on the profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietaryRestrictions {
    /// Only vegetarian meals
    #[serde(default)]
    pub vegetarian: bool,
    /// Only vegan meals
    #[serde(default)]
    pub vegan: bool,
    /// Only gluten-free meals
    #[serde(default)]
    pub gluten_free: bool,
    /// Only nut-free meals
    #[serde(default)]
    pub nut_allergy: bool,
}

/// Health condition flags carried on the profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthConditions {
    /// Restricts candidates to low/medium glycemic index
    #[serde(default)]
    pub diabetes: bool,
}

/// User profile as stored at registration
///
/// Created by the external registration flow; read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Sex classification used by the BMR formula
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Activity level category
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Dietary goal category
    #[serde(default)]
    pub dietary_goal: DietaryGoal,
    /// Dietary restriction flags
    #[serde(default)]
    pub dietary_restrictions: DietaryRestrictions,
    /// Health condition flags
    #[serde(default)]
    pub health_conditions: HealthConditions,
}
