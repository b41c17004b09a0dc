// ABOUTME: Greedy meal plan assembly under per-meal-type calorie budgets
// ABOUTME: Shuffled candidate accumulation with a 90% stop threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Plan Builder
//!
//! Allocates candidate meals into per-meal-type buckets under a calorie
//! budget. The assembly is a greedy heuristic, not an optimizer: candidates
//! are shuffled into a uniform random order so repeated calls vary their
//! picks among equally eligible meals instead of favoring corpus insertion
//! order. Randomness is an explicit parameter so plans are reproducible in
//! tests and request-scoped in production.

use crate::config::MealSplitConfig;
use crate::models::nutrition::round1;
use crate::models::{MealCandidate, MealPlan, MealType, PlannedMeal};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Build one meal bucket for a meal type
///
/// The per-type budget is `daily_calories` times the type's share of the
/// daily split. Candidates are shuffled, then appended one at a time; the
/// stop check runs *before* each append, so the accumulated calories can
/// overshoot the `stop_fraction` threshold by at most one candidate, and
/// can finish under it if candidates run out first.
///
/// Returns `None` for an empty candidate list; the meal type is then
/// omitted from the plan entirely.
#[must_use]
pub fn build_meal<R: Rng + ?Sized>(
    meal_type: MealType,
    candidates: &[MealCandidate],
    daily_calories: f64,
    rng: &mut R,
    config: &MealSplitConfig,
) -> Option<PlannedMeal> {
    if candidates.is_empty() {
        return None;
    }

    let target_calories = daily_calories * config.fraction_for(meal_type);
    let stop_at = target_calories * config.stop_fraction;

    let mut pool: Vec<&MealCandidate> = candidates.iter().collect();
    pool.shuffle(rng);

    let mut items = Vec::new();
    let mut meal_calories = 0.0;

    for candidate in pool {
        if meal_calories >= stop_at {
            break;
        }
        meal_calories += candidate.calories;
        items.push(candidate.clone());
    }

    debug!(
        meal_type = meal_type.label(),
        target_calories,
        meal_calories,
        picked = items.len(),
        "built meal bucket"
    );

    Some(PlannedMeal {
        items,
        meal_calories: round1(meal_calories),
    })
}

/// Assemble a full daily plan from per-type candidate pools
///
/// Pools are visited in the order given; each non-empty one becomes an
/// entry keyed by the lower-case meal type label. `totalCalories` sums the
/// per-meal calories to one decimal. An entirely empty pool set yields a
/// plan containing only `totalCalories: 0`.
#[must_use]
pub fn generate_full_meal_plan<R: Rng + ?Sized>(
    target_calories: f64,
    candidates_by_type: &[(MealType, Vec<MealCandidate>)],
    rng: &mut R,
    config: &MealSplitConfig,
) -> MealPlan {
    let mut plan = MealPlan::default();
    let mut total_calories = 0.0;

    for (meal_type, candidates) in candidates_by_type {
        let Some(meal) = build_meal(*meal_type, candidates, target_calories, rng, config) else {
            continue;
        };
        total_calories += meal.meal_calories;
        plan.meals.insert(meal_type.label().to_owned(), meal);
    }

    plan.total_calories = round1(total_calories);
    plan
}
