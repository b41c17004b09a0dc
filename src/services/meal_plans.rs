// ABOUTME: Meal plan generation service
// ABOUTME: Restriction-aware candidate fetch and greedy plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::generate_full_meal_plan;
use crate::models::{CandidateFilter, MealPlan, MealType};
use crate::store::NutritionStore;
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Generates a daily meal plan from a user's target and candidate pools
#[derive(Clone)]
pub struct MealPlanService<S: NutritionStore> {
    store: S,
    config: NutritionConfig,
}

impl<S: NutritionStore> MealPlanService<S> {
    /// Create a service over a store handle
    pub const fn new(store: S, config: NutritionConfig) -> Self {
        Self { store, config }
    }

    /// Generate a plan for today with a request-scoped random source
    ///
    /// # Errors
    ///
    /// See [`Self::generate_plan_with`].
    pub async fn generate_plan(&self, user_id: &str) -> AppResult<MealPlan> {
        let mut rng = StdRng::from_entropy();
        self.generate_plan_with(user_id, Utc::now().date_naive(), &mut rng)
            .await
    }

    /// Generate a plan for an explicit day and random source
    ///
    /// Breakfast, lunch, and dinner pools must be non-empty after the
    /// profile's restrictions are applied; the snack pool may be empty and
    /// is then omitted from the plan. The day's target must already be
    /// persisted.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for an empty user id, `ResourceNotFound` for
    /// an unknown user or missing daily target, `InsufficientCandidates`
    /// when a required pool is empty, plus any store failure.
    pub async fn generate_plan_with<R: Rng + ?Sized>(
        &self,
        user_id: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<MealPlan> {
        if user_id.is_empty() {
            return Err(AppError::missing_field("userId"));
        }

        let profile = self
            .store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        let filter = CandidateFilter::for_profile(&profile);

        let mut pools = Vec::with_capacity(MealType::PLAN_TYPES.len());
        for meal_type in MealType::PLAN_TYPES {
            let candidates = self.store.meals_for_type(meal_type, &filter).await?;
            pools.push((meal_type, candidates));
        }

        // Snack is optional; the three main meals are not
        let required_empty = pools
            .iter()
            .any(|(t, c)| *t != MealType::Snack && c.is_empty());
        if required_empty {
            return Err(AppError::insufficient_candidates(
                "Not enough meals available for selected preferences",
            ));
        }

        let target = self
            .store
            .daily_target(user_id, today)
            .await?
            .ok_or_else(|| AppError::not_found("Daily target"))?;

        let plan = generate_full_meal_plan(target.calories, &pools, rng, &self.config.meal_split);

        info!(
            user_id,
            %today,
            total_calories = plan.total_calories,
            meals = plan.meals.len(),
            "generated meal plan"
        );

        Ok(plan)
    }
}
