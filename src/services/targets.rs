// ABOUTME: Daily target orchestration service
// ABOUTME: Profile fetch, base target computation, calorie banking, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{apply_calorie_banking, compute_base_targets};
use crate::models::NutrientTarget;
use crate::store::NutritionStore;
use chrono::{NaiveDate, Utc};
use tracing::info;

/// Computes and persists a user's daily nutrition target
#[derive(Clone)]
pub struct TargetService<S: NutritionStore> {
    store: S,
    config: NutritionConfig,
}

impl<S: NutritionStore> TargetService<S> {
    /// Create a service over a store handle
    pub const fn new(store: S, config: NutritionConfig) -> Self {
        Self { store, config }
    }

    /// Compute, bank, persist, and return today's target for a user
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for an empty user id, `ResourceNotFound` for
    /// an unknown user, plus any store failure.
    pub async fn calculate_daily_target(&self, user_id: &str) -> AppResult<NutrientTarget> {
        self.calculate_for_day(user_id, Utc::now().date_naive()).await
    }

    /// Same as [`Self::calculate_daily_target`] with an explicit "today"
    ///
    /// # Errors
    ///
    /// See [`Self::calculate_daily_target`].
    pub async fn calculate_for_day(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<NutrientTarget> {
        if user_id.is_empty() {
            return Err(AppError::missing_field("userId"));
        }

        let profile = self
            .store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let base = compute_base_targets(&profile, &self.config);
        let banked =
            apply_calorie_banking(user_id, today, &base, &self.store, &self.config.banking).await?;

        self.store.put_daily_target(user_id, today, &banked).await?;

        info!(
            user_id,
            %today,
            calories = banked.calories,
            "persisted daily nutrition target"
        );

        Ok(banked)
    }
}
