// ABOUTME: Intake tracking service
// ABOUTME: Meal logging and per-day consumption summaries against stored targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{DailyLogTotals, MealLogEntry, NutrientTarget};
use crate::store::NutritionStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Per-day tracking summary: stored target, consumed totals, raw entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerSummary {
    /// The summarized day
    pub date: NaiveDate,
    /// The stored daily target, or zeroes when none was persisted
    pub targets: NutrientTarget,
    /// Summed intake for the day
    pub consumed: DailyLogTotals,
    /// The day's raw log entries
    pub logs: Vec<MealLogEntry>,
}

/// Logs meals and summarizes daily intake against targets
#[derive(Clone)]
pub struct TrackerService<S: NutritionStore> {
    store: S,
}

impl<S: NutritionStore> TrackerService<S> {
    /// Create a service over a store handle
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a meal log entry
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` when the user id or meal name is empty, plus
    /// any store failure.
    pub async fn log_meal(&self, entry: &MealLogEntry) -> AppResult<()> {
        if entry.user_id.is_empty() {
            return Err(AppError::missing_field("userId"));
        }
        if entry.meal_name.is_empty() {
            return Err(AppError::missing_field("mealName"));
        }

        self.store.append_log(entry).await?;

        info!(
            user_id = %entry.user_id,
            meal_name = %entry.meal_name,
            calories = entry.calories,
            "logged meal"
        );

        Ok(())
    }

    /// Summarize a user's day: stored target, consumed totals, log entries
    ///
    /// A day with no persisted target reports zeroed targets rather than
    /// failing; trackers render partial days routinely.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for an empty user id, plus any store failure.
    pub async fn daily_summary(&self, user_id: &str, date: NaiveDate) -> AppResult<TrackerSummary> {
        if user_id.is_empty() {
            return Err(AppError::missing_field("userId"));
        }

        let consumed = self.store.log_totals(user_id, date).await?;
        let logs = self.store.logs_for_day(user_id, date).await?;
        let targets = self
            .store
            .daily_target(user_id, date)
            .await?
            .unwrap_or(NutrientTarget {
                calories: 0.0,
                protein_g: 0.0,
                carbs_g: 0.0,
                fat_g: 0.0,
            });

        Ok(TrackerSummary {
            date,
            targets,
            consumed,
            logs,
        })
    }
}
