// ABOUTME: In-memory NutritionStore implementation
// ABOUTME: Reference backend for tests, demos, and single-process deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::NutritionStore;
use crate::errors::AppResult;
use crate::models::{
    CandidateFilter, DailyLogTotals, MealCandidate, MealLogEntry, MealType, NutrientTarget,
    UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    profiles: HashMap<String, UserProfile>,
    // Keyed by (user_id, day), mirroring the original "{user}_{day}" document ids
    daily_targets: HashMap<(String, NaiveDate), NutrientTarget>,
    meal_logs: Vec<MealLogEntry>,
    meals: Vec<MealCandidate>,
}

/// In-memory store backend
///
/// Uses `Arc<RwLock<…>>` for shared state so cloned handles observe the
/// same data, the way request handlers share a store connection.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user profile
    pub async fn insert_profile(&self, user_id: impl Into<String>, profile: UserProfile) {
        self.state.write().await.profiles.insert(user_id.into(), profile);
    }

    /// Add meals to the corpus
    pub async fn insert_meals(&self, meals: impl IntoIterator<Item = MealCandidate>) {
        self.state.write().await.meals.extend(meals);
    }
}

#[async_trait]
impl NutritionStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.state.read().await.profiles.get(user_id).cloned())
    }

    async fn daily_target(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> AppResult<Option<NutrientTarget>> {
        let key = (user_id.to_owned(), day);
        Ok(self.state.read().await.daily_targets.get(&key).cloned())
    }

    async fn put_daily_target(
        &self,
        user_id: &str,
        day: NaiveDate,
        target: &NutrientTarget,
    ) -> AppResult<()> {
        self.state
            .write()
            .await
            .daily_targets
            .insert((user_id.to_owned(), day), target.clone());
        Ok(())
    }

    async fn log_totals(&self, user_id: &str, day: NaiveDate) -> AppResult<DailyLogTotals> {
        let state = self.state.read().await;
        let mut totals = DailyLogTotals::default();
        for entry in state
            .meal_logs
            .iter()
            .filter(|e| e.user_id == user_id && e.date == day)
        {
            totals.calories += entry.calories;
            totals.protein += entry.protein;
            totals.carbs += entry.carbs;
            totals.fat += entry.fat;
        }
        Ok(totals)
    }

    async fn logs_for_day(&self, user_id: &str, day: NaiveDate) -> AppResult<Vec<MealLogEntry>> {
        let state = self.state.read().await;
        Ok(state
            .meal_logs
            .iter()
            .filter(|e| e.user_id == user_id && e.date == day)
            .cloned()
            .collect())
    }

    async fn append_log(&self, entry: &MealLogEntry) -> AppResult<()> {
        self.state.write().await.meal_logs.push(entry.clone());
        Ok(())
    }

    async fn meals_for_type(
        &self,
        meal_type: MealType,
        filter: &CandidateFilter,
    ) -> AppResult<Vec<MealCandidate>> {
        let state = self.state.read().await;
        Ok(state
            .meals
            .iter()
            .filter(|m| m.valid_meal_types.contains(&meal_type) && filter.matches(m))
            .cloned()
            .collect())
    }

    async fn meal_by_name(&self, name: &str) -> AppResult<Option<MealCandidate>> {
        let state = self.state.read().await;
        Ok(state.meals.iter().find(|m| m.name == name).cloned())
    }

    async fn meal_corpus(&self) -> AppResult<Vec<MealCandidate>> {
        Ok(self.state.read().await.meals.clone())
    }
}
