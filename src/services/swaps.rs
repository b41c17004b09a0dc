// ABOUTME: Smart-swap replacement service
// ABOUTME: Meal lookup by unique name and k-NN suggestion retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::SwapIndexConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::SmartSwapIndex;
use crate::models::MealCandidate;
use crate::store::NutritionStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Replacement suggestions for a swapped meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapSuggestions {
    /// Name of the meal being replaced
    #[serde(rename = "originalMeal")]
    pub original_meal: String,
    /// Nutritionally similar alternatives in ascending-distance order
    #[serde(rename = "aiSuggestions")]
    pub suggestions: Vec<MealCandidate>,
}

/// Finds nutritionally similar replacements for a named meal
///
/// Holds a fitted [`SmartSwapIndex`] instance explicitly — built offline
/// and loaded at process start — so tests can substitute a fixture-built
/// index. The index is immutable for the service's lifetime.
#[derive(Clone)]
pub struct SwapService<S: NutritionStore> {
    store: S,
    index: Arc<SmartSwapIndex>,
    config: SwapIndexConfig,
}

impl<S: NutritionStore> SwapService<S> {
    /// Create a service over a store handle and a fitted index
    pub fn new(store: S, index: Arc<SmartSwapIndex>, config: SwapIndexConfig) -> Self {
        Self {
            store,
            index,
            config,
        }
    }

    /// Suggest up to `k` replacements for the named meal
    ///
    /// `k` defaults to the configured replacement count. The query meal is
    /// resolved from the store by its unique name, never taken from the
    /// request body, so suggestions are always computed from corpus data.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for an empty name, `ResourceNotFound` for an
    /// unknown meal, `InsufficientCandidates` when no eligible replacement
    /// remains after excluding the query meal, plus any store failure.
    pub async fn replace_meal(
        &self,
        meal_name: &str,
        k: Option<usize>,
    ) -> AppResult<SwapSuggestions> {
        if meal_name.is_empty() {
            return Err(AppError::missing_field("mealName"));
        }

        let meal = self
            .store
            .meal_by_name(meal_name)
            .await?
            .ok_or_else(|| AppError::not_found("Meal"))?;

        let k = k.unwrap_or(self.config.default_k);
        let suggestions = self.index.find_replacements(&meal, k);

        if suggestions.is_empty() {
            return Err(AppError::insufficient_candidates("No replacement found"));
        }

        info!(
            meal_name,
            k,
            found = suggestions.len(),
            "smart-swap replacements computed"
        );

        Ok(SwapSuggestions {
            original_meal: meal.name,
            suggestions,
        })
    }
}
