// ABOUTME: Store abstraction layer for the nutrition engine
// ABOUTME: Plugin architecture for document-store backends with an in-memory reference impl
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Persistence seam between the engine and the external document store.
//!
//! The engine never talks to a concrete database. Everything it reads or
//! writes goes through [`NutritionStore`], a narrow async trait shaped
//! after the collections the original deployment kept (`users`,
//! `daily_targets` keyed by user and day, `meal_logs`, `meals`). A store
//! implementation signals connectivity failure with
//! [`ErrorCode::StorageError`](crate::errors::ErrorCode::StorageError);
//! the engine propagates that untouched.

use crate::errors::AppResult;
use crate::models::{
    CandidateFilter, DailyLogTotals, MealCandidate, MealLogEntry, MealType, NutrientTarget,
    UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod memory;

pub use memory::MemoryStore;

/// Core store abstraction trait
///
/// All store implementations must implement this trait to provide a
/// consistent interface for the engine and service layer.
#[async_trait]
pub trait NutritionStore: Send + Sync + Clone {
    // ================================
    // Profiles
    // ================================

    /// Get a user profile by id; `None` when the user is unknown
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    // ================================
    // Daily targets
    // ================================

    /// Get the persisted daily target for a user and day
    async fn daily_target(&self, user_id: &str, day: NaiveDate)
        -> AppResult<Option<NutrientTarget>>;

    /// Persist the daily target for a user and day, overwriting any
    /// previous value for the same key
    async fn put_daily_target(
        &self,
        user_id: &str,
        day: NaiveDate,
        target: &NutrientTarget,
    ) -> AppResult<()>;

    // ================================
    // Meal logs
    // ================================

    /// Sum the logged intake for a user and day; zeroes when nothing is logged
    async fn log_totals(&self, user_id: &str, day: NaiveDate) -> AppResult<DailyLogTotals>;

    /// All log entries for a user and day
    async fn logs_for_day(&self, user_id: &str, day: NaiveDate) -> AppResult<Vec<MealLogEntry>>;

    /// Append a meal log entry
    async fn append_log(&self, entry: &MealLogEntry) -> AppResult<()>;

    // ================================
    // Meal corpus
    // ================================

    /// Meals valid for a meal type, narrowed by the candidate filter
    async fn meals_for_type(
        &self,
        meal_type: MealType,
        filter: &CandidateFilter,
    ) -> AppResult<Vec<MealCandidate>>;

    /// Look up a meal by its unique name
    async fn meal_by_name(&self, name: &str) -> AppResult<Option<MealCandidate>>;

    /// The full meal corpus snapshot, in store order
    async fn meal_corpus(&self) -> AppResult<Vec<MealCandidate>>;
}
