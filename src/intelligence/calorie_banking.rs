// ABOUTME: Calorie banking adjustment over a rolling window of intake deviation
// ABOUTME: BankingHistory seam plus the clamped target correction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Bank Adjuster
//!
//! Nudges tomorrow's budget opposite the recent over/under-eating trend:
//! the average deviation between stored targets and actual intake over the
//! preceding window is spread across upcoming days and clamped, so a single
//! bad week cannot push targets outside a safe range.

use crate::config::BankingConfig;
use crate::errors::AppResult;
use crate::models::nutrition::round1;
use crate::models::NutrientTarget;
use crate::store::NutritionStore;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Read access to the history the banking window inspects
///
/// Deliberately narrower than [`NutritionStore`] so the adjustment can be
/// tested against an in-memory fake without a full store. Consumption is
/// scoped to the specific day being inspected.
#[async_trait]
pub trait BankingHistory {
    /// The daily target persisted for this user and day, if any
    async fn prior_target(&self, user_id: &str, day: NaiveDate)
        -> AppResult<Option<NutrientTarget>>;

    /// Total calories the user logged on this day
    async fn consumed(&self, user_id: &str, day: NaiveDate) -> AppResult<f64>;
}

#[async_trait]
impl<S: NutritionStore> BankingHistory for S {
    async fn prior_target(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> AppResult<Option<NutrientTarget>> {
        self.daily_target(user_id, day).await
    }

    async fn consumed(&self, user_id: &str, day: NaiveDate) -> AppResult<f64> {
        Ok(self.log_totals(user_id, day).await?.calories)
    }
}

/// Apply the calorie banking correction to a base target
///
/// Inspects the `window_days` calendar days preceding `today`. Days with no
/// stored target contribute neither deviation nor count. With no counted
/// days the base target is returned unchanged; otherwise the average
/// deviation is spread across `spread_divisor` days, negated, clamped to
/// `±max_adjustment`, and applied with a floor of `min_calories`. Macros
/// scale proportionally with the calorie change.
///
/// The divisor `base.calories` is strictly positive because the base
/// target calculator floors calories at 1200.
///
/// # Errors
///
/// Propagates any store failure from the history reads; only the
/// "no historical target" case degrades gracefully.
pub async fn apply_calorie_banking(
    user_id: &str,
    today: NaiveDate,
    base: &NutrientTarget,
    history: &impl BankingHistory,
    config: &BankingConfig,
) -> AppResult<NutrientTarget> {
    let mut total_deviation = 0.0;
    let mut days_counted = 0u32;

    for offset in 1..=config.window_days {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            continue;
        };

        let Some(target) = history.prior_target(user_id, day).await? else {
            continue;
        };

        let consumed = history.consumed(user_id, day).await?;
        total_deviation += consumed - target.calories;
        days_counted += 1;
    }

    if days_counted == 0 {
        debug!(user_id, "no banked history, base target unchanged");
        return Ok(base.clone());
    }

    let average_deviation = total_deviation / f64::from(days_counted);
    let raw_adjustment = -average_deviation / config.spread_divisor;
    let max = config.max_adjustment as f64;
    // Truncation toward zero after the clamp, matching integer banking steps
    let adjustment = raw_adjustment.clamp(-max, max).trunc();

    let new_calories = (base.calories + adjustment).max(config.min_calories);
    let factor = new_calories / base.calories;

    debug!(
        user_id,
        days_counted,
        average_deviation,
        adjustment,
        new_calories,
        "applied calorie banking"
    );

    Ok(NutrientTarget {
        calories: new_calories.round(),
        protein_g: round1(base.protein_g * factor),
        carbs_g: round1(base.carbs_g * factor),
        fat_g: round1(base.fat_g * factor),
    })
}
