// ABOUTME: End-to-end service tests over the in-memory store
// ABOUTME: Covers target persistence, plan generation, swaps, tracking, and error surfacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service orchestration tests
//!
//! Exercises the full request flows the HTTP layer delegates to: daily
//! target computation and persistence, restriction-aware plan generation,
//! smart-swap suggestions, meal logging, and tracker summaries, plus the
//! error taxonomy each path surfaces.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use nutriplan::config::NutritionConfig;
use nutriplan::errors::{AppError, AppResult, ErrorCode};
use nutriplan::intelligence::SmartSwapIndex;
use nutriplan::models::{
    ActivityLevel, CandidateFilter, DailyLogTotals, DietaryGoal, DietaryRestrictions,
    GlycemicIndex, HealthConditions, MealCandidate, MealLogEntry, MealLogSource, MealType,
    NutrientTarget, Sex, UserProfile,
};
use nutriplan::services::{MealPlanService, SwapService, TargetService, TrackerService};
use nutriplan::store::{MemoryStore, NutritionStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
}

fn profile() -> UserProfile {
    UserProfile {
        sex: Sex::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        activity_level: ActivityLevel::ModeratelyActive,
        dietary_goal: DietaryGoal::Maintain,
        dietary_restrictions: DietaryRestrictions::default(),
        health_conditions: HealthConditions::default(),
    }
}

fn meal(name: &str, calories: f64, meal_type: MealType, vegan: bool) -> MealCandidate {
    MealCandidate {
        name: name.to_owned(),
        calories,
        protein: calories * 0.06,
        carbs: calories * 0.12,
        fat: calories * 0.03,
        valid_meal_types: vec![meal_type],
        is_vegetarian: vegan,
        is_vegan: vegan,
        is_gluten_free: true,
        is_nut_free: true,
        glycemic_index: Some(GlycemicIndex::Medium),
    }
}

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_profile("u1", profile()).await;
    let mut meals = Vec::new();
    for t in MealType::PLAN_TYPES {
        for i in 0..6 {
            meals.push(meal(
                &format!("{}-{i}", t.label()),
                150.0 + f64::from(i) * 80.0,
                t,
                i % 2 == 0,
            ));
        }
    }
    store.insert_meals(meals).await;
    store
}

// ============================================================================
// TARGET SERVICE
// ============================================================================

#[tokio::test]
async fn test_daily_target_computed_and_persisted() {
    let store = seeded_store().await;
    let service = TargetService::new(store.clone(), NutritionConfig::default());
    let today = day(10);

    let target = service.calculate_for_day("u1", today).await.unwrap();

    // Moderately active male maintaining: 1756.25 * 1.55 rounds to 2722
    assert_eq!(target.calories, 2722.0);

    let stored = store.daily_target("u1", today).await.unwrap().unwrap();
    assert_eq!(stored, target);
}

#[tokio::test]
async fn test_banking_folds_into_persisted_target() {
    let store = seeded_store().await;
    let service = TargetService::new(store.clone(), NutritionConfig::default());
    let today = day(10);

    // Yesterday: stored target 2722, overeaten by 300
    let yesterday = day(9);
    let prior = service.calculate_for_day("u1", yesterday).await.unwrap();
    store
        .append_log(&MealLogEntry {
            user_id: "u1".into(),
            date: yesterday,
            meal_name: "Big Dinner".into(),
            meal_type: MealType::Dinner,
            calories: prior.calories + 300.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            source: MealLogSource::Manual,
        })
        .await
        .unwrap();

    let target = service.calculate_for_day("u1", today).await.unwrap();

    // avg deviation +300 -> adjustment -100
    assert_eq!(target.calories, prior.calories - 100.0);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let service = TargetService::new(MemoryStore::new(), NutritionConfig::default());
    let err = service.calculate_for_day("ghost", day(10)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_empty_user_id_rejected_before_store_access() {
    let service = TargetService::new(MemoryStore::new(), NutritionConfig::default());
    let err = service.calculate_for_day("", day(10)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

// ============================================================================
// MEAL PLAN SERVICE
// ============================================================================

#[tokio::test]
async fn test_plan_generation_end_to_end() {
    let store = seeded_store().await;
    let today = day(10);
    TargetService::new(store.clone(), NutritionConfig::default())
        .calculate_for_day("u1", today)
        .await
        .unwrap();

    let service = MealPlanService::new(store, NutritionConfig::default());
    let mut rng = StdRng::seed_from_u64(5);
    let plan = service.generate_plan_with("u1", today, &mut rng).await.unwrap();

    for key in ["breakfast", "lunch", "dinner"] {
        assert!(plan.meals.contains_key(key), "missing {key}");
        assert!(!plan.meals[key].items.is_empty());
    }
    let summed: f64 = plan.meals.values().map(|m| m.meal_calories).sum();
    assert!((plan.total_calories - (summed * 10.0).round() / 10.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_plan_requires_daily_target() {
    let store = seeded_store().await;
    let service = MealPlanService::new(store, NutritionConfig::default());
    let mut rng = StdRng::seed_from_u64(5);

    let err = service
        .generate_plan_with("u1", day(10), &mut rng)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_plan_fails_when_required_pool_empty() {
    // Corpus with no dinner meals at all
    let store = MemoryStore::new();
    store.insert_profile("u1", profile()).await;
    store
        .insert_meals(vec![
            meal("Oats", 350.0, MealType::Breakfast, true),
            meal("Bowl", 600.0, MealType::Lunch, true),
        ])
        .await;
    TargetService::new(store.clone(), NutritionConfig::default())
        .calculate_for_day("u1", day(10))
        .await
        .unwrap();

    let service = MealPlanService::new(store, NutritionConfig::default());
    let mut rng = StdRng::seed_from_u64(5);
    let err = service
        .generate_plan_with("u1", day(10), &mut rng)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientCandidates);
}

#[tokio::test]
async fn test_vegan_restriction_narrows_candidates() {
    let store = seeded_store().await;
    let mut vegan_profile = profile();
    vegan_profile.dietary_restrictions.vegan = true;
    store.insert_profile("u2", vegan_profile).await;

    let today = day(10);
    TargetService::new(store.clone(), NutritionConfig::default())
        .calculate_for_day("u2", today)
        .await
        .unwrap();

    let service = MealPlanService::new(store, NutritionConfig::default());
    let mut rng = StdRng::seed_from_u64(9);
    let plan = service.generate_plan_with("u2", today, &mut rng).await.unwrap();

    for planned in plan.meals.values() {
        for item in &planned.items {
            assert!(item.is_vegan, "{} is not vegan", item.name);
        }
    }
}

#[tokio::test]
async fn test_diabetes_filter_excludes_unbanded_meals() {
    let store = MemoryStore::new();
    let mut diabetic = profile();
    diabetic.health_conditions.diabetes = true;
    store.insert_profile("u3", diabetic).await;

    let mut high_gi = meal("Sugar Bomb", 400.0, MealType::Breakfast, false);
    high_gi.glycemic_index = Some(GlycemicIndex::High);
    let mut unbanded = meal("Unknown GI", 380.0, MealType::Breakfast, false);
    unbanded.glycemic_index = None;
    store
        .insert_meals(vec![
            high_gi,
            unbanded,
            meal("Steady Oats", 360.0, MealType::Breakfast, false),
        ])
        .await;

    let filter = CandidateFilter::for_profile(&store.get_profile("u3").await.unwrap().unwrap());
    let pool = store
        .meals_for_type(MealType::Breakfast, &filter)
        .await
        .unwrap();

    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].name, "Steady Oats");
}

// ============================================================================
// SWAP SERVICE
// ============================================================================

async fn swap_service(store: MemoryStore) -> SwapService<MemoryStore> {
    let corpus = store.meal_corpus().await.unwrap();
    let config = NutritionConfig::default();
    let index = SmartSwapIndex::fit(corpus, &config.swap_index).unwrap();
    SwapService::new(store, Arc::new(index), config.swap_index)
}

#[tokio::test]
async fn test_swap_suggestions_exclude_original() {
    let store = seeded_store().await;
    let service = swap_service(store).await;

    let result = service.replace_meal("lunch-2", Some(3)).await.unwrap();

    assert_eq!(result.original_meal, "lunch-2");
    assert_eq!(result.suggestions.len(), 3);
    for suggestion in &result.suggestions {
        assert_ne!(suggestion.name, "lunch-2");
    }
}

#[tokio::test]
async fn test_swap_unknown_meal_is_not_found() {
    let service = swap_service(seeded_store().await).await;
    let err = service.replace_meal("Nonexistent", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_swap_empty_name_rejected() {
    let service = swap_service(seeded_store().await).await;
    let err = service.replace_meal("", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_swap_single_meal_corpus_has_no_replacement() {
    let store = MemoryStore::new();
    store
        .insert_meals(vec![meal("Loner", 400.0, MealType::Lunch, false)])
        .await;
    let service = swap_service(store).await;

    let err = service.replace_meal("Loner", Some(3)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientCandidates);
}

// ============================================================================
// TRACKER SERVICE
// ============================================================================

#[tokio::test]
async fn test_log_and_summarize_day() {
    let store = seeded_store().await;
    let today = day(10);
    let target = TargetService::new(store.clone(), NutritionConfig::default())
        .calculate_for_day("u1", today)
        .await
        .unwrap();

    let tracker = TrackerService::new(store);
    tracker
        .log_meal(&MealLogEntry {
            user_id: "u1".into(),
            date: today,
            meal_name: "Oats".into(),
            meal_type: MealType::Breakfast,
            calories: 350.0,
            protein: 12.0,
            carbs: 55.0,
            fat: 8.0,
            source: MealLogSource::Ai,
        })
        .await
        .unwrap();
    tracker
        .log_meal(&MealLogEntry {
            user_id: "u1".into(),
            date: today,
            meal_name: "Curry".into(),
            meal_type: MealType::Dinner,
            calories: 550.0,
            protein: 25.0,
            carbs: 60.0,
            fat: 20.0,
            source: MealLogSource::KnnSwap,
        })
        .await
        .unwrap();

    let summary = tracker.daily_summary("u1", today).await.unwrap();

    assert_eq!(summary.targets, target);
    assert_eq!(
        summary.consumed,
        DailyLogTotals {
            calories: 900.0,
            protein: 37.0,
            carbs: 115.0,
            fat: 28.0,
        }
    );
    assert_eq!(summary.logs.len(), 2);
}

#[tokio::test]
async fn test_summary_without_target_reports_zeroes() {
    let tracker = TrackerService::new(MemoryStore::new());
    let summary = tracker.daily_summary("u1", day(10)).await.unwrap();
    assert_eq!(summary.targets.calories, 0.0);
    assert!(summary.logs.is_empty());
}

#[tokio::test]
async fn test_log_requires_meal_name() {
    let tracker = TrackerService::new(MemoryStore::new());
    let err = tracker
        .log_meal(&MealLogEntry {
            user_id: "u1".into(),
            date: day(10),
            meal_name: String::new(),
            meal_type: MealType::Snack,
            calories: 100.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            source: MealLogSource::Manual,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

// ============================================================================
// UPSTREAM FAILURE PROPAGATION
// ============================================================================

/// Store whose reads past the profile fail, simulating a lost connection
#[derive(Clone)]
struct FlakyStore {
    profile: UserProfile,
}

#[async_trait]
impl NutritionStore for FlakyStore {
    async fn get_profile(&self, _user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(Some(self.profile.clone()))
    }

    async fn daily_target(
        &self,
        _user_id: &str,
        _day: NaiveDate,
    ) -> AppResult<Option<NutrientTarget>> {
        Err(AppError::storage("store unreachable"))
    }

    async fn put_daily_target(
        &self,
        _user_id: &str,
        _day: NaiveDate,
        _target: &NutrientTarget,
    ) -> AppResult<()> {
        Err(AppError::storage("store unreachable"))
    }

    async fn log_totals(&self, _user_id: &str, _day: NaiveDate) -> AppResult<DailyLogTotals> {
        Err(AppError::storage("store unreachable"))
    }

    async fn logs_for_day(
        &self,
        _user_id: &str,
        _day: NaiveDate,
    ) -> AppResult<Vec<MealLogEntry>> {
        Err(AppError::storage("store unreachable"))
    }

    async fn append_log(&self, _entry: &MealLogEntry) -> AppResult<()> {
        Err(AppError::storage("store unreachable"))
    }

    async fn meals_for_type(
        &self,
        _meal_type: MealType,
        _filter: &CandidateFilter,
    ) -> AppResult<Vec<MealCandidate>> {
        Err(AppError::storage("store unreachable"))
    }

    async fn meal_by_name(&self, _name: &str) -> AppResult<Option<MealCandidate>> {
        Err(AppError::storage("store unreachable"))
    }

    async fn meal_corpus(&self) -> AppResult<Vec<MealCandidate>> {
        Err(AppError::storage("store unreachable"))
    }
}

#[tokio::test]
async fn test_connectivity_failure_is_propagated_not_swallowed() {
    // Banking degrades gracefully only for missing history records; a hard
    // store failure aborts the whole operation
    let service = TargetService::new(
        FlakyStore { profile: profile() },
        NutritionConfig::default(),
    );

    let err = service.calculate_for_day("u1", day(10)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(err.http_status(), 503);
}
