// ABOUTME: Smart-swap nearest-neighbor index over meal nutritional features
// ABOUTME: Feature standardization, Euclidean k-NN query, and opaque blob persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Smart-Swap Nearest-Neighbor Index
//!
//! An offline-built, read-only similarity structure over the meal corpus's
//! four nutritional features (calories, protein, carbs, fat). Features are
//! standardized with corpus-wide statistics; queries standardize with the
//! fit-time parameters and rank candidates by Euclidean distance in the
//! standardized space.
//!
//! The index is an explicit component: build it with [`SmartSwapIndex::fit`]
//! or [`SmartSwapIndex::load`] and hand the instance to call sites. It is
//! never mutated after construction, so concurrent queries need no locking.

use crate::config::SwapIndexConfig;
use crate::errors::{AppError, AppResult};
use crate::models::MealCandidate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Number of nutritional features indexed per meal
const FEATURE_COUNT: usize = 4;

/// Feature vector: calories, protein, carbs, fat
fn features(meal: &MealCandidate) -> [f64; FEATURE_COUNT] {
    [meal.calories, meal.protein, meal.carbs, meal.fat]
}

/// Per-feature standardization parameters computed at fit time
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeatureScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl FeatureScaler {
    /// Fit mean and population standard deviation over the corpus
    ///
    /// A zero-variance feature gets scale 1.0 so standardization stays a
    /// total function.
    fn fit(samples: &[[f64; FEATURE_COUNT]]) -> Self {
        let n = samples.len() as f64;
        let mut mean = [0.0; FEATURE_COUNT];
        for sample in samples {
            for (m, v) in mean.iter_mut().zip(sample) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut scale = [0.0; FEATURE_COUNT];
        for sample in samples {
            for ((s, v), m) in scale.iter_mut().zip(sample).zip(&mean) {
                *s += (v - m) * (v - m);
            }
        }
        for s in &mut scale {
            *s = (*s / n).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self { mean, scale }
    }

    fn transform(&self, mut vector: [f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        for ((v, m), s) in vector.iter_mut().zip(&self.mean).zip(&self.scale) {
            *v = (*v - *m) / *s;
        }
        vector
    }
}

fn squared_distance(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Fitted smart-swap index state
///
/// Holds the scaler parameters, the standardized vectors in corpus order,
/// and the exact meal list used to build them. Serializes as one opaque
/// blob for reuse across process restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartSwapIndex {
    scaler: FeatureScaler,
    vectors: Vec<[f64; FEATURE_COUNT]>,
    meals: Vec<MealCandidate>,
    retrieval_neighbors: usize,
}

impl SmartSwapIndex {
    /// Fit the index over a meal corpus snapshot
    ///
    /// Corpus order is retained as the index-to-meal mapping.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty corpus.
    pub fn fit(meals: Vec<MealCandidate>, config: &SwapIndexConfig) -> AppResult<Self> {
        if meals.is_empty() {
            return Err(AppError::invalid_input(
                "cannot fit swap index over an empty meal corpus",
            ));
        }

        let raw: Vec<[f64; FEATURE_COUNT]> = meals.iter().map(features).collect();
        let scaler = FeatureScaler::fit(&raw);
        let vectors = raw.into_iter().map(|v| scaler.transform(v)).collect();

        info!(corpus = meals.len(), "fitted smart-swap index");

        Ok(Self {
            scaler,
            vectors,
            meals,
            retrieval_neighbors: config.retrieval_neighbors,
        })
    }

    /// Number of meals in the fitted corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the fitted corpus is empty (never true for a fitted index)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Neighbor count the index was configured to retrieve by default
    #[must_use]
    pub const fn retrieval_neighbors(&self) -> usize {
        self.retrieval_neighbors
    }

    /// Find up to `k` nutritionally similar replacements for a meal
    ///
    /// Retrieves the `k + 1` nearest neighbors (fewer if the corpus is
    /// smaller) by Euclidean distance in standardized space, walks them in
    /// increasing-distance order with ties broken by corpus index, skips
    /// any candidate whose name equals the query's, and returns the first
    /// `k` survivors. The query meal is never its own replacement.
    #[must_use]
    pub fn find_replacements(&self, meal: &MealCandidate, k: usize) -> Vec<MealCandidate> {
        let query = self.scaler.transform(features(meal));

        let mut ranked: Vec<(f64, usize)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, v)| (squared_distance(&query, v), idx))
            .collect();
        // Stable sort keeps equal distances in corpus index order
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        ranked
            .into_iter()
            .take((k + 1).min(self.meals.len()))
            .map(|(_, idx)| &self.meals[idx])
            .filter(|candidate| candidate.name != meal.name)
            .take(k)
            .cloned()
            .collect()
    }

    /// Serialize the full index state as one opaque blob
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if encoding fails.
    pub fn to_bytes(&self) -> AppResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| AppError::serialization("swap index encode failed").with_source(e))
    }

    /// Decode an index blob produced by [`SmartSwapIndex::to_bytes`]
    ///
    /// The blob is opaque; loading bytes not produced by a matching fit is
    /// undefined behavior, and a malformed blob fails closed.
    ///
    /// # Errors
    ///
    /// Returns `IndexLoadFailure` if the blob cannot be decoded.
    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::index_load("swap index blob is malformed").with_source(e))
    }

    /// Write the index blob to a file
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` on encode failure or an I/O error.
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes).map_err(|e| {
            AppError::serialization(format!(
                "failed to write swap index to {}",
                path.as_ref().display()
            ))
            .with_source(e)
        })
    }

    /// Load an index blob from a file
    ///
    /// Fatal at process start for deployments relying on swap: a missing or
    /// corrupt blob surfaces as `IndexLoadFailure` and is not recoverable
    /// per-request.
    ///
    /// # Errors
    ///
    /// Returns `IndexLoadFailure` if the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let bytes = std::fs::read(path.as_ref()).map_err(|e| {
            AppError::index_load(format!(
                "swap index blob missing at {}",
                path.as_ref().display()
            ))
            .with_source(e)
        })?;
        let index = Self::from_bytes(&bytes)?;
        info!(corpus = index.len(), "loaded smart-swap index");
        Ok(index)
    }
}
