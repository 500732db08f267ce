// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generative engines for chord progressions.
//!
//! This module holds the progression generator, the key-distance model
//! it draws modulations from, and the parameters that steer both.

pub mod distance;
pub mod progression;

pub use distance::{key_distance, modulation_weights, DISTANCE_CLASSES};
pub use progression::{generate, Progression};

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProgressionError, Result};

/// Parameters for one progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// How strongly the progression stays in its starting key (0.0 - 1.0)
    pub diatonicity: f64,
    /// How strongly chords follow tonic/predominant/dominant roles (0.0 - 1.0)
    pub functional_harmony: f64,
    /// Number of chords (one per bar)
    pub num_bars: usize,
    /// Chance of resolving a dominant seventh to its own tonic rather than
    /// a deceptive mediant or submediant (0.0 - 1.0)
    pub deceptive_tonic_bias: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            diatonicity: 0.56,
            functional_harmony: 0.72,
            num_bars: 4,
            deceptive_tonic_bias: 1.0,
        }
    }
}

impl GeneratorParams {
    /// Both factors from a single randomness setting (0 = tame, 100 = wild)
    pub fn from_randomness(percent: f64) -> Self {
        let factor = 1.0 - percent.clamp(0.0, 100.0) / 100.0;
        Self {
            diatonicity: factor,
            functional_harmony: factor,
            ..Self::default()
        }
    }

    /// Clamp every field into its valid range
    pub fn validated(self) -> Self {
        Self {
            diatonicity: clamp_unit(self.diatonicity),
            functional_harmony: clamp_unit(self.functional_harmony),
            num_bars: self.num_bars.max(1),
            deceptive_tonic_bias: clamp_unit(self.deceptive_tonic_bias),
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Draw an index with probability proportional to its weight.
///
/// Zero-weight entries are never drawn. Fails with the retryable
/// `DegenerateWeights` when nothing can be drawn (empty, all zero or
/// invalid weights).
pub fn choose_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Result<usize> {
    match WeightedIndex::new(weights) {
        Ok(dist) => Ok(dist.sample(rng)),
        Err(err) => {
            debug!(?weights, %err, "degenerate weights");
            Err(ProgressionError::DegenerateWeights(err.to_string()))
        }
    }
}
