// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key-center distance and modulation weights.
//!
//! Distance is measured between the relative majors of two keys and
//! read off a fixed interval table. The table tracks closeness on the
//! circle of fifths but is not a literal step count; several intervals
//! share a value.

use crate::error::{ProgressionError, Result};
use crate::music::{Interval, Key};

/// Number of distance classes (0-6)
pub const DISTANCE_CLASSES: usize = 7;

/// Distance between two key centers, 0 (same collection) to 6 (tritone away).
///
/// Minor keys are replaced by their relative major first.
pub fn key_distance(from: &Key, to: &Key) -> Result<u8> {
    let from_major = from.relative_major()?;
    let to_major = to.relative_major()?;
    let interval = from_major.tonic().interval_to(to_major.tonic());

    distance_for_interval(interval).ok_or_else(|| ProgressionError::InvalidKeyCenter {
        from: from_major.to_string(),
        to: to_major.to_string(),
        interval: interval.to_string(),
    })
}

/// Table lookup from a tonic-to-tonic interval to a distance class.
///
/// The diminished octave of the table is the diminished unison here,
/// since tonics are compared as pitch classes.
fn distance_for_interval(interval: Interval) -> Option<u8> {
    let distance = match (interval.number(), interval.alteration()) {
        (1, 0) => 0,
        (2, -1) | (1, 1) => 5,
        (2, 0) | (3, -2) => 2,
        (3, -1) | (2, 1) => 3,
        (3, 0) | (4, -1) => 4,
        (4, 0) | (3, 1) => 1,
        (5, -1) | (4, 1) => 6,
        (5, 0) => 1,
        (6, -1) | (5, 1) => 4,
        (6, 0) | (7, -2) => 3,
        (7, -1) => 2,
        (7, 0) | (1, -1) => 5,
        _ => return None,
    };
    Some(distance)
}

/// Probability of each distance class: `diatonicity^d`, normalized.
///
/// At diatonicity 0 all weight sits on distance 0.
pub fn modulation_weights(diatonicity: f64) -> [f64; DISTANCE_CLASSES] {
    let mut weights = [0.0; DISTANCE_CLASSES];
    for (d, weight) in weights.iter_mut().enumerate() {
        *weight = diatonicity.powi(d as i32);
    }

    let total: f64 = weights.iter().sum();
    for weight in weights.iter_mut() {
        *weight /= total;
    }
    weights
}
