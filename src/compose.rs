// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! One-call composition: generate, analyze and render a progression.
//!
//! Random generation occasionally lands on a key that cannot be spelled
//! or a chord the recognizer cannot name. Those candidates are thrown
//! away and generation starts over, up to a fixed number of attempts.

use rand::Rng;
use tracing::{debug, warn};

use crate::analysis::analyze_progression;
use crate::error::{ProgressionError, Result};
use crate::generators::{generate, GeneratorParams, Progression};
use crate::notation::{chord_colors, chord_symbols};

/// A progression with everything needed to display it
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub progression: Progression,
    /// Formatted roman-numeral label per chord
    pub numerals: Vec<String>,
    /// Formatted chord symbol per chord
    pub symbols: Vec<String>,
    /// `#rrggbb` color per chord
    pub colors: Vec<String>,
    /// Attempts used, including the successful one
    pub attempts: usize,
}

impl Composition {
    pub fn len(&self) -> usize {
        self.progression.len()
    }

    pub fn is_empty(&self) -> bool {
        self.progression.is_empty()
    }
}

/// Generate and render a single candidate
fn attempt<R: Rng + ?Sized>(params: &GeneratorParams, rng: &mut R) -> Result<Composition> {
    let progression = generate(params, rng)?;
    let numerals = analyze_progression(&progression)?;
    let symbols = chord_symbols(progression.chords())?;
    let colors = chord_colors(progression.chords());
    Ok(Composition {
        progression,
        numerals,
        symbols,
        colors,
        attempts: 1,
    })
}

/// Compose a progression, retrying failed candidates.
///
/// Retryable failures start a fresh attempt. An invalid degree is
/// returned immediately. After `max_attempts` failures the last error is
/// returned inside `RetriesExhausted`.
pub fn compose<R: Rng + ?Sized>(
    params: &GeneratorParams,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Composition> {
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        match attempt(params, rng) {
            Ok(mut composition) => {
                composition.attempts = attempts;
                debug!(attempts, "composition complete");
                return Ok(composition);
            }
            Err(err) if err.is_retryable() && attempts < max_attempts => {
                debug!(attempt = attempts, error = %err, "discarding candidate");
            }
            Err(err) if err.is_retryable() => {
                warn!(attempts, error = %err, "giving up on composition");
                return Err(ProgressionError::RetriesExhausted {
                    attempts,
                    last: Box::new(err),
                });
            }
            Err(err) => return Err(err),
        }
    }
}
