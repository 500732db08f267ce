// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman-numeral analysis of generated progressions.
//!
//! Each chord is labelled `<numeral>/<key>`. Chords generated by strict
//! functional motion are labelled against the key they were generated
//! in. Chords generated as a local tonic (degree 0) are renotated
//! against the global tonic, with a leading accidental when their root
//! lies outside the starting key.

use tracing::debug;

use crate::error::{ProgressionError, Result};
use crate::generators::Progression;
use crate::music::{Chord, Key};
use crate::notation::format_roman_numeral;

/// Upper-case numeral for a scale degree (0 = "I" through 6 = "VII")
pub fn roman_numeral(degree: u8) -> Result<String> {
    let numeral = match degree {
        0..=2 => "I".repeat(degree as usize + 1),
        3 => "IV".to_string(),
        4..=6 => format!("V{}", "I".repeat((degree as usize + 1) % 5)),
        _ => return Err(ProgressionError::InvalidDegree(degree)),
    };
    Ok(numeral)
}

/// Quality markers appended after the numeral: diminished, half-diminished
/// or augmented fifth, then "7" for four-note chords.
fn quality_suffix(chord: &Chord) -> String {
    let mut suffix = String::new();
    if chord.has_diminished_fifth() {
        suffix.push(if chord.has_minor_seventh() { 'ø' } else { '°' });
    } else if !chord.has_perfect_fifth() {
        suffix.push('+');
    }
    if chord.len() == 4 {
        suffix.push('7');
    }
    suffix
}

/// Analyze parallel chord, key and degree sequences.
///
/// Returns one formatted label per chord, in order. The first chord is
/// taken as the global tonic and the first key as the global key. The
/// three slices must have the same length.
pub fn analyze(chords: &[Chord], keys: &[Key], degrees: &[u8]) -> Result<Vec<String>> {
    if chords.len() != keys.len() || chords.len() != degrees.len() {
        return Err(ProgressionError::LengthMismatch {
            chords: chords.len(),
            keys: keys.len(),
            degrees: degrees.len(),
        });
    }
    let (Some(starting_chord), Some(&starting_key)) = (chords.first(), keys.first()) else {
        return Ok(Vec::new());
    };
    let tonic = starting_chord.root();
    let starts_minor = starting_chord.has_minor_third();
    let starts_major = starting_chord.has_major_third();

    let mut labels = Vec::with_capacity(chords.len());
    for ((chord, key), &degree) in chords.iter().zip(keys).zip(degrees) {
        let mut label = String::new();
        let mut degree = degree;
        let mut label_key = *key;

        if degree == 0 {
            let interval = tonic.interval_to(chord.root());
            let prefix = interval.accidental_prefix();
            if starts_minor && !starting_key.contains(chord.root())? {
                if prefix.is_empty() {
                    label.push('#');
                } else {
                    label.push_str(&prefix);
                }
            } else if starts_major && !prefix.is_empty() {
                label.push_str(&prefix);
            }
            degree = interval.number() - 1;
            label_key = starting_key;
        }

        let numeral = roman_numeral(degree)?;
        if chord.has_major_third() {
            label.push_str(&numeral);
        } else {
            label.push_str(&numeral.to_lowercase());
        }
        label.push_str(&quality_suffix(chord));

        let raw = format!("{}/{}", label, label_key);
        debug!(chord = %chord, label = %raw, "analyzed");
        labels.push(format_roman_numeral(&raw));
    }

    Ok(labels)
}

/// Analyze a generated progression
pub fn analyze_progression(progression: &Progression) -> Result<Vec<String>> {
    analyze(progression.chords(), progression.keys(), progression.degrees())
}
