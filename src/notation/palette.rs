// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord colors.
//!
//! Each chord gets a muted color whose hue follows its root around the
//! chromatic circle, offset by quality: major-third chords sit in the
//! magenta range, the rest in green.

use crate::music::Chord;

const HUE_STEP_PER_SEMITONE: u32 = 15;
const MAJOR_HUE_OFFSET: u32 = 320;
const MINOR_HUE_OFFSET: u32 = 140;
const SATURATION: f64 = 0.28;
const VALUE: f64 = 0.54;

/// Hue in degrees (0-359) for a chord
pub fn chord_hue(chord: &Chord) -> u32 {
    let offset = if chord.has_major_third() {
        MAJOR_HUE_OFFSET
    } else {
        MINOR_HUE_OFFSET
    };
    (chord.root().pitch_class() as u32 * HUE_STEP_PER_SEMITONE + offset) % 360
}

/// Convert HSV (each component 0.0 - 1.0) to RGB components (0.0 - 1.0)
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn channel(x: f64) -> u8 {
    (x * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Hex color (`#rrggbb`) for a chord
pub fn chord_color(chord: &Chord) -> String {
    let hue = chord_hue(chord) as f64 / 360.0;
    let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Colors for every chord in order
pub fn chord_colors(chords: &[Chord]) -> Vec<String> {
    chords.iter().map(chord_color).collect()
}
