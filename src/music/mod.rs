// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives for chordgen.
//!
//! This module provides spelled notes, interval classification, keys
//! with their diatonic collections, and chord construction and naming.

pub mod chord;
pub mod note;
pub mod scale;

pub use chord::{Chord, ChordQuality};
pub use note::{Interval, Letter, Note, PitchClass};
pub use scale::{normalize_key_name, Key, Mode};
