// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic analysis of generated progressions.

pub mod roman;

pub use roman::{analyze, analyze_progression, roman_numeral};
