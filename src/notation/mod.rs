// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Presentation of progressions: formatted labels and chord colors.

pub mod palette;
pub mod symbols;

pub use palette::{chord_color, chord_colors, chord_hue};
pub use symbols::{chord_symbols, format_chord_symbol, format_roman_numeral};
