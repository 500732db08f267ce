// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! chordgen - randomized chord progressions with roman-numeral analysis.
//!
//! Two factors steer generation: diatonicity (how strongly the
//! progression stays in its starting key) and functional harmony (how
//! strongly chords follow tonic/predominant/dominant roles rather than
//! voice-leading or chromatic substitution).
//!
//! ```no_run
//! use chordgen::{compose, GeneratorParams};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let composition = compose(&GeneratorParams::default(), 64, &mut rng).unwrap();
//! for (symbol, numeral) in composition.symbols.iter().zip(&composition.numerals) {
//!     println!("{} {}", symbol, numeral);
//! }
//! ```

pub mod analysis;
pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod generators;
pub mod music;
pub mod notation;

pub use analysis::{analyze, analyze_progression};
pub use compose::{compose, Composition};
pub use config::AppConfig;
pub use error::{ProgressionError, Result};
pub use export::{write_midi_file, ExportSettings};
pub use generators::{generate, GeneratorParams, Progression};
pub use music::{Chord, ChordQuality, Key, Mode, Note};
