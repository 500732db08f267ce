// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for progression generation and analysis.

use thiserror::Error;

/// Errors raised while generating or analyzing a progression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressionError {
    /// The interval between two key tonics has no distance mapping
    #[error("invalid key centers {from}, {to} (interval {interval})")]
    InvalidKeyCenter {
        from: String,
        to: String,
        interval: String,
    },

    /// A scale degree outside 0-6 reached the analyzer
    #[error("invalid scale degree {0}")]
    InvalidDegree(u8),

    /// The chord recognizer could not name a note combination
    #[error("chord not recognized: [{notes}]")]
    ChordNotRecognized { notes: String },

    /// The key needs more than seven sharps or flats
    #[error("unsupported key '{0}'")]
    UnsupportedKey(String),

    /// No candidate of a weighted draw has a usable weight
    #[error("no candidate can be drawn: {0}")]
    DegenerateWeights(String),

    /// A chord was given fewer than three notes
    #[error("a chord needs at least three notes, got {0}")]
    IncompleteChord(usize),

    /// Parallel analysis inputs disagree in length
    #[error("mismatched lengths: {chords} chords, {keys} keys, {degrees} degrees")]
    LengthMismatch {
        chords: usize,
        keys: usize,
        degrees: usize,
    },

    /// Every generation attempt failed
    #[error("no valid progression after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: usize,
        last: Box<ProgressionError>,
    },
}

impl ProgressionError {
    /// Whether a fresh generation attempt can be expected to succeed.
    ///
    /// Key-center, chord-recognition, key-signature and zero-weight draw
    /// failures come from unlucky random draws. The rest are defects in
    /// the caller or the generator.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProgressionError::InvalidKeyCenter { .. }
                | ProgressionError::ChordNotRecognized { .. }
                | ProgressionError::UnsupportedKey(_)
                | ProgressionError::DegenerateWeights(_)
        )
    }
}

/// Result alias for the generation core
pub type Result<T> = std::result::Result<T, ProgressionError>;
