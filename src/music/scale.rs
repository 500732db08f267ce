// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keys, key signatures and diatonic collections.
//!
//! A key is a spelled tonic plus a mode. Its diatonic collection is
//! spelled from the key signature, so only keys with at most seven
//! sharps or flats have one. Keys print with the conventional case
//! encoding (`Bb` major, `f#` minor) used in analysis labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chord::Chord;
use super::note::{Interval, Letter, Note};
use crate::error::{ProgressionError, Result};

/// Order in which sharps enter a key signature
const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

/// Order in which flats enter a key signature
const FLAT_ORDER: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Line-of-fifths position of the tonic of the key with no accidentals
    fn natural_tonic_fifths(self) -> i16 {
        match self {
            Mode::Major => Letter::C.fifths_index() as i16,
            Mode::Minor => Letter::A.fifths_index() as i16,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// A key center: tonic plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    tonic: Note,
    mode: Mode,
}

impl Key {
    /// Create a new key
    pub const fn new(tonic: Note, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Major key on a tonic
    pub const fn major(tonic: Note) -> Self {
        Self::new(tonic, Mode::Major)
    }

    /// Minor key on a tonic
    pub const fn minor(tonic: Note) -> Self {
        Self::new(tonic, Mode::Minor)
    }

    /// Parse a case-encoded key name ("C", "Bb", "a", "f#")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let first = s.chars().next()?;
        let tonic = Note::parse(s)?;
        let mode = if first.is_ascii_lowercase() {
            Mode::Minor
        } else {
            Mode::Major
        };
        Some(Key::new(tonic, mode))
    }

    /// Get the tonic note
    pub fn tonic(&self) -> Note {
        self.tonic
    }

    /// Get the mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_major(&self) -> bool {
        self.mode == Mode::Major
    }

    pub fn is_minor(&self) -> bool {
        self.mode == Mode::Minor
    }

    /// Number of sharps (positive) or flats (negative) in the signature
    pub fn signature(&self) -> i16 {
        let fifths = self.tonic.letter().fifths_index() as i16 + 7 * self.tonic.accidental() as i16;
        fifths - self.mode.natural_tonic_fifths()
    }

    /// Whether the key can be written with at most seven sharps or flats
    pub fn is_supported(&self) -> bool {
        (-7..=7).contains(&self.signature())
    }

    /// The seven notes of the key, starting from the tonic
    pub fn diatonic_notes(&self) -> Result<[Note; 7]> {
        if !self.is_supported() {
            return Err(ProgressionError::UnsupportedKey(self.to_string()));
        }

        let signature = self.signature();
        let count = signature.unsigned_abs() as usize;
        let (altered, accidental): (&[Letter], i8) = if signature >= 0 {
            (&SHARP_ORDER[..count], 1)
        } else {
            (&FLAT_ORDER[..count], -1)
        };

        let start = self.tonic.letter();
        Ok(std::array::from_fn(|i| {
            let letter = start.offset(i as u8);
            if altered.contains(&letter) {
                Note::new(letter, accidental)
            } else {
                Note::natural(letter)
            }
        }))
    }

    /// Whether a note belongs to the key's diatonic collection
    pub fn contains(&self, note: Note) -> Result<bool> {
        Ok(self.diatonic_notes()?.contains(&note))
    }

    /// The major key sharing this key's diatonic collection
    pub fn relative_major(&self) -> Result<Key> {
        match self.mode {
            Mode::Major => Ok(*self),
            Mode::Minor if self.is_supported() => {
                Ok(Key::major(self.tonic.transpose(Interval::MINOR_THIRD)))
            }
            Mode::Minor => Err(ProgressionError::UnsupportedKey(self.to_string())),
        }
    }

    /// Diatonic triad on the tonic
    pub fn tonic_chord(&self) -> Result<Chord> {
        let notes = self.diatonic_notes()?;
        Chord::new(vec![notes[0], notes[2], notes[4]])
    }

    /// Replace spellings that are awkward to notate with their usual equivalent.
    ///
    /// Unlisted keys pass through unchanged.
    pub fn normalized(self) -> Key {
        use Letter::*;
        use Mode::*;

        let (letter, accidental) = match (self.tonic.letter(), self.tonic.accidental(), self.mode) {
            (A, 1, _) => (B, -1),
            (C, -1, Minor) => (B, 0),
            (D, -1, Minor) => (C, 1),
            (C, 1, Major) => (D, -1),
            (D, 1, _) => (E, -1),
            (E, 1, Minor) => (F, 0),
            (F, 1, Major) => (G, -1),
            (G, -1, Minor) => (F, 1),
            (G, 1, Major) => (A, -1),
            _ => return self,
        };
        Key::new(Note::new(letter, accidental), self.mode)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.tonic.to_string();
        match self.mode {
            Mode::Major => write!(f, "{}", name),
            Mode::Minor => {
                let mut chars = name.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}", first.to_ascii_lowercase())?;
                }
                write!(f, "{}", chars.as_str())
            }
        }
    }
}

/// Normalize a case-encoded key name (e.g., "A#" -> "Bb", "db" -> "c#").
///
/// Names that do not parse are returned unchanged.
pub fn normalize_key_name(name: &str) -> String {
    match Key::parse(name) {
        Some(key) => key.normalized().to_string(),
        None => name.to_string(),
    }
}
