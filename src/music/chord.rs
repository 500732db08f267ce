// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords as spelled note lists.
//!
//! A chord stores only its notes (root, third, fifth and an optional
//! seventh). Its quality is always recomputed from the intervals above
//! the root, so an altered chord never carries a stale label.

use std::fmt;

use super::note::{Interval, Note};
use super::scale::{Key, Mode};
use crate::error::{ProgressionError, Result};

/// Recipes for building chords above a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    MajorTriad,
    MinorTriad,
    DiminishedTriad,
    AugmentedTriad,
    MajorSeventh,
    MinorSeventh,
    DominantSeventh,
    HalfDiminishedSeventh,
    DiminishedSeventh,
}

impl ChordQuality {
    /// Intervals above the root, excluding the root itself
    fn intervals(self) -> &'static [Interval] {
        match self {
            ChordQuality::MajorTriad => &[Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH],
            ChordQuality::MinorTriad => &[Interval::MINOR_THIRD, Interval::PERFECT_FIFTH],
            ChordQuality::DiminishedTriad => &[Interval::MINOR_THIRD, Interval::DIMINISHED_FIFTH],
            ChordQuality::AugmentedTriad => &[Interval::MAJOR_THIRD, Interval::AUGMENTED_FIFTH],
            ChordQuality::MajorSeventh => &[
                Interval::MAJOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MAJOR_SEVENTH,
            ],
            ChordQuality::MinorSeventh => &[
                Interval::MINOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MINOR_SEVENTH,
            ],
            ChordQuality::DominantSeventh => &[
                Interval::MAJOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MINOR_SEVENTH,
            ],
            ChordQuality::HalfDiminishedSeventh => &[
                Interval::MINOR_THIRD,
                Interval::DIMINISHED_FIFTH,
                Interval::MINOR_SEVENTH,
            ],
            ChordQuality::DiminishedSeventh => &[
                Interval::MINOR_THIRD,
                Interval::DIMINISHED_FIFTH,
                Interval::DIMINISHED_SEVENTH,
            ],
        }
    }
}

/// A chord in root position (three or four notes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    /// Create a chord from its notes, root first.
    ///
    /// Fails with `IncompleteChord` unless there is a root, third and fifth.
    pub fn new(notes: Vec<Note>) -> Result<Self> {
        if notes.len() < 3 {
            return Err(ProgressionError::IncompleteChord(notes.len()));
        }
        Ok(Self { notes })
    }

    /// Build a chord of the given quality above a root
    pub fn build(root: Note, quality: ChordQuality) -> Self {
        let mut notes = vec![root];
        notes.extend(quality.intervals().iter().map(|&i| root.transpose(i)));
        Self { notes }
    }

    /// All notes, root first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false, since every chord has at least three notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn root(&self) -> Note {
        self.notes[0]
    }

    pub fn third(&self) -> Note {
        self.notes[1]
    }

    pub fn fifth(&self) -> Note {
        self.notes[2]
    }

    pub fn seventh(&self) -> Option<Note> {
        self.notes.get(3).copied()
    }

    /// Whether the chord has a fourth note
    pub fn is_seventh_chord(&self) -> bool {
        self.notes.len() > 3
    }

    fn above_root(&self, interval: Interval) -> Note {
        self.root().transpose(interval)
    }

    pub fn has_major_third(&self) -> bool {
        self.above_root(Interval::MAJOR_THIRD) == self.third()
    }

    pub fn has_minor_third(&self) -> bool {
        self.above_root(Interval::MINOR_THIRD) == self.third()
    }

    pub fn has_perfect_fifth(&self) -> bool {
        self.above_root(Interval::PERFECT_FIFTH) == self.fifth()
    }

    pub fn has_diminished_fifth(&self) -> bool {
        self.above_root(Interval::DIMINISHED_FIFTH) == self.fifth()
    }

    pub fn has_minor_seventh(&self) -> bool {
        self.seventh() == Some(self.above_root(Interval::MINOR_SEVENTH))
    }

    /// A copy of this chord with its fifth raised a semitone
    pub fn with_augmented_fifth(&self) -> Chord {
        let mut notes = self.notes.clone();
        notes[2] = notes[2].sharpened();
        Chord { notes }
    }

    /// The key this chord would be the tonic of: its root, minor when
    /// the third is minor
    pub fn implied_key(&self) -> Key {
        let mode = if self.has_minor_third() {
            Mode::Minor
        } else {
            Mode::Major
        };
        Key::new(self.root(), mode)
    }

    /// Root-position chord symbol (e.g., "CM", "Am", "G7", "Bm7b5").
    ///
    /// Fails when the note combination matches no known chord shape.
    pub fn symbol(&self) -> Result<String> {
        let suffix = match self.notes.len() {
            3 => triad_suffix(self.root(), self.third(), self.fifth()),
            4 => triad_suffix(self.root(), self.third(), self.fifth())
                .and_then(|triad| seventh_suffix(triad, self.root().interval_to(self.notes[3]))),
            _ => None,
        };

        match suffix {
            Some(suffix) => Ok(format!("{}{}", self.root(), suffix)),
            None => Err(ProgressionError::ChordNotRecognized {
                notes: self.note_list(),
            }),
        }
    }

    fn note_list(&self) -> String {
        self.notes
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.note_list())
    }
}

/// Name the triad formed by the first three notes
fn triad_suffix(root: Note, third: Note, fifth: Note) -> Option<&'static str> {
    let lower = root.interval_to(third);
    let upper = root.interval_to(fifth);
    let suffix = match (
        (lower.number(), lower.alteration()),
        (upper.number(), upper.alteration()),
    ) {
        ((2, 0), (5, 0)) => "sus2",
        ((3, 0), (7, -1)) => "dom7",
        ((3, 0), (5, -1)) => "7b5",
        ((3, 0), (5, 0)) => "M",
        ((3, 0), (5, 1)) => "aug",
        ((3, 0), (6, 0)) => "M6",
        ((3, 0), (7, 0)) => "M7",
        ((3, -1), (5, -1)) => "dim",
        ((3, -1), (5, 0)) => "m",
        ((3, -1), (6, 0)) => "m6",
        ((3, -1), (7, -1)) => "m7",
        ((3, -1), (7, 0)) => "m/M7",
        ((4, 0), (5, 0)) => "sus4",
        ((5, 0), (7, -1)) => "m7",
        ((5, 0), (7, 0)) => "M7",
        _ => return None,
    };
    Some(suffix)
}

/// Extend a triad name with the interval from the root to the fourth note
fn seventh_suffix(triad: &str, top: Interval) -> Option<&'static str> {
    let suffix = match (triad, (top.number(), top.alteration())) {
        ("m", (7, -1)) => "m7",
        ("m", (7, 0)) => "m/M7",
        ("m", (6, 0)) => "m6",
        ("M", (7, 0)) => "M7",
        ("M", (7, -1)) => "7",
        ("M", (6, 0)) => "M6",
        ("dim", (7, -1)) => "m7b5",
        ("dim", (7, -2)) => "dim7",
        ("aug", (7, -1)) => "m7+",
        ("aug", (7, 0)) => "M7+",
        ("sus4", (7, -1)) => "sus47",
        ("sus4", (2, -1)) => "sus4b9",
        ("m7", (4, 0)) => "11",
        ("7b5", (7, -1)) => "7b12",
        _ => return None,
    };
    Some(suffix)
}
