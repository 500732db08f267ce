// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes and interval arithmetic.
//!
//! Notes keep their letter name and accidentals, so `C#` and `Db` are
//! different notes with the same pitch class. Intervals are classified
//! by letter distance first and semitones second, giving names such as
//! `b3`, `#4` or `bb7`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pitch class type (0-11, C = 0)
pub type PitchClass = u8;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in scale order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of this letter in C-D-E-F-G-A-B order
    pub fn index(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Pitch class of the natural note
    pub fn pitch_class(self) -> PitchClass {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Position on the line of fifths (F = 0 ... B = 6)
    pub fn fifths_index(self) -> i8 {
        match self {
            Letter::F => 0,
            Letter::C => 1,
            Letter::G => 2,
            Letter::D => 3,
            Letter::A => 4,
            Letter::E => 5,
            Letter::B => 6,
        }
    }

    /// Move up by a number of letter steps, wrapping after B
    pub fn offset(self, steps: u8) -> Self {
        Letter::ALL[((self.index() + steps) % 7) as usize]
    }

    /// Parse a single letter, either case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// A spelled note: letter plus accidentals (positive = sharps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    letter: Letter,
    accidental: i8,
}

impl Note {
    /// Create a note from a letter and an accidental count
    pub const fn new(letter: Letter, accidental: i8) -> Self {
        Self { letter, accidental }
    }

    /// A natural note
    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Spell a pitch class with sharps (C, C#, D, D#, ...)
    pub fn from_pitch_class(pc: PitchClass) -> Self {
        match pc % 12 {
            0 => Note::natural(Letter::C),
            1 => Note::new(Letter::C, 1),
            2 => Note::natural(Letter::D),
            3 => Note::new(Letter::D, 1),
            4 => Note::natural(Letter::E),
            5 => Note::natural(Letter::F),
            6 => Note::new(Letter::F, 1),
            7 => Note::natural(Letter::G),
            8 => Note::new(Letter::G, 1),
            9 => Note::natural(Letter::A),
            10 => Note::new(Letter::A, 1),
            _ => Note::natural(Letter::B),
        }
    }

    /// Parse a note name (e.g., "C", "f#", "Bb", "Ebb")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = Letter::from_char(chars.next()?)?;
        let mut accidental = 0i8;
        for c in chars {
            match c {
                '#' => accidental += 1,
                'b' => accidental -= 1,
                _ => return None,
            }
        }
        Some(Note::new(letter, accidental))
    }

    /// Letter name
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Accidental count (positive = sharps, negative = flats)
    pub fn accidental(self) -> i8 {
        self.accidental
    }

    /// Pitch class (0-11)
    pub fn pitch_class(self) -> PitchClass {
        (self.letter.pitch_class() as i16 + self.accidental as i16).rem_euclid(12) as PitchClass
    }

    /// Raise by one semitone keeping the letter
    pub fn sharpened(self) -> Self {
        Note::new(self.letter, self.accidental + 1)
    }

    /// Lower by one semitone keeping the letter
    pub fn flattened(self) -> Self {
        Note::new(self.letter, self.accidental - 1)
    }

    /// Ascending semitones to another note (0-11)
    pub fn semitones_to(self, other: Note) -> u8 {
        (other.pitch_class() as i16 - self.pitch_class() as i16).rem_euclid(12) as u8
    }

    /// Classify the ascending interval from this note to another
    pub fn interval_to(self, other: Note) -> Interval {
        if self.letter == other.letter {
            let alteration = match other.accidental - self.accidental {
                d if d > 0 => 1,
                0 => 0,
                -1 => -1,
                _ => -2,
            };
            return Interval::new(1, alteration);
        }

        let steps = (other.letter.index() as i8 - self.letter.index() as i8).rem_euclid(7) as u8;
        let number = steps + 1;
        let alteration = self.semitones_to(other) as i8 - Interval::major_size(number) as i8;
        Interval::new(number, alteration)
    }

    /// Transpose up by an interval, spelling the result by letter distance
    pub fn transpose(self, interval: Interval) -> Self {
        let letter = self.letter.offset(interval.number() - 1);
        let target = (self.pitch_class() as i16 + interval.semitones() as i16).rem_euclid(12);
        let mut accidental = (target - letter.pitch_class() as i16).rem_euclid(12) as i8;
        if accidental > 6 {
            accidental -= 12;
        }
        Note::new(letter, accidental)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let symbol = if self.accidental > 0 { '#' } else { 'b' };
        for _ in 0..self.accidental.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// A diatonic interval: number (1-7) plus alteration from the major/perfect size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    number: u8,
    alteration: i8,
}

impl Interval {
    pub const UNISON: Interval = Interval::new(1, 0);
    pub const MINOR_THIRD: Interval = Interval::new(3, -1);
    pub const MAJOR_THIRD: Interval = Interval::new(3, 0);
    pub const PERFECT_FOURTH: Interval = Interval::new(4, 0);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(5, -1);
    pub const PERFECT_FIFTH: Interval = Interval::new(5, 0);
    pub const AUGMENTED_FIFTH: Interval = Interval::new(5, 1);
    pub const MAJOR_SIXTH: Interval = Interval::new(6, 0);
    pub const DIMINISHED_SEVENTH: Interval = Interval::new(7, -2);
    pub const MINOR_SEVENTH: Interval = Interval::new(7, -1);
    pub const MAJOR_SEVENTH: Interval = Interval::new(7, 0);

    /// Create an interval from its number and alteration
    pub const fn new(number: u8, alteration: i8) -> Self {
        Self { number, alteration }
    }

    /// Semitones of the major (or perfect) interval with this number
    pub fn major_size(number: u8) -> u8 {
        match number {
            1 | 8 => 0,
            2 => 2,
            3 => 4,
            4 => 5,
            5 => 7,
            6 => 9,
            _ => 11,
        }
    }

    /// Interval number (1 = unison ... 7 = seventh)
    pub fn number(self) -> u8 {
        self.number
    }

    /// Alteration from the major/perfect size (-1 = minor or diminished)
    pub fn alteration(self) -> i8 {
        self.alteration
    }

    /// Size in semitones
    pub fn semitones(self) -> i8 {
        Interval::major_size(self.number) as i8 + self.alteration
    }

    /// The accidental prefix of the shorthand name ("", "b", "#", "bb", ...)
    pub fn accidental_prefix(self) -> String {
        let symbol = if self.alteration > 0 { "#" } else { "b" };
        symbol.repeat(self.alteration.unsigned_abs() as usize)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.accidental_prefix(), self.number)
    }
}
