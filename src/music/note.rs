// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names and chromatic distance.
//!
//! A note is a base letter plus a signed accidental count. Its text form
//! is the letter followed by that many `#` (positive) or `b` (negative).
//! Pitch classes are always measured against the C major frame, whatever
//! rotation table was used to pick the letter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Semitone offset type
pub type Semitones = i32;

/// Semitone offsets of C D E F G A B from C
pub const DIATONIC_SEMITONES: [Semitones; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Base letters in diatonic order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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
    /// All letters in diatonic order
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the diatonic rotation (C = 0, B = 6)
    pub fn diatonic_index(self) -> usize {
        self as usize
    }

    /// Semitones above C of the natural letter
    pub fn semitone(self) -> Semitones {
        DIATONIC_SEMITONES[self.diatonic_index()]
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
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

    pub fn as_char(self) -> char {
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

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Read the base letter from the start of a note name
pub fn parse_base_letter(text: &str) -> Result<Letter, ParseError> {
    let first = text.chars().next().ok_or(ParseError::Empty)?;
    Letter::from_char(first).ok_or(ParseError::InvalidLetter(first))
}

/// Count accidentals in a note name: sharps positive, flats negative.
///
/// If both `#` and `b` occur, the sharp count wins and flats are ignored.
pub fn count_accidentals(text: &str) -> Semitones {
    let sharps = text.chars().filter(|&c| c == '#').count() as Semitones;
    let flats = text.chars().filter(|&c| c == 'b').count() as Semitones;

    if sharps > 0 {
        sharps
    } else {
        -flats
    }
}

/// A spelled note: letter plus accidentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: Letter,
    accidentals: Semitones,
}

impl Note {
    /// Create a note from a letter and accidental count.
    ///
    /// Any count is accepted; pitch arithmetic is done in `i64` so it
    /// cannot overflow.
    pub fn new(letter: Letter, accidentals: Semitones) -> Self {
        Self {
            letter,
            accidentals,
        }
    }

    /// The unaltered letter
    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Parse a note name such as `C`, `F#`, `Bbb`
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let letter = parse_base_letter(text)?;

        if let Some(bad) = text.chars().skip(1).find(|&c| c != '#' && c != 'b') {
            return Err(ParseError::InvalidAccidental {
                text: text.to_string(),
                found: bad,
            });
        }

        Ok(Self::new(letter, count_accidentals(text)))
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidentals(&self) -> Semitones {
        self.accidentals
    }

    /// Pitch class (0-11)
    pub fn pitch_class(&self) -> u8 {
        self.semitones_above_c().rem_euclid(12) as u8
    }

    fn semitones_above_c(&self) -> i64 {
        self.letter.semitone() as i64 + self.accidentals as i64
    }

    /// Semitones up from `self` to `other`, in 0..=11
    pub fn distance_to(&self, other: &Note) -> u8 {
        chromatic_distance(self, other)
    }

    /// Same pitch class, regardless of spelling
    pub fn is_enharmonic(&self, other: &Note) -> bool {
        chromatic_distance(self, other) == 0
    }
}

/// How many semitones up from `a` is `b`, always in 0..=11
pub fn chromatic_distance(a: &Note, b: &Note) -> u8 {
    (b.semitones_above_c() - a.semitones_above_c()).rem_euclid(12) as u8
}

impl FromStr for Note {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Note::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        let mark = if self.accidentals > 0 { '#' } else { 'b' };
        for _ in 0..self.accidentals.unsigned_abs() {
            write!(f, "{}", mark)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_base_letter() {
        assert_eq!(parse_base_letter("C"), Ok(Letter::C));
        assert_eq!(parse_base_letter("F#"), Ok(Letter::F));
        assert_eq!(parse_base_letter(""), Err(ParseError::Empty));
        assert_eq!(parse_base_letter("H"), Err(ParseError::InvalidLetter('H')));
        assert_eq!(parse_base_letter("c"), Err(ParseError::InvalidLetter('c')));
    }

    #[test]
    fn test_count_accidentals() {
        assert_eq!(count_accidentals("C"), 0);
        assert_eq!(count_accidentals("C##"), 2);
        assert_eq!(count_accidentals("Bbb"), -2);
        // Sharps take precedence over flats
        assert_eq!(count_accidentals("C#b"), 1);
        assert_eq!(count_accidentals("Cbb#"), 1);
    }

    #[test]
    fn test_parse_note() {
        assert_eq!(n("C"), Note::natural(Letter::C));
        assert_eq!(n("F#"), Note::new(Letter::F, 1));
        assert_eq!(n("Ebb"), Note::new(Letter::E, -2));
        assert_eq!(n("B#b"), Note::new(Letter::B, 1));
        assert!(matches!(
            Note::parse("Cx"),
            Err(ParseError::InvalidAccidental { found: 'x', .. })
        ));
        assert_eq!(Note::parse(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(Letter::A, 0).to_string(), "A");
        assert_eq!(Note::new(Letter::A, 3).to_string(), "A###");
        assert_eq!(Note::new(Letter::G, -2).to_string(), "Gbb");
    }

    #[test]
    fn test_pitch_class() {
        assert_eq!(n("C").pitch_class(), 0);
        assert_eq!(n("B#").pitch_class(), 0);
        assert_eq!(n("Cb").pitch_class(), 11);
        assert_eq!(n("Dbb").pitch_class(), 0);
    }

    #[test]
    fn test_chromatic_distance() {
        assert_eq!(chromatic_distance(&n("C"), &n("G")), 7);
        assert_eq!(chromatic_distance(&n("G"), &n("C")), 5);
        assert_eq!(chromatic_distance(&n("F#"), &n("A")), 3);
        assert_eq!(chromatic_distance(&n("B"), &n("C")), 1);
        assert_eq!(chromatic_distance(&n("C#"), &n("Db")), 0);
        assert_eq!(chromatic_distance(&n("Cb"), &n("B#")), 1);
    }

    #[test]
    fn test_extreme_accidentals() {
        let sharp = Note::new(Letter::B, i32::MAX);
        let flat = Note::new(Letter::C, i32::MIN);
        assert_eq!(sharp.pitch_class(), 6);
        assert_eq!(flat.pitch_class(), 4);
        assert_eq!(chromatic_distance(&flat, &sharp), 2);
        assert_eq!(chromatic_distance(&sharp, &flat), 10);
    }

    #[test]
    fn test_enharmonic() {
        assert!(n("C#").is_enharmonic(&n("Db")));
        assert!(n("E#").is_enharmonic(&n("F")));
        assert!(!n("E").is_enharmonic(&n("F")));
    }

    #[test]
    fn test_serde_as_text() {
        let notes: Vec<Note> = serde_yaml::from_str("[C, 'F#', Bb]").unwrap();
        assert_eq!(notes, vec![n("C"), n("F#"), n("Bb")]);

        let bad: Result<Vec<Note>, _> = serde_yaml::from_str("[Q]");
        assert!(bad.is_err());
    }
}
