// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Letter rotation tables.
//!
//! A rotation decides which letter names each successive degree: degree
//! `i` above a tonic gets the letter `i` positions further along the
//! table, wrapping around. Stepwise scales use the diatonic rotation,
//! chords stacked in thirds use the tertian one.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellError};

use super::note::{Letter, Note};

/// An ordered table of distinct letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterRotation {
    letters: Vec<Letter>,
}

impl LetterRotation {
    /// C D E F G A B
    pub fn diatonic() -> Self {
        Self {
            letters: Letter::ALL.to_vec(),
        }
    }

    /// C E G B D F A
    pub fn tertian() -> Self {
        Self {
            letters: vec![
                Letter::C,
                Letter::E,
                Letter::G,
                Letter::B,
                Letter::D,
                Letter::F,
                Letter::A,
            ],
        }
    }

    /// Build a custom table; letters must be distinct and there must be at least one
    pub fn new(letters: Vec<Letter>) -> Result<Self> {
        let text: String = letters.iter().map(|l| l.as_char()).collect();
        if letters.is_empty() {
            return Err(SpellError::InvalidRotation(text));
        }
        for (i, letter) in letters.iter().enumerate() {
            if letters[..i].contains(letter) {
                return Err(SpellError::InvalidRotation(text));
            }
        }
        Ok(Self { letters })
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Position of a letter within this table
    pub fn index_of(&self, letter: Letter) -> Result<usize> {
        self.letters
            .iter()
            .position(|&l| l == letter)
            .ok_or_else(|| SpellError::LetterNotInTable {
                letter: letter.as_char(),
                table: self.to_string(),
            })
    }

    /// Letter at `index`, wrapping around the table
    pub fn letter_at(&self, index: usize) -> Letter {
        self.letters[index % self.letters.len()]
    }
}

/// Position of a note's base letter within a rotation table
pub fn letter_index(rotation: &LetterRotation, note: &Note) -> Result<usize> {
    rotation.index_of(note.letter())
}

impl FromStr for LetterRotation {
    type Err = SpellError;

    /// Accepts `diatonic`, `tertian`, or a letter string such as `CEGBDFA`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "diatonic" => return Ok(Self::diatonic()),
            "tertian" | "thirds" => return Ok(Self::tertian()),
            _ => {}
        }

        let letters = s
            .chars()
            .map(Letter::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SpellError::InvalidRotation(s.to_string()))?;
        Self::new(letters)
    }
}

impl fmt::Display for LetterRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
