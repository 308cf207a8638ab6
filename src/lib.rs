// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Letter-correct spelling of scales and chords.
//!
//! Given a tonic such as `F#` and a semitone pattern such as `[0, 4, 7]`,
//! each degree gets the next letter from a rotation table and just enough
//! sharps or flats to hit its offset: `F# A# C#`, never `F# Bb C#`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod music;

pub use catalog::{contains_all, identify, ChordCatalog, ChordDefinition, GeneratedChord};
pub use error::{ParseError, SpellError};
pub use music::{
    chromatic_distance, generate, Degree, Extension, IntervalPattern, Letter, LetterRotation,
    Note, Scale, ScaleType,
};

/// Parse a note name such as `Bb` or `C##`
pub fn parse_note(text: &str) -> Result<Note, ParseError> {
    Note::parse(text)
}
