// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for note parsing, spelling and catalog lookups.

use thiserror::Error;

/// Why a piece of text is not a note name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("note name is empty")]
    Empty,

    #[error("invalid base letter `{0}` (expected A-G)")]
    InvalidLetter(char),

    #[error("invalid accidental `{found}` in note `{text}` (expected `#` or `b`)")]
    InvalidAccidental { text: String, found: char },
}

/// Errors reported by the spelling library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The note's letter does not occur in the rotation table it was paired with
    #[error("letter `{letter}` not in rotation table {table}")]
    LetterNotInTable { letter: char, table: String },

    #[error("unknown chord id `{0}`")]
    UnknownChordId(String),

    #[error("invalid rotation table `{0}`")]
    InvalidRotation(String),

    /// Extensions only stack onto tertian chords of at most four degrees
    #[error("chord `{id}` cannot take a 9/11/13 extension")]
    IncompatibleExtension { id: String },
}

pub type Result<T> = std::result::Result<T, SpellError>;
