// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled scales.
//!
//! Scale types are interval patterns over the diatonic rotation, so every
//! scale names each letter at most once. Pentatonic scales skip the
//! degrees they leave out instead of renumbering the rest.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::note::Note;
use super::pattern::IntervalPattern;
use super::rotation::LetterRotation;
use super::spell::generate;

/// Scale types supported by the speller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,        // Ionian
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
    NaturalMinor, // Aeolian
    Locrian,      // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,
}

impl ScaleType {
    /// All scale types
    pub const ALL: [ScaleType; 11] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::NaturalMinor,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
    ];

    /// Offsets from the tonic, one per diatonic letter; negative entries are skipped
    pub fn offsets(self) -> &'static [i8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],

            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],

            ScaleType::MajorPentatonic => &[0, 2, 4, -1, 7, 9],
            ScaleType::MinorPentatonic => &[0, -1, 3, 5, 7, -1, 10],
        }
    }

    /// The interval pattern for this scale type
    pub fn pattern(self) -> IntervalPattern {
        IntervalPattern::from_offsets(self.offsets())
    }

    /// Parse scale type from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(ScaleType::Major),
            "dorian" => Some(ScaleType::Dorian),
            "phrygian" => Some(ScaleType::Phrygian),
            "lydian" => Some(ScaleType::Lydian),
            "mixolydian" => Some(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::NaturalMinor),
            "locrian" => Some(ScaleType::Locrian),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(ScaleType::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => Some(ScaleType::MinorPentatonic),
            _ => None,
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
        }
    }

    /// Get the parallel minor/major scale type
    pub fn parallel(self) -> Option<Self> {
        match self {
            ScaleType::Major => Some(ScaleType::NaturalMinor),
            ScaleType::NaturalMinor => Some(ScaleType::Major),
            ScaleType::MajorPentatonic => Some(ScaleType::MinorPentatonic),
            ScaleType::MinorPentatonic => Some(ScaleType::MajorPentatonic),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A spelled scale with tonic and type
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    tonic: Note,
    scale_type: ScaleType,
    notes: Vec<Note>,
}

impl Scale {
    /// Spell a scale from tonic and type
    pub fn new(tonic: Note, scale_type: ScaleType) -> Result<Self> {
        let notes = generate(&tonic, &scale_type.pattern(), &LetterRotation::diatonic())?;
        Ok(Self {
            tonic,
            scale_type,
            notes,
        })
    }

    /// Get the tonic
    pub fn tonic(&self) -> Note {
        self.tonic
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Get the spelled notes, tonic first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a note is in this scale, under any spelling
    pub fn contains(&self, note: &Note) -> bool {
        self.notes.iter().any(|n| n.is_enharmonic(note))
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: &Note) -> Option<usize> {
        self.notes
            .iter()
            .position(|n| n.is_enharmonic(note))
            .map(|i| i + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<Note> {
        if degree == 0 || degree > self.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }

    /// Get the parallel scale (major <-> minor) on the same tonic
    pub fn parallel(&self) -> Option<Result<Scale>> {
        self.scale_type
            .parallel()
            .map(|st| Scale::new(self.tonic, st))
    }

    /// Get the relative scale (e.g., C major -> A minor).
    ///
    /// The new tonic is taken from this scale's own notes, so its spelling
    /// follows the key (Eb major -> C minor, not B# minor).
    pub fn relative(&self) -> Option<Result<Scale>> {
        let (degree, target) = match self.scale_type {
            ScaleType::Major => (6, ScaleType::NaturalMinor),
            ScaleType::NaturalMinor => (3, ScaleType::Major),
            _ => return None,
        };
        let tonic = self.note_at_degree(degree)?;
        Some(Scale::new(tonic, target))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.scale_type)
    }
}
