// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note algebra and the scale/chord speller.
//!
//! This module provides note parsing, chromatic distance, letter rotation
//! tables, interval patterns, and the generator that spells a pattern
//! above a tonic.

pub mod note;
pub mod pattern;
pub mod rotation;
pub mod scale;
pub mod spell;

pub use note::{chromatic_distance, count_accidentals, parse_base_letter, Letter, Note, Semitones};
pub use pattern::{Degree, Extension, IntervalPattern};
pub use rotation::{letter_index, LetterRotation};
pub use scale::{Scale, ScaleType};
pub use spell::generate;
