// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord catalog.
//!
//! Chord definitions pair an interval pattern with the rotation table
//! that names its degrees. Chords stacked in thirds use the tertian
//! rotation; sus and sixth chords use the diatonic one with skipped
//! degrees. The built-in catalog is created once and shared read-only.

pub mod matching;

pub use matching::{contains_all, identify};

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, SpellError};
use crate::music::{generate, Extension, IntervalPattern, LetterRotation, Note};

/// A named chord shape
#[derive(Debug, Clone, PartialEq)]
pub struct ChordDefinition {
    /// Short machine key, e.g. `maj7`
    pub id: String,
    /// Appended to the tonic for display, e.g. `maj7` in `Cmaj7`
    pub suffix: String,
    pub pattern: IntervalPattern,
    pub rotation: LetterRotation,
}

impl ChordDefinition {
    pub fn new(
        id: impl Into<String>,
        suffix: impl Into<String>,
        pattern: IntervalPattern,
        rotation: LetterRotation,
    ) -> Self {
        Self {
            id: id.into(),
            suffix: suffix.into(),
            pattern,
            rotation,
        }
    }

    fn tertian(id: &str, suffix: &str, offsets: &[i8]) -> Self {
        Self::new(
            id,
            suffix,
            IntervalPattern::from_offsets(offsets),
            LetterRotation::tertian(),
        )
    }

    fn diatonic(id: &str, suffix: &str, offsets: &[i8]) -> Self {
        Self::new(
            id,
            suffix,
            IntervalPattern::from_offsets(offsets),
            LetterRotation::diatonic(),
        )
    }

    /// Spell this chord above `tonic`
    pub fn build(&self, tonic: &Note) -> Result<GeneratedChord> {
        let notes = generate(tonic, &self.pattern, &self.rotation)?;
        Ok(GeneratedChord {
            name: format!("{}{}", tonic, self.suffix),
            notes,
        })
    }
}

/// A spelled chord: display name plus notes, tonic first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedChord {
    pub name: String,
    pub notes: Vec<Note>,
}

impl fmt::Display for GeneratedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for note in &self.notes {
            write!(f, " {}", note)?;
        }
        Ok(())
    }
}

/// Built-in chord table
fn builtin_definitions() -> Vec<ChordDefinition> {
    vec![
        // Triads
        ChordDefinition::tertian("maj", "", &[0, 4, 7]),
        ChordDefinition::tertian("min", "m", &[0, 3, 7]),
        ChordDefinition::tertian("dim", "dim", &[0, 3, 6]),
        ChordDefinition::tertian("aug", "aug", &[0, 4, 8]),
        ChordDefinition::diatonic("sus4", "sus4", &[0, -1, -1, 5, 7]),
        ChordDefinition::diatonic("sus2", "sus2", &[0, 2, -1, -1, 7]),
        // Four-note chords
        ChordDefinition::tertian("7", "7", &[0, 4, 7, 10]),
        ChordDefinition::tertian("m7", "m7", &[0, 3, 7, 10]),
        ChordDefinition::tertian("maj7", "maj7", &[0, 4, 7, 11]),
        ChordDefinition::tertian("m(maj7)", "m(maj7)", &[0, 3, 7, 11]),
        ChordDefinition::diatonic("6", "6", &[0, -1, 4, -1, 7, 9]),
        ChordDefinition::diatonic("m6", "m6", &[0, -1, 3, -1, 7, 9]),
        ChordDefinition::tertian("dim7", "dim7", &[0, 3, 6, 9]),
        ChordDefinition::tertian("m7/5b", "m7/5b", &[0, 3, 6, 10]),
        ChordDefinition::tertian("7/5#", "7/5#", &[0, 4, 8, 10]),
    ]
}

/// Chord definitions keyed by id, in registration order
#[derive(Debug, Clone, Default)]
pub struct ChordCatalog {
    definitions: Vec<ChordDefinition>,
    index: HashMap<String, usize>,
}

impl ChordCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// An owned catalog seeded with the built-in chords
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        for def in builtin_definitions() {
            catalog.register(def);
        }
        catalog
    }

    /// The shared built-in catalog
    pub fn builtin() -> &'static ChordCatalog {
        static BUILTIN: OnceLock<ChordCatalog> = OnceLock::new();
        BUILTIN.get_or_init(ChordCatalog::with_builtin)
    }

    /// Register a chord; an existing id is replaced in place
    pub fn register(&mut self, def: ChordDefinition) {
        if let Some(&i) = self.index.get(&def.id) {
            warn!(id = %def.id, "replacing chord definition");
            self.definitions[i] = def;
        } else {
            debug!(id = %def.id, pattern = %def.pattern, "registered chord");
            self.index.insert(def.id.clone(), self.definitions.len());
            self.definitions.push(def);
        }
    }

    /// Look up a definition by id
    pub fn lookup(&self, id: &str) -> Result<&ChordDefinition> {
        self.index
            .get(id)
            .map(|&i| &self.definitions[i])
            .ok_or_else(|| SpellError::UnknownChordId(id.to_string()))
    }

    /// Spell chord `id` above `tonic`
    pub fn build(&self, tonic: &Note, id: &str) -> Result<GeneratedChord> {
        let chord = self.lookup(id)?.build(tonic)?;
        debug!(%tonic, id, name = %chord.name, "built chord");
        Ok(chord)
    }

    /// Spell chord `id` with a 9/11/13 extension stacked on top.
    ///
    /// Degrees 0-3 come from the base chord and 4-6 from the extension,
    /// which only lines up for tertian chords of at most four degrees.
    pub fn build_extended(
        &self,
        tonic: &Note,
        id: &str,
        extension: Extension,
    ) -> Result<GeneratedChord> {
        let def = self.lookup(id)?;
        if def.rotation != LetterRotation::tertian() || def.pattern.len() > 4 {
            return Err(SpellError::IncompatibleExtension { id: id.to_string() });
        }

        let pattern = IntervalPattern::merge(&def.pattern, &extension.pattern());
        let notes = generate(tonic, &pattern, &def.rotation)?;
        Ok(GeneratedChord {
            name: format!("{}{}{}", tonic, def.suffix, extension.label()),
            notes,
        })
    }

    /// All definitions in registration order
    pub fn definitions(&self) -> &[ChordDefinition] {
        &self.definitions
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Note {
        s.parse().unwrap()
    }

    fn names(chord: &GeneratedChord) -> Vec<String> {
        chord.notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_builtin_ids() {
        let catalog = ChordCatalog::builtin();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(
            ids,
            [
                "maj", "min", "dim", "aug", "sus4", "sus2", "7", "m7", "maj7", "m(maj7)", "6",
                "m6", "dim7", "m7/5b", "7/5#"
            ]
        );
    }

    #[test]
    fn test_build_maj7() {
        let chord = ChordCatalog::builtin().build(&n("C"), "maj7").unwrap();
        assert_eq!(chord.name, "Cmaj7");
        assert_eq!(names(&chord), ["C", "E", "G", "B"]);
    }

    #[test]
    fn test_build_triads() {
        let catalog = ChordCatalog::builtin();
        let cases = [
            ("C", "maj", "C", vec!["C", "E", "G"]),
            ("A", "min", "Am", vec!["A", "C", "E"]),
            ("B", "dim", "Bdim", vec!["B", "D", "F"]),
            ("Ab", "aug", "Abaug", vec!["Ab", "C", "E"]),
            ("D", "sus4", "Dsus4", vec!["D", "G", "A"]),
            ("E", "sus2", "Esus2", vec!["E", "F#", "B"]),
        ];

        for (tonic, id, name, notes) in cases {
            let chord = catalog.build(&n(tonic), id).unwrap();
            assert_eq!(chord.name, name);
            assert_eq!(names(&chord), notes, "{}", name);
        }
    }

    #[test]
    fn test_build_four_note_chords() {
        let catalog = ChordCatalog::builtin();
        let cases = [
            ("G", "7", vec!["G", "B", "D", "F"]),
            ("D", "m7", vec!["D", "F", "A", "C"]),
            ("C", "m(maj7)", vec!["C", "Eb", "G", "B"]),
            ("F", "6", vec!["F", "A", "C", "D"]),
            ("A", "m6", vec!["A", "C", "E", "F#"]),
            ("B", "dim7", vec!["B", "D", "F", "Ab"]),
            ("B", "m7/5b", vec!["B", "D", "F", "A"]),
            ("C", "7/5#", vec!["C", "E", "G#", "Bb"]),
        ];

        for (tonic, id, notes) in cases {
            let chord = catalog.build(&n(tonic), id).unwrap();
            assert_eq!(names(&chord), notes, "{}{}", tonic, id);
        }
    }

    #[test]
    fn test_unknown_chord() {
        assert_eq!(
            ChordCatalog::builtin().lookup("nonexistent"),
            Err(SpellError::UnknownChordId("nonexistent".to_string()))
        );
        assert!(ChordCatalog::builtin().build(&n("C"), "nonexistent").is_err());
    }

    #[test]
    fn test_build_extended() {
        let catalog = ChordCatalog::builtin();

        let g13 = catalog
            .build_extended(&n("G"), "7", Extension::Thirteenth)
            .unwrap();
        assert_eq!(g13.name, "G7(9,11,13)");
        assert_eq!(names(&g13), ["G", "B", "D", "F", "A", "C", "E"]);

        let cmaj9 = catalog
            .build_extended(&n("C"), "maj7", Extension::Ninth)
            .unwrap();
        assert_eq!(cmaj9.name, "Cmaj7(9)");
        assert_eq!(names(&cmaj9), ["C", "E", "G", "B", "D"]);

        let cm11 = catalog
            .build_extended(&n("C"), "min", Extension::Eleventh)
            .unwrap();
        assert_eq!(names(&cm11), ["C", "Eb", "G", "D", "F"]);
    }

    #[test]
    fn test_extension_needs_tertian_base() {
        let result = ChordCatalog::builtin().build_extended(&n("C"), "6", Extension::Ninth);
        assert_eq!(
            result,
            Err(SpellError::IncompatibleExtension { id: "6".to_string() })
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut catalog = ChordCatalog::with_builtin();
        let before = catalog.len();

        catalog.register(ChordDefinition::tertian("maj", "M", &[0, 4, 7]));
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.build(&n("C"), "maj").unwrap().name, "CM");

        catalog.register(ChordDefinition::tertian("add9", "add9", &[0, 4, 7, -1, 14]));
        assert_eq!(catalog.len(), before + 1);
        let chord = catalog.build(&n("C"), "add9").unwrap();
        assert_eq!(names(&chord), ["C", "E", "G", "D"]);
    }

    #[test]
    fn test_display() {
        let chord = ChordCatalog::builtin().build(&n("Bb"), "7").unwrap();
        assert_eq!(chord.to_string(), "Bb7: Bb D F Ab");
    }
}
