// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord recognition by pitch-class containment.

use tracing::trace;

use crate::music::Note;

use super::{ChordCatalog, GeneratedChord};

/// True if every note of `needle` has an enharmonic match in `haystack`
pub fn contains_all(haystack: &[Note], needle: &[Note]) -> bool {
    needle
        .iter()
        .all(|wanted| haystack.iter().any(|have| have.is_enharmonic(wanted)))
}

/// Every catalog chord, rooted on one of the given notes, that the notes
/// fully cover.
///
/// Candidate tonics are tried in input order (repeated spellings once),
/// chords in catalog order.
pub fn identify(catalog: &ChordCatalog, notes: &[Note]) -> Vec<GeneratedChord> {
    let mut tonics: Vec<Note> = Vec::with_capacity(notes.len());
    for note in notes {
        if !tonics.contains(note) {
            tonics.push(*note);
        }
    }

    let mut found = Vec::new();
    for tonic in &tonics {
        for def in catalog.definitions() {
            // Custom rotations may not hold this tonic's letter
            let Ok(chord) = def.build(tonic) else {
                continue;
            };
            if contains_all(notes, &chord.notes) {
                trace!(name = %chord.name, "matched chord");
                found.push(chord);
            }
        }
    }
    found
}
