// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelling a scale or chord from a tonic and an interval pattern.
//!
//! Every sounding degree gets the letter the rotation table assigns to
//! it, then as many sharps or flats as are needed to land on the target
//! offset. The adjustment is folded into -6..=6 so the fewest marks win;
//! at exactly 6 either sign can come out, depending on the raw value.

use tracing::{debug, trace};

use crate::error::Result;

use super::note::{Note, Semitones};
use super::pattern::{Degree, IntervalPattern};
use super::rotation::LetterRotation;

/// Spell every non-skipped degree of `pattern` above `tonic`.
///
/// Degree 0 is the tonic itself, copied verbatim unless skipped. Output
/// is dense: skipped degrees leave no gap, but they still count when
/// rotating to the next letter.
pub fn generate(
    tonic: &Note,
    pattern: &IntervalPattern,
    rotation: &LetterRotation,
) -> Result<Vec<Note>> {
    let start = rotation.index_of(tonic.letter())?;
    let mut notes = Vec::with_capacity(pattern.sounding());

    for (i, degree) in pattern.degrees().iter().enumerate() {
        let Degree::Offset(offset) = *degree else {
            continue;
        };

        if i == 0 {
            notes.push(*tonic);
            continue;
        }

        let letter = rotation.letter_at(start + i);
        let natural = Note::natural(letter);
        let adjust = fold(tonic.distance_to(&natural) as Semitones - offset as Semitones);

        // Positive adjust means the natural letter is too high
        let note = Note::new(letter, -adjust);
        trace!(degree = i, offset, %note, "spelled degree");
        notes.push(note);
    }

    debug!(%tonic, %pattern, %rotation, count = notes.len(), "generated notes");
    Ok(notes)
}

/// Bring an adjustment into -6..=6; exactly +-6 is left as is
fn fold(mut adjust: Semitones) -> Semitones {
    while adjust > 6 {
        adjust -= 12;
    }
    while adjust < -6 {
        adjust += 12;
    }
    adjust
}
