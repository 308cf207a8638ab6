// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval patterns: per-degree semitone targets above a tonic.
//!
//! Entry `i` names the target distance of degree `i` from the tonic, or
//! marks the degree as skipped. Skipped degrees still occupy their slot,
//! so the degrees after them keep their rotation letter. Offsets above 11
//! (compound intervals such as 14 for a ninth) are allowed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of an interval pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDegree", into = "RawDegree")]
pub enum Degree {
    /// Target distance from the tonic in semitones
    Offset(u8),
    /// Degree is left out of the output
    Skip,
}

impl Degree {
    pub fn offset(self) -> Option<u8> {
        match self {
            Degree::Offset(o) => Some(o),
            Degree::Skip => None,
        }
    }

    pub fn is_skip(self) -> bool {
        self == Degree::Skip
    }
}

/// Text/number form used in chord files: an offset, a negative number,
/// or one of the markers `skip` / `-`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDegree {
    Number(i64),
    Marker(String),
}

impl TryFrom<RawDegree> for Degree {
    type Error = String;

    fn try_from(raw: RawDegree) -> Result<Self, Self::Error> {
        match raw {
            RawDegree::Number(n) if n < 0 => Ok(Degree::Skip),
            RawDegree::Number(n) => u8::try_from(n)
                .map(Degree::Offset)
                .map_err(|_| format!("offset {} out of range", n)),
            RawDegree::Marker(m) => match m.trim() {
                "skip" | "-" | "x" => Ok(Degree::Skip),
                other => Err(format!("invalid degree `{}`", other)),
            },
        }
    }
}

impl From<Degree> for RawDegree {
    fn from(degree: Degree) -> Self {
        match degree {
            Degree::Offset(o) => RawDegree::Number(o as i64),
            Degree::Skip => RawDegree::Marker("skip".to_string()),
        }
    }
}

/// An ordered list of degrees, index 0 being the tonic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalPattern {
    degrees: Vec<Degree>,
}

impl IntervalPattern {
    pub fn new(degrees: Vec<Degree>) -> Self {
        Self { degrees }
    }

    /// Build from signed offsets, where any negative value means skip.
    ///
    /// Offsets are `i8` so every non-negative one fits a degree unchanged;
    /// wider offsets go through [`IntervalPattern::new`] or a chord file.
    pub fn from_offsets(offsets: &[i8]) -> Self {
        let degrees = offsets
            .iter()
            .map(|&o| match u8::try_from(o) {
                Ok(offset) => Degree::Offset(offset),
                Err(_) => Degree::Skip,
            })
            .collect();
        Self { degrees }
    }

    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Number of degrees that produce a note
    pub fn sounding(&self) -> usize {
        self.degrees.iter().filter(|d| !d.is_skip()).count()
    }

    /// Lay `overlay` over `base`: wherever the overlay has an offset it
    /// wins, elsewhere the base entry is kept. The result is as long as
    /// the longer of the two; missing entries count as skips.
    pub fn merge(base: &IntervalPattern, overlay: &IntervalPattern) -> IntervalPattern {
        let len = base.len().max(overlay.len());
        let degrees = (0..len)
            .map(|i| {
                match (
                    base.degrees.get(i).copied(),
                    overlay.degrees.get(i).copied(),
                ) {
                    (_, Some(Degree::Offset(o))) => Degree::Offset(o),
                    (Some(b), _) => b,
                    (None, _) => Degree::Skip,
                }
            })
            .collect();
        IntervalPattern { degrees }
    }
}

impl From<Vec<Degree>> for IntervalPattern {
    fn from(degrees: Vec<Degree>) -> Self {
        Self::new(degrees)
    }
}

impl fmt::Display for IntervalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, degree) in self.degrees.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match degree {
                Degree::Offset(o) => write!(f, "{}", o)?,
                Degree::Skip => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}

/// Tertian extensions stacked on a chord of up to four degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extension {
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Extension {
    /// Degrees 0-3 skipped, then the compound intervals 14 / 17 / 21
    pub fn pattern(self) -> IntervalPattern {
        match self {
            Extension::Ninth => IntervalPattern::from_offsets(&[-1, -1, -1, -1, 14]),
            Extension::Eleventh => IntervalPattern::from_offsets(&[-1, -1, -1, -1, 14, 17]),
            Extension::Thirteenth => {
                IntervalPattern::from_offsets(&[-1, -1, -1, -1, 14, 17, 21])
            }
        }
    }

    /// Suffix appended to the base chord name
    pub fn label(self) -> &'static str {
        match self {
            Extension::Ninth => "(9)",
            Extension::Eleventh => "(9,11)",
            Extension::Thirteenth => "(9,11,13)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "9" | "ninth" => Some(Extension::Ninth),
            "11" | "eleventh" => Some(Extension::Eleventh),
            "13" | "thirteenth" => Some(Extension::Thirteenth),
            _ => None,
        }
    }
}
