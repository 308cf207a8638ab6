// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Custom chord definitions loaded from YAML or TOML files.
//!
//! ```yaml
//! chords:
//!   - id: add9
//!     suffix: add9
//!     rotation: tertian
//!     pattern: [0, 4, 7, skip, 14]
//! ```
//!
//! `rotation` is `diatonic`, `tertian`, or a letter string such as
//! `CEGBDFA`. Pattern entries are offsets or skip markers (`skip`, `-`,
//! or any negative number).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{ChordCatalog, ChordDefinition};
use crate::music::{IntervalPattern, LetterRotation};

/// Root of a chord definitions file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChordFile {
    #[serde(default)]
    pub chords: Vec<ChordSpec>,
}

/// One chord as written in a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordSpec {
    /// Lookup key
    pub id: String,
    /// Display suffix; defaults to the id
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    pub pattern: IntervalPattern,
}

fn default_rotation() -> String {
    "tertian".to_string()
}

impl ChordSpec {
    /// Validate and convert into a catalog entry
    pub fn to_definition(&self) -> Result<ChordDefinition> {
        let rotation: LetterRotation = self
            .rotation
            .parse()
            .with_context(|| format!("Chord `{}` has a bad rotation", self.id))?;
        let suffix = self.suffix.clone().unwrap_or_else(|| self.id.clone());
        Ok(ChordDefinition::new(
            self.id.clone(),
            suffix,
            self.pattern.clone(),
            rotation,
        ))
    }
}

impl ChordFile {
    /// Load chord definitions; `.toml` files are read as TOML, anything else as YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read chord file: {:?}", path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        parsed.with_context(|| format!("Invalid chord file: {:?}", path))
    }

    /// Parse chord definitions from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML chord definitions")
    }

    /// Parse chord definitions from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML chord definitions")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize chord definitions to YAML")
    }

    /// Save definitions to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write chord file: {:?}", path.as_ref()))
    }

    /// Validate every entry
    pub fn definitions(&self) -> Result<Vec<ChordDefinition>> {
        self.chords.iter().map(ChordSpec::to_definition).collect()
    }

    /// Register these chords on top of an existing catalog
    pub fn apply(&self, catalog: &mut ChordCatalog) -> Result<()> {
        for def in self.definitions()? {
            catalog.register(def);
        }
        Ok(())
    }
}

/// The built-in catalog extended with the chords in `path`
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<ChordCatalog> {
    let file = ChordFile::load(path)?;
    let mut catalog = ChordCatalog::with_builtin();
    file.apply(&mut catalog)?;
    Ok(catalog)
}
