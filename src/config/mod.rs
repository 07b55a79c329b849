// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Settings for the enharmonic command-line tool.
//!
//! Settings files supply the defaults used when a command leaves out the
//! tonic, mode or chord size, plus the log level. YAML and TOML are both
//! accepted; the format is picked from the file extension.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::music::{ChordSize, Scale, ScaleMode, Spelling};

/// Tool settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Default tonic (e.g., "C", "F#", "Bb")
    #[serde(default = "default_tonic")]
    pub tonic: String,
    /// Default scale mode
    #[serde(default = "default_mode")]
    pub mode: ScaleMode,
    /// Default chord size for harmonizing
    #[serde(default)]
    pub chord_size: ChordSize,
    /// Octave used for MIDI numbers and frequencies (middle C = C4)
    #[serde(default = "default_octave")]
    pub octave: i8,
    /// Maximum log level ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tonic() -> String {
    "C".to_string()
}
fn default_mode() -> ScaleMode {
    ScaleMode::Major
}
fn default_octave() -> i8 {
    4
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tonic: default_tonic(),
            mode: default_mode(),
            chord_size: ChordSize::default(),
            octave: default_octave(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from a `.toml` file or, for any other extension, YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let settings = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };

        settings.validate()?;
        tracing::debug!(?path, ?settings, "loaded settings");
        Ok(settings)
    }

    /// Parse settings from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML settings")
    }

    /// Parse settings from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML settings")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings to YAML")
    }

    /// Save settings to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write settings file: {:?}", path.as_ref()))
    }

    /// The default tonic as a spelling
    pub fn tonic(&self) -> Result<Spelling> {
        self.tonic
            .parse()
            .with_context(|| format!("Invalid default tonic {:?}", self.tonic))
    }

    /// The scale named by the default tonic and mode
    pub fn scale(&self) -> Result<Scale> {
        Ok(Scale::new(self.tonic()?, self.mode))
    }

    /// The configured maximum log level
    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Invalid log level {:?}", self.log_level))
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        let tonic = self.tonic()?;
        if tonic.midi_note(self.octave).is_none() {
            return Err(anyhow!(
                "Octave {} puts {} outside the MIDI range",
                self.octave,
                tonic
            ));
        }
        self.log_level()?;
        Ok(())
    }
}
