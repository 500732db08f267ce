// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for chordgen.
//!
//! Settings live in a YAML or TOML file, picked by extension. Every
//! field has a default, so a partial file (or none at all) is valid.
//!
//! ```yaml
//! generator:
//!   diatonicity: 0.56
//!   functional_harmony: 0.72
//!   num_bars: 4
//! max_attempts: 64
//! export:
//!   tempo: 120
//!   program: 90
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::export::ExportSettings;
use crate::generators::GeneratorParams;

/// Default cap on generation attempts per composition
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Progression generator parameters
    #[serde(default)]
    pub generator: GeneratorParams,
    /// Attempts before giving up on a composition
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// MIDI rendering
    #[serde(default)]
    pub export: ExportSettings,
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorParams::default(),
            max_attempts: default_max_attempts(),
            export: ExportSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load from a `.yaml`/`.yml` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            Some("toml") => Self::from_toml(&contents),
            _ => bail!("Unsupported config format: {:?} (expected .yaml, .yml or .toml)", path),
        }
        .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config.validated())
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Clamp every value into its valid range
    pub fn validated(self) -> Self {
        Self {
            generator: self.generator.validated(),
            max_attempts: self.max_attempts.max(1),
            export: self.export.validated(),
        }
    }
}
