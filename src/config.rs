//! Configuration handling for the TUI

use crate::state::{FieldValue, FormValues};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Mask used for password fields when none is configured
pub const DEFAULT_MASK_CHAR: char = '•';

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Hide password characters while typing
    pub mask_passwords: Option<bool>,
    /// Character drawn in place of each password character
    pub mask_char: Option<char>,
    /// Show the key hints in the status bar
    pub show_help: Option<bool>,
    /// Initial form values keyed by field name (e.g. `"firstName"`)
    pub prefill: Option<BTreeMap<String, FieldValue>>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn masks_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }

    pub fn shows_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }

    /// Values the form starts with. Unknown field names discard the whole prefill.
    pub fn prefill_values(&self) -> Option<FormValues> {
        let pairs = self.prefill.as_ref()?;
        let pairs = pairs.iter().map(|(name, value)| (name.as_str(), value.clone()));
        match FormValues::from_pairs(pairs) {
            Ok(values) => Some(values),
            Err(err) => {
                tracing::warn!("Ignoring prefill: {err}");
                None
            }
        }
    }
}
