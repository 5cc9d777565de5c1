//! Responder identity configuration.
//!
//! The classification core is pure; the identity block (full name, date of
//! birth, email, roll number) that accompanies every response envelope is
//! external state. It loads from a TOML config file and can be overridden
//! per-field through `TOKSIFT_*` environment variables, so deployments can
//! configure identity without touching the filesystem.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config directory (used by tests).
const CONFIG_DIR_ENV: &str = "TOKSIFT_CONFIG_DIR";

/// Identity fields attached to every response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Responder's full name; normalized into the `user_id`.
    pub full_name: String,
    /// Date of birth as DDMMYYYY digits; appended to the `user_id`.
    pub dob_ddmmyyyy: String,
    /// Contact email, reported verbatim.
    pub email: String,
    /// Roll number, reported verbatim.
    pub roll_number: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            full_name: "john_doe".to_string(),
            dob_ddmmyyyy: "17091999".to_string(),
            email: "your_email_here".to_string(),
            roll_number: "your_roll_number_here".to_string(),
        }
    }
}

impl Config {
    /// Directory holding the config file.
    ///
    /// `TOKSIFT_CONFIG_DIR` overrides the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("toksift"))
    }

    /// Full path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the config file (defaults if absent), then applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Writes the config as pretty TOML, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Derived user id: normalized full name, underscore, date of birth.
    pub fn user_id(&self) -> String {
        format!("{}_{}", normalize_name(&self.full_name), self.dob_ddmmyyyy)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("TOKSIFT_FULL_NAME") {
            self.full_name = value;
        }
        if let Ok(value) = env::var("TOKSIFT_DOB_DDMMYYYY") {
            self.dob_ddmmyyyy = value;
        }
        if let Ok(value) = env::var("TOKSIFT_EMAIL") {
            self.email = value;
        }
        if let Ok(value) = env::var("TOKSIFT_ROLL_NUMBER") {
            self.roll_number = value;
        }
    }
}

/// Normalizes a full name for the user id: ASCII transliteration,
/// trimmed, lower-cased, whitespace runs collapsed to a single `_`.
fn normalize_name(name: &str) -> String {
    let ascii = deunicode(name);
    let trimmed = ascii.trim();

    let mut result = String::with_capacity(trimmed.len());
    let mut last_was_separator = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !last_was_separator {
                result.push('_');
                last_was_separator = true;
            }
        } else {
            result.push(c.to_ascii_lowercase());
            last_was_separator = false;
        }
    }
    result
}
