//! Configuration handling for the TUI

use crate::state::{PasswordPolicy, DEFAULT_MIN_PASSWORD_LENGTH};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_FILTER: &str = "login_form_tui=info";
const DEFAULT_MASK_CHAR: char = '•';

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Minimum password length enforced by the password rules
    pub min_password_length: Option<usize>,
    /// Also require a digit in the password
    pub require_digit: Option<bool>,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: Option<String>,
    /// Character drawn in place of each obscured character
    pub mask_char: Option<char>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "login-form", "login-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH)
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length(),
            require_digit: self.require_digit.unwrap_or(false),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }
}
