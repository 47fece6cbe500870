// File: src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Presentation and display-mode behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    /// Heading shown above the inputs
    #[serde(default = "default_title")]
    pub title: String,

    /// Editing a field while the summary is shown switches back to the form.
    /// Off by default: the summary stays until the form is reset.
    #[serde(default = "default_false")]
    pub return_to_form_on_edit: bool,
}

/// Tunables of the rule table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    #[serde(default = "default_first_name_min_length")]
    pub first_name_min_length: usize,
}

// Default values
fn default_title() -> String {
    "Contact Form".to_string()
}

fn default_first_name_min_length() -> usize {
    5
}

fn default_false() -> bool {
    false
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            return_to_form_on_edit: false,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            first_name_min_length: default_first_name_min_length(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }
}
