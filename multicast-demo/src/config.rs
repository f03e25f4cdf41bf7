//! Demo configuration loading and parsing

use crate::sysdata::Mode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Demo script configuration (loaded from a TOML file, every field optional)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Modes applied while both mode subscribers are registered
    pub modes: Vec<Mode>,
    /// Modes applied after the first subscriber has been unregistered
    pub after_unregister: Vec<Mode>,
    /// Run the 0, 2, 3, 4 and 5 argument demonstrations
    pub arity_demos: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            modes: vec![Mode::Starting, Mode::Normal],
            after_unregister: vec![Mode::Alarm],
            arity_demos: true,
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: DemoConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
