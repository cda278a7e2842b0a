//! Configuration management for d2r CLI

use anyhow::{Context, Result};
use d2r::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROCESS: &str = "D2R.exe";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Executable name to attach to
    pub process_name: Option<String>,
    /// Module whose base the offsets are relative to
    pub module_name: Option<String>,
    /// Offset of the unit tables from the module base
    pub unit_table_offset: Option<usize>,
    /// Offset of the hover structure from the module base
    pub hover_offset: Option<usize>,
    /// TOML file overriding record offsets
    pub layout_path: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("d2r");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or the default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn process_name(&self) -> &str {
        self.process_name.as_deref().unwrap_or(DEFAULT_PROCESS)
    }

    /// Module name, falling back to the process name
    pub fn module_name(&self) -> &str {
        self.module_name
            .as_deref()
            .unwrap_or_else(|| self.process_name())
    }

    /// Record layout, from the configured file if any
    pub fn layout(&self) -> Result<Layout> {
        let Some(path) = &self.layout_path else {
            return Ok(Layout::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout from {}", path.display()))?;
        Layout::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse layout {}", path.display()))
    }
}
