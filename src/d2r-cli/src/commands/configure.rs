//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up d2r CLI defaults.

use crate::commands::memory::parse_address;
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Values given on the command line, all optional
#[derive(Debug, Default)]
pub struct ConfigureArgs {
    pub unit_table_offset: Option<String>,
    pub hover_offset: Option<String>,
    pub process: Option<String>,
    pub module: Option<String>,
    pub layout: Option<PathBuf>,
}

impl ConfigureArgs {
    fn is_empty(&self) -> bool {
        self.unit_table_offset.is_none()
            && self.hover_offset.is_none()
            && self.process.is_none()
            && self.module.is_none()
            && self.layout.is_none()
    }

    /// Merge into `config`, validating offsets
    fn apply(self, config: &mut Config) -> Result<()> {
        if let Some(offset) = self.unit_table_offset {
            config.unit_table_offset = Some(parse_address(&offset)?);
        }
        if let Some(offset) = self.hover_offset {
            config.hover_offset = Some(parse_address(&offset)?);
        }
        if let Some(process) = self.process {
            config.process_name = Some(process);
        }
        if let Some(module) = self.module {
            config.module_name = Some(module);
        }
        if let Some(layout) = self.layout {
            config.layout_path = Some(layout);
        }
        Ok(())
    }
}

/// Handle the configure command
pub fn handle(args: ConfigureArgs, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if args.is_empty() {
        show_usage();
        return Ok(());
    }

    args.apply(&mut config)?;
    config.layout()?;
    config.save()?;

    println!("Configuration saved.");
    show_config(&config);
    Ok(())
}

fn format_offset(offset: Option<usize>) -> String {
    offset
        .map(|o| format!("{:#x}", o))
        .unwrap_or_else(|| "not set".to_string())
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Process: {}", config.process_name());
    println!("Module: {}", config.module_name());
    println!("Unit table offset: {}", format_offset(config.unit_table_offset));
    println!("Hover offset: {}", format_offset(config.hover_offset));
    match &config.layout_path {
        Some(path) => println!("Layout: {}", path.display()),
        None => println!("Layout: built-in"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: d2r configure --unit-table-offset 0x1D637F0 [--hover-offset 0x1D38C30]");
    println!("   or: d2r configure --layout layout.toml");
    println!("   or: d2r configure --show");
    println!();
    println!("Offsets are relative to the base of the game module and change");
    println!("between game patches.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_parses_offsets() {
        let mut config = Config::default();
        let args = ConfigureArgs {
            unit_table_offset: Some("0x1D637F0".to_string()),
            hover_offset: Some("4096".to_string()),
            module: Some("D2R.exe".to_string()),
            ..Default::default()
        };
        assert!(!args.is_empty());
        args.apply(&mut config).unwrap();

        assert_eq!(config.unit_table_offset, Some(0x1D6_37F0));
        assert_eq!(config.hover_offset, Some(4096));
        assert_eq!(config.module_name.as_deref(), Some("D2R.exe"));
        assert_eq!(config.process_name, None);
    }

    #[test]
    fn test_apply_keeps_existing_values() {
        let mut config = Config {
            unit_table_offset: Some(0x10),
            ..Default::default()
        };
        let args = ConfigureArgs {
            process: Some("Game.exe".to_string()),
            ..Default::default()
        };
        args.apply(&mut config).unwrap();
        assert_eq!(config.unit_table_offset, Some(0x10));
        assert_eq!(config.process_name(), "Game.exe");
    }

    #[test]
    fn test_apply_rejects_bad_offset() {
        let mut config = Config::default();
        let args = ConfigureArgs {
            unit_table_offset: Some("0xZZ".to_string()),
            ..Default::default()
        };
        assert!(args.apply(&mut config).is_err());
        assert_eq!(config.unit_table_offset, None);
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(Some(0x1d6)), "0x1d6");
        assert_eq!(format_offset(None), "not set");
    }

    #[test]
    fn test_empty_args() {
        assert!(ConfigureArgs::default().is_empty());
    }
}
