//! Command dispatch functions
//!
//! Breaks up the main match statement into focused dispatch functions.

use anyhow::{Context, Result};
use d2r::Position;

use crate::cli::*;
use crate::commands;
use crate::commands::configure::ConfigureArgs;
use crate::config::Config;
use crate::memory::D2rProcess;

/// Dispatch the configure command
pub fn dispatch_configure(args: ConfigureArgs, show: bool) -> Result<()> {
    commands::configure::handle(args, show)
}

/// Dispatch memory subcommands
///
/// Every action needs a live process, so attach first.
pub fn dispatch_memory(action: MemoryAction) -> Result<()> {
    let config = Config::load()?;
    let process = D2rProcess::attach(config.process_name())
        .with_context(|| format!("Failed to attach to {}", config.process_name()))?;

    match action {
        MemoryAction::Info => {
            println!("{}", process.info(config.module_name()));
            Ok(())
        }

        MemoryAction::Items {
            x,
            y,
            location,
            stats,
            json,
        } => {
            let base = process.module_base(config.module_name())?;
            commands::memory::handle_items(
                &process,
                base,
                &config,
                Position::new(x, y),
                &location,
                stats,
                json,
            )
        }

        MemoryAction::Matrix {
            height,
            width,
            location,
        } => {
            let base = process.module_base(config.module_name())?;
            let size = height.zip(width);
            commands::memory::handle_matrix(&process, base, &config, size, &location)
        }

        MemoryAction::Read { address, size } => {
            commands::memory::handle_read(&process, &address, size)
        }
    }
}
