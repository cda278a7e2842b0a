//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::memory::MemoryAction;

#[derive(Parser)]
#[command(name = "d2r")]
#[command(about = "Diablo II: Resurrected item reader", long_about = None)]
pub struct Cli {
    /// Log decoder activity (same as RUST_LOG=d2r=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Offset of the unit tables from the module base (hex or decimal)
        #[arg(long)]
        unit_table_offset: Option<String>,

        /// Offset of the hover structure from the module base (hex or decimal)
        #[arg(long)]
        hover_offset: Option<String>,

        /// Executable name of the game process
        #[arg(long)]
        process: Option<String>,

        /// Module the offsets are relative to (defaults to the process name)
        #[arg(long)]
        module: Option<String>,

        /// TOML file overriding record offsets
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Show current configuration
        #[arg(
            long,
            conflicts_with_all = ["unit_table_offset", "hover_offset", "process", "module", "layout"]
        )]
        show: bool,
    },

    /// Read items from the running game
    #[command(visible_alias = "m")]
    Memory {
        #[command(subcommand)]
        action: MemoryAction,
    },
}
