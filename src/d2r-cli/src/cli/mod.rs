//! CLI argument definitions for d2r
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod memory;

pub use core::{Cli, Commands};
pub use memory::MemoryAction;
