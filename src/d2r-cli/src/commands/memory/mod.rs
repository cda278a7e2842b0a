//! Memory command handlers for d2r CLI
//!
//! This module contains handlers for memory-related subcommands.

mod items;
mod raw_memory;

pub use items::{handle_items, handle_matrix};
pub use raw_memory::{handle_read, parse_address};
