//! Command handlers for d2r CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod memory;
