//! # d2r
//!
//! Diablo II: Resurrected item snapshots from process memory.
//!
//! This library provides functionality to:
//! - Walk the hashed unit table and follow each bucket's chain
//! - Decode item records, including their stat lists and positions
//! - Classify items into shop, inventory, equipped, belt and ground
//! - Build inventory and stash occupancy grids
//!
//! All reads go through [`memory::MemorySource`], so the decoder never
//! touches a live process directly. Record offsets come from a
//! [`memory::Layout`], which can be loaded from TOML when the game changes.
//!
//! ## Example
//!
//! ```no_run
//! use d2r::memory::{Layout, MemorySource};
//! use d2r::{ItemReader, Observer, Position};
//!
//! # fn run(process: &dyn MemorySource, tables_base: usize) -> d2r::Result<()> {
//! let reader = ItemReader::new(process, Layout::default());
//! let table = reader.item_table(tables_base);
//! let inventory = reader.items(table, &Observer::at(Position::new(5100, 5030)))?;
//!
//! for item in inventory.ground() {
//!     println!("{} at ({}, {})", item.name, item.position.x, item.position.y);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod items;
pub mod memory;
pub mod reference;

#[doc(inline)]
pub use error::{DecodeError, Error, MemoryError, Result};
#[doc(inline)]
pub use items::{
    HoveredUnit, Inventory, Item, ItemFlags, ItemReader, LocationType, Observer, Placement,
    Position, Quality, Stats, UnitId,
};
#[doc(inline)]
pub use memory::{Layout, MemorySource};
#[doc(inline)]
pub use reference::{ItemCatalog, StatId, StatResolver};
