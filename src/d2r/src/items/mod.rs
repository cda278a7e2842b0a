//! Item snapshot decoding
//!
//! ## Module Structure
//!
//! - `reader` - Entry point, drives the table walk
//! - `decode` - One unit record to one item
//! - `stats` - Base and extended stat arrays
//! - `location` - Placement classification
//! - `model` - Item, position, quality and flags
//! - `inventory` - Snapshot container and views
//! - `matrix` - Grid occupancy
//! - `ground` - Distance ordering for floor items

pub mod decode;
pub mod ground;
pub mod inventory;
pub mod location;
pub mod matrix;
pub mod model;
pub mod reader;
pub mod stats;

pub use decode::{DecodedItem, ItemDecoder, UnitHeader};
pub use ground::sort_by_distance;
pub use inventory::Inventory;
pub use location::{LocationType, Placement};
pub use matrix::{inventory_matrix, stash_matrix, InventoryMatrix};
pub use model::{HoveredUnit, Item, ItemFlags, Observer, Position, Quality, Stats, UnitId};
pub use reader::ItemReader;
pub use stats::{StatEntry, StatLists};
