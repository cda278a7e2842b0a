//! Reference data for D2R
//!
//! Static lookups the decoder consults but never depends on the contents of:
//! - Item descriptors (name, type, footprint) by file code
//! - Stat identifiers and the raw value encodings

pub mod catalog;
pub mod stats;

pub use catalog::{
    item_by_id, item_by_name, ItemCatalog, ItemDescriptor, ItemType, StaticCatalog, ITEMS,
    UNKNOWN_ITEM,
};
pub use stats::{D2StatResolver, StatId, StatResolver};
