//! Raw memory access and layout
//!
//! ## Module Structure
//!
//! - `source` - Byte-range read abstraction
//! - `field` - Fixed-width little-endian field extraction
//! - `layout` - Offsets for unit records, as data
//! - `unit_table` - Bucket array and chain traversal

mod field;
pub mod layout;
#[cfg(any(test, feature = "test-utils"))]
mod mock;
mod source;
pub mod unit_table;

pub use field::{read_uint, Field, Width};
pub use layout::Layout;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockMemorySource;
pub use source::MemorySource;
pub use unit_table::{
    unit_table_for, walk_unit_table, walk_unit_table_with_cap, UnitKind, UnitNode, WalkStats,
};
