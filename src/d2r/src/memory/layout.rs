//! D2R Unit Memory Layout
//!
//! Offsets and widths for the unit table and the records hanging off it.
//! The defaults match the current retail build. A different build only needs
//! a TOML file naming the fields that moved:
//!
//! ```toml
//! [unit]
//! next = { offset = 0x158, width = "u64" }
//!
//! [unit_data]
//! inventory_page = { offset = 0x56, width = "u8" }
//! ```

use serde::{Deserialize, Serialize};

use super::field::{Field, Width::*};
use crate::error::Result;

// -- Unit table --
// The game keeps one hashed table per unit kind, back to back:
//
//   UnitHashTable tables[6];   // +kind * 0x400
//   struct UnitHashTable {
//     UnitAny *buckets[128];   // chained through UnitAny::pNext
//   };

/// Bucket array shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Number of buckets per unit kind
    pub buckets: usize,
    /// Width of one bucket head pointer
    pub slot: Field,
    /// Distance between the tables of consecutive unit kinds
    pub kind_stride: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            buckets: 128,
            slot: Field::new(0x00, U64),
            kind_stride: 128 * 8,
        }
    }
}

impl TableLayout {
    /// Bytes covered by the bucket array
    pub fn size(&self) -> usize {
        self.buckets * self.slot.width.size()
    }
}

// -- UnitAny --
//   uint32_t dwType;           // +0x00
//   uint32_t dwTxtFileNo;      // +0x04
//   uint32_t dwUnitId;         // +0x08
//   uint32_t dwMode;           // +0x0C  (item location for items)
//   ItemData *pItemData;       // +0x10
//   Path     *pPath;           // +0x38
//   StatListEx *pStats;        // +0x88
//   UnitAny  *pNext;           // +0x150 (hash chain)

/// Primary unit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitLayout {
    /// Bytes read per record (the chain pointer lies past this and is read on its own)
    pub size: usize,
    pub kind: Field,
    pub file_code: Field,
    pub unit_id: Field,
    pub location: Field,
    pub unit_data: Field,
    pub path: Field,
    pub stat_list: Field,
    pub next: Field,
    /// `kind` value that marks an item
    pub item_kind: u32,
}

impl Default for UnitLayout {
    fn default() -> Self {
        Self {
            size: 0x90,
            kind: Field::new(0x00, U32),
            file_code: Field::new(0x04, U32),
            unit_id: Field::new(0x08, U32),
            location: Field::new(0x0C, U32),
            unit_data: Field::new(0x10, U64),
            path: Field::new(0x38, U64),
            stat_list: Field::new(0x88, U64),
            next: Field::new(0x150, U64),
            item_kind: 4,
        }
    }
}

/// Item-specific unit data (pItemData)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitDataLayout {
    pub size: usize,
    pub quality: Field,
    pub flags: Field,
    pub inventory_page: Field,
}

impl Default for UnitDataLayout {
    fn default() -> Self {
        Self {
            size: 0x90,
            quality: Field::new(0x00, U32),
            flags: Field::new(0x18, U32),
            inventory_page: Field::new(0x55, U8),
        }
    }
}

/// Static path record holding the grid or world coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLayout {
    pub size: usize,
    pub x: Field,
    pub y: Field,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            size: 0x90,
            x: Field::new(0x10, U16),
            y: Field::new(0x14, U16),
        }
    }
}

/// StatListEx header pointing at the two stat arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatListLayout {
    pub size: usize,
    pub base_ptr: Field,
    pub base_count: Field,
    pub extended_ptr: Field,
    pub extended_count: Field,
}

impl Default for StatListLayout {
    fn default() -> Self {
        Self {
            size: 0xB4,
            base_ptr: Field::new(0x30, U64),
            base_count: Field::new(0x38, U32),
            extended_ptr: Field::new(0x88, U64),
            extended_count: Field::new(0x90, U32),
        }
    }
}

// -- D2Stat --
//   uint16_t wLayer;     // +0x00
//   uint16_t wStatId;    // +0x02
//   uint32_t dwValue;    // +0x04

/// One entry of a stat array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEntryLayout {
    pub stride: usize,
    pub id: Field,
    pub value: Field,
    /// Lists with this many entries or more are treated as corrupt and skipped
    pub max_count: usize,
}

impl Default for StatEntryLayout {
    fn default() -> Self {
        Self {
            stride: 8,
            id: Field::new(0x02, U16),
            value: Field::new(0x04, U32),
            max_count: 20,
        }
    }
}

/// Hovered-unit structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverLayout {
    pub size: usize,
    pub active: Field,
    pub kind: Field,
    pub unit_id: Field,
}

impl Default for HoverLayout {
    fn default() -> Self {
        Self {
            size: 12,
            active: Field::new(0x00, U16),
            kind: Field::new(0x04, U32),
            unit_id: Field::new(0x08, U32),
        }
    }
}

/// Complete layout descriptor for one game build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub table: TableLayout,
    pub unit: UnitLayout,
    pub unit_data: UnitDataLayout,
    pub path: PathLayout,
    pub stat_list: StatListLayout,
    pub stat_entry: StatEntryLayout,
    pub hover: HoverLayout,
}

impl Layout {
    /// Parse a layout file; fields it does not name keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
