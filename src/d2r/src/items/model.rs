//! Decoded item model

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::location::LocationType;
use crate::reference::{ItemCatalog, ItemDescriptor, ItemType, StatId};

/// Attribute map: stat id to resolved value
pub type Stats = BTreeMap<StatId, i32>;

/// Unit identity, unique per live unit within one snapshot only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid cell for container items, world coordinate for ground items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// Item quality code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    LowQuality,
    Normal,
    Superior,
    Magic,
    Set,
    Rare,
    Unique,
    Crafted,
    Unknown(u32),
}

impl Quality {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::LowQuality,
            2 => Self::Normal,
            3 => Self::Superior,
            4 => Self::Magic,
            5 => Self::Set,
            6 => Self::Rare,
            7 => Self::Unique,
            8 => Self::Crafted,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::LowQuality => 1,
            Self::Normal => 2,
            Self::Superior => 3,
            Self::Magic => 4,
            Self::Set => 5,
            Self::Rare => 6,
            Self::Unique => 7,
            Self::Crafted => 8,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowQuality => write!(f, "Low Quality"),
            Self::Normal => write!(f, "Normal"),
            Self::Superior => write!(f, "Superior"),
            Self::Magic => write!(f, "Magic"),
            Self::Set => write!(f, "Set"),
            Self::Rare => write!(f, "Rare"),
            Self::Unique => write!(f, "Unique"),
            Self::Crafted => write!(f, "Crafted"),
            Self::Unknown(code) => write!(f, "Unknown({})", code),
        }
    }
}

bitflags! {
    /// `ItemData::dwFlags` bits the decoder cares about
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ItemFlags: u32 {
        const IDENTIFIED = 0x0000_0010;
        const VENDOR = 0x0000_2000;
        const ETHEREAL = 0x0040_0000;
        const RUNEWORD = 0x0400_0000;
    }
}

/// Hovered-unit identity as exposed by the game UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoveredUnit {
    pub kind: u32,
    pub unit_id: UnitId,
}

/// Per-call context supplied by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Observer {
    /// Player position, used to order ground items
    pub position: Position,
    pub hovered: Option<HoveredUnit>,
}

impl Observer {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            hovered: None,
        }
    }

    pub fn with_hovered(mut self, hovered: Option<HoveredUnit>) -> Self {
        self.hovered = hovered;
        self
    }
}

/// One decoded item, a value copy valid for the snapshot that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// File code, the key into the item catalog
    pub id: u32,
    pub unit_id: UnitId,
    pub name: String,
    pub quality: Quality,
    pub position: Position,
    pub location: LocationType,
    pub flags: ItemFlags,
    pub hovered: bool,
    /// Stats from the base list only
    pub base_stats: Stats,
    /// Stats from the extended list only
    pub extended_stats: Stats,
    /// Base then extended, later entries overwriting earlier ones
    pub stats: Stats,
}

impl Item {
    pub fn desc<'a>(&self, catalog: &'a dyn ItemCatalog) -> &'a ItemDescriptor {
        catalog.describe(self.id)
    }

    pub fn item_type(&self, catalog: &dyn ItemCatalog) -> ItemType {
        self.desc(catalog).item_type
    }

    pub fn is_identified(&self) -> bool {
        self.flags.contains(ItemFlags::IDENTIFIED)
    }

    pub fn is_ethereal(&self) -> bool {
        self.flags.contains(ItemFlags::ETHEREAL)
    }

    pub fn is_vendor(&self) -> bool {
        self.flags.contains(ItemFlags::VENDOR)
    }

    pub fn is_runeword(&self) -> bool {
        self.flags.contains(ItemFlags::RUNEWORD)
    }

    pub fn stat(&self, id: StatId) -> Option<i32> {
        self.stats.get(&id).copied()
    }

    pub fn is_potion(&self, catalog: &dyn ItemCatalog) -> bool {
        self.is_healing_potion(catalog)
            || self.is_mana_potion(catalog)
            || self.is_rejuv_potion(catalog)
    }

    pub fn is_healing_potion(&self, catalog: &dyn ItemCatalog) -> bool {
        self.item_type(catalog).is_type(ItemType::HealingPotion)
    }

    pub fn is_mana_potion(&self, catalog: &dyn ItemCatalog) -> bool {
        self.item_type(catalog).is_type(ItemType::ManaPotion)
    }

    pub fn is_rejuv_potion(&self, catalog: &dyn ItemCatalog) -> bool {
        self.item_type(catalog).is_type(ItemType::RejuvPotion)
    }

    /// Quest items such as the Horadric Cube
    pub fn is_from_quest(&self, catalog: &dyn ItemCatalog) -> bool {
        self.item_type(catalog).is_type(ItemType::Quest)
    }
}
