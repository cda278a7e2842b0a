//! Item location classification
//!
//! Every decoded item is assigned exactly one [`Placement`]. Only the
//! placements that map to a [`LocationType`] make it into the inventory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical container an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Shop,
    Inventory,
    Equipped,
    Belt,
    Ground,
}

impl LocationType {
    pub const ALL: [LocationType; 5] = [
        Self::Shop,
        Self::Inventory,
        Self::Equipped,
        Self::Belt,
        Self::Ground,
    ];
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shop => write!(f, "shop"),
            Self::Inventory => write!(f, "inventory"),
            Self::Equipped => write!(f, "equipped"),
            Self::Belt => write!(f, "belt"),
            Self::Ground => write!(f, "ground"),
        }
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shop" | "vendor" => Ok(Self::Shop),
            "inventory" | "inv" => Ok(Self::Inventory),
            "equipped" | "equip" => Ok(Self::Equipped),
            "belt" => Ok(Self::Belt),
            "ground" | "floor" => Ok(Self::Ground),
            _ => Err(format!("Unknown location: {}", s)),
        }
    }
}

/// Raw item location codes (`UnitAny::dwMode` for items)
pub mod code {
    pub const STORED: u32 = 0;
    pub const EQUIPPED: u32 = 1;
    pub const BELT: u32 = 2;
    pub const GROUND: u32 = 3;
    pub const CURSOR: u32 = 4;
    pub const DROPPING: u32 = 5;
    pub const SOCKETED: u32 = 6;
}

/// Where a decoded item ended up, including the cases that are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Stored and owned by a vendor
    Shop,
    /// Stored on the first inventory page
    Inventory,
    /// Stored on any other page; not part of the inventory model
    OtherPage(u8),
    Equipped,
    Belt,
    /// On the floor or falling to it
    Ground,
    /// Cursor, socketed and anything unknown; not part of the inventory model
    Unclassified(u32),
}

impl Placement {
    /// Classify an item from its location code, vendor flag and page
    pub fn classify(location: u32, vendor: bool, page: u8) -> Self {
        match location {
            code::STORED if vendor => Self::Shop,
            code::STORED if page == 0 => Self::Inventory,
            code::STORED => Self::OtherPage(page),
            code::EQUIPPED => Self::Equipped,
            code::BELT => Self::Belt,
            code::GROUND | code::DROPPING => Self::Ground,
            other => Self::Unclassified(other),
        }
    }

    /// Bucket in the inventory model, `None` for dropped placements
    pub fn location(self) -> Option<LocationType> {
        match self {
            Self::Shop => Some(LocationType::Shop),
            Self::Inventory => Some(LocationType::Inventory),
            Self::Equipped => Some(LocationType::Equipped),
            Self::Belt => Some(LocationType::Belt),
            Self::Ground => Some(LocationType::Ground),
            Self::OtherPage(_) | Self::Unclassified(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_items() {
        assert_eq!(Placement::classify(0, true, 0), Placement::Shop);
        // Vendor ownership wins over the page
        assert_eq!(Placement::classify(0, true, 4), Placement::Shop);
        assert_eq!(Placement::classify(0, false, 0), Placement::Inventory);
        assert_eq!(Placement::classify(0, false, 4), Placement::OtherPage(4));
    }

    #[test]
    fn test_other_codes() {
        assert_eq!(Placement::classify(1, false, 0), Placement::Equipped);
        assert_eq!(Placement::classify(2, false, 0), Placement::Belt);
        assert_eq!(Placement::classify(3, false, 0), Placement::Ground);
        assert_eq!(Placement::classify(5, false, 0), Placement::Ground);
        assert_eq!(Placement::classify(4, false, 0), Placement::Unclassified(4));
        assert_eq!(Placement::classify(6, true, 0), Placement::Unclassified(6));
        assert_eq!(Placement::classify(99, false, 0), Placement::Unclassified(99));
    }

    #[test]
    fn test_vendor_flag_only_matters_when_stored() {
        assert_eq!(Placement::classify(1, true, 0), Placement::Equipped);
        assert_eq!(Placement::classify(3, true, 0), Placement::Ground);
    }

    #[test]
    fn test_dropped_placements_have_no_location() {
        assert_eq!(Placement::OtherPage(3).location(), None);
        assert_eq!(Placement::Unclassified(4).location(), None);
        assert_eq!(Placement::Ground.location(), Some(LocationType::Ground));
    }

    #[test]
    fn test_each_code_maps_to_at_most_one_location() {
        for location in 0..10 {
            for vendor in [false, true] {
                for page in 0..5 {
                    let placement = Placement::classify(location, vendor, page);
                    let hits = LocationType::ALL
                        .iter()
                        .filter(|l| placement.location() == Some(**l))
                        .count();
                    assert!(hits <= 1);
                }
            }
        }
    }

    #[test]
    fn test_location_parse() {
        assert_eq!("Ground".parse::<LocationType>(), Ok(LocationType::Ground));
        assert_eq!("inv".parse::<LocationType>(), Ok(LocationType::Inventory));
        assert!("stash".parse::<LocationType>().is_err());
        assert_eq!(LocationType::Belt.to_string(), "belt");
    }
}
