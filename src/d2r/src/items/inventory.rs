//! Item snapshot and its per-location views

use serde::Serialize;

use super::location::LocationType;
use super::matrix::{self, InventoryMatrix};
use super::model::{Item, UnitId};
use crate::error::Result;
use crate::reference::ItemCatalog;

/// All items from one snapshot
///
/// Items outside the ground are in table scan order, followed by ground
/// items nearest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inventory {
    pub all_items: Vec<Item>,
}

impl Inventory {
    pub fn new(all_items: Vec<Item>) -> Self {
        Self { all_items }
    }

    pub fn len(&self) -> usize {
        self.all_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_items.is_empty()
    }

    /// Items in any of the given locations, in snapshot order
    pub fn by_location(&self, locations: &[LocationType]) -> Vec<&Item> {
        self.all_items
            .iter()
            .filter(|item| locations.contains(&item.location))
            .collect()
    }

    /// First item with this name (case-insensitive) in any of `locations`
    ///
    /// An empty location list matches every location.
    pub fn find(&self, name: &str, locations: &[LocationType]) -> Option<&Item> {
        self.all_items.iter().find(|item| {
            item.name.eq_ignore_ascii_case(name)
                && (locations.is_empty() || locations.contains(&item.location))
        })
    }

    pub fn find_by_id(&self, unit_id: UnitId) -> Option<&Item> {
        self.all_items.iter().find(|item| item.unit_id == unit_id)
    }

    pub fn shop(&self) -> Vec<&Item> {
        self.by_location(&[LocationType::Shop])
    }

    pub fn inventory(&self) -> Vec<&Item> {
        self.by_location(&[LocationType::Inventory])
    }

    pub fn equipped(&self) -> Vec<&Item> {
        self.by_location(&[LocationType::Equipped])
    }

    pub fn belt(&self) -> Vec<&Item> {
        self.by_location(&[LocationType::Belt])
    }

    pub fn ground(&self) -> Vec<&Item> {
        self.by_location(&[LocationType::Ground])
    }

    /// Occupancy of the inventory grid
    pub fn matrix(&self, catalog: &dyn ItemCatalog) -> InventoryMatrix {
        matrix::inventory_matrix(self.inventory(), catalog)
    }

    /// Occupancy of a `height` by `width` grid from items in `locations`
    pub fn stash_matrix(
        &self,
        locations: &[LocationType],
        catalog: &dyn ItemCatalog,
        height: i32,
        width: i32,
    ) -> Result<Vec<Vec<bool>>> {
        matrix::stash_matrix(self.by_location(locations), catalog, height, width)
    }
}
