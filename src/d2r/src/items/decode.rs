//! Item record decoding
//!
//! Turns one unit record plus the records it points at (item data, path,
//! stat list) into an [`Item`].

use super::location::Placement;
use super::model::{Item, ItemFlags, Observer, Position, Quality, UnitId};
use super::stats::{read_stat_lists, StatListHeader};
use crate::error::Result;
use crate::memory::layout::{Layout, UnitLayout};
use crate::memory::MemorySource;
use crate::reference::{ItemCatalog, StatResolver};

/// Fields taken straight from the primary unit record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitHeader {
    pub kind: u32,
    pub file_code: u32,
    pub unit_id: u32,
    pub location: u32,
    pub unit_data: usize,
    pub path: usize,
    pub stat_list: usize,
}

impl UnitHeader {
    pub fn parse(record: &[u8], layout: &UnitLayout) -> Result<Self> {
        Ok(Self {
            kind: layout.kind.read_u32(record)?,
            file_code: layout.file_code.read_u32(record)?,
            unit_id: layout.unit_id.read_u32(record)?,
            location: layout.location.read_u32(record)?,
            unit_data: layout.unit_data.read_ptr(record)?,
            path: layout.path.read_ptr(record)?,
            stat_list: layout.stat_list.read_ptr(record)?,
        })
    }

    /// Only the kind, for the cheap per-node check
    pub fn kind(record: &[u8], layout: &UnitLayout) -> Result<u32> {
        Ok(layout.kind.read_u32(record)?)
    }
}

/// An item record after decoding, with the placement it classified into
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedItem {
    pub placement: Placement,
    /// `None` when the placement is one the inventory model drops
    pub item: Option<Item>,
}

/// Decodes item unit records against one layout and set of lookups
pub struct ItemDecoder<'a> {
    source: &'a dyn MemorySource,
    layout: &'a Layout,
    catalog: &'a dyn ItemCatalog,
    resolver: &'a dyn StatResolver,
}

impl<'a> ItemDecoder<'a> {
    pub fn new(
        source: &'a dyn MemorySource,
        layout: &'a Layout,
        catalog: &'a dyn ItemCatalog,
        resolver: &'a dyn StatResolver,
    ) -> Self {
        Self {
            source,
            layout,
            catalog,
            resolver,
        }
    }

    /// Decode an item record
    ///
    /// Any unreadable pointer fails the call; there is no per-item recovery.
    pub fn decode(&self, record: &[u8], observer: &Observer) -> Result<DecodedItem> {
        let header = UnitHeader::parse(record, &self.layout.unit)?;

        let unit_data = self
            .source
            .read_bytes(header.unit_data, self.layout.unit_data.size)?;
        let quality = self.layout.unit_data.quality.read_u32(&unit_data)?;
        let flags = ItemFlags::from_bits_truncate(self.layout.unit_data.flags.read_u32(&unit_data)?);
        let page = self.layout.unit_data.inventory_page.read(&unit_data)? as u8;

        let path = self.source.read_bytes(header.path, self.layout.path.size)?;
        let position = Position::new(
            self.layout.path.x.read(&path)? as i32,
            self.layout.path.y.read(&path)? as i32,
        );

        let stat_header = self
            .source
            .read_bytes(header.stat_list, self.layout.stat_list.size)?;
        let stat_header = StatListHeader::parse(&stat_header, &self.layout.stat_list)?;
        let stats = read_stat_lists(
            self.source,
            stat_header,
            &self.layout.stat_entry,
            self.resolver,
        )?;

        let hovered = observer
            .hovered
            .is_some_and(|h| h.kind == header.kind && h.unit_id.0 == header.unit_id);

        let placement = Placement::classify(header.location, flags.contains(ItemFlags::VENDOR), page);
        let item = placement.location().map(|location| Item {
            id: header.file_code,
            unit_id: UnitId(header.unit_id),
            name: self.catalog.describe(header.file_code).name.to_string(),
            quality: Quality::from_code(quality),
            position,
            location,
            flags,
            hovered,
            base_stats: stats.base_map(),
            extended_stats: stats.extended_map(),
            stats: stats.merged(),
        });

        Ok(DecodedItem { placement, item })
    }
}
