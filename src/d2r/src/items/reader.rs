//! Snapshot reader
//!
//! [`ItemReader`] is the entry point: it walks the item unit table, decodes
//! every item node and sorts the result into an [`Inventory`].

use super::decode::{ItemDecoder, UnitHeader};
use super::ground::sort_by_distance;
use super::inventory::Inventory;
use super::location::LocationType;
use super::model::{HoveredUnit, Observer, UnitId};
use crate::error::Result;
use crate::memory::{unit_table_for, walk_unit_table, Layout, MemorySource, UnitKind};
use crate::reference::{D2StatResolver, ItemCatalog, StatResolver, StaticCatalog};

/// Reads item snapshots from a memory source
pub struct ItemReader<'a> {
    source: &'a dyn MemorySource,
    layout: Layout,
    catalog: &'a dyn ItemCatalog,
    resolver: &'a dyn StatResolver,
}

impl<'a> ItemReader<'a> {
    /// Reader with the built-in catalog and stat resolver
    pub fn new(source: &'a dyn MemorySource, layout: Layout) -> Self {
        Self {
            source,
            layout,
            catalog: &StaticCatalog,
            resolver: &D2StatResolver,
        }
    }

    pub fn with_catalog(mut self, catalog: &'a dyn ItemCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_stat_resolver(mut self, resolver: &'a dyn StatResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Address of the item table given the base of all unit tables
    pub fn item_table(&self, tables_base: usize) -> usize {
        unit_table_for(tables_base, UnitKind::Item, &self.layout)
    }

    /// Decode every item reachable from the table at `table_base`
    ///
    /// Fails as a whole on the first unreadable address.
    pub fn items(&self, table_base: usize, observer: &Observer) -> Result<Inventory> {
        let decoder = ItemDecoder::new(self.source, &self.layout, self.catalog, self.resolver);
        let item_kind = self.layout.unit.item_kind;

        let mut placed = Vec::new();
        let mut ground = Vec::new();
        let mut dropped = 0usize;

        let walk = walk_unit_table(self.source, &self.layout, table_base, |node| {
            if UnitHeader::kind(&node.record, &self.layout.unit)? != item_kind {
                return Ok(());
            }

            let decoded = decoder.decode(&node.record, observer)?;
            match decoded.item {
                Some(item) if item.location == LocationType::Ground => ground.push(item),
                Some(item) => placed.push(item),
                None => {
                    dropped += 1;
                    tracing::debug!(
                        address = format_args!("{:#x}", node.address),
                        placement = ?decoded.placement,
                        "dropping item outside the inventory model"
                    );
                }
            }
            Ok(())
        })?;

        sort_by_distance(&mut ground, observer.position);

        tracing::debug!(
            nodes = walk.nodes,
            items = placed.len() + ground.len(),
            ground = ground.len(),
            dropped,
            broken_chains = walk.broken_chains,
            "item snapshot"
        );

        placed.append(&mut ground);
        Ok(Inventory::new(placed))
    }

    /// Decode the hover structure at `address`
    ///
    /// Returns `None` when nothing is hovered.
    pub fn read_hovered(&self, address: usize) -> Result<Option<HoveredUnit>> {
        let hover = &self.layout.hover;
        let buf = self.source.read_bytes(address, hover.size)?;

        if hover.active.read(&buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(HoveredUnit {
            kind: hover.kind.read_u32(&buf)?,
            unit_id: UnitId(hover.unit_id.read_u32(&buf)?),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::decode::tests::{put_item, FakeItem, UNIT_SPAN};
    use crate::items::model::Position;
    use crate::memory::MockMemorySource;
    use crate::reference::{ItemDescriptor, StatId, UNKNOWN_ITEM};
    use crate::Error;

    const BASE: usize = 0x80_0000;
    const UNITS: usize = BASE + 0x1000;

    /// Image with room for the table and `units` fake units
    fn image(units: usize) -> MockMemorySource {
        MockMemorySource::zeroed(0x1000 + units * UNIT_SPAN, BASE)
    }

    fn unit(n: usize) -> usize {
        UNITS + n * UNIT_SPAN
    }

    /// Place `items` as one chain hanging off `bucket`
    fn chain(mem: &mut MockMemorySource, bucket: usize, first: usize, items: &[FakeItem]) {
        mem.put_ptr(BASE + bucket * 8, unit(first));
        for (i, item) in items.iter().enumerate() {
            let n = first + i;
            let next = if i + 1 < items.len() { unit(n + 1) } else { 0 };
            put_item(mem, unit(n), item, next);
        }
    }

    fn read(mem: &MockMemorySource, observer: &Observer) -> Result<Inventory> {
        ItemReader::new(mem, Layout::default()).items(BASE, observer)
    }

    #[test]
    fn test_item_then_non_item() {
        let mut mem = image(2);
        let mut monster = FakeItem::new(0, 2, 0);
        monster.kind = 1;
        chain(&mut mem, 0, 0, &[FakeItem::new(589, 1, 2), monster]);

        let inv = read(&mem, &Observer::default()).unwrap();
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.all_items[0].unit_id, UnitId(1));
        assert_eq!(inv.belt().len(), 1);
    }

    #[test]
    fn test_non_item_still_links_chain() {
        let mut mem = image(3);
        let mut player = FakeItem::new(0, 7, 0);
        player.kind = 0;
        chain(
            &mut mem,
            5,
            0,
            &[player, FakeItem::new(589, 8, 1), FakeItem::new(603, 9, 0)],
        );

        let inv = read(&mem, &Observer::default()).unwrap();
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.equipped()[0].unit_id, UnitId(8));
        assert_eq!(inv.inventory()[0].unit_id, UnitId(9));
    }

    #[test]
    fn test_every_item_in_one_bucket() {
        let mut mem = image(8);
        let mut vendor = FakeItem::new(589, 1, 0);
        vendor.flags |= 0x2000;
        let mut stashed = FakeItem::new(589, 2, 0);
        stashed.page = 3;
        chain(
            &mut mem,
            0,
            0,
            &[
                vendor,
                stashed,
                FakeItem::new(589, 3, 0),
                FakeItem::new(589, 4, 1),
                FakeItem::new(589, 5, 2),
                FakeItem::new(589, 6, 3),
                FakeItem::new(589, 7, 4), // cursor
                FakeItem::new(589, 8, 6), // socketed
            ],
        );

        let inv = read(&mem, &Observer::default()).unwrap();
        let locations: Vec<_> = inv.all_items.iter().map(|i| (i.unit_id.0, i.location)).collect();
        assert_eq!(
            locations,
            vec![
                (1, LocationType::Shop),
                (3, LocationType::Inventory),
                (4, LocationType::Equipped),
                (5, LocationType::Belt),
                (6, LocationType::Ground),
            ]
        );
        // The stashed page 3 item and the unclassified ones are not anywhere
        for missing in [2, 7, 8] {
            assert!(inv.find_by_id(UnitId(missing)).is_none());
        }
    }

    #[test]
    fn test_buckets_in_order() {
        let mut mem = image(3);
        chain(&mut mem, 90, 0, &[FakeItem::new(589, 30, 0)]);
        chain(&mut mem, 3, 1, &[FakeItem::new(589, 10, 0), FakeItem::new(589, 20, 0)]);

        let inv = read(&mem, &Observer::default()).unwrap();
        let ids: Vec<u32> = inv.all_items.iter().map(|i| i.unit_id.0).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_ground_items_last_nearest_first() {
        let mut mem = image(4);
        chain(
            &mut mem,
            0,
            0,
            &[
                FakeItem::new(589, 1, 3).at(110, 100),
                FakeItem::new(589, 2, 0),
                FakeItem::new(589, 3, 3).at(101, 100),
                FakeItem::new(589, 4, 5).at(100, 105),
            ],
        );

        let inv = read(&mem, &Observer::at(Position::new(100, 100))).unwrap();
        let ids: Vec<u32> = inv.all_items.iter().map(|i| i.unit_id.0).collect();
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_ground_ties_keep_scan_order() {
        let mut mem = image(2);
        chain(
            &mut mem,
            0,
            0,
            &[
                FakeItem::new(589, 1, 3).at(13, 14),
                FakeItem::new(589, 2, 3).at(14, 13),
            ],
        );
        let inv = read(&mem, &Observer::at(Position::new(10, 10))).unwrap();
        let ids: Vec<u32> = inv.ground().iter().map(|i| i.unit_id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_hovered_item_marked() {
        let mut mem = image(2);
        chain(&mut mem, 0, 0, &[FakeItem::new(589, 1, 0), FakeItem::new(589, 2, 0)]);
        let observer = Observer::default().with_hovered(Some(HoveredUnit {
            kind: 4,
            unit_id: UnitId(2),
        }));

        let inv = read(&mem, &observer).unwrap();
        let hovered: Vec<u32> = inv
            .all_items
            .iter()
            .filter(|i| i.hovered)
            .map(|i| i.unit_id.0)
            .collect();
        assert_eq!(hovered, vec![2]);
    }

    #[test]
    fn test_read_failure_fails_snapshot() {
        let mut mem = image(2);
        chain(&mut mem, 0, 0, &[FakeItem::new(589, 1, 0), FakeItem::new(589, 2, 0)]);
        // Second item's stat list points nowhere
        let stat_list = unit(1) + Layout::default().unit.stat_list.offset;
        mem.put_ptr(stat_list, 0x10);

        assert!(matches!(
            read(&mem, &Observer::default()),
            Err(Error::Memory(_))
        ));
    }

    #[test]
    fn test_unreadable_table() {
        let mem = image(0);
        let result = ItemReader::new(&mem, Layout::default()).items(0x1000, &Observer::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_table() {
        let mem = image(0);
        assert!(read(&mem, &Observer::default()).unwrap().is_empty());
    }

    #[test]
    fn test_self_loop_terminates() {
        let mut mem = image(1);
        mem.put_ptr(BASE, unit(0));
        put_item(&mut mem, unit(0), &FakeItem::new(589, 1, 0), unit(0));

        let inv = read(&mem, &Observer::default()).unwrap();
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_stats_reach_items() {
        let mut mem = image(1);
        let mut ring = FakeItem::new(603, 1, 0);
        ring.base_stats = vec![(80, 7), (7, 20 << 8)];
        ring.extended_stats = vec![(80, 12)];
        chain(&mut mem, 0, 0, &[ring]);

        let inv = read(&mem, &Observer::default()).unwrap();
        let item = &inv.all_items[0];
        assert_eq!(item.stat(StatId::MAGIC_FIND), Some(12));
        assert_eq!(item.stat(StatId::MAX_LIFE), Some(20));
        assert_eq!(item.base_stats.get(&StatId::MAGIC_FIND), Some(&7));
    }

    struct NamedCatalog(ItemDescriptor);

    impl ItemCatalog for NamedCatalog {
        fn describe(&self, _id: u32) -> &ItemDescriptor {
            &self.0
        }
    }

    struct Raw;

    impl StatResolver for Raw {
        fn resolve(&self, id: u16, raw: u32) -> (StatId, i32) {
            (StatId(id), raw as i32)
        }
    }

    #[test]
    fn test_custom_lookups() {
        let mut mem = image(1);
        let mut item = FakeItem::new(589, 1, 0);
        item.base_stats = vec![(7, 20 << 8)];
        chain(&mut mem, 0, 0, &[item]);

        let catalog = NamedCatalog(ItemDescriptor {
            name: "Test Item",
            ..UNKNOWN_ITEM.clone()
        });
        let inv = ItemReader::new(&mem, Layout::default())
            .with_catalog(&catalog)
            .with_stat_resolver(&Raw)
            .items(BASE, &Observer::default())
            .unwrap();

        assert_eq!(inv.all_items[0].name, "Test Item");
        assert_eq!(inv.all_items[0].stat(StatId::MAX_LIFE), Some(20 << 8));
    }

    #[test]
    fn test_item_table_address() {
        let mem = image(0);
        let reader = ItemReader::new(&mem, Layout::default());
        assert_eq!(reader.item_table(0x1000), 0x1000 + 4 * 1024);
    }

    #[test]
    fn test_read_hovered() {
        let mut mem = image(0);
        let hover = BASE + 0x800;
        let reader_mem = |mem: &MockMemorySource| {
            ItemReader::new(mem, Layout::default())
                .read_hovered(hover)
                .unwrap()
        };
        assert_eq!(reader_mem(&mem), None);

        mem.put_u16(hover, 1);
        mem.put_u32(hover + 4, 4);
        mem.put_u32(hover + 8, 321);
        assert_eq!(
            reader_mem(&mem),
            Some(HoveredUnit {
                kind: 4,
                unit_id: UnitId(321)
            })
        );
    }
}
