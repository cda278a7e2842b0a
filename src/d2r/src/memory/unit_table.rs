//! Unit Table Walking
//!
//! The unit table is a fixed array of bucket heads, each the start of a
//! singly linked chain threaded through the units themselves. Chains mix
//! unit kinds, so every node is visited and the caller decides what to do
//! with it.

use std::collections::HashSet;

use super::layout::Layout;
use super::source::MemorySource;
use crate::error::Result;

/// Upper bound on nodes followed in one chain
pub const MAX_CHAIN_NODES: usize = 4096;

/// Unit kind discriminant (`UnitAny::dwType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Player = 0,
    Monster = 1,
    Object = 2,
    Missile = 3,
    Item = 4,
    Tile = 5,
}

impl UnitKind {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Player),
            1 => Some(Self::Monster),
            2 => Some(Self::Object),
            3 => Some(Self::Missile),
            4 => Some(Self::Item),
            5 => Some(Self::Tile),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Address of the bucket array for one unit kind
pub fn unit_table_for(tables_base: usize, kind: UnitKind, layout: &Layout) -> usize {
    tables_base + kind as usize * layout.table.kind_stride
}

/// A raw unit record and where it was read from
#[derive(Debug, Clone)]
pub struct UnitNode {
    pub address: usize,
    pub bucket: usize,
    pub record: Vec<u8>,
}

/// Counters from one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub nodes: usize,
    pub broken_chains: usize,
}

/// Visit every node of every chain in the table at `table_base`
///
/// Each node's record (`layout.unit.size` bytes) is handed to `visit`, then
/// the walk advances through the next pointer. A read failure anywhere ends
/// the walk with that error. A chain that revisits a node or exceeds
/// [`MAX_CHAIN_NODES`] is cut short with a warning.
pub fn walk_unit_table<F>(
    source: &dyn MemorySource,
    layout: &Layout,
    table_base: usize,
    visit: F,
) -> Result<WalkStats>
where
    F: FnMut(&UnitNode) -> Result<()>,
{
    walk_unit_table_with_cap(source, layout, table_base, MAX_CHAIN_NODES, visit)
}

/// [`walk_unit_table`] with a custom per-chain node limit
pub fn walk_unit_table_with_cap<F>(
    source: &dyn MemorySource,
    layout: &Layout,
    table_base: usize,
    max_chain_nodes: usize,
    mut visit: F,
) -> Result<WalkStats>
where
    F: FnMut(&UnitNode) -> Result<()>,
{
    let slots = source.read_bytes(table_base, layout.table.size())?;
    let slot_width = layout.table.slot.width.size();

    let mut stats = WalkStats::default();
    let mut seen = HashSet::new();

    for bucket in 0..layout.table.buckets {
        let slot = layout.table.slot;
        let mut ptr = super::read_uint(&slots, bucket * slot_width + slot.offset, slot.width)?
            as usize;
        let mut depth = 0;

        while ptr != 0 {
            if !seen.insert(ptr) {
                tracing::warn!(bucket, address = ptr, "unit chain loops back, stopping");
                stats.broken_chains += 1;
                break;
            }
            if depth == max_chain_nodes {
                tracing::warn!(bucket, depth, "unit chain too long, stopping");
                stats.broken_chains += 1;
                break;
            }

            let node = UnitNode {
                address: ptr,
                bucket,
                record: source.read_bytes(ptr, layout.unit.size)?,
            };
            tracing::trace!(bucket, address = format_args!("{:#x}", ptr), "unit node");
            visit(&node)?;

            stats.nodes += 1;
            depth += 1;
            ptr = source.read_uint(ptr + layout.unit.next.offset, layout.unit.next.width)? as usize;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemorySource;

    const BASE: usize = 0x10_0000;

    fn image() -> MockMemorySource {
        MockMemorySource::zeroed(0x4000, BASE)
    }

    /// Link a node into memory with the given kind and next pointer
    fn put_node(mem: &mut MockMemorySource, layout: &Layout, at: usize, kind: u32, next: usize) {
        mem.put_u32(at + layout.unit.kind.offset, kind);
        mem.put_ptr(at + layout.unit.next.offset, next);
    }

    #[test]
    fn test_unit_kind_codes() {
        assert_eq!(UnitKind::from_code(4), Some(UnitKind::Item));
        assert_eq!(UnitKind::from_code(0), Some(UnitKind::Player));
        assert_eq!(UnitKind::from_code(6), None);
        assert_eq!(UnitKind::Missile.code(), 3);
    }

    #[test]
    fn test_unit_table_for_kind() {
        let layout = Layout::default();
        assert_eq!(unit_table_for(0x1000, UnitKind::Player, &layout), 0x1000);
        assert_eq!(unit_table_for(0x1000, UnitKind::Item, &layout), 0x1000 + 4 * 1024);
    }

    #[test]
    fn test_empty_table_visits_nothing() {
        let layout = Layout::default();
        let mem = image();
        let mut visited = 0;
        let stats = walk_unit_table(&mem, &layout, BASE, |_| {
            visited += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(visited, 0);
        assert_eq!(stats, WalkStats::default());
    }

    #[test]
    fn test_follows_chain_in_order() {
        let layout = Layout::default();
        let mut mem = image();
        let (a, b, c) = (BASE + 0x1000, BASE + 0x1200, BASE + 0x1400);

        mem.put_ptr(BASE + 3 * 8, a);
        put_node(&mut mem, &layout, a, 4, b);
        put_node(&mut mem, &layout, b, 1, c);
        put_node(&mut mem, &layout, c, 4, 0);

        let mut order = Vec::new();
        let stats = walk_unit_table(&mem, &layout, BASE, |node| {
            order.push((node.bucket, node.address));
            Ok(())
        })
        .unwrap();

        assert_eq!(order, vec![(3, a), (3, b), (3, c)]);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.broken_chains, 0);
    }

    #[test]
    fn test_visits_buckets_in_index_order() {
        let layout = Layout::default();
        let mut mem = image();
        let (a, b) = (BASE + 0x1000, BASE + 0x1200);

        mem.put_ptr(BASE + 127 * 8, a);
        mem.put_ptr(BASE, b);
        put_node(&mut mem, &layout, a, 4, 0);
        put_node(&mut mem, &layout, b, 4, 0);

        let mut buckets = Vec::new();
        walk_unit_table(&mem, &layout, BASE, |node| {
            buckets.push(node.bucket);
            Ok(())
        })
        .unwrap();

        assert_eq!(buckets, vec![0, 127]);
    }

    #[test]
    fn test_self_referencing_chain_terminates() {
        let layout = Layout::default();
        let mut mem = image();
        let a = BASE + 0x1000;

        mem.put_ptr(BASE, a);
        put_node(&mut mem, &layout, a, 4, a);

        let mut visited = 0;
        let stats = walk_unit_table(&mem, &layout, BASE, |_| {
            visited += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(visited, 1);
        assert_eq!(stats.broken_chains, 1);
    }

    #[test]
    fn test_two_node_cycle_terminates() {
        let layout = Layout::default();
        let mut mem = image();
        let (a, b) = (BASE + 0x1000, BASE + 0x1200);

        mem.put_ptr(BASE + 5 * 8, a);
        put_node(&mut mem, &layout, a, 4, b);
        put_node(&mut mem, &layout, b, 4, a);

        let mut order = Vec::new();
        let stats = walk_unit_table(&mem, &layout, BASE, |node| {
            order.push(node.address);
            Ok(())
        })
        .unwrap();

        assert_eq!(order, vec![a, b]);
        assert_eq!(stats.nodes, 2);
        assert_eq!(stats.broken_chains, 1);
    }

    #[test]
    fn test_long_chain_is_capped() {
        let layout = Layout::default();
        let mut mem = image();
        let (a, b, c) = (BASE + 0x1000, BASE + 0x1200, BASE + 0x1400);

        mem.put_ptr(BASE, a);
        put_node(&mut mem, &layout, a, 4, b);
        put_node(&mut mem, &layout, b, 4, c);
        put_node(&mut mem, &layout, c, 4, 0);

        let mut order = Vec::new();
        let stats = walk_unit_table_with_cap(&mem, &layout, BASE, 2, |node| {
            order.push(node.address);
            Ok(())
        })
        .unwrap();

        assert_eq!(order, vec![a, b]);
        assert_eq!(stats.broken_chains, 1);

        // The cap is per chain, so a second bucket still gets walked
        mem.put_ptr(BASE + 8, BASE + 0x1600);
        put_node(&mut mem, &layout, BASE + 0x1600, 4, 0);
        let stats = walk_unit_table_with_cap(&mem, &layout, BASE, 2, |_| Ok(())).unwrap();
        assert_eq!(stats.nodes, 3);
    }

    #[test]
    fn test_unreadable_node_fails_walk() {
        let layout = Layout::default();
        let mut mem = image();
        mem.put_ptr(BASE, 0xdead_0000);

        let result = walk_unit_table(&mem, &layout, BASE, |_| Ok(()));
        assert!(matches!(result, Err(crate::Error::Memory(_))));
    }

    #[test]
    fn test_unreadable_table_fails_walk() {
        let layout = Layout::default();
        let mem = image();
        let result = walk_unit_table(&mem, &layout, BASE + 0x3F00, |_| Ok(()));
        assert!(result.is_err());
    }
}
