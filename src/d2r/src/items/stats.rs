//! Stat list decoding
//!
//! Items carry two stat arrays, base and extended, each a run of fixed-size
//! entries. Both are decoded and then merged into one attribute map.

use serde::Serialize;

use super::model::Stats;
use crate::error::Result;
use crate::memory::layout::{StatEntryLayout, StatListLayout};
use crate::memory::MemorySource;
use crate::reference::{StatId, StatResolver};

/// One resolved stat record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub id: StatId,
    pub value: i32,
}

/// Count and address of one stat array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatArray {
    pub count: usize,
    pub address: usize,
}

impl StatArray {
    pub fn new(count: usize, address: usize) -> Self {
        Self { count, address }
    }

    /// Whether the count is inside the accepted bound (exclusive on both ends)
    pub fn is_decodable(&self, layout: &StatEntryLayout) -> bool {
        self.count > 0 && self.count < layout.max_count
    }
}

/// Both arrays of a stat list header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatListHeader {
    pub base: StatArray,
    pub extended: StatArray,
}

impl StatListHeader {
    pub fn parse(buf: &[u8], layout: &StatListLayout) -> Result<Self> {
        Ok(Self {
            base: StatArray::new(
                layout.base_count.read(buf)? as usize,
                layout.base_ptr.read_ptr(buf)?,
            ),
            extended: StatArray::new(
                layout.extended_count.read(buf)? as usize,
                layout.extended_ptr.read_ptr(buf)?,
            ),
        })
    }
}

/// Decoded base and extended sequences, kept apart and in read order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatLists {
    pub base: Vec<StatEntry>,
    pub extended: Vec<StatEntry>,
}

impl StatLists {
    /// Base then extended; a later entry for the same stat replaces the earlier one
    pub fn merged(&self) -> Stats {
        collect(self.base.iter().chain(&self.extended))
    }

    pub fn base_map(&self) -> Stats {
        collect(&self.base)
    }

    pub fn extended_map(&self) -> Stats {
        collect(&self.extended)
    }
}

fn collect<'a>(entries: impl IntoIterator<Item = &'a StatEntry>) -> Stats {
    let mut stats = Stats::new();
    for entry in entries {
        stats.insert(entry.id, entry.value);
    }
    stats
}

/// Decode `count` entries from an already-read buffer
pub fn decode_entries(
    buf: &[u8],
    count: usize,
    layout: &StatEntryLayout,
    resolver: &dyn StatResolver,
) -> Result<Vec<StatEntry>> {
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let record = &buf[i * layout.stride..];
        let raw_id = layout.id.read(record)? as u16;
        let raw_value = layout.value.read_u32(record)?;
        let (id, value) = resolver.resolve(raw_id, raw_value);
        entries.push(StatEntry { id, value });
    }
    Ok(entries)
}

/// Read and decode one stat array
///
/// Arrays whose count is zero or at the cap contribute nothing. The cap
/// guards against garbage counts; it is not a limit on real items.
pub fn read_stat_array(
    source: &dyn MemorySource,
    array: StatArray,
    layout: &StatEntryLayout,
    resolver: &dyn StatResolver,
) -> Result<Vec<StatEntry>> {
    if !array.is_decodable(layout) {
        if array.count != 0 {
            tracing::debug!(count = array.count, "skipping stat array with implausible count");
        }
        return Ok(Vec::new());
    }

    let buf = source.read_bytes(array.address, array.count * layout.stride)?;
    decode_entries(&buf, array.count, layout, resolver)
}

/// Read and decode both arrays named by a header
pub fn read_stat_lists(
    source: &dyn MemorySource,
    header: StatListHeader,
    layout: &StatEntryLayout,
    resolver: &dyn StatResolver,
) -> Result<StatLists> {
    Ok(StatLists {
        base: read_stat_array(source, header.base, layout, resolver)?,
        extended: read_stat_array(source, header.extended, layout, resolver)?,
    })
}
