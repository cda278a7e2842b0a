//! Item snapshot command handlers

use anyhow::{Context, Result};
use d2r::items::matrix::render;
use d2r::reference::StaticCatalog;
use d2r::{Inventory, Item, ItemReader, Layout, LocationType, MemorySource, Observer, Position};

use crate::config::Config;

/// Read one snapshot using the configured offsets
///
/// `module_base` is where the game module is loaded; both offsets in the
/// config are relative to it.
pub fn read_snapshot(
    source: &dyn MemorySource,
    layout: Layout,
    module_base: usize,
    config: &Config,
    position: Position,
) -> Result<Inventory> {
    let offset = config.unit_table_offset.context(
        "Unit table offset not configured. Run: d2r configure --unit-table-offset <OFFSET>",
    )?;

    let reader = ItemReader::new(source, layout);
    let table = reader.item_table(module_base + offset);

    let hovered = match config.hover_offset {
        Some(hover) => reader
            .read_hovered(module_base + hover)
            .context("Failed to read hover state")?,
        None => None,
    };
    let observer = Observer::at(position).with_hovered(hovered);

    reader
        .items(table, &observer)
        .with_context(|| format!("Failed to read items from table at {:#x}", table))
}

/// One line per item
pub fn format_item(item: &Item) -> String {
    let mut flags = Vec::new();
    if item.is_ethereal() {
        flags.push("eth");
    }
    if !item.is_identified() {
        flags.push("unid");
    }
    if item.is_runeword() {
        flags.push("rw");
    }
    if item.hovered {
        flags.push("hovered");
    }

    let mut line = format!(
        "  [{:>10}] {:<28} {:<12} ({}, {})",
        item.unit_id.0,
        item.name,
        item.quality.to_string(),
        item.position.x,
        item.position.y
    );
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}

fn format_stats(item: &Item) -> Vec<String> {
    item.stats
        .iter()
        .map(|(id, value)| format!("      {:<24} {}", id.to_string(), value))
        .collect()
}

/// Listing grouped by location, in a fixed location order
pub fn format_inventory(inventory: &Inventory, locations: &[LocationType], stats: bool) -> String {
    let shown: &[LocationType] = if locations.is_empty() {
        &LocationType::ALL
    } else {
        locations
    };

    let mut out = String::new();
    for location in LocationType::ALL.iter().filter(|l| shown.contains(*l)) {
        let items = inventory.by_location(&[*location]);
        out.push_str(&format!("{} ({}):\n", location, items.len()));
        for item in items {
            out.push_str(&format_item(item));
            out.push('\n');
            if stats {
                for line in format_stats(item) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Handle the Items command
pub fn handle_items(
    source: &dyn MemorySource,
    module_base: usize,
    config: &Config,
    position: Position,
    locations: &[LocationType],
    stats: bool,
    json: bool,
) -> Result<()> {
    let inventory = read_snapshot(source, config.layout()?, module_base, config, position)?;

    if json {
        let items: Vec<&Item> = if locations.is_empty() {
            inventory.all_items.iter().collect()
        } else {
            inventory.by_location(locations)
        };
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", format_inventory(&inventory, locations, stats));
    }

    Ok(())
}

/// Handle the Matrix command
pub fn handle_matrix(
    source: &dyn MemorySource,
    module_base: usize,
    config: &Config,
    size: Option<(i32, i32)>,
    locations: &[LocationType],
) -> Result<()> {
    let inventory = read_snapshot(
        source,
        config.layout()?,
        module_base,
        config,
        Position::default(),
    )?;

    let grid = match size {
        Some((height, width)) => {
            render(&inventory.stash_matrix(locations, &StaticCatalog, height, width)?)
        }
        None => render(&inventory.matrix(&StaticCatalog)),
    };
    print!("{}", grid);

    Ok(())
}
