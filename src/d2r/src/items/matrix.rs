//! Grid occupancy
//!
//! A cell is occupied when some item's footprint covers it. The footprint is
//! the descriptor's width and height anchored at the item's position. Cells
//! past the grid edge are clipped, and overlaps are not reported.

use super::model::Item;
use crate::error::{Error, Result};
use crate::reference::ItemCatalog;

pub const INVENTORY_ROWS: usize = 4;
pub const INVENTORY_COLUMNS: usize = 10;

/// Fixed size inventory grid, indexed `[row][column]`
pub type InventoryMatrix = [[bool; INVENTORY_COLUMNS]; INVENTORY_ROWS];

/// Cells covered by an item, as (row, column), before clipping
fn footprint(item: &Item, catalog: &dyn ItemCatalog) -> impl Iterator<Item = (i32, i32)> {
    let desc = item.desc(catalog);
    let (x, y) = (item.position.x, item.position.y);
    let (width, height) = (desc.width, desc.height);
    (0..height).flat_map(move |j| (0..width).map(move |k| (y + j, x + k)))
}

fn cell(row: i32, column: i32, rows: usize, columns: usize) -> Option<(usize, usize)> {
    let row = usize::try_from(row).ok().filter(|r| *r < rows)?;
    let column = usize::try_from(column).ok().filter(|c| *c < columns)?;
    Some((row, column))
}

/// Occupancy of the 4x10 inventory grid
pub fn inventory_matrix<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    catalog: &dyn ItemCatalog,
) -> InventoryMatrix {
    let mut grid = [[false; INVENTORY_COLUMNS]; INVENTORY_ROWS];
    for item in items {
        for (row, column) in footprint(item, catalog) {
            if let Some((r, c)) = cell(row, column, INVENTORY_ROWS, INVENTORY_COLUMNS) {
                grid[r][c] = true;
            }
        }
    }
    grid
}

/// Occupancy of a caller-sized grid, `height` rows by `width` columns
pub fn stash_matrix<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    catalog: &dyn ItemCatalog,
    height: i32,
    width: i32,
) -> Result<Vec<Vec<bool>>> {
    if height <= 0 || width <= 0 {
        return Err(Error::InvalidDimensions { height, width });
    }
    let (rows, columns) = (height as usize, width as usize);

    let mut grid = vec![vec![false; columns]; rows];
    for item in items {
        for (row, column) in footprint(item, catalog) {
            if let Some((r, c)) = cell(row, column, rows, columns) {
                grid[r][c] = true;
            }
        }
    }
    Ok(grid)
}

/// Render a grid as rows of `#` and `.`
pub fn render<R: AsRef<[bool]>>(grid: &[R]) -> String {
    let mut out = String::new();
    for row in grid {
        for occupied in row.as_ref() {
            out.push(if *occupied { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
