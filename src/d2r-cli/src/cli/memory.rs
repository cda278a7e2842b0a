//! Memory command CLI definitions

use clap::Subcommand;
use d2r::LocationType;

#[derive(Subcommand)]
pub enum MemoryAction {
    /// Show info about the attached process
    Info,

    /// Decode and list the current items
    Items {
        /// Player X, used to order ground items
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        x: i32,

        /// Player Y, used to order ground items
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        y: i32,

        /// Only show these locations (shop, inventory, equipped, belt, ground)
        #[arg(short, long)]
        location: Vec<LocationType>,

        /// Show stats for each item
        #[arg(short, long)]
        stats: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print grid occupancy
    ///
    /// Without dimensions this is the 4x10 inventory grid. With them, the
    /// grid is built from the chosen locations.
    Matrix {
        /// Grid rows
        #[arg(long, requires = "width")]
        height: Option<i32>,

        /// Grid columns
        #[arg(long, requires = "height")]
        width: Option<i32>,

        /// Locations to place on a sized grid
        #[arg(short, long, default_value = "inventory")]
        location: Vec<LocationType>,
    },

    /// Read raw bytes from game memory
    Read {
        /// Memory address (hex, e.g. 0x7f1234567890)
        address: String,

        /// Number of bytes to read
        #[arg(short, long, default_value = "64")]
        size: usize,
    },
}
