//! Live process access for D2R
//!
//! ## Module Structure
//!
//! - `process` - Attach to the game and read its memory
//! - `region` - /proc/pid/maps entries

mod process;
mod region;

pub use process::D2rProcess;
pub use region::MemoryRegion;
