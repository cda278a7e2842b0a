//! Error types
//!
//! A snapshot either decodes completely or fails with one of these. There is
//! no partial result: any read failure aborts the whole pass.

use crate::memory::Width;

/// Failure of the byte-range read primitive
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("Failed to read {size} bytes at {address:#x}: {reason}")]
    Unreadable {
        address: usize,
        size: usize,
        reason: String,
    },

    #[error("Short read at {address:#x}: expected {expected} bytes, got {actual}")]
    ShortRead {
        address: usize,
        expected: usize,
        actual: usize,
    },
}

/// Failure to pull a field out of an already-read buffer
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Field at offset {offset:#x} ({width}) is outside a {len} byte buffer")]
    FieldOutOfBounds {
        offset: usize,
        width: Width,
        len: usize,
    },
}

/// Top-level error for snapshot decoding and grid queries
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid stash dimensions: height={height}, width={width}")]
    InvalidDimensions { height: i32, width: i32 },

    #[error("Invalid layout file: {0}")]
    Layout(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
