//! Field decoding
//!
//! Little-endian unsigned integer extraction from raw record buffers.

use byteorder::{ByteOrder, LE};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecodeError;

/// Width class of an unsigned field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
}

impl Width {
    /// Size in bytes
    pub const fn size(self) -> usize {
        match self {
            Width::U8 => 1,
            Width::U16 => 2,
            Width::U32 => 4,
            Width::U64 => 8,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::U8 => write!(f, "u8"),
            Width::U16 => write!(f, "u16"),
            Width::U32 => write!(f, "u32"),
            Width::U64 => write!(f, "u64"),
        }
    }
}

/// Read an unsigned integer of the given width at `offset`
pub fn read_uint(buf: &[u8], offset: usize, width: Width) -> Result<u64, DecodeError> {
    let end = offset
        .checked_add(width.size())
        .filter(|&end| end <= buf.len())
        .ok_or(DecodeError::FieldOutOfBounds {
            offset,
            width,
            len: buf.len(),
        })?;
    let bytes = &buf[offset..end];

    Ok(match width {
        Width::U8 => u64::from(bytes[0]),
        Width::U16 => u64::from(LE::read_u16(bytes)),
        Width::U32 => u64::from(LE::read_u32(bytes)),
        Width::U64 => LE::read_u64(bytes),
    })
}

/// A named field: where it sits in a record and how wide it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub offset: usize,
    pub width: Width,
}

impl Field {
    pub const fn new(offset: usize, width: Width) -> Self {
        Self { offset, width }
    }

    /// Last byte (exclusive) this field touches
    pub const fn end(&self) -> usize {
        self.offset + self.width.size()
    }

    pub fn read(&self, buf: &[u8]) -> Result<u64, DecodeError> {
        read_uint(buf, self.offset, self.width)
    }

    /// Read a field that holds an address
    pub fn read_ptr(&self, buf: &[u8]) -> Result<usize, DecodeError> {
        self.read(buf).map(|v| v as usize)
    }

    /// Read a field whose value fits in 32 bits (all narrower widths do)
    pub fn read_u32(&self, buf: &[u8]) -> Result<u32, DecodeError> {
        self.read(buf).map(|v| v as u32)
    }
}
