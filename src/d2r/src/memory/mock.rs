//! Mock Memory Source
//!
//! A flat byte image used to lay out fake unit tables in tests.

use byteorder::{ByteOrder, LE};

use super::MemorySource;
use crate::error::MemoryError;

/// A mock memory source backed by one contiguous buffer
pub struct MockMemorySource {
    /// Raw memory data (contiguous, starting at base_address)
    pub data: Vec<u8>,
    /// Base virtual address for the data
    pub base_address: usize,
}

impl MockMemorySource {
    /// Create a new mock with data at given base address
    pub fn new(data: Vec<u8>, base_address: usize) -> Self {
        Self { data, base_address }
    }

    /// Create a zero-filled image of `size` bytes
    pub fn zeroed(size: usize, base_address: usize) -> Self {
        Self::new(vec![0; size], base_address)
    }

    fn slot(&mut self, address: usize, size: usize) -> &mut [u8] {
        let offset = address - self.base_address;
        &mut self.data[offset..offset + size]
    }

    pub fn put_u8(&mut self, address: usize, value: u8) {
        self.slot(address, 1)[0] = value;
    }

    pub fn put_u16(&mut self, address: usize, value: u16) {
        LE::write_u16(self.slot(address, 2), value);
    }

    pub fn put_u32(&mut self, address: usize, value: u32) {
        LE::write_u32(self.slot(address, 4), value);
    }

    pub fn put_u64(&mut self, address: usize, value: u64) {
        LE::write_u64(self.slot(address, 8), value);
    }

    pub fn put_ptr(&mut self, address: usize, value: usize) {
        self.put_u64(address, value as u64);
    }
}

impl MemorySource for MockMemorySource {
    fn read_bytes(&self, address: usize, size: usize) -> Result<Vec<u8>, MemoryError> {
        if address < self.base_address {
            return Err(MemoryError::Unreadable {
                address,
                size,
                reason: format!("below base {:#x}", self.base_address),
            });
        }

        let offset = address - self.base_address;
        if offset + size > self.data.len() {
            return Err(MemoryError::Unreadable {
                address,
                size,
                reason: format!("exceeds data size {}", self.data.len()),
            });
        }

        Ok(self.data[offset..offset + size].to_vec())
    }
}
