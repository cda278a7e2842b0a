//! Memory Source Trait
//!
//! Core abstraction for reading memory from a live process or a test image.

use crate::error::MemoryError;
use crate::memory::field::{read_uint, Width};

/// Trait for reading memory from an external address space
///
/// Implementations must return exactly `size` bytes or fail; there are no
/// partial reads.
pub trait MemorySource {
    /// Read bytes from a virtual address
    fn read_bytes(&self, address: usize, size: usize) -> Result<Vec<u8>, MemoryError>;

    /// Read an unsigned integer of the given width
    fn read_uint(&self, address: usize, width: Width) -> Result<u64, MemoryError> {
        let bytes = self.read_bytes(address, width.size())?;
        read_uint(&bytes, 0, width).map_err(|_| MemoryError::ShortRead {
            address,
            expected: width.size(),
            actual: bytes.len(),
        })
    }

    /// Read a pointer (usize) from memory
    fn read_ptr(&self, address: usize) -> Result<usize, MemoryError> {
        self.read_uint(address, Width::U64).map(|v| v as usize)
    }
}

impl<T: MemorySource + ?Sized> MemorySource for &T {
    fn read_bytes(&self, address: usize, size: usize) -> Result<Vec<u8>, MemoryError> {
        (**self).read_bytes(address, size)
    }
}
