//! Boundary-aligned chunk planning

use core::ops::Range;

use crate::chip::PAGE_SIZE;

/// One piece of a split transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Flash address of the first byte
    pub addr: u32,
    /// Offset of the first byte within the caller's buffer
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

/// Splits `[addr, addr + len)` into pieces that never cross a multiple of
/// `boundary`
///
/// The first piece runs up to the next boundary, the following ones are
/// `boundary` bytes long and the last one holds the remainder.
#[derive(Debug, Clone)]
pub struct BoundaryChunks {
    addr: u32,
    offset: usize,
    remaining: usize,
    boundary: u32,
}

impl BoundaryChunks {
    /// `boundary` must be non-zero
    pub fn new(addr: u32, len: usize, boundary: u32) -> Self {
        debug_assert!(boundary > 0);
        Self {
            addr,
            offset: 0,
            remaining: len,
            boundary,
        }
    }
}

impl Iterator for BoundaryChunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.remaining == 0 {
            return None;
        }
        let room = (self.boundary - self.addr % self.boundary) as usize;
        let len = self.remaining.min(room);
        let chunk = Chunk {
            addr: self.addr,
            offset: self.offset,
            len,
        };
        self.addr = self.addr.wrapping_add(len as u32);
        self.offset += len;
        self.remaining -= len;
        Some(chunk)
    }
}

/// Page-program chunks for a write of `len` bytes at `addr`
pub fn page_chunks(addr: u32, len: usize) -> BoundaryChunks {
    BoundaryChunks::new(addr, len, PAGE_SIZE)
}

/// Indexes of all sectors overlapping `[addr, addr + len)`
pub fn sector_span(addr: u32, len: u32, sector_size: u32) -> Range<u32> {
    if len == 0 {
        return 0..0;
    }
    let first = addr / sector_size;
    let last = ((addr as u64 + len as u64 - 1) / sector_size as u64) as u32;
    first..last + 1
}
