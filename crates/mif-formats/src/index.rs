//! MIF index table parsing and validation
//!
//! The index table follows the 16-byte header directly: one 16-byte slot per
//! logical entry, each holding four little-endian u32 words `(a, b, c, d)`.
//! `(c, d)` duplicate `(a, b)`; a slot is only valid when both pairs agree,
//! and a slot with `b == 0 && d == 0` is a degenerate placeholder that is
//! skipped rather than rejected.

use crate::error::{MifError, Result};
use crate::header::{HEADER_SIZE, MifHeader};
use binrw::{BinRead, io::Cursor};

/// Size of one index slot in bytes
pub const INDEX_SLOT_SIZE: usize = 16;

/// Raw on-disk index slot
///
/// `(a, b)` resolve to `(offset, length)` once the redundancy check against
/// `(c, d)` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(little)]
pub struct IndexSlot {
    /// Asset region offset into the container
    pub a: u32,
    /// Asset payload length in bytes
    pub b: u32,
    /// Redundant copy of `a`
    pub c: u32,
    /// Redundant copy of `b`
    pub d: u32,
}

impl IndexSlot {
    /// Check if this is a degenerate placeholder slot
    pub fn is_degenerate(&self) -> bool {
        self.b == 0 && self.d == 0
    }
}

/// One validated index entry, resolved to an asset location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Position of the slot in the on-disk index table
    pub slot: usize,
    /// Asset region offset into the container
    pub offset: u32,
    /// Asset payload length in bytes
    pub length: u32,
}

/// Validated MIF index table
///
/// Entries appear in on-disk index order with degenerate slots removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MifIndex {
    /// Surviving entries in index order
    pub entries: Vec<IndexEntry>,
}

impl MifIndex {
    /// Parse and validate the index table of a container
    ///
    /// Validation is fail-fast in slot order: a bad slot at position `n`
    /// guarantees every slot before `n` passed.
    ///
    /// # Errors
    /// - [`MifError::Truncated`] when the buffer cannot hold
    ///   `16 + 16 * entry_count` bytes
    /// - [`MifError::InvalidIndexEntry`] when a slot's redundancy pairs
    ///   disagree
    /// - [`MifError::IndexOutOfRange`] when `offset + length` exceeds the
    ///   buffer
    pub fn parse(data: &[u8], header: &MifHeader) -> Result<Self> {
        let entry_count = header.entry_count() as usize;

        let table_end = HEADER_SIZE + INDEX_SLOT_SIZE * entry_count;
        if data.len() < table_end {
            return Err(MifError::Truncated {
                expected: table_end,
                actual: data.len(),
            });
        }

        let mut cursor = Cursor::new(&data[HEADER_SIZE..table_end]);
        let mut entries = Vec::with_capacity(entry_count);

        for n in 0..entry_count {
            let slot = IndexSlot::read(&mut cursor)?;

            if slot.is_degenerate() {
                continue;
            }

            if slot.a != slot.c || slot.b != slot.d {
                return Err(MifError::InvalidIndexEntry(n));
            }

            if u64::from(slot.a) + u64::from(slot.b) > data.len() as u64 {
                return Err(MifError::IndexOutOfRange(n));
            }

            entries.push(IndexEntry {
                slot: n,
                offset: slot.a,
                length: slot.b,
            });
        }

        Ok(Self { entries })
    }

    /// Number of surviving entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no surviving entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
