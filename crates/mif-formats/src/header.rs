//! MIF container header validation

use crate::error::{MifError, Result};

/// Container signature at offset 0
pub const MIF_MAGIC: [u8; 4] = *b"B##4";

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = 16;

/// Maximum accepted container size (inputs at or above this are rejected)
pub const MAX_MIF_SIZE: usize = 1024 * 1024;

/// Validated view over the 16-byte MIF container header
///
/// Layout (all little-endian):
/// - bytes 0..4: magic `"B##4"`
/// - bytes 4..12: reserved, not interpreted by this decoder
/// - bytes 12..16: raw entry count (u32)
///
/// The stored count is twice the logical index entry count. This is a quirk
/// of the format, not a bug; conforming containers rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MifHeader {
    /// Raw entry count field as stored at offset 12
    pub raw_entry_count: u32,
}

impl MifHeader {
    /// Validate the container header and parse the entry count field
    ///
    /// Checks run in the same order the format demands: size cap, magic,
    /// minimum length. A buffer shorter than 4 bytes fails the magic check,
    /// not the length check.
    ///
    /// # Errors
    /// - [`MifError::FileTooLarge`] when the buffer is at or above
    ///   [`MAX_MIF_SIZE`]
    /// - [`MifError::InvalidMagic`] when the first 4 bytes are not `"B##4"`
    /// - [`MifError::Truncated`] when the buffer is shorter than 16 bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() >= MAX_MIF_SIZE {
            return Err(MifError::FileTooLarge(data.len()));
        }

        if !data.starts_with(&MIF_MAGIC) {
            let mut found = [0u8; 4];
            let len = data.len().min(4);
            found[..len].copy_from_slice(&data[..len]);
            return Err(MifError::InvalidMagic {
                expected: MIF_MAGIC,
                found,
            });
        }

        if data.len() < HEADER_SIZE {
            return Err(MifError::Truncated {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let raw_entry_count = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);

        Ok(Self { raw_entry_count })
    }

    /// Logical number of index entries (stored count halved, see type docs)
    pub fn entry_count(&self) -> u32 {
        self.raw_entry_count / 2
    }
}
