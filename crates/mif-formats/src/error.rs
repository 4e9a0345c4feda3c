//! Error types for MIF container decoding

use thiserror::Error;

/// MIF decoding result type
pub type Result<T> = std::result::Result<T, MifError>;

/// Error types for MIF container decoding
///
/// Every variant is fatal to the container being decoded; malformed input is
/// not self-correcting, so there are no retry paths. Degenerate index slots
/// (both redundancy fields zero) are skipped silently and never produce an
/// error.
#[derive(Debug, Error)]
pub enum MifError {
    /// Input hit the configured maximum container size
    #[error("file too large: {0} bytes (limit {limit})", limit = crate::MAX_MIF_SIZE)]
    FileTooLarge(usize),

    /// Container signature mismatch
    #[error("not a MIF file: bad magic {found:02x?}, expected {expected:02x?}")]
    InvalidMagic {
        /// Expected magic bytes (`"B##4"`)
        expected: [u8; 4],
        /// Magic bytes actually found (zero padded when the input is shorter)
        found: [u8; 4],
    },

    /// Buffer shorter than the header or index table implies
    #[error("file too short: need {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum length the structure requires
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// Index entry redundancy fields disagree
    #[error("invalid index entry {0}")]
    InvalidIndexEntry(usize),

    /// Index entry points past the end of the container
    #[error("index {0} out of range")]
    IndexOutOfRange(usize),

    /// Asset sub-header signature mismatch
    #[error("invalid file header at offset {offset:#010x}: got {found:02x?}")]
    InvalidAssetMagic {
        /// Container offset of the asset region
        offset: u32,
        /// Signature bytes actually found
        found: [u8; 4],
    },

    /// Binary read error
    #[error("binary format error: {0}")]
    BinRead(#[from] binrw::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_entry() {
        assert_eq!(
            MifError::InvalidIndexEntry(3).to_string(),
            "invalid index entry 3"
        );
        assert_eq!(MifError::IndexOutOfRange(7).to_string(), "index 7 out of range");
    }

    #[test]
    fn test_truncated_message_carries_lengths() {
        let err = MifError::Truncated {
            expected: 16,
            actual: 10,
        };
        assert_eq!(err.to_string(), "file too short: need 16 bytes, got 10");
    }
}
