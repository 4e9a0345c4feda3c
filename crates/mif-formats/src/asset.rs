//! Asset region extraction
//!
//! Each index entry points at an asset region inside the container: a 4-byte
//! signature, a 28-byte metadata block (seven little-endian u32 words, kept
//! for reporting only), then the payload itself.

use crate::error::{MifError, Result};
use crate::index::IndexEntry;
use crate::sniff::ContentKind;
use binrw::{BinRead, io::Cursor};

/// Asset region signature at the entry offset
pub const ASSET_MAGIC: [u8; 4] = *b"C##4";

/// Size of the asset sub-header (signature plus metadata block)
pub const ASSET_HEADER_SIZE: usize = 32;

/// Raw asset sub-header preceding every payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(little)]
pub struct AssetHeader {
    /// Signature bytes, must equal `"C##4"`
    pub magic: [u8; 4],
    /// Seven metadata words; reported as diagnostics, never interpreted
    pub metadata: [u32; 7],
}

/// One decoded asset: metadata block, classification, and payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Index table slot this asset came from
    pub slot: usize,
    /// Asset region offset into the container
    pub offset: u32,
    /// Payload length as declared by the index entry
    pub length: u32,
    /// Seven uninterpreted metadata words from the sub-header
    pub metadata: [u32; 7],
    /// Content classification of the payload
    pub kind: ContentKind,
    /// Extracted payload bytes
    pub payload: Vec<u8>,
}

impl Asset {
    /// Extract one asset from the container at a validated index entry
    ///
    /// The payload length comes from the index entry; the sub-header carries
    /// no length of its own that this decoder cross-checks. The index bound
    /// covers `offset + length` but not the 32-byte sub-header, so the
    /// payload slice is clamped to the end of the buffer.
    ///
    /// # Errors
    /// - [`MifError::InvalidAssetMagic`] when the signature at `offset` is
    ///   not `"C##4"`
    /// - [`MifError::Truncated`] when the sub-header runs past the buffer
    pub fn extract(data: &[u8], entry: &IndexEntry) -> Result<Self> {
        let offset = entry.offset as usize;
        let region = data.get(offset..).unwrap_or(&[]);

        if !region.starts_with(&ASSET_MAGIC) {
            let mut found = [0u8; 4];
            let len = region.len().min(4);
            found[..len].copy_from_slice(&region[..len]);
            return Err(MifError::InvalidAssetMagic {
                offset: entry.offset,
                found,
            });
        }

        if region.len() < ASSET_HEADER_SIZE {
            return Err(MifError::Truncated {
                expected: offset + ASSET_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let mut cursor = Cursor::new(&region[..ASSET_HEADER_SIZE]);
        let header = AssetHeader::read(&mut cursor)?;

        let payload_end = region.len().min(ASSET_HEADER_SIZE + entry.length as usize);
        let payload = region[ASSET_HEADER_SIZE..payload_end].to_vec();
        let kind = ContentKind::sniff(&payload);

        Ok(Self {
            slot: entry.slot,
            offset: entry.offset,
            length: entry.length,
            metadata: header.metadata,
            kind,
            payload,
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn asset_region(metadata: [u32; 7], payload: &[u8]) -> Vec<u8> {
        let mut data = ASSET_MAGIC.to_vec();
        for word in metadata {
            data.extend_from_slice(&word.to_le_bytes());
        }
        data.extend_from_slice(payload);
        data
    }

    fn entry_at(offset: u32, length: u32) -> IndexEntry {
        IndexEntry {
            slot: 0,
            offset,
            length,
        }
    }

    #[test]
    fn test_extract_valid_asset() {
        let metadata = [1, 2, 3, 4, 5, 6, 7];
        let data = asset_region(metadata, b"<?xml payload");

        let asset =
            Asset::extract(&data, &entry_at(0, 13)).expect("Operation should succeed");

        assert_eq!(asset.metadata, metadata);
        assert_eq!(asset.payload, b"<?xml payload");
        assert_eq!(asset.kind, ContentKind::Svg);
    }

    #[test]
    fn test_extract_at_nonzero_offset() {
        let mut data = vec![0xFFu8; 48];
        data.extend_from_slice(&asset_region([0; 7], &[0xCC, 0x56, 0xFA, 0x03, 9]));

        let asset =
            Asset::extract(&data, &entry_at(48, 5)).expect("Operation should succeed");

        assert_eq!(asset.offset, 48);
        assert_eq!(asset.kind, ContentKind::SvgBinary);
        assert_eq!(asset.payload.len(), 5);
    }

    #[test]
    fn test_bad_asset_magic() {
        let mut data = asset_region([0; 7], b"abc");
        data[0] = b'X';

        let err = Asset::extract(&data, &entry_at(0, 3)).expect_err("Test operation should fail");
        match err {
            MifError::InvalidAssetMagic { offset, found } => {
                assert_eq!(offset, 0);
                assert_eq!(found, [b'X', b'#', b'#', b'4']);
            }
            other => panic!("Expected InvalidAssetMagic, got {other:?}"),
        }
    }

    #[test]
    fn test_sub_header_past_end_of_buffer() {
        // Magic present, metadata block cut off.
        let mut data = ASSET_MAGIC.to_vec();
        data.extend_from_slice(&[0u8; 10]);

        let err = Asset::extract(&data, &entry_at(0, 1)).expect_err("Test operation should fail");
        assert!(matches!(err, MifError::Truncated { expected: 32, .. }));
    }

    #[test]
    fn test_payload_clamped_to_buffer_end() {
        // Index length says 100 bytes, only 4 exist past the sub-header.
        let data = asset_region([0; 7], b"tail");

        let asset =
            Asset::extract(&data, &entry_at(0, 100)).expect("Operation should succeed");

        assert_eq!(asset.length, 100);
        assert_eq!(asset.payload, b"tail");
    }

    #[test]
    fn test_offset_past_buffer_is_magic_mismatch() {
        let data = asset_region([0; 7], b"x");

        let err =
            Asset::extract(&data, &entry_at(1000, 1)).expect_err("Test operation should fail");
        assert!(matches!(err, MifError::InvalidAssetMagic { offset: 1000, .. }));
    }
}
