//! Parser for Symbian OS v9.x multi-image (MIF) containers
//!
//! A MIF file bundles multiple image/vector assets behind a fixed 16-byte
//! header and an index table. This crate decodes the container from an
//! in-memory buffer: it verifies the `"B##4"` signature, parses and
//! validates the index table, extracts each asset behind its `"C##4"`
//! sub-header, and classifies payload content (plain SVG, binary SVG, or
//! unknown).
//!
//! # Format quirks
//!
//! Two oddities are part of the format and deliberately preserved:
//! - The header stores *twice* the logical index entry count; decoders halve
//!   it.
//! - Each 16-byte index slot stores its `(offset, length)` pair twice; the
//!   pairs must agree, and a slot whose length words are both zero is a
//!   placeholder to skip, not an error.
//!
//! # Usage
//!
//! ```rust
//! use mif_formats::MifArchive;
//!
//! # fn main() -> Result<(), mif_formats::MifError> {
//! let mut data = b"B##4".to_vec();
//! data.extend_from_slice(&[0u8; 8]);
//! data.extend_from_slice(&2u32.to_le_bytes());
//! data.extend_from_slice(&[32, 0, 0, 0, 9, 0, 0, 0, 32, 0, 0, 0, 9, 0, 0, 0]);
//! data.extend_from_slice(b"C##4");
//! data.extend_from_slice(&[0u8; 28]);
//! data.extend_from_slice(b"<?xml ...");
//!
//! let archive = MifArchive::parse(&data)?;
//! assert_eq!(archive.asset_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Decoding never trusts an offset blindly: every index entry is bounds
//! checked against the buffer before its asset region is touched, and inputs
//! at or above [`MAX_MIF_SIZE`] are rejected outright rather than decoded
//! incrementally.

#![warn(missing_docs)]

pub mod archive;
pub mod asset;
pub mod error;
pub mod header;
pub mod index;
pub mod sniff;

pub use archive::MifArchive;
pub use asset::{ASSET_HEADER_SIZE, ASSET_MAGIC, Asset, AssetHeader};
pub use error::{MifError, Result};
pub use header::{HEADER_SIZE, MAX_MIF_SIZE, MIF_MAGIC, MifHeader};
pub use index::{INDEX_SLOT_SIZE, IndexEntry, IndexSlot, MifIndex};
pub use sniff::ContentKind;
