//! Whole-container decoding

use crate::asset::Asset;
use crate::error::Result;
use crate::header::MifHeader;
use crate::index::MifIndex;

/// Fully decoded MIF container
///
/// Convenience composition of the four decode stages (header validation,
/// index parsing, asset extraction, content sniffing). Callers that need to
/// interleave reporting or persistence with extraction can run the stages
/// themselves; they are all public.
///
/// Decoding is a pure function of the input buffer. Nothing is retained or
/// mutated across containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MifArchive {
    /// Validated container header
    pub header: MifHeader,
    /// Decoded assets in index order
    pub assets: Vec<Asset>,
}

impl MifArchive {
    /// Decode a complete MIF container from memory
    ///
    /// # Errors
    /// Any error from [`MifHeader::parse`], [`MifIndex::parse`], or
    /// [`Asset::extract`]; the first failure aborts the whole decode.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = MifHeader::parse(data)?;
        let index = MifIndex::parse(data, &header)?;

        let mut assets = Vec::with_capacity(index.len());
        for entry in &index.entries {
            assets.push(Asset::extract(data, entry)?);
        }

        Ok(Self { header, assets })
    }

    /// Number of decoded assets
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}
