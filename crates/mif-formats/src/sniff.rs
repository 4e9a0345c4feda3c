//! Payload content classification
//!
//! Classification looks only at the payload bytes, never at container
//! metadata, and exists purely to pick an output file extension.

/// Leading bytes of an XML document, marking a plain-text SVG payload
const XML_PREFIX: &[u8] = b"<?xml";

/// Signature of the Symbian binary-encoded SVG format (SVGB)
const SVGB_MAGIC: [u8; 4] = [0xCC, 0x56, 0xFA, 0x03];

/// Coarse content classification of an extracted payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Plain-text SVG (XML document)
    Svg,
    /// Binary-encoded SVG
    SvgBinary,
    /// Anything else
    Unknown,
}

impl ContentKind {
    /// Classify a payload by its leading bytes
    ///
    /// Total: payloads too short for either signature are [`Self::Unknown`].
    pub fn sniff(payload: &[u8]) -> Self {
        if payload.starts_with(XML_PREFIX) {
            Self::Svg
        } else if payload.starts_with(&SVGB_MAGIC) {
            Self::SvgBinary
        } else {
            Self::Unknown
        }
    }

    /// Suggested file extension for a payload of this kind
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::SvgBinary => "svgb",
            Self::Unknown => "dat",
        }
    }
}
