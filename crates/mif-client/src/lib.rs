//! mifdump client library
//!
//! Plumbing around the `mif-formats` core: bounded input reading, report
//! formatting, and the per-container decode loop that feeds the output sink.

pub mod sink;

use mif_formats::{Asset, MAX_MIF_SIZE, MifError, MifHeader, MifIndex};
use sink::DumpSink;
use std::io::Read;
use tracing::debug;

/// Read at most [`MAX_MIF_SIZE`] bytes from an input
///
/// A read that fills the bound is rejected as too large rather than silently
/// truncated; the decoder never sees a partial container.
///
/// # Errors
/// [`MifError::FileTooLarge`] at the size bound, or [`MifError::Io`] from the
/// underlying reader.
pub fn read_bounded<R: Read>(reader: R) -> Result<Vec<u8>, MifError> {
    let mut data = Vec::new();
    reader.take(MAX_MIF_SIZE as u64).read_to_end(&mut data)?;

    if data.len() == MAX_MIF_SIZE {
        return Err(MifError::FileTooLarge(data.len()));
    }

    Ok(data)
}

/// Summary line for one decoded container: `"<name>: 2 files inside"`
///
/// Zero is reported as "no" and one drops the plural, matching the tool's
/// historical output.
pub fn summary_line(name: &str, count: usize) -> String {
    match count {
        0 => format!("{name}: no files inside"),
        1 => format!("{name}: 1 file inside"),
        n => format!("{name}: {n} files inside"),
    }
}

/// Diagnostic line with an asset's seven metadata words
pub fn metadata_line(asset: &Asset) -> String {
    let words: Vec<String> = asset
        .metadata
        .iter()
        .map(|w| format!("0x{w:08x}"))
        .collect();
    words.join(" ")
}

/// Decode one container and hand every asset to the sink
///
/// Runs the decode stages in order, printing the summary once the index is
/// validated and one metadata line per extracted asset. An error aborts this
/// container only; the caller decides whether to continue with the next one.
///
/// # Errors
/// Any [`MifError`] from decoding, or the sink's I/O error.
pub fn decode_container(data: &[u8], name: &str, sink: &mut DumpSink) -> anyhow::Result<usize> {
    debug!("decoding {name} ({} bytes)", data.len());

    let header = MifHeader::parse(data)?;
    let index = MifIndex::parse(data, &header)?;

    println!("{}", summary_line(name, index.len()));

    for entry in &index.entries {
        let asset = Asset::extract(data, entry)?;
        println!("{}", metadata_line(&asset));

        let path = sink.write(&asset)?;
        println!("{} written", path.display());
    }

    Ok(index.len())
}
