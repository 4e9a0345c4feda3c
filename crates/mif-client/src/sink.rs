//! Output sink for extracted assets
//!
//! The sink owns the output directory and the file-naming counter for one
//! run. It is created once and passed by mutable reference into the decode
//! loop, so nothing about output placement lives in process-wide state.

use mif_formats::Asset;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes extracted assets as numbered files into one output directory
///
/// The directory is created lazily on the first write: a run that decodes
/// nothing leaves nothing behind. When no directory is requested, a unique
/// one is created under the system temp location and kept on disk after the
/// run.
pub struct DumpSink {
    requested: Option<PathBuf>,
    dir: Option<PathBuf>,
    counter: usize,
}

impl DumpSink {
    /// Create a sink, optionally targeting a caller-chosen directory
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            requested: dir,
            dir: None,
            counter: 0,
        }
    }

    /// Directory files are being written to, once the first write happened
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Number of files written so far
    pub fn written(&self) -> usize {
        self.counter
    }

    fn ensure_dir(&mut self) -> io::Result<PathBuf> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }

        let dir = match &self.requested {
            Some(path) => {
                fs::create_dir_all(path)?;
                path.clone()
            }
            None => tempfile::Builder::new().prefix("mifdump-").tempdir()?.keep(),
        };

        debug!("dumping files to {}", dir.display());
        self.dir = Some(dir.clone());
        Ok(dir)
    }

    /// Write one asset, naming it from the run-wide counter and its sniffed
    /// content kind (`dump0000.svg`, `dump0001.dat`, ...)
    pub fn write(&mut self, asset: &Asset) -> io::Result<PathBuf> {
        let dir = self.ensure_dir()?;
        let path = dir.join(format!("dump{:04}.{}", self.counter, asset.kind.extension()));
        fs::write(&path, &asset.payload)?;
        self.counter += 1;
        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use mif_formats::ContentKind;

    fn asset(kind_payload: &[u8]) -> Asset {
        Asset {
            slot: 0,
            offset: 32,
            length: kind_payload.len() as u32,
            metadata: [0; 7],
            kind: ContentKind::sniff(kind_payload),
            payload: kind_payload.to_vec(),
        }
    }

    #[test]
    fn test_counter_and_extension_in_names() {
        let dir = tempfile::tempdir().expect("Operation should succeed");
        let mut sink = DumpSink::new(Some(dir.path().to_path_buf()));

        let first = sink.write(&asset(b"<?xml hi")).expect("Operation should succeed");
        let second = sink.write(&asset(b"opaque")).expect("Operation should succeed");

        assert!(first.ends_with("dump0000.svg"));
        assert!(second.ends_with("dump0001.dat"));
        assert_eq!(sink.written(), 2);
        assert_eq!(
            fs::read(&first).expect("Operation should succeed"),
            b"<?xml hi"
        );
    }

    #[test]
    fn test_counter_spans_containers() {
        // One sink per run: the counter must not reset between containers.
        let dir = tempfile::tempdir().expect("Operation should succeed");
        let mut sink = DumpSink::new(Some(dir.path().to_path_buf()));

        sink.write(&asset(b"a")).expect("Operation should succeed");
        let from_second_container = sink.write(&asset(b"b")).expect("Operation should succeed");

        assert!(from_second_container.ends_with("dump0001.dat"));
    }

    #[test]
    fn test_no_directory_until_first_write() {
        let dir = tempfile::tempdir().expect("Operation should succeed");
        let target = dir.path().join("out");
        let mut sink = DumpSink::new(Some(target.clone()));

        assert!(sink.dir().is_none());
        assert!(!target.exists());

        sink.write(&asset(b"x")).expect("Operation should succeed");
        assert!(target.is_dir());
        assert_eq!(sink.dir(), Some(target.as_path()));
    }
}
