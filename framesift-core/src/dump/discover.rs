use std::path::{Path, PathBuf};

use crate::foundation::error::{FramesiftError, FramesiftResult};

/// File-name prefix the producer uses for every dump it writes.
pub const FRAME_FILE_PREFIX: &str = "gifbolt_frame_";

/// Extension of the per-frame metadata records.
pub const METADATA_EXT: &str = "txt";

/// Extension of the optional raw pixel dumps. Raw files are counted and
/// located but never opened; no pixel decoding happens here.
pub const RAW_EXT: &str = "raw";

/// Dump files found in one scratch directory, each list sorted by file name.
///
/// The producer zero-pads the frame number in the file name, so the
/// lexicographic order coincides with ascending frame index. Downstream
/// analysis still sorts parsed indices itself and never relies on this.
#[derive(Clone, Debug, Default)]
pub struct DumpSet {
    /// `gifbolt_frame_*.txt` metadata records.
    pub metadata_files: Vec<PathBuf>,
    /// `gifbolt_frame_*.raw` pixel dumps.
    pub raw_files: Vec<PathBuf>,
}

/// Lists the frame dumps in `dir`.
///
/// An empty directory (or one with no matching files) yields empty lists,
/// which is a normal outcome for a speculative run. Only a directory that
/// cannot be listed at all is an error; nothing downstream can proceed
/// without a file list.
#[tracing::instrument]
pub fn discover(dir: &Path) -> FramesiftResult<DumpSet> {
    let unavailable = |source: std::io::Error| FramesiftError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    };

    let mut set = DumpSet::default();
    for entry in std::fs::read_dir(dir).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.starts_with(FRAME_FILE_PREFIX) {
            continue;
        }
        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(METADATA_EXT) => set.metadata_files.push(entry.path()),
            Some(RAW_EXT) => set.raw_files.push(entry.path()),
            _ => {}
        }
    }
    set.metadata_files.sort();
    set.raw_files.sort();

    tracing::debug!(
        metadata = set.metadata_files.len(),
        raw = set.raw_files.len(),
        "discovered frame dumps"
    );
    Ok(set)
}
