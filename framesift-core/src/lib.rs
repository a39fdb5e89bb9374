//! Framesift is an offline diagnostic analyzer for GifBolt frame dumps.
//!
//! The GifBolt renderer, when instrumented, writes one small metadata record
//! (`gifbolt_frame_NNNN.txt`) and optionally a raw pixel dump
//! (`gifbolt_frame_NNNN.raw`) per rendered frame into a scratch directory.
//! Framesift reads those files after the fact and reports whether the logical
//! frame sequence is intact and which double-buffer surface was active per
//! frame, to help locate intermittently disappearing frames.
//!
//! # Pipeline overview
//!
//! 1. **Discover**: list metadata and raw dump files in the scratch directory
//! 2. **Parse**: each metadata file yields a [`ParseOutcome`] (record or typed failure)
//! 3. **Aggregate**: parsed records land in a [`FrameRegistry`] keyed by index
//! 4. **Analyze**: range, sequence gaps, and the leading alternation window
//! 5. **Render**: a human-readable report, written to any `io::Write`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Read-only**: the scratch directory is never written, locked, or repaired.
//! - **Partial-failure tolerant**: one bad metadata file never suppresses
//!   analysis of the rest; only an unlistable directory aborts a run.
//! - **Deterministic**: the report is a pure function of the directory contents.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analysis;
mod dump;
mod foundation;

pub use analysis::registry::FrameRegistry;
pub use analysis::report::{
    AnalysisReport, DEFAULT_ALTERNATION_WINDOW, ReportOptions, analyze_directory,
};
pub use analysis::sequence::{Gap, SequenceSummary, scan_gaps, summarize};
pub use dump::discover::{DumpSet, FRAME_FILE_PREFIX, METADATA_EXT, RAW_EXT, discover};
pub use dump::metadata::{ParseOutcome, parse_metadata, read_record};
pub use foundation::core::{FrameIndex, FrameRecord, SurfaceFlag};
pub use foundation::error::{FramesiftError, FramesiftResult};
