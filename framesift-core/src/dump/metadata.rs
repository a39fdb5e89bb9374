use std::path::{Path, PathBuf};

use crate::foundation::core::{FrameIndex, FrameRecord, SurfaceFlag};

/// Result of processing one metadata file.
///
/// Failures are values, not errors: the caller skips registry insertion for
/// the two failure variants and keeps going, so one bad file can never
/// suppress analysis of the rest.
#[derive(Clone, Debug)]
pub enum ParseOutcome {
    /// The file yielded a usable record.
    Parsed(FrameRecord),
    /// The file was readable but carried no valid `Frame` value.
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },
    /// The file could not be opened or decoded as text.
    Unreadable {
        /// Offending file.
        path: PathBuf,
        /// The underlying I/O failure.
        reason: String,
    },
}

/// Reads and parses one metadata file. I/O failure is scoped to this file.
pub fn read_record(path: &Path) -> ParseOutcome {
    match std::fs::read_to_string(path) {
        Ok(body) => parse_metadata(path, &body),
        Err(err) => ParseOutcome::Unreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

/// Parses the line-oriented `Key: Value` metadata format.
///
/// Recognized keys are `Frame` (required, non-negative integer) and
/// `DisplayingAlt` (optional, literal `true`/`false`; anything else degrades
/// to [`SurfaceFlag::Unknown`]). Unrecognized keys and lines without a colon
/// are ignored so newer producer builds can add fields freely.
pub fn parse_metadata(path: &Path, body: &str) -> ParseOutcome {
    let mut index = None;
    let mut surface = SurfaceFlag::Unknown;

    for line in body.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "Frame" => match value.trim().parse::<u64>() {
                Ok(n) => index = Some(FrameIndex(n)),
                Err(_) => {
                    return ParseOutcome::Malformed {
                        path: path.to_path_buf(),
                        reason: format!("invalid Frame value '{}'", value.trim()),
                    };
                }
            },
            "DisplayingAlt" => surface = SurfaceFlag::from_token(value.trim()),
            _ => {}
        }
    }

    match index {
        Some(index) => ParseOutcome::Parsed(FrameRecord {
            index,
            surface,
            source_path: path.to_path_buf(),
            raw_metadata: body.to_string(),
        }),
        None => ParseOutcome::Malformed {
            path: path.to_path_buf(),
            reason: "missing Frame key".to_string(),
        },
    }
}
