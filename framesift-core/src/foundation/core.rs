use std::path::PathBuf;

/// Logical frame number assigned by the producer, 0-based and monotonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Which double-buffer surface was active when a frame was recorded.
///
/// `Unknown` covers both a missing `DisplayingAlt` line and an unrecognized
/// token; it is rendered distinctly and never coerced to a boolean default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceFlag {
    /// `DisplayingAlt: false` — the primary surface was on screen.
    Primary,
    /// `DisplayingAlt: true` — the alternate surface was on screen.
    Alt,
    /// The metadata did not say, or said something unrecognized.
    Unknown,
}

impl SurfaceFlag {
    /// Maps the literal metadata token to a flag. Tokens are case-sensitive;
    /// anything other than `true`/`false` degrades to `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "true" => SurfaceFlag::Alt,
            "false" => SurfaceFlag::Primary,
            _ => SurfaceFlag::Unknown,
        }
    }

    /// Human-readable surface label for the report.
    pub fn label(self) -> &'static str {
        match self {
            SurfaceFlag::Primary => "Primary",
            SurfaceFlag::Alt => "Alt",
            SurfaceFlag::Unknown => "Unknown",
        }
    }

    /// The `DisplayingAlt` value as it is echoed in the parse summary.
    pub fn token(self) -> &'static str {
        match self {
            SurfaceFlag::Primary => "false",
            SurfaceFlag::Alt => "true",
            SurfaceFlag::Unknown => "unknown",
        }
    }
}

/// One successfully parsed metadata file.
#[derive(Clone, Debug)]
pub struct FrameRecord {
    /// Frame number from the `Frame:` line.
    pub index: FrameIndex,
    /// Active surface from the `DisplayingAlt:` line, if present.
    pub surface: SurfaceFlag,
    /// File the record came from, kept for error reporting only.
    pub source_path: PathBuf,
    /// Raw metadata text, retained for diagnostic display but not
    /// otherwise interpreted.
    pub raw_metadata: String,
}
