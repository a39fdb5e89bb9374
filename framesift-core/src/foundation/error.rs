use std::path::PathBuf;

/// Convenience alias for results carrying [`FramesiftError`].
pub type FramesiftResult<T> = Result<T, FramesiftError>;

/// Errors that abort an analysis run.
///
/// Per-file problems (unreadable or malformed metadata) are deliberately not
/// represented here; they travel as [`crate::ParseOutcome`] variants so a
/// single bad file can never truncate the run.
#[derive(thiserror::Error, Debug)]
pub enum FramesiftError {
    /// The scratch directory itself could not be listed.
    #[error("scratch directory unavailable: '{path}': {source}")]
    DirectoryUnavailable {
        /// Directory the run was configured with.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// Any other failure, with context attached by the caller.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_unavailable_names_the_path() {
        let err = FramesiftError::DirectoryUnavailable {
            path: PathBuf::from("/nonexistent/scratch"),
            source: std::io::Error::other("boom"),
        };
        let msg = err.to_string();
        assert!(msg.contains("scratch directory unavailable"));
        assert!(msg.contains("/nonexistent/scratch"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = FramesiftError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
