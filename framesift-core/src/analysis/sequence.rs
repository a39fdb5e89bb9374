use crate::analysis::registry::FrameRegistry;
use crate::foundation::core::FrameIndex;

/// A break in the expected strictly-increasing-by-one index sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gap {
    /// Last index present before the break.
    pub before: FrameIndex,
    /// First index present after the break.
    pub after: FrameIndex,
}

impl Gap {
    /// How many frames were never dumped (or were lost) inside this gap.
    pub fn missing(self) -> u64 {
        self.after.0 - self.before.0 - 1
    }
}

/// Range and gap findings for a non-empty registry.
#[derive(Clone, Debug)]
pub struct SequenceSummary {
    /// Smallest frame index present.
    pub min: FrameIndex,
    /// Largest frame index present.
    pub max: FrameIndex,
    /// Every discontinuity, in ascending order.
    pub gaps: Vec<Gap>,
}

/// Finds every gap in a set of frame indices.
///
/// The input is sorted here before scanning; correctness never depends on
/// the caller's ordering. Single linear pass after the sort.
pub fn scan_gaps(mut indices: Vec<FrameIndex>) -> Vec<Gap> {
    indices.sort_unstable();
    indices.dedup();
    indices
        .windows(2)
        .filter(|pair| pair[1].0 - pair[0].0 != 1)
        .map(|pair| Gap {
            before: pair[0],
            after: pair[1],
        })
        .collect()
}

/// Computes the contiguous range and gap list for a registry.
///
/// Returns `None` for an empty registry; "no frames" is a normal outcome,
/// not an error, and the report handles it upstream.
pub fn summarize(registry: &FrameRegistry) -> Option<SequenceSummary> {
    let indices = registry.sorted_indices();
    let min = *indices.first()?;
    let max = *indices.last()?;
    Some(SequenceSummary {
        min,
        max,
        gaps: scan_gaps(indices),
    })
}
