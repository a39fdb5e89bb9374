use std::collections::BTreeMap;

use crate::foundation::core::{FrameIndex, FrameRecord};

/// Parsed records keyed by frame index, one registry per analysis run.
///
/// The producer can legitimately overwrite dumps across runs that share a
/// scratch directory, so duplicate indices are not silently absorbed: the
/// last record wins, and every collision is recorded for the report.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    frames: BTreeMap<FrameIndex, FrameRecord>,
    collisions: Vec<FrameIndex>,
}

impl FrameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record. If the index was already present the new record
    /// replaces the old one and the collision is remembered.
    pub fn insert(&mut self, record: FrameRecord) {
        let index = record.index;
        if self.frames.insert(index, record).is_some() {
            self.collisions.push(index);
        }
    }

    /// Number of distinct frame indices present.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no record made it into the registry.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Looks up the record for one frame index.
    pub fn get(&self, index: FrameIndex) -> Option<&FrameRecord> {
        self.frames.get(&index)
    }

    /// All present indices in ascending numeric order.
    pub fn sorted_indices(&self) -> Vec<FrameIndex> {
        self.frames.keys().copied().collect()
    }

    /// Indices that were inserted more than once, in insertion order.
    pub fn collisions(&self) -> &[FrameIndex] {
        &self.collisions
    }
}
