// Summary returned by every `generate_*` call.
//
// Generation is best effort: a placement the grid rejects is recorded here
// and the builder moves on. A report with rejections still describes a valid
// (truncated) structure.

use crate::error::ModelError;

#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Height the structure was built with, after random draw and clamping.
    /// For huts this is the wall height of the first storey.
    pub height: i32,
    /// Occupied cells once generation finished.
    pub voxel_count: usize,
    /// Placements the grid refused, in the order they were attempted.
    pub rejected: Vec<ModelError>,
}

impl GenerationReport {
    pub fn new(height: i32) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Record the outcome of one placement.
    pub(crate) fn note(&mut self, result: Result<(), ModelError>) {
        if let Err(e) = result {
            self.rejected.push(e);
        }
    }
}
