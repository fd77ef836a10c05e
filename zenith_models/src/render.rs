// Render-side values produced by `VoxelGrid::materialize`.
//
// A `VoxelInstance` is everything a renderer needs to draw one block: its
// id, the six face textures resolved from the registry, and its world
// position (grid offset plus cell coordinate). No GPU state lives here.

use crate::error::ModelError;
use crate::registry::BlockTextures;
use crate::types::BlockId;

/// One renderable block.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelInstance {
    pub block: BlockId,
    pub textures: BlockTextures,
    pub position: [f32; 3],
}

/// Outcome of a materialization pass.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Render objects created and cached.
    pub created: usize,
    /// Occupied cells that could not be materialized, one error per cell.
    pub skipped: Vec<ModelError>,
}

impl MaterializeReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
