// Error type for grid mutation, registry lookups, and file loading.
//
// Grid and generator failures are expected outcomes (a coordinate outside
// the grid, a missing texture entry) and are returned or collected, never
// raised as panics. File and JSON failures come from loading the texture
// registry or the viewer config.

use crate::types::{BlockId, GridCoord};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("voxel {coord} is outside model bounds {}x{}x{}", .dimensions.0, .dimensions.1, .dimensions.2)]
    OutOfBounds {
        coord: GridCoord,
        dimensions: (u32, u32, u32),
    },

    #[error("no voxel at {0}")]
    NoVoxel(GridCoord),

    #[error("no textures registered for block type {block} (at {coord})")]
    UnknownBlockType { coord: GridCoord, block: BlockId },

    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Coordinate the error refers to, if it is a per-cell error.
    pub fn coord(&self) -> Option<GridCoord> {
        match self {
            ModelError::OutOfBounds { coord, .. } | ModelError::UnknownBlockType { coord, .. } => {
                Some(*coord)
            }
            ModelError::NoVoxel(coord) => Some(*coord),
            _ => None,
        }
    }
}
