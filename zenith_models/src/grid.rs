// Sparse, bounded voxel container shared by every structure generator.
//
// Blocks are stored in an `FxHashMap<GridCoord, BlockId>`; only occupied
// cells have entries. The extents are fixed at construction and every key
// satisfies `0 <= x < width`, `0 <= y < height`, `0 <= z < depth`. Writes
// outside the extents are refused with `ModelError::OutOfBounds` and leave
// the grid untouched; reads outside return `None`.
//
// A second map caches render objects (`VoxelInstance`) built by
// `materialize()` from a `TextureLookup`. The cache is rebuilt wholesale on
// each materialize call and is dropped entry-by-entry when a voxel is
// removed, or entirely on `clear()`.
//
// See also: `tree_gen.rs` and `hut_gen.rs`, which own a `VoxelGrid` each,
// `registry.rs` for the lookup used during materialization.

use crate::error::ModelError;
use crate::registry::TextureLookup;
use crate::render::{MaterializeReport, VoxelInstance};
use crate::types::{BlockId, GridCoord};
use log::warn;
use rustc_hash::FxHashMap;

/// Bounded sparse voxel grid with a world-space offset.
#[derive(Clone, Debug, Default)]
pub struct VoxelGrid {
    blocks: FxHashMap<GridCoord, BlockId>,
    render_cache: FxHashMap<GridCoord, VoxelInstance>,
    width: u32,
    height: u32,
    depth: u32,
    position: [f32; 3],
}

impl VoxelGrid {
    /// Create an empty grid. Zero extents are allowed and accept no voxels.
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            blocks: FxHashMap::default(),
            render_cache: FxHashMap::default(),
            width,
            height,
            depth,
            position: [0.0; 3],
        }
    }

    pub fn is_within_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && (z as u32) < self.depth
    }

    fn check_bounds(&self, coord: GridCoord) -> Result<(), ModelError> {
        if self.is_within_bounds(coord.x, coord.y, coord.z) {
            Ok(())
        } else {
            Err(ModelError::OutOfBounds {
                coord,
                dimensions: self.dimensions(),
            })
        }
    }

    /// Place `block` at (x, y, z), replacing whatever was there.
    pub fn add_voxel(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        block: impl Into<BlockId>,
    ) -> Result<(), ModelError> {
        let coord = GridCoord::new(x, y, z);
        if let Err(e) = self.check_bounds(coord) {
            warn!("{e}");
            return Err(e);
        }
        self.blocks.insert(coord, block.into());
        Ok(())
    }

    /// Remove the voxel at (x, y, z) and its cached render object.
    pub fn remove_voxel(&mut self, x: i32, y: i32, z: i32) -> Result<(), ModelError> {
        let coord = GridCoord::new(x, y, z);
        self.check_bounds(coord)?;
        if self.blocks.remove(&coord).is_none() {
            return Err(ModelError::NoVoxel(coord));
        }
        self.render_cache.remove(&coord);
        Ok(())
    }

    /// Block at (x, y, z); `None` when empty or outside the grid.
    pub fn block_type(&self, x: i32, y: i32, z: i32) -> Option<&BlockId> {
        self.blocks.get(&GridCoord::new(x, y, z))
    }

    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.block_type(x, y, z).is_some()
    }

    pub fn set_position(&mut self, position: [f32; 3]) {
        self.position = position;
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    /// (width, height, depth).
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Drop every voxel and render object. Extents and position are kept.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.render_cache.clear();
    }

    pub fn voxel_count(&self) -> usize {
        self.blocks.len()
    }

    /// Snapshot of occupied coordinates, in no particular order.
    pub fn occupied_positions(&self) -> Vec<GridCoord> {
        self.blocks.keys().copied().collect()
    }

    pub fn blocks(&self) -> impl Iterator<Item = (GridCoord, &BlockId)> {
        self.blocks.iter().map(|(coord, block)| (*coord, block))
    }

    /// Rebuild the render cache from the current blocks.
    ///
    /// AIR cells are ignored. A block with no registry entry is logged,
    /// recorded in the report, and left without a render object; the pass
    /// always visits every cell.
    pub fn materialize(&mut self, textures: &impl TextureLookup) -> MaterializeReport {
        let mut report = MaterializeReport::default();
        self.render_cache.clear();

        for (&coord, block) in &self.blocks {
            if block.is_air() {
                continue;
            }
            let Some(faces) = textures.face_textures(block) else {
                let e = ModelError::UnknownBlockType {
                    coord,
                    block: block.clone(),
                };
                warn!("{e}");
                report.skipped.push(e);
                continue;
            };
            let position = [
                self.position[0] + coord.x as f32,
                self.position[1] + coord.y as f32,
                self.position[2] + coord.z as f32,
            ];
            self.render_cache.insert(
                coord,
                VoxelInstance {
                    block: block.clone(),
                    textures: faces.clone(),
                    position,
                },
            );
            report.created += 1;
        }
        report
    }

    pub fn render_objects(&self) -> impl Iterator<Item = (GridCoord, &VoxelInstance)> {
        self.render_cache.iter().map(|(coord, obj)| (*coord, obj))
    }

    pub fn render_object(&self, coord: GridCoord) -> Option<&VoxelInstance> {
        self.render_cache.get(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks;
    use crate::registry::{BlockRegistry, BlockTextures};

    #[test]
    fn add_and_read_back() {
        let mut grid = VoxelGrid::new(4, 4, 4);
        grid.add_voxel(1, 2, 3, blocks::WOOD_OAK).unwrap();
        assert_eq!(grid.block_type(1, 2, 3).unwrap(), blocks::WOOD_OAK);
        assert_eq!(grid.voxel_count(), 1);
    }

    #[test]
    fn out_of_bounds_write_is_rejected() {
        let mut grid = VoxelGrid::new(4, 4, 4);
        let err = grid.add_voxel(-1, 0, 0, "X").unwrap_err();
        assert!(matches!(err, ModelError::OutOfBounds { .. }));
        assert!(grid.add_voxel(4, 0, 0, "X").is_err());
        assert!(grid.add_voxel(0, 4, 0, "X").is_err());
        assert!(grid.add_voxel(0, 0, 4, "X").is_err());
        assert_eq!(grid.voxel_count(), 0);
    }

    #[test]
    fn out_of_bounds_read_is_none() {
        let grid = VoxelGrid::new(2, 2, 2);
        assert!(grid.block_type(-1, 0, 0).is_none());
        assert!(grid.block_type(0, 0, 99).is_none());
    }

    #[test]
    fn overwrite_keeps_count() {
        let mut grid = VoxelGrid::new(4, 4, 4);
        grid.add_voxel(0, 0, 0, blocks::PLANKS_OAK).unwrap();
        grid.add_voxel(0, 0, 0, blocks::GLASS).unwrap();
        assert_eq!(grid.block_type(0, 0, 0).unwrap(), blocks::GLASS);
        assert_eq!(grid.voxel_count(), 1);
    }

    #[test]
    fn remove_reports_missing_and_out_of_bounds() {
        let mut grid = VoxelGrid::new(3, 3, 3);
        assert!(matches!(
            grid.remove_voxel(1, 1, 1),
            Err(ModelError::NoVoxel(c)) if c == GridCoord::new(1, 1, 1)
        ));
        assert!(matches!(
            grid.remove_voxel(3, 0, 0),
            Err(ModelError::OutOfBounds { .. })
        ));
        grid.add_voxel(1, 1, 1, "STONE").unwrap();
        grid.remove_voxel(1, 1, 1).unwrap();
        assert!(!grid.is_occupied(1, 1, 1));
    }

    #[test]
    fn zero_sized_grid_accepts_nothing() {
        let mut grid = VoxelGrid::new(0, 0, 0);
        assert!(!grid.is_within_bounds(0, 0, 0));
        assert!(grid.add_voxel(0, 0, 0, "X").is_err());
    }

    #[test]
    fn clear_keeps_bounds_and_position() {
        let mut grid = VoxelGrid::new(5, 6, 7);
        grid.set_position([1.0, 2.0, 3.0]);
        grid.add_voxel(1, 1, 1, "X").unwrap();
        grid.clear();
        assert_eq!(grid.voxel_count(), 0);
        assert_eq!(grid.dimensions(), (5, 6, 7));
        assert_eq!(grid.position(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn materialize_offsets_and_skips() {
        let mut registry = BlockRegistry::new("");
        registry.insert(blocks::GLASS, BlockTextures::uniform("glass.png"));

        let mut grid = VoxelGrid::new(4, 4, 4);
        grid.set_position([10.0, 0.0, -5.0]);
        grid.add_voxel(1, 2, 3, blocks::GLASS).unwrap();
        grid.add_voxel(0, 0, 0, blocks::AIR).unwrap();
        grid.add_voxel(3, 3, 3, "MYSTERY").unwrap();

        let report = grid.materialize(&registry);
        assert_eq!(report.created, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].coord(), Some(GridCoord::new(3, 3, 3)));

        let obj = grid.render_object(GridCoord::new(1, 2, 3)).unwrap();
        assert_eq!(obj.position, [11.0, 2.0, -2.0]);
        assert_eq!(obj.textures.top, "glass.png");
        assert!(grid.render_object(GridCoord::new(0, 0, 0)).is_none());
        assert_eq!(grid.render_objects().count(), 1);
    }

    #[test]
    fn removing_a_voxel_drops_its_render_object() {
        let mut registry = BlockRegistry::new("");
        registry.insert("STONE", BlockTextures::uniform("stone.png"));
        let mut grid = VoxelGrid::new(2, 2, 2);
        grid.add_voxel(0, 0, 0, "STONE").unwrap();
        grid.add_voxel(1, 0, 0, "STONE").unwrap();
        grid.materialize(&registry);
        grid.remove_voxel(0, 0, 0).unwrap();
        assert!(grid.render_object(GridCoord::new(0, 0, 0)).is_none());
        assert!(grid.render_object(GridCoord::new(1, 0, 0)).is_some());
    }
}
