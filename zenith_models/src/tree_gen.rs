// Procedural tree generation.
//
// `TreeModel` owns a `VoxelGrid` sized `max_width x max_height x max_width`
// and a `StructureRng`. `generate_tree()` clears the grid and builds one tree
// of the requested species centered on (width/2, depth/2) with the trunk
// starting at y=0.
//
// Shapes by species:
//   - Oak: single trunk, ellipsoid canopy (vertical weight 1.5).
//   - Spruce: single trunk, stepped cone of leaves plus a tip leaf.
//   - Birch: single trunk, small flattened canopy (vertical weight 2.0).
//   - Jungle: single trunk, large sphere thinned at random, hanging vines.
//   - Acacia: short trunk forking into two diagonal branches, each capped by
//     a flat leaf disc.
//   - Dark oak: 2x2 trunk, wide canopy with a per-cell random eroded edge.
//
// Trunk cells below the trunk top are never overwritten by leaves (spruce
// skips the whole trunk column). Canopy distances use `f32` and are measured
// from the band midpoint `bottom + (top - bottom) / 2`.
//
// See also: `grid.rs` for the container being populated, `hut_gen.rs` for the
// other generator, `report.rs` for what a generate call returns.
//
// **Determinism.** All randomness comes from the model's own `StructureRng`.
// Draws happen in a fixed order (height, then shape draws in loop order), so
// one seed and one set of parameters always yield the same tree.

use crate::grid::VoxelGrid;
use crate::prng::StructureRng;
use crate::report::GenerationReport;
use crate::seeding::clock_seed;
use crate::types::TreeSpecies;
use log::debug;

/// Generator for single trees.
#[derive(Clone, Debug)]
pub struct TreeModel {
    grid: VoxelGrid,
    rng: StructureRng,
    custom_seed: bool,
}

/// Fixed per-call inputs shared by the species builders.
struct TreeFrame {
    cx: i32,
    cz: i32,
    height: i32,
    wood: &'static str,
    leaves: &'static str,
}

fn band_mid(bottom: i32, top: i32) -> f32 {
    bottom as f32 + (top - bottom) as f32 / 2.0
}

impl TreeModel {
    /// New generator with a clock-derived seed.
    pub fn new(max_height: u32, max_width: u32) -> Self {
        Self {
            grid: VoxelGrid::new(max_width, max_height, max_width),
            rng: StructureRng::new(clock_seed()),
            custom_seed: false,
        }
    }

    /// Restart the random stream from `seed`.
    pub fn set_random_seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
        self.custom_seed = true;
    }

    pub fn has_custom_seed(&self) -> bool {
        self.custom_seed
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    /// Clear the grid and build one tree.
    ///
    /// A `requested_height` of zero or less draws a height from the species'
    /// range. The height is clamped to `grid height - 2`.
    pub fn generate_tree(&mut self, species: TreeSpecies, requested_height: i32) -> GenerationReport {
        self.grid.clear();

        let mut height = requested_height;
        if height <= 0 {
            let (lo, hi) = species.height_range();
            height = self.rng.range_i32_inclusive(lo, hi);
        }
        let (width, grid_height, depth) = self.grid.dimensions();
        let max_allowed = grid_height as i32 - 2;
        if height > max_allowed {
            height = max_allowed;
        }

        let frame = TreeFrame {
            cx: width as i32 / 2,
            cz: depth as i32 / 2,
            height,
            wood: species.wood(),
            leaves: species.leaves(),
        };
        debug!(
            "Generating {species} tree: height {height} (requested {requested_height}), custom seed: {}",
            self.custom_seed
        );

        let mut report = GenerationReport::new(height);
        match species {
            TreeSpecies::Oak => self.oak(&frame, &mut report),
            TreeSpecies::Spruce => self.spruce(&frame, &mut report),
            TreeSpecies::Birch => self.birch(&frame, &mut report),
            TreeSpecies::Jungle => self.jungle(&frame, &mut report),
            TreeSpecies::Acacia => self.acacia(&frame, &mut report),
            TreeSpecies::DarkOak => self.dark_oak(&frame, &mut report),
        }
        report.voxel_count = self.grid.voxel_count();
        report
    }

    fn place(&mut self, report: &mut GenerationReport, x: i32, y: i32, z: i32, block: &str) {
        report.note(self.grid.add_voxel(x, y, z, block));
    }

    fn trunk(&mut self, f: &TreeFrame, height: i32, report: &mut GenerationReport) {
        for y in 0..height {
            self.place(report, f.cx, y, f.cz, f.wood);
        }
    }

    /// Ellipsoid canopy around the trunk axis, used by oak and birch.
    fn weighted_canopy(
        &mut self,
        f: &TreeFrame,
        (bottom, top): (i32, i32),
        radius: i32,
        y_weight: f32,
        slack: f32,
        report: &mut GenerationReport,
    ) {
        let mid = band_mid(bottom, top);
        for y in bottom..=top {
            for x in f.cx - radius..=f.cx + radius {
                for z in f.cz - radius..=f.cz + radius {
                    let dx = (x - f.cx) as f32;
                    let dy = y as f32 - mid;
                    let dz = (z - f.cz) as f32;
                    let distance = (dx * dx + dy * dy * y_weight + dz * dz).sqrt();
                    let on_trunk = x == f.cx && z == f.cz && y < f.height;
                    if distance <= radius as f32 + slack && !on_trunk {
                        self.place(report, x, y, z, f.leaves);
                    }
                }
            }
        }
    }

    fn oak(&mut self, f: &TreeFrame, report: &mut GenerationReport) {
        self.trunk(f, f.height, report);
        self.weighted_canopy(f, (f.height - 3, f.height + 1), 2, 1.5, 0.5, report);
    }

    fn birch(&mut self, f: &TreeFrame, report: &mut GenerationReport) {
        self.trunk(f, f.height, report);
        self.weighted_canopy(f, (f.height - 2, f.height), 2, 2.0, 0.0, report);
    }

    fn spruce(&mut self, f: &TreeFrame, report: &mut GenerationReport) {
        const BASE_RADIUS: f32 = 3.0;
        self.trunk(f, f.height, report);

        let bottom = f.height / 3;
        let top = f.height + 2;
        for y in bottom..=top {
            let ratio = 1.0 - (y - bottom) as f32 / (top - bottom) as f32;
            let level_radius = ((BASE_RADIUS * ratio) as i32).max(0);
            for x in f.cx - level_radius..=f.cx + level_radius {
                for z in f.cz - level_radius..=f.cz + level_radius {
                    let dx = (x - f.cx) as f32;
                    let dz = (z - f.cz) as f32;
                    let on_axis = x == f.cx && z == f.cz;
                    if (dx * dx + dz * dz).sqrt() <= level_radius as f32 && !on_axis {
                        self.place(report, x, y, z, f.leaves);
                    }
                }
            }
        }
        self.place(report, f.cx, top + 1, f.cz, f.leaves);
    }

    fn jungle(&mut self, f: &TreeFrame, report: &mut GenerationReport) {
        const RADIUS: i32 = 3;
        self.trunk(f, f.height, report);

        let bottom = f.height - 4;
        let top = f.height + 1;
        let mid = band_mid(bottom, top);
        for y in bottom..=top {
            for x in f.cx - RADIUS..=f.cx + RADIUS {
                for z in f.cz - RADIUS..=f.cz + RADIUS {
                    let dx = (x - f.cx) as f32;
                    let dy = y as f32 - mid;
                    let dz = (z - f.cz) as f32;
                    let distance = (dx * dx + dy * dy + dz * dz).sqrt();
                    let on_trunk = x == f.cx && z == f.cz && y < f.height;
                    // Thinning draw only happens for cells inside the sphere.
                    if distance <= RADIUS as f32 + 0.5
                        && self.rng.range_i32_inclusive(0, 10) > 2
                        && !on_trunk
                    {
                        self.place(report, x, y, z, f.leaves);
                    }
                }
            }
        }

        // Vines hang from leaves on the bottom layer into empty cells.
        for x in f.cx - RADIUS..=f.cx + RADIUS {
            for z in f.cz - RADIUS..=f.cz + RADIUS {
                let has_leaf = self
                    .grid
                    .block_type(x, bottom, z)
                    .is_some_and(|b| *b == f.leaves);
                if !has_leaf || self.rng.range_i32_inclusive(0, 10) <= 6 {
                    continue;
                }
                let length = self.rng.range_i32_inclusive(1, 2);
                let mut y = bottom - 1;
                while y >= bottom - length && y >= 0 {
                    if !self.grid.is_occupied(x, y, z) {
                        self.place(report, x, y, z, f.leaves);
                    }
                    y -= 1;
                }
            }
        }
    }

    fn acacia(&mut self, f: &TreeFrame, report: &mut GenerationReport) {
        let trunk_height = f.height - 2;
        self.trunk(f, trunk_height, report);

        let dir_x = if self.rng.range_i32_inclusive(0, 1) == 0 { -1 } else { 1 };
        let dir_z = if self.rng.range_i32_inclusive(0, 1) == 0 { -1 } else { 1 };

        let mut tips = [(f.cx, f.cz); 2];
        for (tip, (sx, sz)) in tips.iter_mut().zip([(dir_x, dir_z), (-dir_x, -dir_z)]) {
            for i in 0..3 {
                tip.0 += sx;
                tip.1 += sz;
                self.place(report, tip.0, trunk_height + i, tip.1, f.wood);
            }
        }
        for (x, z) in tips {
            self.acacia_canopy(x, trunk_height + 2, z, f.leaves, report);
        }
    }

    fn acacia_canopy(&mut self, cx: i32, cy: i32, cz: i32, leaves: &str, report: &mut GenerationReport) {
        const RADIUS: i32 = 2;
        for x in cx - RADIUS..=cx + RADIUS {
            for z in cz - RADIUS..=cz + RADIUS {
                let dx = (x - cx) as f32;
                let dz = (z - cz) as f32;
                if (dx * dx + dz * dz).sqrt() > RADIUS as f32 + 0.5 {
                    continue;
                }
                self.place(report, x, cy, z, leaves);
                if self.rng.range_i32_inclusive(0, 10) > 7 {
                    self.place(report, x, cy + 1, z, leaves);
                }
                if self.rng.range_i32_inclusive(0, 10) > 8 {
                    self.place(report, x, cy - 1, z, leaves);
                }
            }
        }
    }

    fn dark_oak(&mut self, f: &TreeFrame, report: &mut GenerationReport) {
        const RADIUS: i32 = 4;
        for y in 0..f.height {
            for (x, z) in [
                (f.cx, f.cz),
                (f.cx + 1, f.cz),
                (f.cx, f.cz + 1),
                (f.cx + 1, f.cz + 1),
            ] {
                self.place(report, x, y, z, f.wood);
            }
        }

        let bottom = f.height - 3;
        let top = f.height + 1;
        let mid = band_mid(bottom, top);
        let center_x = f.cx as f32 + 0.5;
        let center_z = f.cz as f32 + 0.5;
        for y in bottom..=top {
            for x in f.cx - RADIUS..=f.cx + RADIUS + 1 {
                for z in f.cz - RADIUS..=f.cz + RADIUS + 1 {
                    let dx = x as f32 - center_x;
                    let dy = y as f32 - mid;
                    let dz = z as f32 - center_z;
                    let distance = (dx * dx + dy * dy * 1.2 + dz * dz).sqrt();
                    // Drawn for every cell, inside the canopy or not.
                    let erosion = self.rng.range_i32_inclusive(0, 100) as f32 / 100.0 * 0.8;
                    let in_trunk = (f.cx..=f.cx + 1).contains(&x)
                        && (f.cz..=f.cz + 1).contains(&z)
                        && y < f.height;
                    if distance <= RADIUS as f32 - erosion && !in_trunk {
                        self.place(report, x, y, z, f.leaves);
                    }
                }
            }
        }
    }
}
