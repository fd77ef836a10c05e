// Procedural hut generation.
//
// `HutModel` owns a `VoxelGrid` and a `StructureRng`. `generate_hut()` clears
// the grid, draws wall, floor and roof materials (in that order) from the
// pools in `blocks.rs`, and builds one of four layouts centered on the grid:
//
//   - Basic: 7x7 room, 5 high, pitched roof.
//   - Round: radius-5 drum, 5 high, conical roof.
//   - Longhouse: 7x15 hall, 6 high, doors at both ends, pitched roof.
//   - Tiered: 11x11, 7x7 and 5x5 storeys of height 4 stacked with flat
//     ceilings between them, pitched roof on top.
//
// Rectangular layouts start at `((W - w) / 2, 0, (D - d) / 2)` with integer
// division. Doors are two-high gaps cut out of an already built wall; windows
// replace a wall cell with `GLASS`. Furniture is optional and placed one
// above the floor relative to the layout center.
//
// No footprint check is made against the grid. A grid smaller than the
// layout produces a truncated hut, and each refused placement or removal is
// listed in the returned `GenerationReport`.
//
// See also: `tree_gen.rs` for the sibling generator, `grid.rs` for the
// container.

use crate::blocks;
use crate::grid::VoxelGrid;
use crate::prng::StructureRng;
use crate::report::GenerationReport;
use crate::seeding::clock_seed;
use crate::types::{Facing, HutStyle};
use log::debug;

const PITCHED_ROOF_LAYERS: i32 = 3;

/// Materials drawn once per hut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HutMaterials {
    pub wall: &'static str,
    pub floor: &'static str,
    pub roof: &'static str,
}

/// Generator for single huts.
#[derive(Clone, Debug)]
pub struct HutModel {
    grid: VoxelGrid,
    rng: StructureRng,
    custom_seed: bool,
}

impl HutModel {
    /// New generator with a clock-derived seed.
    pub fn new(max_width: u32, max_height: u32, max_depth: u32) -> Self {
        Self {
            grid: VoxelGrid::new(max_width, max_height, max_depth),
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

    /// Clear the grid and build one hut of `style`.
    pub fn generate_hut(&mut self, style: HutStyle, with_furnishings: bool) -> GenerationReport {
        self.grid.clear();
        let materials = self.draw_materials();
        debug!(
            "Generating {style} hut: walls {}, floor {}, roof {}, furnishings: {with_furnishings}",
            materials.wall, materials.floor, materials.roof
        );

        let mut report = match style {
            HutStyle::Basic => self.basic(materials, with_furnishings),
            HutStyle::Round => self.round(materials, with_furnishings),
            HutStyle::Longhouse => self.longhouse(materials, with_furnishings),
            HutStyle::Tiered => self.tiered(materials, with_furnishings),
        };
        report.voxel_count = self.grid.voxel_count();
        report
    }

    fn draw_materials(&mut self) -> HutMaterials {
        let mut draw = |pool: &[&'static str]| {
            self.rng.pick(pool).copied().unwrap_or(blocks::PLANKS_OAK)
        };
        let wall = draw(&blocks::WALL_MATERIALS);
        let floor = draw(&blocks::FLOOR_MATERIALS);
        let roof = draw(&blocks::ROOF_MATERIALS);
        HutMaterials { wall, floor, roof }
    }

    /// Top-left corner that centers a `width x depth` footprint.
    fn centered_start(&self, width: i32, depth: i32) -> (i32, i32) {
        let (w, _, d) = self.grid.dimensions();
        ((w as i32 - width) / 2, (d as i32 - depth) / 2)
    }

    fn place(&mut self, report: &mut GenerationReport, x: i32, y: i32, z: i32, block: &str) {
        report.note(self.grid.add_voxel(x, y, z, block));
    }

    // -----------------------------------------------------------------------
    // Layouts
    // -----------------------------------------------------------------------

    fn basic(&mut self, m: HutMaterials, with_furnishings: bool) -> GenerationReport {
        let (width, depth, height) = (7, 7, 5);
        let mut report = GenerationReport::new(height);
        let (sx, sz) = self.centered_start(width, depth);

        self.flat_roof(&mut report, (sx, 0, sz), width, depth, m.floor);
        self.rect_walls(&mut report, (sx, sz), width, depth, 1..height, m.wall);
        self.add_door(&mut report, sx + width / 2, 1, sz, Facing::Front);

        let wy = 3;
        self.add_window(&mut report, sx + 2, wy, sz, Facing::Front);
        self.add_window(&mut report, sx + width - 3, wy, sz, Facing::Front);
        self.add_window(&mut report, sx + width / 2, wy, sz + depth - 1, Facing::Back);
        self.add_window(&mut report, sx, wy, sz + depth / 2, Facing::Left);
        self.add_window(&mut report, sx + width - 1, wy, sz + depth / 2, Facing::Right);

        self.pitched_roof(&mut report, (sx, height, sz), width, depth, m.roof);
        if with_furnishings {
            let center = (sx + width / 2, 0, sz + depth / 2);
            self.add_furnishings(&mut report, center, width, depth, HutStyle::Basic);
        }
        report
    }

    fn round(&mut self, m: HutMaterials, with_furnishings: bool) -> GenerationReport {
        let (radius, height) = (5, 5);
        let mut report = GenerationReport::new(height);
        let (w, _, d) = self.grid.dimensions();
        let (cx, cz) = (w as i32 / 2, d as i32 / 2);
        let r = radius as f32;

        for y in 0..height {
            for x in cx - radius..=cx + radius {
                for z in cz - radius..=cz + radius {
                    let dist = horizontal(x - cx, z - cz);
                    if y == 0 && dist <= r {
                        self.place(&mut report, x, y, z, m.floor);
                    } else if y > 0 && (r - 1.0..=r).contains(&dist) {
                        self.place(&mut report, x, y, z, m.wall);
                    }
                }
            }
        }
        self.add_door(&mut report, cx, 1, cz - radius, Facing::Front);

        let wy = 3;
        self.add_window(&mut report, cx, wy, cz + radius, Facing::Back);
        self.add_window(&mut report, cx + radius, wy, cz, Facing::Right);
        self.add_window(&mut report, cx - radius, wy, cz, Facing::Left);

        self.conical_roof(&mut report, (cx, height, cz), radius, 4, m.roof);
        if with_furnishings {
            self.add_furnishings(&mut report, (cx, 0, cz), radius * 2, radius * 2, HutStyle::Round);
        }
        report
    }

    fn longhouse(&mut self, m: HutMaterials, with_furnishings: bool) -> GenerationReport {
        let (width, depth, height) = (7, 15, 6);
        let mut report = GenerationReport::new(height);
        let (sx, sz) = self.centered_start(width, depth);

        self.flat_roof(&mut report, (sx, 0, sz), width, depth, m.floor);
        self.rect_walls(&mut report, (sx, sz), width, depth, 1..height, m.wall);
        self.add_door(&mut report, sx + width / 2, 1, sz, Facing::Front);
        self.add_door(&mut report, sx + width / 2, 1, sz + depth - 1, Facing::Back);

        let wy = 3;
        for z in (sz + 3..sz + depth - 3).step_by(3) {
            self.add_window(&mut report, sx, wy, z, Facing::Left);
            self.add_window(&mut report, sx + width - 1, wy, z, Facing::Right);
        }

        self.pitched_roof(&mut report, (sx, height, sz), width, depth, m.roof);
        if with_furnishings {
            let center = (sx + width / 2, 0, sz + depth / 2);
            self.add_furnishings(&mut report, center, width, depth, HutStyle::Longhouse);
        }
        report
    }

    fn tiered(&mut self, m: HutMaterials, with_furnishings: bool) -> GenerationReport {
        let (base_w, base_d) = (11, 11);
        let (mid_w, mid_d) = (7, 7);
        let (top_w, top_d) = (5, 5);
        let floor_height = 4;
        let mut report = GenerationReport::new(floor_height);
        let (sx, sz) = self.centered_start(base_w, base_d);

        // Ground storey.
        self.flat_roof(&mut report, (sx, 0, sz), base_w, base_d, m.floor);
        self.rect_walls(&mut report, (sx, sz), base_w, base_d, 1..floor_height, m.wall);
        self.add_door(&mut report, sx + base_w / 2, 1, sz, Facing::Front);
        let wy = 3;
        for x in [sx + 3, sx + base_w - 4] {
            self.add_window(&mut report, x, wy, sz, Facing::Front);
            self.add_window(&mut report, x, wy, sz + base_d - 1, Facing::Back);
        }
        for z in [sz + 3, sz + base_d - 4] {
            self.add_window(&mut report, sx, wy, z, Facing::Left);
            self.add_window(&mut report, sx + base_w - 1, wy, z, Facing::Right);
        }
        self.flat_roof(&mut report, (sx, floor_height, sz), base_w, base_d, m.floor);

        // Middle storey.
        let mid_x = sx + (base_w - mid_w) / 2;
        let mid_z = sz + (base_d - mid_d) / 2;
        let mid_y = floor_height;
        self.rect_walls(
            &mut report,
            (mid_x, mid_z),
            mid_w,
            mid_d,
            mid_y + 1..mid_y + floor_height,
            m.wall,
        );
        let wy = mid_y + 2;
        self.add_window(&mut report, mid_x + mid_w / 2, wy, mid_z, Facing::Front);
        self.add_window(&mut report, mid_x + mid_w / 2, wy, mid_z + mid_d - 1, Facing::Back);
        self.add_window(&mut report, mid_x, wy, mid_z + mid_d / 2, Facing::Left);
        self.add_window(&mut report, mid_x + mid_w - 1, wy, mid_z + mid_d / 2, Facing::Right);
        self.flat_roof(&mut report, (mid_x, mid_y + floor_height, mid_z), mid_w, mid_d, m.floor);

        // Top storey is one block shorter and carries the roof.
        let top_x = mid_x + (mid_w - top_w) / 2;
        let top_z = mid_z + (mid_d - top_d) / 2;
        let top_y = mid_y + floor_height;
        self.rect_walls(
            &mut report,
            (top_x, top_z),
            top_w,
            top_d,
            top_y + 1..top_y + floor_height - 1,
            m.wall,
        );
        self.pitched_roof(&mut report, (top_x, top_y + floor_height - 1, top_z), top_w, top_d, m.roof);

        if with_furnishings {
            let center = (sx + base_w / 2, 0, sz + base_d / 2);
            self.add_furnishings(&mut report, center, base_w, base_d, HutStyle::Tiered);
        }
        report
    }

    // -----------------------------------------------------------------------
    // Shared pieces
    // -----------------------------------------------------------------------

    /// Hollow rectangular walls on every layer in `ys`.
    fn rect_walls(
        &mut self,
        report: &mut GenerationReport,
        (sx, sz): (i32, i32),
        width: i32,
        depth: i32,
        ys: std::ops::Range<i32>,
        material: &str,
    ) {
        for y in ys {
            for x in sx..sx + width {
                self.place(report, x, y, sz, material);
                self.place(report, x, y, sz + depth - 1, material);
            }
            for z in sz + 1..sz + depth - 1 {
                self.place(report, sx, y, z, material);
                self.place(report, sx + width - 1, y, z, material);
            }
        }
    }

    /// Replace the cell at (x, y, z) with glass.
    pub fn add_window(
        &mut self,
        report: &mut GenerationReport,
        x: i32,
        y: i32,
        z: i32,
        _facing: Facing,
    ) {
        if self.grid.is_occupied(x, y, z) {
            report.note(self.grid.remove_voxel(x, y, z));
        }
        self.place(report, x, y, z, blocks::GLASS);
    }

    /// Cut a two-high opening with its bottom at (x, y, z).
    pub fn add_door(
        &mut self,
        report: &mut GenerationReport,
        x: i32,
        y: i32,
        z: i32,
        _facing: Facing,
    ) {
        report.note(self.grid.remove_voxel(x, y, z));
        report.note(self.grid.remove_voxel(x, y + 1, z));
    }

    /// Filled rectangle on a single layer. Also used for floors.
    pub fn flat_roof(
        &mut self,
        report: &mut GenerationReport,
        (sx, y, sz): (i32, i32, i32),
        width: i32,
        depth: i32,
        material: &str,
    ) {
        for x in sx..sx + width {
            for z in sz..sz + depth {
                self.place(report, x, y, z, material);
            }
        }
    }

    /// Three shrinking perimeter rings topped with one to four peak blocks.
    pub fn pitched_roof(
        &mut self,
        report: &mut GenerationReport,
        (sx, sy, sz): (i32, i32, i32),
        width: i32,
        depth: i32,
        material: &str,
    ) {
        for i in 0..PITCHED_ROOF_LAYERS {
            let (x0, x1) = (sx + i, sx + width - i - 1);
            let (z0, z1) = (sz + i, sz + depth - i - 1);
            for x in x0..=x1 {
                for z in z0..=z1 {
                    if x == x0 || x == x1 || z == z0 || z == z1 {
                        self.place(report, x, sy + i, z, material);
                    }
                }
            }
        }

        let peak_y = sy + PITCHED_ROOF_LAYERS;
        let cx = sx + width / 2;
        let cz = sz + depth / 2;
        let even_w = width % 2 == 0;
        let even_d = depth % 2 == 0;
        if even_w {
            self.place(report, cx - 1, peak_y, cz, material);
        }
        self.place(report, cx, peak_y, cz, material);
        if even_d {
            self.place(report, cx, peak_y, cz - 1, material);
            if even_w {
                self.place(report, cx - 1, peak_y, cz - 1, material);
            }
        }
    }

    /// Stack of `height` rings shrinking from `radius`, plus a peak block.
    pub fn conical_roof(
        &mut self,
        report: &mut GenerationReport,
        (cx, sy, cz): (i32, i32, i32),
        radius: i32,
        height: i32,
        material: &str,
    ) {
        for i in 0..height {
            let ring = radius - i * radius / height;
            let r = ring as f32;
            for x in cx - ring..=cx + ring {
                for z in cz - ring..=cz + ring {
                    let dist = horizontal(x - cx, z - cz);
                    if (r - 1.0..=r).contains(&dist) {
                        self.place(report, x, sy + i, z, material);
                    }
                }
            }
        }
        self.place(report, cx, sy + height, cz, material);
    }

    /// Bed, crafting table, chest, furnace and cauldron one above `floor_y`.
    /// Longhouses and tiered huts also get a jukebox and a double bookshelf.
    pub fn add_furnishings(
        &mut self,
        report: &mut GenerationReport,
        (cx, floor_y, cz): (i32, i32, i32),
        width: i32,
        depth: i32,
        style: HutStyle,
    ) {
        let y = floor_y + 1;
        let bed_x = cx - width / 4;
        let bed_z = cz + depth / 4;
        self.place(report, bed_x, y, bed_z, blocks::WOOL_RED);
        self.place(report, bed_x + 1, y, bed_z, blocks::WOOL_RED);

        self.place(report, cx + width / 4, y, cz - depth / 4, blocks::CRAFTING_TABLE);
        // Chest stand-in.
        self.place(report, cx - width / 4, y, cz - depth / 4, blocks::BOOKSHELF);

        if style == HutStyle::Round {
            self.place(report, cx, y, cz + depth / 4, blocks::FURNACE);
        } else {
            self.place(report, cx + width / 4, y, cz + depth / 3, blocks::FURNACE);
        }
        self.place(report, cx, y, cz, blocks::CAULDRON);

        if matches!(style, HutStyle::Tiered | HutStyle::Longhouse) {
            self.place(report, cx - width / 3, y, cz + depth / 3, blocks::JUKEBOX);
            self.place(report, cx + width / 3, y, cz + depth / 3, blocks::BOOKSHELF);
            self.place(report, cx + width / 3, y + 1, cz + depth / 3, blocks::BOOKSHELF);
        }
    }
}

fn horizontal(dx: i32, dz: i32) -> f32 {
    let (dx, dz) = (dx as f32, dz as f32);
    (dx * dx + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockId;

    fn seeded(w: u32, h: u32, d: u32, seed: u64) -> HutModel {
        let mut model = HutModel::new(w, h, d);
        model.set_random_seed(seed);
        model
    }

    fn at(model: &HutModel, x: i32, y: i32, z: i32) -> Option<&str> {
        model.grid().block_type(x, y, z).map(BlockId::as_str)
    }

    #[test]
    fn materials_come_from_their_pools() {
        for seed in 0..50 {
            let mut model = seeded(16, 16, 16, seed);
            let m = model.draw_materials();
            assert!(blocks::WALL_MATERIALS.contains(&m.wall));
            assert!(blocks::FLOOR_MATERIALS.contains(&m.floor));
            assert!(blocks::ROOF_MATERIALS.contains(&m.roof));
        }
    }

    #[test]
    fn basic_hut_door_windows_and_peak() {
        let mut model = seeded(11, 11, 11, 1);
        let report = model.generate_hut(HutStyle::Basic, false);
        assert!(report.is_complete(), "{:?}", report.rejected);
        assert_eq!(report.height, 5);

        // start = (2, 0, 2)
        assert!(at(&model, 5, 1, 2).is_none());
        assert!(at(&model, 5, 2, 2).is_none());
        for (x, z) in [(4, 2), (6, 2), (5, 8), (2, 5), (8, 5)] {
            assert_eq!(at(&model, x, 3, z), Some(blocks::GLASS), "window at ({x}, {z})");
        }
        // Odd 7x7 footprint: a single peak block at y = 8.
        assert!(at(&model, 5, 8, 5).is_some());
        assert!(at(&model, 4, 8, 5).is_none());
        assert!(at(&model, 5, 8, 4).is_none());
    }

    #[test]
    fn pitched_roof_even_footprint_has_four_peaks() {
        let mut model = seeded(12, 12, 12, 2);
        let mut report = GenerationReport::default();
        model.pitched_roof(&mut report, (0, 0, 0), 8, 6, "ROOF");
        for (x, z) in [(4, 3), (3, 3), (4, 2), (3, 2)] {
            assert_eq!(at(&model, x, 3, z), Some("ROOF"));
        }
        // Layer 1 is the ring inset by one; its interior is open.
        assert_eq!(at(&model, 1, 1, 1), Some("ROOF"));
        assert!(at(&model, 2, 1, 2).is_none());
    }

    #[test]
    fn conical_roof_rings_and_peak() {
        let mut model = seeded(12, 12, 12, 3);
        let mut report = GenerationReport::default();
        model.conical_roof(&mut report, (6, 0, 6), 5, 4, "ROOF");
        // Ring radii are 5, 4, 3, 2.
        assert_eq!(at(&model, 11, 0, 6), Some("ROOF"));
        assert_eq!(at(&model, 10, 1, 6), Some("ROOF"));
        assert_eq!(at(&model, 9, 2, 6), Some("ROOF"));
        assert_eq!(at(&model, 8, 3, 6), Some("ROOF"));
        assert!(at(&model, 6, 3, 6).is_none());
        assert_eq!(at(&model, 6, 4, 6), Some("ROOF"));
    }

    #[test]
    fn round_hut_door_faces_front() {
        let mut model = seeded(16, 16, 16, 4);
        model.generate_hut(HutStyle::Round, false);
        assert!(at(&model, 8, 1, 3).is_none());
        assert!(at(&model, 8, 2, 3).is_none());
        assert!(at(&model, 8, 3, 3).is_some());
        assert_eq!(at(&model, 8, 3, 13), Some(blocks::GLASS));
    }

    #[test]
    fn longhouse_has_two_doors_and_side_windows() {
        let mut model = seeded(16, 16, 16, 5);
        model.generate_hut(HutStyle::Longhouse, false);
        // start = (4, 0, 0)
        for z in [0, 14] {
            assert!(at(&model, 7, 1, z).is_none());
            assert!(at(&model, 7, 2, z).is_none());
        }
        for z in [3, 6, 9] {
            assert_eq!(at(&model, 4, 3, z), Some(blocks::GLASS));
            assert_eq!(at(&model, 10, 3, z), Some(blocks::GLASS));
        }
        assert_ne!(at(&model, 4, 3, 12), Some(blocks::GLASS));
    }

    #[test]
    fn tiered_hut_storeys() {
        let mut model = seeded(16, 16, 16, 6);
        let report = model.generate_hut(HutStyle::Tiered, true);
        assert!(report.is_complete(), "{:?}", report.rejected);
        // start = (2, 0, 2); middle storey at (4, 4), top at (5, 5).
        assert!(at(&model, 7, 1, 2).is_none());
        assert_eq!(at(&model, 5, 3, 2), Some(blocks::GLASS));
        assert_eq!(at(&model, 7, 6, 4), Some(blocks::GLASS));
        assert!(at(&model, 5, 9, 5).is_some());
        assert!(at(&model, 5, 10, 5).is_some());
        assert_eq!(at(&model, 7, 14, 7), at(&model, 5, 11, 5));
        // Furniture around the ground-floor center (7, 0, 7).
        assert_eq!(at(&model, 7, 1, 7), Some(blocks::CAULDRON));
        assert_eq!(at(&model, 4, 1, 10), Some(blocks::JUKEBOX));
        assert_eq!(at(&model, 10, 2, 10), Some(blocks::BOOKSHELF));
    }

    #[test]
    fn round_furnace_sits_near_center() {
        let mut model = seeded(16, 16, 16, 7);
        model.generate_hut(HutStyle::Round, true);
        assert_eq!(at(&model, 8, 1, 10), Some(blocks::FURNACE));
        assert!(!model.grid().blocks().any(|(_, b)| *b == blocks::JUKEBOX));
    }

    #[test]
    fn undersized_grid_truncates_and_reports() {
        let mut model = seeded(5, 4, 5, 8);
        let report = model.generate_hut(HutStyle::Basic, true);
        assert!(!report.is_complete());
        assert!(model.grid().voxel_count() > 0);
        assert_eq!(report.voxel_count, model.grid().voxel_count());
    }
}
