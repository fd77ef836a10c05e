// Properties of the grid and the two generators, checked through the public
// API only.
//
// Covers the grid bounds invariant under random mutation, seeded
// reproducibility of trees and huts, the tree height clamp, trunk/canopy
// separation, hut door and wall geometry, and materialization against a
// registry loaded from disk.

use zenith_models::ModelError;
use zenith_models::blocks;
use zenith_models::grid::VoxelGrid;
use zenith_models::hut_gen::HutModel;
use zenith_models::prng::StructureRng;
use zenith_models::registry::BlockRegistry;
use zenith_models::tree_gen::TreeModel;
use zenith_models::types::{BlockId, GridCoord, HutStyle, TreeSpecies};

/// Sorted (coord, block) snapshot, for comparing two grids.
fn snapshot(grid: &VoxelGrid) -> Vec<(GridCoord, BlockId)> {
    let mut cells: Vec<_> = grid.blocks().map(|(c, b)| (c, b.clone())).collect();
    cells.sort();
    cells
}

#[test]
fn random_mutation_keeps_every_key_in_bounds() {
    let mut rng = StructureRng::new(2024);
    let mut grid = VoxelGrid::new(5, 4, 3);
    for _ in 0..2000 {
        let x = rng.range_i32_inclusive(-2, 6);
        let y = rng.range_i32_inclusive(-2, 6);
        let z = rng.range_i32_inclusive(-2, 6);
        let before = grid.voxel_count();
        if rng.range_i32_inclusive(0, 2) == 0 {
            let res = grid.remove_voxel(x, y, z);
            if !grid.is_within_bounds(x, y, z) {
                assert!(matches!(res, Err(ModelError::OutOfBounds { .. })));
                assert_eq!(grid.voxel_count(), before);
            }
        } else {
            let res = grid.add_voxel(x, y, z, blocks::COBBLESTONE);
            assert_eq!(res.is_ok(), grid.is_within_bounds(x, y, z));
        }
    }
    assert!(
        grid.occupied_positions()
            .iter()
            .all(|c| grid.is_within_bounds(c.x, c.y, c.z))
    );
    assert!(grid.voxel_count() <= 5 * 4 * 3);
}

#[test]
fn clear_empties_grid() {
    let mut model = TreeModel::new(20, 16);
    model.set_random_seed(1);
    model.generate_tree(TreeSpecies::Oak, 0);
    assert!(model.grid().voxel_count() > 0);
    model.grid_mut().clear();
    assert_eq!(model.grid().voxel_count(), 0);
}

#[test]
fn overwrite_replaces_block_without_growing() {
    let mut grid = VoxelGrid::new(3, 3, 3);
    grid.add_voxel(1, 1, 1, "A").unwrap();
    grid.add_voxel(1, 1, 1, "B").unwrap();
    assert_eq!(grid.block_type(1, 1, 1).unwrap(), "B");
    assert_eq!(grid.voxel_count(), 1);
}

#[test]
fn negative_coordinate_is_rejected() {
    let mut grid = VoxelGrid::new(3, 3, 3);
    grid.add_voxel(0, 0, 0, "X").unwrap();
    assert!(grid.add_voxel(-1, 0, 0, "X").is_err());
    assert_eq!(grid.voxel_count(), 1);
}

#[test]
fn add_remove_round_trip() {
    let mut grid = VoxelGrid::new(4, 4, 4);
    let p = GridCoord::new(2, 3, 1);
    grid.add_voxel(p.x, p.y, p.z, blocks::GLASS).unwrap();
    assert!(grid.occupied_positions().contains(&p));
    grid.remove_voxel(p.x, p.y, p.z).unwrap();
    assert!(!grid.occupied_positions().contains(&p));
    assert!(grid.block_type(p.x, p.y, p.z).is_none());
}

#[test]
fn seeded_trees_are_reproducible() {
    for species in TreeSpecies::ALL {
        let mut a = TreeModel::new(24, 20);
        let mut b = TreeModel::new(24, 20);
        a.set_random_seed(99);
        b.set_random_seed(99);
        let ra = a.generate_tree(species, 0);
        let rb = b.generate_tree(species, 0);
        assert_eq!(ra.height, rb.height, "{species}");
        assert_eq!(snapshot(a.grid()), snapshot(b.grid()), "{species}");
    }
}

#[test]
fn seeded_huts_are_reproducible() {
    for style in HutStyle::ALL {
        let mut a = HutModel::new(24, 24, 24);
        let mut b = HutModel::new(24, 24, 24);
        a.set_random_seed(5);
        b.set_random_seed(5);
        a.generate_hut(style, true);
        b.generate_hut(style, true);
        assert_eq!(snapshot(a.grid()), snapshot(b.grid()), "{style}");
    }
}

#[test]
fn reseeding_replays_the_same_tree() {
    let mut model = TreeModel::new(24, 20);
    model.set_random_seed(17);
    model.generate_tree(TreeSpecies::Jungle, 0);
    let first = snapshot(model.grid());
    model.set_random_seed(17);
    model.generate_tree(TreeSpecies::Jungle, 0);
    assert_eq!(first, snapshot(model.grid()));
}

#[test]
fn oak_height_is_clamped_by_short_grid() {
    for seed in 0..10 {
        let mut model = TreeModel::new(6, 16);
        model.set_random_seed(seed);
        let report = model.generate_tree(TreeSpecies::Oak, 0);
        assert_eq!(report.height, 4);
        let mut trunk: Vec<i32> = model
            .grid()
            .blocks()
            .filter(|(_, b)| *b == blocks::WOOD_OAK)
            .map(|(c, _)| {
                assert_eq!((c.x, c.z), (8, 8));
                c.y
            })
            .collect();
        trunk.sort_unstable();
        assert_eq!(trunk, vec![0, 1, 2, 3]);
    }
}

#[test]
fn leaves_never_replace_trunk() {
    for species in [TreeSpecies::Oak, TreeSpecies::Birch, TreeSpecies::DarkOak] {
        for seed in 0..5 {
            let mut model = TreeModel::new(24, 20);
            model.set_random_seed(seed);
            let report = model.generate_tree(species, 0);
            let trunk_columns: &[(i32, i32)] = if species == TreeSpecies::DarkOak {
                &[(10, 10), (11, 10), (10, 11), (11, 11)]
            } else {
                &[(10, 10)]
            };
            for &(x, z) in trunk_columns {
                for y in 0..report.height {
                    assert_eq!(
                        model.grid().block_type(x, y, z).unwrap(),
                        species.wood(),
                        "{species} seed {seed} at ({x}, {y}, {z})"
                    );
                }
            }
        }
    }
}

#[test]
fn basic_hut_door_is_cut_between_walls() {
    let mut model = HutModel::new(11, 11, 11);
    model.set_random_seed(3);
    model.generate_hut(HutStyle::Basic, true);
    // start = ((11 - 7) / 2, 0, (11 - 7) / 2) = (2, 0, 2)
    let grid = model.grid();
    assert!(grid.block_type(5, 1, 2).is_none());
    assert!(grid.block_type(5, 2, 2).is_none());
    let wall = grid.block_type(4, 1, 2).unwrap();
    assert!(blocks::WALL_MATERIALS.iter().any(|m| *wall == *m));
    assert_eq!(grid.block_type(6, 1, 2).unwrap(), wall);
    assert_eq!(grid.block_type(5, 3, 2).unwrap(), wall);
}

#[test]
fn round_hut_walls_stay_in_the_annulus() {
    for seed in 0..5 {
        let mut model = HutModel::new(16, 16, 16);
        model.set_random_seed(seed);
        model.generate_hut(HutStyle::Round, false);
        let (cx, cz) = (8, 8);
        for (c, block) in model.grid().blocks() {
            if !(1..=4).contains(&c.y) || *block == blocks::GLASS {
                continue;
            }
            let d = c.horizontal_distance(cx as f32, cz as f32);
            assert!((4.0..=5.0).contains(&d), "wall cell {c} at distance {d}");
        }
    }
}

#[test]
fn every_generated_block_materializes_with_a_full_registry() {
    let json = serde_json::json!({
        "blocks": blocks::WALL_MATERIALS
            .iter()
            .chain(blocks::FLOOR_MATERIALS.iter())
            .chain(blocks::ROOF_MATERIALS.iter())
            .chain([blocks::GLASS, blocks::WOOL_RED, blocks::CRAFTING_TABLE, blocks::BOOKSHELF,
                    blocks::FURNACE, blocks::CAULDRON, blocks::JUKEBOX].iter())
            .map(|id| serde_json::json!({"id": id, "textures": {"all": format!("{}.png", id.to_lowercase())}}))
            .collect::<Vec<_>>()
    });
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BlockRegistry.json");
    std::fs::write(&path, json.to_string()).unwrap();

    let mut registry = BlockRegistry::new("textures/");
    registry.load_file(&path).unwrap();

    let mut model = HutModel::new(24, 24, 24);
    model.set_random_seed(11);
    model.generate_hut(HutStyle::Longhouse, true);
    model.grid_mut().set_position([100.0, 0.0, 50.0]);
    let report = model.grid_mut().materialize(&registry);

    assert!(report.is_complete(), "{:?}", report.skipped);
    assert_eq!(report.created, model.grid().voxel_count());
    for (coord, obj) in model.grid().render_objects() {
        assert_eq!(
            obj.position,
            [100.0 + coord.x as f32, coord.y as f32, 50.0 + coord.z as f32]
        );
        assert!(obj.textures.top.starts_with("textures/"));
    }
}

#[test]
fn materialization_reports_unregistered_blocks() {
    let mut registry = BlockRegistry::new("");
    registry
        .load_str(r#"{"LEAVES_OAK": {"all": "leaves_oak.png"}}"#)
        .unwrap();

    let mut model = TreeModel::new(20, 16);
    model.set_random_seed(8);
    model.generate_tree(TreeSpecies::Oak, 5);
    let report = model.grid_mut().materialize(&registry);

    assert_eq!(report.skipped.len(), 5);
    assert!(report.skipped.iter().all(|e| matches!(
        e,
        ModelError::UnknownBlockType { block, .. } if *block == blocks::WOOD_OAK
    )));
    assert_eq!(report.created + report.skipped.len(), model.grid().voxel_count());
}
