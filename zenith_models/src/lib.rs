// zenith_models: procedural voxel structures on a bounded sparse grid.
//
// This crate builds trees and huts out of named blocks and turns them into
// render-ready values through a texture registry. It performs no rendering
// and no window or GPU work; a renderer consumes `VoxelInstance`s.
//
// Module overview:
// - `grid.rs`:     VoxelGrid: bounded sparse block map plus render cache.
// - `tree_gen.rs`: TreeModel: six tree species on a single grid.
// - `hut_gen.rs`:  HutModel: four hut layouts, roofs, doors, windows, furniture.
// - `registry.rs`: BlockRegistry + TextureLookup: block id to face textures.
// - `render.rs`:   VoxelInstance and MaterializeReport.
// - `report.rs`:   GenerationReport returned by every generate call.
// - `config.rs`:   ViewerConfig: grid extents, asset prefix, model offset.
// - `types.rs`:    GridCoord, BlockId, TreeSpecies, HutStyle, Facing.
// - `blocks.rs`:   Block id constants and hut material pools.
// - `error.rs`:    ModelError.
// - `seeding.rs`:  Clock-derived default seed.
// - `prng`:        Re-exported from `zenith_prng`: xoshiro256++ with SplitMix64 seeding.
//
// **Determinism.** Each generator owns its own `StructureRng`. After
// `set_random_seed`, equal parameters produce equal structures. Without an
// explicit seed the stream starts from the wall clock.

pub mod blocks;
pub mod config;
pub mod error;
pub mod grid;
pub mod hut_gen;
pub use zenith_prng as prng;
pub mod registry;
pub mod render;
pub mod report;
pub mod seeding;
pub mod tree_gen;
pub mod types;

pub use error::ModelError;
