// Block ids placed by the generators.
//
// These are the registry keys the generators write into a grid. The texture
// registry may define many more; only the ones below are referenced by code.

pub const AIR: &str = "AIR";
pub const GLASS: &str = "GLASS";

// Tree materials.
pub const WOOD_OAK: &str = "WOOD_OAK";
pub const WOOD_SPRUCE: &str = "WOOD_SPRUCE";
pub const WOOD_BIRCH: &str = "WOOD_BIRCH";
pub const WOOD_JUNGLE: &str = "WOOD_JUNGLE";
pub const WOOD_ACACIA: &str = "WOOD_ACACIA";
pub const WOOD_BIG_OAK: &str = "WOOD_BIG_OAK";
pub const LEAVES_OAK: &str = "LEAVES_OAK";
pub const LEAVES_SPRUCE: &str = "LEAVES_SPRUCE";
pub const LEAVES_BIRCH: &str = "LEAVES_BIRCH";
pub const LEAVES_JUNGLE: &str = "LEAVES_JUNGLE";
pub const LEAVES_ACACIA: &str = "LEAVES_ACACIA";
pub const LEAVES_BIG_OAK: &str = "LEAVES_BIG_OAK";

// Building materials.
pub const PLANKS_OAK: &str = "PLANKS_OAK";
pub const PLANKS_SPRUCE: &str = "PLANKS_SPRUCE";
pub const PLANKS_BIRCH: &str = "PLANKS_BIRCH";
pub const PLANKS_ACACIA: &str = "PLANKS_ACACIA";
pub const STONEBRICK: &str = "STONEBRICK";
pub const HARDENED_CLAY_RED: &str = "HARDENED_CLAY_RED";
pub const COBBLESTONE: &str = "COBBLESTONE";

// Furniture.
pub const WOOL_RED: &str = "WOOL_RED";
pub const CRAFTING_TABLE: &str = "CRAFTING_TABLE";
pub const BOOKSHELF: &str = "BOOKSHELF";
pub const FURNACE: &str = "FURNACE";
pub const CAULDRON: &str = "CAULDRON";
pub const JUKEBOX: &str = "JUKEBOX";

/// Wall material pool for huts.
pub const WALL_MATERIALS: [&str; 5] = [
    PLANKS_OAK,
    PLANKS_SPRUCE,
    PLANKS_BIRCH,
    PLANKS_ACACIA,
    STONEBRICK,
];

/// Floor material pool for huts.
pub const FLOOR_MATERIALS: [&str; 4] = [PLANKS_OAK, PLANKS_SPRUCE, PLANKS_BIRCH, STONEBRICK];

/// Roof material pool for huts.
pub const ROOF_MATERIALS: [&str; 5] = [
    PLANKS_OAK,
    PLANKS_SPRUCE,
    PLANKS_BIRCH,
    HARDENED_CLAY_RED,
    COBBLESTONE,
];
