// Core value types shared by the grid, the generators, and the registry.
//
// `GridCoord` is the sparse map key; `BlockId` names a material and doubles
// as the registry lookup key. `TreeSpecies` and `HutStyle` are the closed
// sets of tags the two generators dispatch on. `Facing` is carried by window
// and door placement but does not influence geometry.

use crate::blocks;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A cell in a model's grid. Components are in voxel units, y is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Horizontal Euclidean distance to the column at (`cx`, `cz`).
    pub fn horizontal_distance(self, cx: f32, cz: f32) -> f32 {
        let dx = self.x as f32 - cx;
        let dz = self.z as f32 - cz;
        (dx * dx + dz * dz).sqrt()
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Block identifiers
// ---------------------------------------------------------------------------

/// Identifier of a block material, e.g. `WOOD_OAK` or `GLASS`.
///
/// Identifiers are open-ended strings so that any id present in a texture
/// registry can be placed. `AIR` is reserved for empty space.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id denotes empty space.
    pub fn is_air(&self) -> bool {
        self.0 == blocks::AIR
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&BlockId> for BlockId {
    fn from(id: &BlockId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Generator tags
// ---------------------------------------------------------------------------

/// Tree species understood by `TreeModel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeSpecies {
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
}

impl TreeSpecies {
    pub const ALL: [TreeSpecies; 6] = [
        TreeSpecies::Oak,
        TreeSpecies::Spruce,
        TreeSpecies::Birch,
        TreeSpecies::Jungle,
        TreeSpecies::Acacia,
        TreeSpecies::DarkOak,
    ];

    /// Inclusive range a random height is drawn from.
    pub fn height_range(self) -> (i32, i32) {
        match self {
            TreeSpecies::Oak => (4, 6),
            TreeSpecies::Spruce => (7, 11),
            TreeSpecies::Birch => (5, 7),
            TreeSpecies::Jungle => (8, 12),
            TreeSpecies::Acacia => (5, 8),
            TreeSpecies::DarkOak => (6, 9),
        }
    }

    pub fn wood(self) -> &'static str {
        match self {
            TreeSpecies::Oak => blocks::WOOD_OAK,
            TreeSpecies::Spruce => blocks::WOOD_SPRUCE,
            TreeSpecies::Birch => blocks::WOOD_BIRCH,
            TreeSpecies::Jungle => blocks::WOOD_JUNGLE,
            TreeSpecies::Acacia => blocks::WOOD_ACACIA,
            TreeSpecies::DarkOak => blocks::WOOD_BIG_OAK,
        }
    }

    pub fn leaves(self) -> &'static str {
        match self {
            TreeSpecies::Oak => blocks::LEAVES_OAK,
            TreeSpecies::Spruce => blocks::LEAVES_SPRUCE,
            TreeSpecies::Birch => blocks::LEAVES_BIRCH,
            TreeSpecies::Jungle => blocks::LEAVES_JUNGLE,
            TreeSpecies::Acacia => blocks::LEAVES_ACACIA,
            TreeSpecies::DarkOak => blocks::LEAVES_BIG_OAK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TreeSpecies::Oak => "oak",
            TreeSpecies::Spruce => "spruce",
            TreeSpecies::Birch => "birch",
            TreeSpecies::Jungle => "jungle",
            TreeSpecies::Acacia => "acacia",
            TreeSpecies::DarkOak => "dark_oak",
        }
    }
}

impl fmt::Display for TreeSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeSpecies {
    type Err = ModelError;

    /// Case-insensitive; accepts `dark_oak`, `dark-oak` and `darkoak`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "oak" => Ok(TreeSpecies::Oak),
            "spruce" => Ok(TreeSpecies::Spruce),
            "birch" => Ok(TreeSpecies::Birch),
            "jungle" => Ok(TreeSpecies::Jungle),
            "acacia" => Ok(TreeSpecies::Acacia),
            "dark_oak" | "darkoak" => Ok(TreeSpecies::DarkOak),
            _ => Err(ModelError::UnknownName {
                kind: "tree species",
                name: s.to_owned(),
            }),
        }
    }
}

/// Hut layouts understood by `HutModel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HutStyle {
    /// 7x7 square hut with a pitched roof.
    Basic,
    /// Circular hut with a conical roof.
    Round,
    /// 7x15 hall with doors on both short ends.
    Longhouse,
    /// Three stacked, shrinking tiers.
    Tiered,
}

impl HutStyle {
    pub const ALL: [HutStyle; 4] = [
        HutStyle::Basic,
        HutStyle::Round,
        HutStyle::Longhouse,
        HutStyle::Tiered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HutStyle::Basic => "basic",
            HutStyle::Round => "round",
            HutStyle::Longhouse => "longhouse",
            HutStyle::Tiered => "tiered",
        }
    }
}

impl fmt::Display for HutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HutStyle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(HutStyle::Basic),
            "round" => Ok(HutStyle::Round),
            "longhouse" => Ok(HutStyle::Longhouse),
            "tiered" => Ok(HutStyle::Tiered),
            _ => Err(ModelError::UnknownName {
                kind: "hut style",
                name: s.to_owned(),
            }),
        }
    }
}

/// Which way an opening in a wall faces.
///
/// Window and door placement accept a facing but currently place the same
/// geometry regardless of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward -z, the front wall.
    Front,
    /// Toward +x.
    Right,
    /// Toward +z, the back wall.
    Back,
    /// Toward -x.
    Left,
}
