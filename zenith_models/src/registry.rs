// Block texture registry: block id -> six face texture paths.
//
// `TextureLookup` is the only seam `VoxelGrid::materialize` depends on.
// `BlockRegistry` is the JSON-backed implementation. Two file layouts are
// accepted:
//
//   {"blocks": [{"id": "WOOD_OAK", "textures": {"top": "...", ...}}, ...]}
//   {"WOOD_OAK": {"top": "...", ...}, ...}
//
// A textures object either names faces individually (missing faces stay
// empty) or uses `"all"` for all six. Every path is prefixed with the
// registry's assets directory. Entries in the list layout that lack an `id`
// or `textures` are skipped.
//
// See also: `grid.rs` for materialization, `config.rs` for where the assets
// prefix normally comes from.

use crate::error::ModelError;
use crate::types::BlockId;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Texture paths for the six faces of a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTextures {
    pub top: String,
    pub bottom: String,
    pub front: String,
    pub back: String,
    pub left: String,
    pub right: String,
}

impl BlockTextures {
    /// Same texture on every face.
    pub fn uniform(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            top: path.clone(),
            bottom: path.clone(),
            front: path.clone(),
            back: path.clone(),
            left: path.clone(),
            right: path,
        }
    }
}

/// Lookup from block id to face textures, consumed by materialization.
pub trait TextureLookup {
    fn face_textures(&self, block: &BlockId) -> Option<&BlockTextures>;
}

/// Face entries as written in a registry file.
#[derive(Debug, Default, Deserialize)]
struct FaceEntry {
    all: Option<String>,
    top: Option<String>,
    bottom: Option<String>,
    front: Option<String>,
    back: Option<String>,
    left: Option<String>,
    right: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListedEntry {
    id: Option<String>,
    textures: Option<FaceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryFile {
    Listed { blocks: Vec<ListedEntry> },
    Keyed(BTreeMap<String, FaceEntry>),
}

/// In-memory texture registry, usually loaded from `BlockRegistry.json`.
#[derive(Clone, Debug, Default)]
pub struct BlockRegistry {
    assets_path: String,
    entries: BTreeMap<BlockId, BlockTextures>,
}

impl BlockRegistry {
    /// Empty registry whose texture paths will be prefixed with `assets_path`.
    pub fn new(assets_path: impl Into<String>) -> Self {
        Self {
            assets_path: assets_path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn assets_path(&self) -> &str {
        &self.assets_path
    }

    /// Register (or replace) textures for `block`. Paths are stored as given.
    pub fn insert(&mut self, block: impl Into<BlockId>, textures: BlockTextures) {
        self.entries.insert(block.into(), textures);
    }

    /// Replace the registry contents with the entries in `json`.
    ///
    /// Returns the number of blocks loaded. On a parse error the existing
    /// entries are left untouched.
    pub fn load_str(&mut self, json: &str) -> Result<usize, ModelError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        let pairs: Vec<(String, FaceEntry)> = match file {
            RegistryFile::Listed { blocks } => blocks
                .into_iter()
                .filter_map(|entry| Some((entry.id?, entry.textures?)))
                .collect(),
            RegistryFile::Keyed(map) => map.into_iter().collect(),
        };

        self.entries.clear();
        for (id, faces) in pairs {
            let textures = self.resolve(faces);
            self.entries.insert(BlockId::from(id), textures);
        }
        info!("Loaded {} block types into texture registry", self.entries.len());
        Ok(self.entries.len())
    }

    /// Read and load a registry file. See `load_str`.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&json)
    }

    pub fn has_block(&self, block: &BlockId) -> bool {
        self.entries.contains_key(block)
    }

    pub fn block_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries, ordered by block id.
    pub fn iter(&self) -> impl Iterator<Item = (&BlockId, &BlockTextures)> {
        self.entries.iter()
    }

    /// The entry for `block` as an owned pair, if registered.
    pub fn block_by_id(&self, block: &BlockId) -> Option<(BlockId, BlockTextures)> {
        self.entries
            .get_key_value(block)
            .map(|(id, textures)| (id.clone(), textures.clone()))
    }

    fn resolve(&self, faces: FaceEntry) -> BlockTextures {
        let full = |rel: Option<String>| {
            rel.map(|p| format!("{}{}", self.assets_path, p))
                .unwrap_or_default()
        };
        if let Some(all) = faces.all {
            return BlockTextures::uniform(format!("{}{}", self.assets_path, all));
        }
        BlockTextures {
            top: full(faces.top),
            bottom: full(faces.bottom),
            front: full(faces.front),
            back: full(faces.back),
            left: full(faces.left),
            right: full(faces.right),
        }
    }
}

impl TextureLookup for BlockRegistry {
    fn face_textures(&self, block: &BlockId) -> Option<&BlockTextures> {
        self.entries.get(block)
    }
}
