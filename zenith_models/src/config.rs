// Viewer configuration loaded from JSON.
//
// Only the parts the generators and materialization need are modelled: the
// grid extents handed to `TreeModel::new` / `HutModel::new`, the directory
// prefix for registry texture paths, and the world offset applied to the
// generated model. Every field has a default, so a partial file (or `{}`)
// is valid. Unknown sections such as window or camera settings are ignored,
// which lets a full application config file be read as-is.
//
// See also: `registry.rs` for where `assets_path` is applied, the
// `zenith_viewer` binary which is the main consumer.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extents of the model grid, in voxels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub vox_width: u32,
    pub vox_depth: u32,
    #[serde(rename = "vox_maxHeight")]
    pub vox_max_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            vox_width: 32,
            vox_depth: 32,
            vox_max_height: 32,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    #[serde(rename = "gridConfig")]
    pub grid: GridConfig,
    /// Prefix joined to every texture path in the block registry.
    pub assets_path: String,
    /// World-space offset of the generated model.
    pub model_position: [f32; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            assets_path: "assets/minecraft/textures/blocks/".to_owned(),
            model_position: [0.0, 0.0, 0.0],
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips() {
        let config = ViewerConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"gridConfig\""));
        assert!(json.contains("\"vox_maxHeight\""));
        let restored = ViewerConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_grid_and_foreign_sections() {
        let json = r#"{
            "window": {"width": 1280, "height": 720, "title": "Zenith"},
            "gridConfig": {"vox_width": 16, "vox_maxHeight": 24},
            "model_position": [1.0, 2.0, 3.0]
        }"#;
        let config = ViewerConfig::from_json(json).unwrap();
        assert_eq!(config.grid.vox_width, 16);
        assert_eq!(config.grid.vox_depth, 32);
        assert_eq!(config.grid.vox_max_height, 24);
        assert_eq!(config.model_position, [1.0, 2.0, 3.0]);
        assert_eq!(config.assets_path, "assets/minecraft/textures/blocks/");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ViewerConfig::from_json(r#"{"gridConfig": {"vox_width": -4}}"#),
            Err(ModelError::Json(_))
        ));
    }
}
