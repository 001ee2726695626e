//! Optional `catalog.toml` overrides for catalog locations.
//!
//! ```toml
//! # relative paths resolve against the config directory
//! preset_dir = "library"
//! current_config = "/etc/dspchain/dspconfig"
//! ```

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PresetError;
use crate::paths::CatalogPaths;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "catalog.toml";

/// Overrides read from `catalog.toml`. Missing keys keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogSettings {
    /// Preset library directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_dir: Option<PathBuf>,

    /// Current-configuration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_config: Option<PathBuf>,
}

impl CatalogSettings {
    /// Parse settings from TOML text.
    pub fn from_toml(toml_str: &str, path: impl Into<PathBuf>) -> Result<Self, PresetError> {
        toml::from_str(toml_str).map_err(|source| PresetError::Settings {
            path: path.into(),
            source,
        })
    }

    /// Load `catalog.toml` from `config_dir`. A missing file yields defaults.
    pub fn load_from_dir(config_dir: &Path) -> Result<Self, PresetError> {
        let path = config_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("using catalog settings from {}", path.display());
                Self::from_toml(&content, path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PresetError::read_file(path, e)),
        }
    }

    /// Resolve catalog paths for `config_dir` with these overrides applied.
    pub fn apply(&self, config_dir: &Path) -> CatalogPaths {
        let mut paths = CatalogPaths::in_config_dir(config_dir);
        if let Some(dir) = &self.preset_dir {
            paths.preset_dir = config_dir.join(dir);
        }
        if let Some(file) = &self.current_config {
            paths.current_config = config_dir.join(file);
        }
        paths
    }
}
