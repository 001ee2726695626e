//! Filesystem locations of the preset catalog.
//!
//! The catalog lives under a single configuration directory:
//!
//! - **Current configuration**: `<config>/dspconfig`
//! - **Preset library**: `<config>/presets/dsp/**/*.txt`
//!
//! The default configuration directory is `~/.config/dspchain/` (Linux),
//! `~/Library/Application Support/dspchain/` (macOS) or
//! `%APPDATA%\dspchain\` (Windows). Both locations can be overridden in
//! `catalog.toml`, see [`crate::settings`].
//!
//! # Example
//!
//! ```rust,no_run
//! use dspchain_config::paths::CatalogPaths;
//!
//! let paths = CatalogPaths::resolve(None).unwrap();
//! println!("presets: {}", paths.preset_dir.display());
//! println!("current: {}", paths.current_config.display());
//! ```

use std::path::{Path, PathBuf};

use crate::error::PresetError;
use crate::settings::CatalogSettings;

/// Application name used for directory paths.
const APP_NAME: &str = "dspchain";

/// Preset library location relative to the config directory.
const PRESETS_SUBDIR: [&str; 2] = ["presets", "dsp"];

/// File name of the current configuration.
pub const CURRENT_CONFIG_FILE: &str = "dspconfig";

/// Suffix identifying preset files in the library directory.
pub const PRESET_SUFFIX: &str = ".txt";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Where the catalog loader looks for presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// Directory of bare-variant `*.txt` presets.
    pub preset_dir: PathBuf,
    /// Current-configuration file, parsed with the enabled-flag variant.
    pub current_config: PathBuf,
}

impl CatalogPaths {
    /// Create paths from explicit locations.
    pub fn new(preset_dir: impl Into<PathBuf>, current_config: impl Into<PathBuf>) -> Self {
        Self {
            preset_dir: preset_dir.into(),
            current_config: current_config.into(),
        }
    }

    /// Default layout inside `config_dir`.
    pub fn in_config_dir(config_dir: impl AsRef<Path>) -> Self {
        let config_dir = config_dir.as_ref();
        let preset_dir = PRESETS_SUBDIR
            .iter()
            .fold(config_dir.to_path_buf(), |dir, part| dir.join(part));
        Self {
            preset_dir,
            current_config: config_dir.join(CURRENT_CONFIG_FILE),
        }
    }

    /// Resolve paths for `config_dir` (or [`user_config_dir`]), applying any
    /// overrides from its `catalog.toml`.
    pub fn resolve(config_dir: Option<&Path>) -> Result<Self, PresetError> {
        let config_dir = config_dir.map_or_else(user_config_dir, Path::to_path_buf);
        let settings = CatalogSettings::load_from_dir(&config_dir)?;
        Ok(settings.apply(&config_dir))
    }

    /// Path a library preset named `name` is stored at.
    pub fn preset_file(&self, name: &str) -> PathBuf {
        self.preset_dir.join(format!("{name}{PRESET_SUFFIX}"))
    }
}

/// Preset name for a library file name, or `None` if it lacks the suffix.
///
/// ```rust
/// use dspchain_config::paths::preset_name_from_file_name;
///
/// assert_eq!(preset_name_from_file_name("clean.txt"), Some("clean"));
/// assert_eq!(preset_name_from_file_name("notes.md"), None);
/// ```
pub fn preset_name_from_file_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(PRESET_SUFFIX)
}

/// `path` relative to `dir` with `/` separators, or `None` if `path` is not
/// under `dir` or is not valid UTF-8.
///
/// ```rust
/// use dspchain_config::paths::relative_preset_path;
/// use std::path::Path;
///
/// let rel = relative_preset_path(Path::new("/p"), Path::new("/p/factory/rock.txt"));
/// assert_eq!(rel.as_deref(), Some("factory/rock.txt"));
/// ```
pub fn relative_preset_path(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
