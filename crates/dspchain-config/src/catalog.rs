//! Catalog discovery and the registry-facing preset catalog.
//!
//! [`load_catalog`] turns a [`CatalogPaths`] into an ordered list of
//! records: the current configuration first (if the file exists), then every
//! `*.txt` file under the preset directory sorted by name. Any malformed
//! file fails the whole load.
//!
//! [`PresetCatalog`] owns the loaded records on behalf of a preset registry,
//! refuses to load twice, and implements the [`PresetDelegate`] and
//! [`PresetSerializer`] capabilities the registry talks to.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::PresetError;
use crate::format::GrammarVariant;
use crate::paths::{CatalogPaths, preset_name_from_file_name, relative_preset_path};
use crate::preset::{CURRENT_PRESET_NAME, PresetRecord};

/// Per-entry permissions a preset registry asks about.
pub trait PresetDelegate {
    /// Whether the entry at `index` may be edited.
    fn is_editable(&self, index: usize) -> bool;

    /// Whether the entry at `index` may be saved.
    fn is_saveable(&self, index: usize) -> bool;
}

/// Loading and persisting a registry's entries.
pub trait PresetSerializer {
    /// Populate the (empty) collection from storage.
    fn load(&mut self) -> Result<(), PresetError>;

    /// Persist every entry.
    fn save(&self) -> Result<(), PresetError>;

    /// Persist the entry at `index`.
    fn save_preset(&self, index: usize) -> Result<(), PresetError>;
}

/// Load the current configuration and the preset library.
///
/// A missing current-configuration file or preset directory is not an error.
/// Any other I/O failure, or any file that fails to parse, aborts the load.
pub fn load_catalog(paths: &CatalogPaths) -> Result<Vec<PresetRecord>, PresetError> {
    let mut records = Vec::new();

    if let Some(current) = load_current(&paths.current_config)? {
        records.push(current);
    }

    for (name, path) in library_files(&paths.preset_dir)? {
        let record = PresetRecord::load(name, &path, GrammarVariant::Bare).inspect_err(|e| {
            tracing::warn!("failed to load preset {}: {e}", path.display());
        })?;
        records.push(record);
    }

    tracing::info!(
        "loaded {} presets from {}",
        records.len(),
        paths.preset_dir.display()
    );
    Ok(records)
}

fn load_current(path: &Path) -> Result<Option<PresetRecord>, PresetError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no current configuration at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(PresetError::read_file(path, e)),
    };

    let mut record =
        PresetRecord::from_text(CURRENT_PRESET_NAME, &content, GrammarVariant::WithEnabledFlag)
            .inspect_err(|e| {
                tracing::warn!("failed to load current configuration {}: {e}", path.display());
            })?;
    record.is_current = true;
    record.save_path = Some(path.to_path_buf());
    Ok(Some(record))
}

/// `(name, path)` of every preset file under `dir`, sorted by name.
///
/// Sub-directories are walked; a nested preset is named by its path relative
/// to `dir`, e.g. `factory/rock`.
fn library_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, PresetError> {
    match std::fs::metadata(dir) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no preset directory at {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(PresetError::read_dir(dir, e)),
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            PresetError::read_dir(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(relative) = relative_preset_path(dir, entry.path()) else {
            tracing::warn!("skipping non UTF-8 file name {}", entry.path().display());
            continue;
        };
        if let Some(name) = preset_name_from_file_name(&relative) {
            files.push((name.to_string(), entry.into_path()));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// The ordered preset collection of one catalog location.
///
/// # Example
///
/// ```rust,no_run
/// use dspchain_config::{CatalogPaths, PresetCatalog, PresetSerializer};
///
/// let mut catalog = PresetCatalog::new(CatalogPaths::in_config_dir("/home/me/.config/dspchain"));
/// catalog.load().unwrap();
/// for preset in catalog.iter() {
///     println!("{} ({} stages)", preset.name, preset.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    paths: CatalogPaths,
    records: Vec<PresetRecord>,
}

impl PresetCatalog {
    /// Create an empty catalog for `paths`.
    pub fn new(paths: CatalogPaths) -> Self {
        Self {
            paths,
            records: Vec::new(),
        }
    }

    /// Create and load a catalog in one step.
    pub fn open(paths: CatalogPaths) -> Result<Self, PresetError> {
        let mut catalog = Self::new(paths);
        catalog.load()?;
        Ok(catalog)
    }

    /// Locations this catalog reads from and writes to.
    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a preset by index.
    pub fn get(&self, index: usize) -> Option<&PresetRecord> {
        self.records.get(index)
    }

    /// Iterate over presets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &PresetRecord> {
        self.records.iter()
    }

    /// All presets in catalog order.
    pub fn records(&self) -> &[PresetRecord] {
        &self.records
    }

    /// First preset with the given name.
    pub fn find(&self, name: &str) -> Option<&PresetRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// The preset loaded from the current-configuration file, if any.
    pub fn current(&self) -> Option<&PresetRecord> {
        self.records.iter().find(|r| r.is_current)
    }

    fn save_path_for(&self, record: &PresetRecord) -> PathBuf {
        record
            .save_path
            .clone()
            .unwrap_or_else(|| self.paths.preset_file(&record.name))
    }
}

impl PresetDelegate for PresetCatalog {
    fn is_editable(&self, index: usize) -> bool {
        index < self.records.len()
    }

    fn is_saveable(&self, index: usize) -> bool {
        index < self.records.len()
    }
}

impl PresetSerializer for PresetCatalog {
    /// Load the catalog. Fails with [`PresetError::AlreadyLoaded`] before
    /// touching the filesystem if it already holds records; on any other
    /// failure the catalog is left empty.
    fn load(&mut self) -> Result<(), PresetError> {
        if !self.records.is_empty() {
            return Err(PresetError::AlreadyLoaded);
        }
        self.records = load_catalog(&self.paths)?;
        Ok(())
    }

    fn save(&self) -> Result<(), PresetError> {
        (0..self.records.len()).try_for_each(|index| self.save_preset(index))
    }

    /// The current configuration is written to its save path with enabled
    /// flags; library presets go to `<preset_dir>/<name>.txt` without them.
    fn save_preset(&self, index: usize) -> Result<(), PresetError> {
        let record = self.records.get(index).ok_or(PresetError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })?;
        record.save(self.save_path_for(record), record.variant())
    }
}
