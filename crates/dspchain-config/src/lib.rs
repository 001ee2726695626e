//! Preset text format and catalog loading for dspchain processing chains.
//!
//! A preset is a named, ordered chain of processing stages. Each stage has a
//! type tag, an optional enabled flag, and a list of positional parameter
//! values. Presets are stored in a small line-oriented text format (see
//! [`format`]).
//!
//! # Features
//!
//! - **Parser and writer**: strict parsing of both header variants, with
//!   line-numbered diagnostics
//! - **Catalog loading**: the current configuration plus a directory of
//!   named presets, in one ordered collection
//! - **Registry capabilities**: [`PresetDelegate`] and [`PresetSerializer`]
//! - **Paths**: platform config directory with `catalog.toml` overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use dspchain_config::{CatalogPaths, PresetCatalog};
//!
//! let paths = CatalogPaths::resolve(None).unwrap();
//! let catalog = PresetCatalog::open(paths).unwrap();
//!
//! if let Some(current) = catalog.current() {
//!     for node in &current.nodes {
//!         println!("{} enabled={} {:?}", node.stage_type, node.is_enabled(), node.values());
//!     }
//! }
//! ```

mod catalog;
mod error;
mod preset;

/// The preset text format.
pub mod format;

/// Platform-specific catalog locations.
pub mod paths;

/// `catalog.toml` overrides.
pub mod settings;

pub use catalog::{PresetCatalog, PresetDelegate, PresetSerializer, load_catalog};
pub use error::PresetError;
pub use format::{GrammarVariant, parse, write_preset};
pub use paths::{CatalogPaths, user_config_dir};
pub use preset::{CURRENT_PRESET_NAME, ParamItem, PresetRecord, StageNode};
pub use settings::CatalogSettings;
