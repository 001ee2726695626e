//! Error types for preset parsing and catalog operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing, loading, or saving presets.
#[derive(Debug, Error)]
pub enum PresetError {
    /// A node header has the wrong shape for the active grammar variant.
    #[error("invalid preset format at line {line}: {reason}")]
    InvalidFormat {
        /// 1-based line number of the offending header.
        line: usize,
        /// What was wrong with the header.
        reason: String,
    },

    /// Input ended before a node's closing `}`.
    #[error("node '{stage_type}' opened at line {line} is missing its closing '}}'")]
    TruncatedNode {
        /// Stage type of the unterminated node.
        stage_type: String,
        /// 1-based line number of the node header.
        line: usize,
    },

    /// The catalog already holds records.
    #[error("preset catalog is already loaded")]
    AlreadyLoaded,

    /// No catalog entry at the requested index.
    #[error("no preset at index {index} (catalog has {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of entries in the catalog.
        len: usize,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to enumerate a directory
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        /// Path of the directory that could not be enumerated.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the catalog settings file
    #[error("invalid settings file '{path}': {source}")]
    Settings {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

impl PresetError {
    /// Create an invalid format error.
    pub fn invalid_format(line: usize, reason: impl Into<String>) -> Self {
        PresetError::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a read directory error.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports malformed preset text.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            PresetError::InvalidFormat { .. } | PresetError::TruncatedNode { .. }
        )
    }
}
