//! Preset records, stage nodes, and parameter items.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PresetError;
use crate::format::{self, GrammarVariant};

/// Display name given to the record loaded from the current-configuration file.
pub const CURRENT_PRESET_NAME: &str = "Custom";

/// One positional parameter value inside a [`StageNode`].
///
/// The text format does not name parameters; an item is identified only by
/// its zero-based position within the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParamItem {
    /// Zero-based position within the node.
    pub index: usize,
    /// Line content, trimmed of surrounding whitespace. May be empty.
    pub value: String,
}

impl ParamItem {
    /// Synthetic name of the item: its decimal index.
    pub fn name(&self) -> String {
        self.index.to_string()
    }
}

/// One processing stage in a preset's chain.
///
/// # Example
///
/// ```rust
/// use dspchain_config::StageNode;
///
/// let node = StageNode::new("eq").with_items(["1.0", "2.0"]);
/// assert_eq!(node.stage_type, "eq");
/// assert_eq!(node.enabled, None);
/// assert_eq!(node.values(), vec!["1.0", "2.0"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageNode {
    /// Stage kind, the first token of the node header.
    #[serde(rename = "type")]
    pub stage_type: String,

    /// Enabled state. Only present when parsed with
    /// [`GrammarVariant::WithEnabledFlag`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Positional parameter values in file order.
    #[serde(default)]
    pub items: Vec<ParamItem>,
}

impl StageNode {
    /// Create a node with no enabled flag and no items.
    pub fn new(stage_type: impl Into<String>) -> Self {
        Self {
            stage_type: stage_type.into(),
            enabled: None,
            items: Vec::new(),
        }
    }

    /// Set the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Append one item at the next position.
    pub fn with_item(mut self, value: impl Into<String>) -> Self {
        self.push_item(value);
        self
    }

    /// Append several items in order.
    pub fn with_items<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push_item(value);
        }
        self
    }

    /// Append an item, assigning it the next index.
    pub fn push_item(&mut self, value: impl Into<String>) {
        let index = self.items.len();
        self.items.push(ParamItem {
            index,
            value: value.into(),
        });
    }

    /// Value of the item at `index`.
    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.value.as_str())
    }

    /// All item values in order.
    pub fn values(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.value.as_str()).collect()
    }

    /// Whether the stage is active. Nodes without a flag count as enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// A named, ordered chain of stage configurations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetRecord {
    /// Display name.
    pub name: String,

    /// Stages in processing order.
    #[serde(default)]
    pub nodes: Vec<StageNode>,

    /// True only for the record loaded from the current-configuration file.
    #[serde(default)]
    pub is_current: bool,

    /// Where the record is written back to, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path: Option<PathBuf>,
}

impl PresetRecord {
    /// Create a record from a name and its parsed nodes.
    pub fn new(name: impl Into<String>, nodes: Vec<StageNode>) -> Self {
        Self {
            name: name.into(),
            nodes,
            is_current: false,
            save_path: None,
        }
    }

    /// Read and parse a preset file.
    ///
    /// I/O failures come back as [`PresetError::ReadFile`]; malformed text as
    /// the parser's own error.
    pub fn load(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        variant: GrammarVariant,
    ) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PresetError::read_file(path, e))?;
        let record = Self::from_text(name, &content, variant)?;
        tracing::debug!(
            "parsed preset '{}' from {}: {} nodes",
            record.name,
            path.display(),
            record.nodes.len()
        );
        Ok(record)
    }

    /// Parse a preset from text.
    pub fn from_text(
        name: impl Into<String>,
        content: &str,
        variant: GrammarVariant,
    ) -> Result<Self, PresetError> {
        Ok(Self::new(name, format::parse(content, variant)?))
    }

    /// Render the record in the given grammar variant.
    pub fn to_text(&self, variant: GrammarVariant) -> String {
        format::write_preset(&self.nodes, variant)
    }

    /// Write the record to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>, variant: GrammarVariant) -> Result<(), PresetError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| PresetError::create_dir(parent, e))?;
        }

        std::fs::write(path, self.to_text(variant))
            .map_err(|e| PresetError::write_file(path, e))?;
        tracing::debug!("saved preset '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// The grammar variant this record is persisted in.
    pub fn variant(&self) -> GrammarVariant {
        if self.is_current {
            GrammarVariant::WithEnabledFlag
        } else {
            GrammarVariant::Bare
        }
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the preset has no stages.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stage types in chain order.
    pub fn stage_types(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.stage_type.as_str()).collect()
    }
}
