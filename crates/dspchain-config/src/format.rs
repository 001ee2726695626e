//! The line-oriented preset text format.
//!
//! A preset is a sequence of nodes. Each node is a header line, zero or more
//! item lines, and a closing `}` line:
//!
//! ```text
//! eq 1 {
//! 1.0
//! 2.0
//! }
//!
//! comp 0 {
//! 0.5
//! }
//! ```
//!
//! The header is `TYPE {` or, in the current-configuration file,
//! `TYPE FLAG {`, where a `FLAG` of `0` marks the stage disabled. Which shape
//! applies is chosen by the caller through [`GrammarVariant`]; it is never
//! guessed from the content.
//!
//! Item lines are stored verbatim after trimming and are addressed only by
//! position. Blank lines between nodes are ignored, blank lines inside a node
//! are empty items. There is no comment syntax.

use crate::error::PresetError;
use crate::preset::StageNode;

const NODE_OPEN: &str = "{";
const NODE_CLOSE: &str = "}";
const DISABLED_FLAG: &str = "0";

/// Header shape governing one parse or write call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarVariant {
    /// `TYPE FLAG {`, used by the current-configuration file.
    WithEnabledFlag,
    /// `TYPE {`, used by files in the preset directory.
    Bare,
}

impl GrammarVariant {
    /// Number of space-separated tokens a header line must have.
    pub fn header_tokens(self) -> usize {
        match self {
            GrammarVariant::WithEnabledFlag => 3,
            GrammarVariant::Bare => 2,
        }
    }

    /// Whether headers carry the enabled-flag column.
    pub fn has_enabled_flag(self) -> bool {
        matches!(self, GrammarVariant::WithEnabledFlag)
    }
}

/// Parse preset text into its stage nodes.
///
/// Fails with [`PresetError::InvalidFormat`] when a header has the wrong
/// token count or does not end in `{`, and with
/// [`PresetError::TruncatedNode`] when the input ends inside a node. Either
/// way nothing is returned for the file.
///
/// # Example
///
/// ```rust
/// use dspchain_config::{GrammarVariant, parse};
///
/// let nodes = parse("comp 1 {\n0.5\n}\n", GrammarVariant::WithEnabledFlag).unwrap();
/// assert_eq!(nodes[0].stage_type, "comp");
/// assert_eq!(nodes[0].enabled, Some(true));
/// assert_eq!(nodes[0].values(), vec!["0.5"]);
/// ```
pub fn parse(content: &str, variant: GrammarVariant) -> Result<Vec<StageNode>, PresetError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().enumerate();
    let mut nodes = Vec::new();

    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let header_line = idx + 1;
        let mut node = parse_header(line, header_line, variant)?;

        let mut closed = false;
        for (_, raw) in lines.by_ref() {
            let value = raw.trim();
            if value == NODE_CLOSE {
                closed = true;
                break;
            }
            node.push_item(value);
        }

        if !closed {
            return Err(PresetError::TruncatedNode {
                stage_type: node.stage_type,
                line: header_line,
            });
        }
        nodes.push(node);
    }

    Ok(nodes)
}

fn parse_header(line: &str, line_no: usize, variant: GrammarVariant) -> Result<StageNode, PresetError> {
    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();

    let expected = variant.header_tokens();
    if tokens.len() != expected {
        return Err(PresetError::invalid_format(
            line_no,
            format!("expected {expected} header tokens, found {}", tokens.len()),
        ));
    }
    if tokens[expected - 1] != NODE_OPEN {
        return Err(PresetError::invalid_format(
            line_no,
            format!("header must end with '{NODE_OPEN}'"),
        ));
    }

    let mut node = StageNode::new(tokens[0]);
    if variant.has_enabled_flag() {
        node.enabled = Some(tokens[1] != DISABLED_FLAG);
    }
    Ok(node)
}

/// Render stage nodes as preset text.
///
/// Nodes are separated by a blank line. Under
/// [`GrammarVariant::WithEnabledFlag`] the flag is written as `1` or `0`, with
/// a missing flag written as `1`; under [`GrammarVariant::Bare`] it is omitted.
///
/// Output re-parses to the same nodes as long as every stage type is a single
/// non-empty token and no item value is `}` or has surrounding whitespace.
pub fn write_preset(nodes: &[StageNode], variant: GrammarVariant) -> String {
    let mut out = String::new();

    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        out.push_str(&node.stage_type);
        if variant.has_enabled_flag() {
            out.push_str(if node.is_enabled() { " 1" } else { " 0" });
        }
        out.push(' ');
        out.push_str(NODE_OPEN);
        out.push('\n');

        for item in &node.items {
            out.push_str(&item.value);
            out.push('\n');
        }

        out.push_str(NODE_CLOSE);
        out.push('\n');
    }

    out
}
