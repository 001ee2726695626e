//! CLI command implementations.

pub mod check;
pub mod common;
pub mod list;
pub mod paths;
pub mod show;
