//! CLI command implementations

pub mod completions;
pub mod due;
pub mod format;
pub mod render;
pub mod tables;
pub mod trace;
