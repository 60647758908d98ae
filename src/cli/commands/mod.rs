//! CLI command implementations

pub mod completions;
pub mod list;
pub mod profile;
pub mod recipe;
pub mod scan;
pub mod stores;
