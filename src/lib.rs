//! Larder: recipes, dietary preferences, and a shopping list
//!
//! The library holds the persistent shopping list and user profile, the
//! dietary matching rules, and fixture-backed stand-ins for the recipe,
//! store, and ingredient recognition services. The `larder` binary is a thin
//! command-line layer over it.

pub mod cli;
pub mod core;
pub mod entities;
pub mod providers;
pub mod yaml;
