//! Records produced by the external recipe and store services

pub mod recipe;
pub mod store;

pub use recipe::{NutritionalInfo, Recipe, RecipeCategory, RecipeSource};
pub use store::{Store, StoreType};
