//! Stand-ins for the external recipe, store, and recognition services
//!
//! Each service is a trait so callers can swap in their own implementation.
//! The bundled implementations read deterministic YAML fixtures; only
//! [`RandomRecognizer`] involves randomness, and it takes its RNG from the caller.

pub mod catalog;
pub mod fixtures;
pub mod recognition;
pub mod stores;
pub mod suggest;

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::{Recipe, RecipeCategory, Store};
use crate::yaml::YamlError;

pub use catalog::{FixtureCatalog, DEFAULT_INGREDIENTS, TRENDING_LIMIT};
pub use recognition::{FixedRecognizer, RandomRecognizer, INGREDIENT_POOL};
pub use stores::{FixtureStoreFinder, DEFAULT_LOCATION};
pub use suggest::{suggest, Suggestion, DEFAULT_SUGGESTIONS};

/// Errors loading provider data
#[derive(Debug, Error, Diagnostic)]
pub enum ProviderError {
    #[error("Embedded fixture '{0}' is missing")]
    #[diagnostic(code(larder::fixtures::missing))]
    MissingFixture(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),
}

/// Recipe search and lookup
pub trait RecipeProvider {
    /// Recipes whose title or ingredients contain `query`, optionally limited to one category
    fn search(&self, query: &str, category: Option<RecipeCategory>) -> Vec<Recipe>;

    /// Look up one recipe
    fn recipe(&self, id: &str) -> Option<Recipe>;

    /// Other recipes in the same category
    fn related(&self, recipe: &Recipe, limit: usize) -> Vec<Recipe>;

    /// Recipes flagged as trending, in catalog order
    fn trending(&self, limit: usize) -> Vec<Recipe>;

    /// Ingredients needed for a recipe
    ///
    /// Unknown recipes and recipes without ingredients yield [`DEFAULT_INGREDIENTS`].
    fn ingredients_for(&self, id: &str) -> Vec<String> {
        match self.recipe(id) {
            Some(recipe) if !recipe.ingredients.is_empty() => recipe.ingredients,
            _ => DEFAULT_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Store lookup near a location
pub trait StoreFinder {
    /// Stores near `location`, flagged and ordered by whether they carry `needed`
    fn find_stores(&self, location: Option<&str>, needed: &[String]) -> Vec<Store>;
}

/// Identifies ingredients from a camera frame
pub trait IngredientRecognizer {
    fn identify(&mut self) -> Vec<String>;
}
