//! Fixture-backed recipe catalog

use std::path::Path;

use crate::entities::{Recipe, RecipeCategory};
use crate::providers::fixtures::load_fixture;
use crate::providers::{ProviderError, RecipeProvider};

/// Pantry staples returned when a recipe's ingredients are unknown
pub const DEFAULT_INGREDIENTS: &[&str] =
    &["Olive oil", "Garlic", "Onions", "Salt", "Pepper", "Fresh herbs"];

/// How many trending recipes to feature
pub const TRENDING_LIMIT: usize = 3;

const CATALOG_FIXTURE: &str = "recipes.yaml";

/// Recipe catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    recipes: Vec<Recipe>,
}

impl FixtureCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The built-in catalog
    pub fn embedded() -> Result<Self, ProviderError> {
        Self::load(None)
    }

    /// Load from `path`, or the built-in catalog when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ProviderError> {
        let recipes: Vec<Recipe> = load_fixture(path, CATALOG_FIXTURE)?;
        tracing::debug!(count = recipes.len(), "loaded recipe catalog");
        Ok(Self::new(recipes))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl RecipeProvider for FixtureCatalog {
    fn search(&self, query: &str, category: Option<RecipeCategory>) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.matches_query(query))
            .filter(|r| category.map_or(true, |c| r.category == c))
            .cloned()
            .collect()
    }

    fn recipe(&self, id: &str) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }

    fn related(&self, recipe: &Recipe, limit: usize) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == recipe.category && r.id != recipe.id)
            .take(limit)
            .cloned()
            .collect()
    }

    fn trending(&self, limit: usize) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.trending)
            .take(limit)
            .cloned()
            .collect()
    }
}
