//! Recipe records

use serde::{Deserialize, Serialize};

use crate::core::dietary::{match_preferences, DietaryMatch, DietaryPreferences};

/// Recipe category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Cooking,
    Baking,
    Party,
    Healthy,
    Quick,
}

impl RecipeCategory {
    pub fn all() -> &'static [RecipeCategory] {
        &[
            RecipeCategory::Cooking,
            RecipeCategory::Baking,
            RecipeCategory::Party,
            RecipeCategory::Healthy,
            RecipeCategory::Quick,
        ]
    }
}

impl std::fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeCategory::Cooking => write!(f, "cooking"),
            RecipeCategory::Baking => write!(f, "baking"),
            RecipeCategory::Party => write!(f, "party"),
            RecipeCategory::Healthy => write!(f, "healthy"),
            RecipeCategory::Quick => write!(f, "quick"),
        }
    }
}

impl std::str::FromStr for RecipeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cooking" => Ok(RecipeCategory::Cooking),
            "baking" => Ok(RecipeCategory::Baking),
            "party" => Ok(RecipeCategory::Party),
            "healthy" => Ok(RecipeCategory::Healthy),
            "quick" => Ok(RecipeCategory::Quick),
            _ => Err(format!("Unknown recipe category: {}", s)),
        }
    }
}

/// Where a recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    #[default]
    Local,
    External,
}

/// Per-serving nutrition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    /// Grams
    pub protein: u32,
    /// Grams
    pub carbs: u32,
    /// Grams
    pub fat: u32,
    /// Grams
    pub fiber: u32,
}

/// A recipe as returned by a recipe provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Minutes
    pub prep_time: u32,

    pub rating: f32,

    pub category: RecipeCategory,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,

    /// `None` when the provider has no dietary information for the recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,

    #[serde(default)]
    pub source: RecipeSource,

    #[serde(default)]
    pub trending: bool,
}

impl Recipe {
    /// Annotate this recipe against the user's dietary preferences
    pub fn dietary_match(&self, prefs: &DietaryPreferences) -> Option<DietaryMatch> {
        match_preferences(prefs, self.dietary_tags.as_deref())
    }

    /// Whether the query occurs in the title or in any ingredient line
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&query))
    }

    /// Whether any ingredient line mentions `ingredient`
    pub fn uses_ingredient(&self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim().to_lowercase();
        !ingredient.is_empty()
            && self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&ingredient))
    }
}
