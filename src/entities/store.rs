//! Store records

use serde::{Deserialize, Serialize};

/// Kind of store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    Grocery,
    Farmers,
    Specialty,
}

impl std::fmt::Display for StoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreType::Grocery => write!(f, "grocery"),
            StoreType::Farmers => write!(f, "farmers"),
            StoreType::Specialty => write!(f, "specialty"),
        }
    }
}

/// A store near the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub store_type: StoreType,

    pub address: String,

    #[serde(default)]
    pub phone: String,

    /// Stars, 1-5
    pub rating: u8,

    #[serde(default)]
    pub reviews: u32,

    pub distance_miles: f32,

    #[serde(default)]
    pub hours: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,

    /// Keywords of what the store carries, e.g. "flour" or "cheese"
    #[serde(default)]
    pub stocks: Vec<String>,

    /// Set by the store finder for a given ingredient list
    #[serde(default)]
    pub has_ingredients: bool,
}

impl Store {
    /// Whether one of the stock keywords appears in the ingredient line
    pub fn carries(&self, ingredient: &str) -> bool {
        let ingredient = ingredient.to_lowercase();
        self.stocks
            .iter()
            .map(|s| s.trim().to_lowercase())
            .any(|s| !s.is_empty() && ingredient.contains(&s))
    }

    /// Whether every ingredient is carried; false for an empty list
    pub fn carries_all<S: AsRef<str>>(&self, ingredients: &[S]) -> bool {
        !ingredients.is_empty() && ingredients.iter().all(|i| self.carries(i.as_ref()))
    }
}
