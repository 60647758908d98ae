//! Ingredient recognition stand-ins

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::providers::IngredientRecognizer;

/// Ingredients the random recognizer can "see"
pub const INGREDIENT_POOL: &[&str] = &[
    "Tomatoes",
    "Onions",
    "Garlic",
    "Bell Peppers",
    "Chicken",
    "Pasta",
    "Rice",
    "Potatoes",
    "Carrots",
    "Broccoli",
    "Eggs",
    "Cheese",
    "Milk",
    "Butter",
    "Flour",
    "Sugar",
    "Olive Oil",
    "Lemons",
    "Apples",
    "Bananas",
];

const MIN_IDENTIFIED: usize = 3;
const MAX_IDENTIFIED: usize = 6;

/// Picks 3 to 6 distinct ingredients from a pool
#[derive(Debug)]
pub struct RandomRecognizer<R: Rng> {
    rng: R,
    pool: Vec<String>,
}

impl<R: Rng> RandomRecognizer<R> {
    pub fn new(rng: R) -> Self {
        Self::with_pool(rng, INGREDIENT_POOL.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_pool(rng: R, pool: Vec<String>) -> Self {
        Self { rng, pool }
    }
}

impl RandomRecognizer<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomRecognizer<StdRng> {
    /// Reproducible recognizer
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IngredientRecognizer for RandomRecognizer<R> {
    fn identify(&mut self) -> Vec<String> {
        let count = self
            .rng
            .random_range(MIN_IDENTIFIED..=MAX_IDENTIFIED)
            .min(self.pool.len());

        let mut picked = self.pool.clone();
        picked.shuffle(&mut self.rng);
        picked.truncate(count);
        picked
    }
}

/// Always identifies the same ingredients
#[derive(Debug, Clone, Default)]
pub struct FixedRecognizer {
    ingredients: Vec<String>,
}

impl FixedRecognizer {
    pub fn new<I>(ingredients: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl IngredientRecognizer for FixedRecognizer {
    fn identify(&mut self) -> Vec<String> {
        self.ingredients.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_recognizer_bounds() {
        let mut recognizer = RandomRecognizer::seeded(7);
        for _ in 0..50 {
            let found = recognizer.identify();
            assert!((MIN_IDENTIFIED..=MAX_IDENTIFIED).contains(&found.len()));

            let unique: HashSet<&String> = found.iter().collect();
            assert_eq!(unique.len(), found.len());
            assert!(found.iter().all(|f| INGREDIENT_POOL.contains(&f.as_str())));
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = RandomRecognizer::seeded(42).identify();
        let b = RandomRecognizer::seeded(42).identify();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_pool_is_capped() {
        let mut recognizer =
            RandomRecognizer::with_pool(StdRng::seed_from_u64(1), vec!["Kale".to_string()]);
        assert_eq!(recognizer.identify(), vec!["Kale".to_string()]);
    }

    #[test]
    fn test_fixed_recognizer() {
        let mut recognizer = FixedRecognizer::new(["Eggs", "Flour"]);
        assert_eq!(recognizer.identify(), vec!["Eggs", "Flour"]);
    }
}
