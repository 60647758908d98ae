//! Fixture-backed store finder

use std::cmp::Ordering;
use std::path::Path;

use crate::entities::Store;
use crate::providers::fixtures::load_fixture;
use crate::providers::{ProviderError, StoreFinder};

/// Location used when the caller gives none
pub const DEFAULT_LOCATION: &str = "Your Area";

const STORES_FIXTURE: &str = "stores.yaml";

/// Store directory held in memory
#[derive(Debug, Clone, Default)]
pub struct FixtureStoreFinder {
    stores: Vec<Store>,
}

impl FixtureStoreFinder {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    pub fn embedded() -> Result<Self, ProviderError> {
        Self::load(None)
    }

    /// Load from `path`, or the built-in directory when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ProviderError> {
        let stores: Vec<Store> = load_fixture(path, STORES_FIXTURE)?;
        tracing::debug!(count = stores.len(), "loaded store directory");
        Ok(Self::new(stores))
    }
}

impl StoreFinder for FixtureStoreFinder {
    fn find_stores(&self, location: Option<&str>, needed: &[String]) -> Vec<Store> {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION);

        let mut stores: Vec<Store> = self
            .stores
            .iter()
            .map(|store| Store {
                address: format!("{}, {}", store.address, location),
                has_ingredients: store.carries_all(needed),
                ..store.clone()
            })
            .collect();

        stores.sort_by(store_order);
        stores
    }
}

/// Stores carrying the ingredients first, then by rating, then nearest
fn store_order(a: &Store, b: &Store) -> Ordering {
    b.has_ingredients
        .cmp(&a.has_ingredients)
        .then_with(|| b.rating.cmp(&a.rating))
        .then_with(|| a.distance_miles.total_cmp(&b.distance_miles))
}
