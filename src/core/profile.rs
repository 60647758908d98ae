//! User profile: dietary preferences, calorie goal, allergies

use serde::{Deserialize, Serialize};

use crate::core::dietary::DietaryPreferences;
use crate::core::storage::{load_json, save_json, Storage, StorageError};

/// Storage key holding the serialized profile
pub const PROFILE_KEY: &str = "userProfile";

/// Default daily calorie goal
pub const DEFAULT_CALORIE_GOAL: u32 = 2000;

/// A user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub dietary_preferences: DietaryPreferences,
    pub calorie_goal: u32,
    pub allergies: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            dietary_preferences: DietaryPreferences::default(),
            calorie_goal: DEFAULT_CALORIE_GOAL,
            allergies: Vec::new(),
        }
    }
}

/// Profile store persisted through `S`
#[derive(Debug)]
pub struct ProfileStore<S: Storage> {
    profile: UserProfile,
    storage: S,
}

impl<S: Storage> ProfileStore<S> {
    /// Open the stored profile, falling back to defaults
    pub fn open(storage: S) -> Self {
        let profile = load_json(&storage, PROFILE_KEY).unwrap_or_default();
        Self { profile, storage }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn dietary_preferences(&self) -> &DietaryPreferences {
        &self.profile.dietary_preferences
    }

    /// Replace all dietary flags at once
    pub fn update_dietary_preferences(
        &mut self,
        preferences: DietaryPreferences,
    ) -> Result<(), StorageError> {
        self.profile.dietary_preferences = preferences;
        self.persist()
    }

    pub fn update_calorie_goal(&mut self, goal: u32) -> Result<(), StorageError> {
        self.profile.calorie_goal = goal;
        self.persist()
    }

    /// Replace the allergy list; entries are trimmed and blank or repeated ones dropped
    pub fn update_allergies<I>(&mut self, allergies: I) -> Result<(), StorageError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut cleaned: Vec<String> = Vec::new();
        for allergy in allergies {
            let allergy = allergy.as_ref().trim();
            if allergy.is_empty() || cleaned.iter().any(|a| a.eq_ignore_ascii_case(allergy)) {
                continue;
            }
            cleaned.push(allergy.to_string());
        }
        self.profile.allergies = cleaned;
        self.persist()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        save_json(&mut self.storage, PROFILE_KEY, &self.profile)
    }
}
