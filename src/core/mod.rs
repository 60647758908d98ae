//! Core module - shopping list, dietary matching, profile, and persistence

pub mod config;
pub mod dietary;
pub mod home;
pub mod identity;
pub mod profile;
pub mod shopping;
pub mod storage;

pub use config::Config;
pub use dietary::{match_preferences, DietaryMatch, DietaryPreference, DietaryPreferences};
pub use home::{Home, HomeError};
pub use identity::ItemId;
pub use profile::{ProfileStore, UserProfile};
pub use shopping::{ShoppingError, ShoppingItem, ShoppingList};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
