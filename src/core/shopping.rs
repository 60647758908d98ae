//! Shopping list store
//!
//! The list is the single source of truth for shopping items. It owns a
//! [`Storage`] backend and writes the full list back after every mutation, so a
//! list reopened over the same backend sees the same items.
//!
//! Names are unique ignoring case: adding "tomatoes" to a list that already has
//! "Tomatoes" changes nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::identity::ItemId;
use crate::core::storage::{load_json, save_json, Storage, StorageError};

/// Storage key holding the serialized list
pub const SHOPPING_LIST_KEY: &str = "shoppingList";

/// Errors from shopping list operations
#[derive(Debug, Error)]
pub enum ShoppingError {
    #[error("Item name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One entry on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ItemId,

    pub name: String,

    #[serde(default)]
    pub checked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    fn new(name: &str, category: Option<&str>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.to_string(),
            checked: false,
            category: normalize_category(category),
            added_at: Utc::now(),
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

fn names_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// The shopping list for one user, persisted through `S`
#[derive(Debug)]
pub struct ShoppingList<S: Storage> {
    items: Vec<ShoppingItem>,
    storage: S,
}

impl<S: Storage> ShoppingList<S> {
    /// Open the list stored in `storage`
    ///
    /// Missing, unreadable or malformed data yields an empty list. Entries whose
    /// names repeat an earlier entry (ignoring case) are dropped.
    pub fn open(storage: S) -> Self {
        let stored: Vec<ShoppingItem> = load_json(&storage, SHOPPING_LIST_KEY).unwrap_or_default();

        let mut items: Vec<ShoppingItem> = Vec::with_capacity(stored.len());
        for item in stored {
            if items.iter().any(|existing| existing.has_name(&item.name)) {
                tracing::warn!(name = %item.name, id = %item.id, "dropping duplicate stored item");
                continue;
            }
            items.push(item);
        }

        tracing::debug!(count = items.len(), "opened shopping list");
        Self { items, storage }
    }

    /// All items in insertion order
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.has_name(name))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Items still to buy
    pub fn unchecked(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| !item.checked)
    }

    /// Items already in the basket
    pub fn checked(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter().filter(|item| item.checked)
    }

    /// Find an item by full id, 1-based position (`@N`), or name
    pub fn resolve(&self, selector: &str) -> Option<&ShoppingItem> {
        let selector = selector.trim();

        if let Some(item) = self.items.iter().find(|item| item.id == *selector) {
            return Some(item);
        }

        if let Some(n) = selector.strip_prefix('@') {
            return n
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| self.items.get(idx));
        }

        self.find_by_name(selector)
    }

    /// Add an item unless one with the same name already exists
    ///
    /// Returns the new item's id, or `None` when the name was already present.
    pub fn add(
        &mut self,
        name: &str,
        category: Option<&str>,
    ) -> Result<Option<ItemId>, ShoppingError> {
        let mut items = self.items.clone();
        let Some(id) = insert(&mut items, name, category)? else {
            return Ok(None);
        };
        self.commit(items)?;
        Ok(Some(id))
    }

    /// Add several items in one write, e.g. a recipe's ingredient list
    ///
    /// Blank names are skipped. Returns the ids of the items actually added.
    pub fn add_all<I>(&mut self, names: I, category: Option<&str>) -> Result<Vec<ItemId>, ShoppingError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut items = self.items.clone();
        let mut added = Vec::new();
        for name in names {
            match insert(&mut items, name.as_ref(), category) {
                Ok(Some(id)) => added.push(id),
                Ok(None) | Err(ShoppingError::EmptyName) => {}
                Err(e) => return Err(e),
            }
        }

        if !added.is_empty() {
            self.commit(items)?;
        }
        Ok(added)
    }

    /// Remove an item; returns whether anything was removed
    pub fn remove(&mut self, id: &ItemId) -> Result<bool, StorageError> {
        let items: Vec<ShoppingItem> = self
            .items
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();
        if items.len() == self.items.len() {
            return Ok(false);
        }
        self.commit(items)?;
        Ok(true)
    }

    /// Flip an item's checked flag; returns the new value, or `None` if absent
    pub fn toggle(&mut self, id: &ItemId) -> Result<Option<bool>, StorageError> {
        let mut items = self.items.clone();
        let Some(item) = items.iter_mut().find(|item| &item.id == id) else {
            return Ok(None);
        };
        item.checked = !item.checked;
        let checked = item.checked;
        self.commit(items)?;
        Ok(Some(checked))
    }

    /// Empty the list; returns how many items were removed
    pub fn clear(&mut self) -> Result<usize, StorageError> {
        let removed = self.items.len();
        self.commit(Vec::new())?;
        Ok(removed)
    }

    /// Drop checked items, keeping the rest untouched and in order
    pub fn clear_completed(&mut self) -> Result<usize, StorageError> {
        let items: Vec<ShoppingItem> = self.unchecked().cloned().collect();
        let removed = self.items.len() - items.len();
        if removed > 0 {
            self.commit(items)?;
        }
        Ok(removed)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Close the list and hand back its backend
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write `items` out and adopt them; on failure the list is left as it was
    fn commit(&mut self, items: Vec<ShoppingItem>) -> Result<(), StorageError> {
        save_json(&mut self.storage, SHOPPING_LIST_KEY, &items)?;
        self.items = items;
        Ok(())
    }
}

fn insert(
    items: &mut Vec<ShoppingItem>,
    name: &str,
    category: Option<&str>,
) -> Result<Option<ItemId>, ShoppingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ShoppingError::EmptyName);
    }
    if items.iter().any(|item| item.has_name(name)) {
        tracing::debug!(name, "item already on list");
        return Ok(None);
    }

    let item = ShoppingItem::new(name, category);
    let id = item.id.clone();
    items.push(item);
    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    fn empty_list() -> ShoppingList<MemoryStorage> {
        ShoppingList::open(MemoryStorage::new())
    }

    #[test]
    fn test_add_creates_unchecked_item() {
        let mut list = empty_list();
        let id = list.add("Tomatoes", Some("produce")).unwrap().unwrap();

        let item = list.get(&id).unwrap();
        assert_eq!(item.name, "Tomatoes");
        assert!(!item.checked);
        assert_eq!(item.category.as_deref(), Some("produce"));
        assert!(item.id.is_generated());
    }

    #[test]
    fn test_add_is_case_insensitive_noop() {
        let mut list = empty_list();
        list.add("Tomatoes", None).unwrap();
        let second = list.add("tomatoes", None).unwrap();

        assert!(second.is_none());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "Tomatoes");
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut list = empty_list();
        list.add("  Basil ", None).unwrap();
        assert_eq!(list.items()[0].name, "Basil");
        assert!(list.add(" basil", None).unwrap().is_none());

        assert!(matches!(list.add("   ", None), Err(ShoppingError::EmptyName)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_blank_category_is_dropped() {
        let mut list = empty_list();
        let id = list.add("Salt", Some("  ")).unwrap().unwrap();
        assert_eq!(list.get(&id).unwrap().category, None);
    }

    #[test]
    fn test_remove_absent_is_not_an_error() {
        let mut list = empty_list();
        let id = list.add("Milk", None).unwrap().unwrap();

        assert!(!list.remove(&ItemId::from("item-missing")).unwrap());
        assert_eq!(list.len(), 1);

        assert!(list.remove(&id).unwrap());
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = empty_list();
        let id = list.add("Eggs", None).unwrap().unwrap();

        assert_eq!(list.toggle(&id).unwrap(), Some(true));
        assert_eq!(list.toggle(&id).unwrap(), Some(false));
        assert!(!list.get(&id).unwrap().checked);

        assert_eq!(list.toggle(&ItemId::from("nope")).unwrap(), None);
    }

    #[test]
    fn test_clear_empties_any_list() {
        let mut list = empty_list();
        assert_eq!(list.clear().unwrap(), 0);

        list.add_all(["A", "B", "C"], None).unwrap();
        assert_eq!(list.clear().unwrap(), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear_completed_keeps_identity_of_survivors() {
        let mut list = empty_list();
        let flour = list.add("Flour", Some("baking")).unwrap().unwrap();
        let sugar = list.add("Sugar", None).unwrap().unwrap();
        let eggs = list.add("Eggs", None).unwrap().unwrap();
        list.toggle(&sugar).unwrap();

        let before: Vec<ShoppingItem> = list.unchecked().cloned().collect();
        assert_eq!(list.clear_completed().unwrap(), 1);

        assert_eq!(list.items(), before.as_slice());
        assert_eq!(list.items()[0].id, flour);
        assert_eq!(list.items()[1].id, eggs);
        assert_eq!(list.items()[0].category.as_deref(), Some("baking"));
    }

    #[test]
    fn test_add_all_skips_duplicates_and_blanks() {
        let mut list = empty_list();
        list.add("Garlic", None).unwrap();

        let added = list
            .add_all(["garlic", "Onions", "", "onions", "Salt"], None)
            .unwrap();

        assert_eq!(added.len(), 2);
        let names: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Garlic", "Onions", "Salt"]);
    }

    #[test]
    fn test_resolve_by_id_position_and_name() {
        let mut list = empty_list();
        let first = list.add("Rice", None).unwrap().unwrap();
        let second = list.add("Beans", None).unwrap().unwrap();

        assert_eq!(list.resolve(first.as_str()).unwrap().id, first);
        assert_eq!(list.resolve("@2").unwrap().id, second);
        assert_eq!(list.resolve("BEANS").unwrap().id, second);
        assert!(list.resolve("@0").is_none());
        assert!(list.resolve("@3").is_none());
        assert!(list.resolve("lentils").is_none());
    }

    #[test]
    fn test_checked_and_unchecked_partition() {
        let mut list = empty_list();
        let a = list.add("A", None).unwrap().unwrap();
        list.add("B", None).unwrap();
        list.toggle(&a).unwrap();

        assert_eq!(list.checked().count(), 1);
        assert_eq!(list.unchecked().count(), 1);
    }

    #[test]
    fn test_reopen_round_trip() {
        let mut list = empty_list();
        let milk = list.add("Milk", Some("dairy")).unwrap().unwrap();
        list.add("Bread", None).unwrap();
        list.add("Jam", None).unwrap();
        list.toggle(&milk).unwrap();
        let jam = list.find_by_name("jam").unwrap().id.clone();
        list.remove(&jam).unwrap();

        let expected = list.items().to_vec();
        let reopened = ShoppingList::open(list.into_storage());
        assert_eq!(reopened.items(), expected.as_slice());
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut list = empty_list();
        let id = list.add("Apples", None).unwrap().unwrap();
        let stored = list.storage().get(SHOPPING_LIST_KEY).unwrap();
        assert!(stored.contains("Apples"));
        assert!(stored.contains("addedAt"));

        list.toggle(&id).unwrap();
        let stored = list.storage().get(SHOPPING_LIST_KEY).unwrap();
        assert!(stored.contains("\"checked\": true"));
    }

    #[test]
    fn test_open_discards_malformed_data() {
        let storage = MemoryStorage::new().with_entry(SHOPPING_LIST_KEY, "[{\"id\": 3");
        let list = ShoppingList::open(storage);
        assert!(list.is_empty());
    }

    #[test]
    fn test_open_reads_iso_timestamps() {
        let raw = r#"[
            {"id":"item-1700000000000-abc123xyz","name":"Lemons","checked":true,"addedAt":"2024-03-01T12:30:00.000Z"},
            {"id":"item-1700000000001-def456uvw","name":"Olive Oil","checked":false,"category":"pantry","addedAt":"2024-03-02T08:00:00Z"}
        ]"#;
        let list = ShoppingList::open(MemoryStorage::new().with_entry(SHOPPING_LIST_KEY, raw));

        assert_eq!(list.len(), 2);
        let lemons = list.find_by_name("lemons").unwrap();
        assert!(lemons.checked);
        assert_eq!(lemons.added_at.to_rfc3339(), "2024-03-01T12:30:00+00:00");
        assert_eq!(list.items()[1].category.as_deref(), Some("pantry"));
    }

    #[test]
    fn test_open_drops_duplicate_stored_names() {
        let raw = r#"[
            {"id":"a","name":"Salt","checked":false,"addedAt":"2024-03-01T12:30:00Z"},
            {"id":"b","name":"SALT","checked":true,"addedAt":"2024-03-01T12:31:00Z"}
        ]"#;
        let list = ShoppingList::open(MemoryStorage::new().with_entry(SHOPPING_LIST_KEY, raw));

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, ItemId::from("a"));
    }

    /// Backend whose writes always fail, seeded with a stored list
    struct ReadOnlyStorage {
        stored: Option<String>,
    }

    impl Storage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.stored.clone())
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: format!("{}.json", key).into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn test_failed_add_leaves_list_unchanged() {
        let mut list = ShoppingList::open(ReadOnlyStorage { stored: None });

        assert!(matches!(list.add("Milk", None), Err(ShoppingError::Storage(_))));
        assert!(list.is_empty());

        // A retry fails the same way instead of reporting a duplicate
        assert!(matches!(list.add("milk", None), Err(ShoppingError::Storage(_))));
        assert!(list.add_all(["Milk", "Eggs"], None).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_failed_writes_keep_stored_items() {
        let raw = r#"[
            {"id":"a","name":"Salt","checked":true,"addedAt":"2024-03-01T12:30:00Z"},
            {"id":"b","name":"Rice","checked":false,"addedAt":"2024-03-01T12:31:00Z"}
        ]"#;
        let mut list = ShoppingList::open(ReadOnlyStorage {
            stored: Some(raw.to_string()),
        });
        let salt = ItemId::from("a");

        assert!(list.toggle(&salt).is_err());
        assert!(list.get(&salt).unwrap().checked);

        assert!(list.remove(&salt).is_err());
        assert!(list.clear_completed().is_err());
        assert!(list.clear().is_err());
        assert_eq!(list.len(), 2);
    }
}
