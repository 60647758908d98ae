//! Filter enums for CLI commands

use clap::ValueEnum;

use crate::core::ShoppingItem;
use crate::entities::RecipeCategory;

/// Which shopping items to show
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ItemFilter {
    /// Items still to buy
    Unchecked,
    /// Items already in the cart
    Checked,
    /// Everything - default
    #[default]
    All,
}

impl ItemFilter {
    pub fn matches(&self, item: &ShoppingItem) -> bool {
        match self {
            ItemFilter::Unchecked => !item.checked,
            ItemFilter::Checked => item.checked,
            ItemFilter::All => true,
        }
    }
}

impl std::fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemFilter::Unchecked => write!(f, "unchecked"),
            ItemFilter::Checked => write!(f, "checked"),
            ItemFilter::All => write!(f, "all"),
        }
    }
}

/// Recipe category filter for search
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category - default
    #[default]
    All,
    Cooking,
    Baking,
    Party,
    Healthy,
    Quick,
}

impl CategoryFilter {
    /// The category to restrict to, `None` for all
    pub fn category(&self) -> Option<RecipeCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Cooking => Some(RecipeCategory::Cooking),
            CategoryFilter::Baking => Some(RecipeCategory::Baking),
            CategoryFilter::Party => Some(RecipeCategory::Party),
            CategoryFilter::Healthy => Some(RecipeCategory::Healthy),
            CategoryFilter::Quick => Some(RecipeCategory::Quick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryStorage, ShoppingList};

    #[test]
    fn test_item_filter_matches() {
        let mut list = ShoppingList::open(MemoryStorage::new());
        let id = list.add("Oats", None).unwrap().unwrap();
        list.add("Figs", None).unwrap();
        list.toggle(&id).unwrap();

        let checked = list.get(&id).unwrap();
        let unchecked = list.find_by_name("figs").unwrap();

        assert!(ItemFilter::Checked.matches(checked));
        assert!(!ItemFilter::Checked.matches(unchecked));
        assert!(ItemFilter::Unchecked.matches(unchecked));
        assert!(ItemFilter::All.matches(checked));
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(CategoryFilter::All.category(), None);
        assert_eq!(CategoryFilter::Quick.category(), Some(RecipeCategory::Quick));
    }
}
