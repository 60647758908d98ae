//! Recipe suggestions from identified ingredients

use crate::entities::Recipe;

/// How many recipes to suggest when nothing was identified
pub const DEFAULT_SUGGESTIONS: usize = 6;

/// A suggested recipe and the ingredients that led to it
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    pub recipe: &'a Recipe,
    pub matched: Vec<String>,
}

/// Rank recipes by how many of `ingredients` they use
///
/// Recipes using none of the ingredients are left out; ties keep catalog order.
/// With no ingredients, the first [`DEFAULT_SUGGESTIONS`] recipes are returned.
pub fn suggest<'a>(recipes: &'a [Recipe], ingredients: &[String]) -> Vec<Suggestion<'a>> {
    if ingredients.iter().all(|i| i.trim().is_empty()) {
        return recipes
            .iter()
            .take(DEFAULT_SUGGESTIONS)
            .map(|recipe| Suggestion {
                recipe,
                matched: Vec::new(),
            })
            .collect();
    }

    let mut suggestions: Vec<Suggestion<'a>> = recipes
        .iter()
        .map(|recipe| Suggestion {
            recipe,
            matched: ingredients
                .iter()
                .filter(|i| recipe.uses_ingredient(i))
                .cloned()
                .collect(),
        })
        .filter(|s| !s.matched.is_empty())
        .collect();

    // Stable sort keeps catalog order among equals
    suggestions.sort_by(|a, b| b.matched.len().cmp(&a.matched.len()));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FixtureCatalog;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_ingredients_returns_first_six() {
        let catalog = FixtureCatalog::embedded().unwrap();
        let suggestions = suggest(catalog.recipes(), &[]);
        assert_eq!(suggestions.len(), 6);
        assert_eq!(suggestions[0].recipe.id, "1");
    }

    #[test]
    fn test_ranked_by_overlap() {
        let catalog = FixtureCatalog::embedded().unwrap();
        let suggestions = suggest(catalog.recipes(), &owned(&["Garlic", "Lemon", "Salmon"]));

        assert_eq!(suggestions[0].recipe.id, "6");
        assert_eq!(suggestions[0].matched, owned(&["Garlic", "Lemon", "Salmon"]));
        // Every other suggestion matched fewer
        assert!(suggestions[1..].iter().all(|s| s.matched.len() < 3));
    }

    #[test]
    fn test_unrelated_ingredients_suggest_nothing() {
        let catalog = FixtureCatalog::embedded().unwrap();
        assert!(suggest(catalog.recipes(), &owned(&["Durian"])).is_empty());
    }
}
