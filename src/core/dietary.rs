//! Dietary preferences and recipe tag matching

use serde::{Deserialize, Serialize};

/// A single dietary preference flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Keto,
    Paleo,
    LowCarb,
    LowFat,
}

impl DietaryPreference {
    /// All preferences, in display order
    pub fn all() -> &'static [DietaryPreference] {
        &[
            DietaryPreference::Vegetarian,
            DietaryPreference::Vegan,
            DietaryPreference::GlutenFree,
            DietaryPreference::DairyFree,
            DietaryPreference::Keto,
            DietaryPreference::Paleo,
            DietaryPreference::LowCarb,
            DietaryPreference::LowFat,
        ]
    }

    /// Recipe tag that satisfies this preference
    pub fn tag(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::GlutenFree => "gluten-free",
            DietaryPreference::DairyFree => "dairy-free",
            DietaryPreference::Keto => "keto",
            DietaryPreference::Paleo => "paleo",
            DietaryPreference::LowCarb => "low-carb",
            DietaryPreference::LowFat => "low-fat",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::DairyFree => "Dairy-Free",
            DietaryPreference::Keto => "Keto",
            DietaryPreference::Paleo => "Paleo",
            DietaryPreference::LowCarb => "Low-Carb",
            DietaryPreference::LowFat => "Low-Fat",
        }
    }
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for DietaryPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        DietaryPreference::all()
            .iter()
            .copied()
            .find(|p| p.tag() == normalized || p.tag().replace('-', "") == normalized)
            .ok_or_else(|| format!("Unknown dietary preference: {}", s))
    }
}

/// The user's dietary flags, replaced as a whole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietaryPreferences {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub keto: bool,
    pub paleo: bool,
    pub low_carb: bool,
    pub low_fat: bool,
}

impl DietaryPreferences {
    /// Build from a set of active preferences
    pub fn from_active(active: impl IntoIterator<Item = DietaryPreference>) -> Self {
        let mut prefs = Self::default();
        for pref in active {
            prefs.set(pref, true);
        }
        prefs
    }

    pub fn is_set(&self, pref: DietaryPreference) -> bool {
        match pref {
            DietaryPreference::Vegetarian => self.vegetarian,
            DietaryPreference::Vegan => self.vegan,
            DietaryPreference::GlutenFree => self.gluten_free,
            DietaryPreference::DairyFree => self.dairy_free,
            DietaryPreference::Keto => self.keto,
            DietaryPreference::Paleo => self.paleo,
            DietaryPreference::LowCarb => self.low_carb,
            DietaryPreference::LowFat => self.low_fat,
        }
    }

    pub fn set(&mut self, pref: DietaryPreference, value: bool) {
        let flag = match pref {
            DietaryPreference::Vegetarian => &mut self.vegetarian,
            DietaryPreference::Vegan => &mut self.vegan,
            DietaryPreference::GlutenFree => &mut self.gluten_free,
            DietaryPreference::DairyFree => &mut self.dairy_free,
            DietaryPreference::Keto => &mut self.keto,
            DietaryPreference::Paleo => &mut self.paleo,
            DietaryPreference::LowCarb => &mut self.low_carb,
            DietaryPreference::LowFat => &mut self.low_fat,
        };
        *flag = value;
    }

    /// Active preferences in display order
    pub fn active(&self) -> impl Iterator<Item = DietaryPreference> + '_ {
        DietaryPreference::all()
            .iter()
            .copied()
            .filter(|p| self.is_set(*p))
    }

    pub fn any(&self) -> bool {
        self.active().next().is_some()
    }
}

/// How a recipe's tags line up with the user's preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DietaryMatch {
    /// Active preferences the recipe is tagged for
    pub matches: Vec<DietaryPreference>,
    /// Active preferences the recipe is not tagged for
    pub conflicts: Vec<DietaryPreference>,
}

impl DietaryMatch {
    pub fn is_compatible(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn match_tags(&self) -> Vec<&'static str> {
        self.matches.iter().map(|p| p.tag()).collect()
    }

    pub fn conflict_tags(&self) -> Vec<&'static str> {
        self.conflicts.iter().map(|p| p.tag()).collect()
    }
}

/// Classify each active preference against a recipe's dietary tags
///
/// Returns `None` when the recipe carries no tag list at all.
pub fn match_preferences(
    prefs: &DietaryPreferences,
    tags: Option<&[String]>,
) -> Option<DietaryMatch> {
    let tags = tags?;
    let has_tag = |wanted: &str| tags.iter().any(|t| t.trim().eq_ignore_ascii_case(wanted));

    let mut result = DietaryMatch::default();
    for pref in prefs.active() {
        if has_tag(pref.tag()) {
            result.matches.push(pref);
        } else {
            result.conflicts.push(pref);
        }
    }
    Some(result)
}
