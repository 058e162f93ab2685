use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::core::errors::ExpenseError;

const SUGGESTION_DISTANCE: usize = 3;

/// Fixed set of spending categories used for tracking and reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    #[serde(rename = "Leisure & Shopping")]
    LeisureShopping,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Household")]
    Household,
    #[serde(rename = "Family & Education")]
    FamilyEducation,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 7] = [
        Category::FoodDining,
        Category::LeisureShopping,
        Category::Transportation,
        Category::Household,
        Category::FamilyEducation,
        Category::HealthWellness,
        Category::Other,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::FoodDining => 0,
            Category::LeisureShopping => 1,
            Category::Transportation => 2,
            Category::Household => 3,
            Category::FamilyEducation => 4,
            Category::HealthWellness => 5,
            Category::Other => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodDining => "Food & Dining",
            Category::LeisureShopping => "Leisure & Shopping",
            Category::Transportation => "Transportation",
            Category::Household => "Household",
            Category::FamilyEducation => "Family & Education",
            Category::HealthWellness => "Health & Wellness",
            Category::Other => "Other",
        }
    }

    /// Short keywords accepted on the command line.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::FoodDining => &["food", "dining"],
            Category::LeisureShopping => &["leisure", "shopping", "shop"],
            Category::Transportation => &["transpo", "transportation"],
            Category::Household => &["household"],
            Category::FamilyEducation => &["family", "education"],
            Category::HealthWellness => &["health", "wellness"],
            Category::Other => &["other"],
        }
    }

    /// Resolves a keyword or full label to its category.
    pub fn from_keyword(keyword: &str) -> Result<Self, ExpenseError> {
        let needle = keyword.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| {
                category.keywords().contains(&needle.as_str())
                    || category.label().to_lowercase() == needle
            })
            .ok_or_else(|| unknown_category(&needle))
    }

    /// Every accepted keyword, sorted alphabetically.
    pub fn all_keywords() -> Vec<&'static str> {
        let mut keywords: Vec<&'static str> = Category::ALL
            .iter()
            .flat_map(|category| category.keywords().iter().copied())
            .collect();
        keywords.sort_unstable();
        keywords
    }
}

fn unknown_category(needle: &str) -> ExpenseError {
    let keywords = Category::all_keywords();
    let mut message = format!(
        "invalid category `{}`; must be one of: {}",
        needle,
        keywords.join(", ")
    );
    let best = keywords
        .iter()
        .map(|key| (levenshtein(key, needle), *key))
        .min_by_key(|(distance, _)| *distance);
    if let Some((distance, key)) = best {
        if distance <= SUGGESTION_DISTANCE {
            message.push_str(&format!(" (did you mean `{}`?)", key));
        }
    }
    ExpenseError::InvalidInput(message)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::from_keyword(raw)
    }
}
