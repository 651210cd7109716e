use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inventory slot categories for wearable items
///
/// The set is closed: every inventory holds exactly one list per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Head,
    Upper,
    Lower,
    Shoes,
}

impl Category {
    /// All categories in inventory order
    pub const ALL: [Category; 4] = [
        Category::Head,
        Category::Upper,
        Category::Lower,
        Category::Shoes,
    ];

    /// Lowercase key used in catalogs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Head => "head",
            Category::Upper => "upper",
            Category::Lower => "lower",
            Category::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected head, upper, lower or shoes)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// One category or an ordered list of them
///
/// Used by the browser view, which renders the concatenation of the
/// selected categories in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    One(Category),
    Many(Vec<Category>),
}

impl CategorySelection {
    /// The selected categories, in render order
    pub fn categories(&self) -> &[Category] {
        match self {
            CategorySelection::One(category) => std::slice::from_ref(category),
            CategorySelection::Many(categories) => categories,
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::One(category)
    }
}

impl From<Vec<Category>> for CategorySelection {
    fn from(categories: Vec<Category>) -> Self {
        CategorySelection::Many(categories)
    }
}

impl From<&[Category]> for CategorySelection {
    fn from(categories: &[Category]) -> Self {
        CategorySelection::Many(categories.to_vec())
    }
}

impl<const N: usize> From<[Category; N]> for CategorySelection {
    fn from(categories: [Category; N]) -> Self {
        CategorySelection::Many(categories.to_vec())
    }
}
