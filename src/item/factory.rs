use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;
use super::definition::ItemSlot;

/// Errors an item factory can report while fetching
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Free-form failure for factories backed by other sources
    #[error("Item source unavailable: {0}")]
    Unavailable(String),
}

/// Source of items for a (user, category) pair
///
/// The inventory calls this lazily and caches what it gets back. Returned
/// lists may contain missing slots; they are rejected at render time.
pub trait ItemFactory {
    fn get_items(&self, user: &str, category: Category) -> Result<Vec<ItemSlot>, FactoryError>;
}

/// Items per category
pub type CategoryLists = BTreeMap<Category, Vec<ItemSlot>>;

/// Item factory backed by a JSON catalog
///
/// Layout:
/// ```json
/// {
///   "shared": { "head": [{ "source": "cap.png" }] },
///   "users": { "gio": { "head": [{ "source": "crown.png" }, null] } }
/// }
/// ```
/// A user's own list for a category wins over the shared one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItemFactory {
    /// Lists offered to every user
    #[serde(default)]
    pub shared: CategoryLists,

    /// Per-user lists
    #[serde(default)]
    pub users: HashMap<String, CategoryLists>,
}

impl CatalogItemFactory {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, FactoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FactoryError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            users = catalog.users.len(),
            "loaded item catalog"
        );

        Ok(catalog)
    }

    /// Sets the shared list for a category, replacing any previous one
    pub fn with_shared(mut self, category: Category, items: Vec<ItemSlot>) -> Self {
        self.shared.insert(category, items);
        self
    }

    /// Sets a user's list for a category, replacing any previous one
    pub fn with_user(
        mut self,
        user: impl Into<String>,
        category: Category,
        items: Vec<ItemSlot>,
    ) -> Self {
        self.users.entry(user.into()).or_default().insert(category, items);
        self
    }
}

impl ItemFactory for CatalogItemFactory {
    fn get_items(&self, user: &str, category: Category) -> Result<Vec<ItemSlot>, FactoryError> {
        let items = self
            .users
            .get(user)
            .and_then(|lists| lists.get(&category))
            .or_else(|| self.shared.get(&category))
            .cloned()
            .unwrap_or_default();

        Ok(items)
    }
}
