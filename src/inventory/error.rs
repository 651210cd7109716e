use thiserror::Error;

use crate::dom::DomError;
use crate::item::{Category, FactoryError};

/// Errors that can occur during inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A category list holds a missing item where a real one was expected
    #[error("Invalid item at position {position} of the {category} list")]
    InvalidItem { category: Category, position: usize },

    /// The item factory failed to supply a category
    #[error("Failed to fetch {category} items for '{user}': {source}")]
    Fetch {
        user: String,
        category: Category,
        #[source]
        source: FactoryError,
    },

    /// Rendered markup could not be searched for item elements
    #[error(transparent)]
    Dom(#[from] DomError),
}
