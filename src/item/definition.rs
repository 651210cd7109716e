use serde::{Deserialize, Serialize};

/// A wearable item as supplied by an item factory
///
/// Only the image source matters for rendering; it doubles as the
/// identity of the layer once the item is equipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Image URL of the item sprite
    pub source: String,
}

impl Item {
    /// Creates a new item from its image source
    pub fn new(source: impl Into<String>) -> Self {
        Item {
            source: source.into(),
        }
    }
}

/// A position in a category list (None = missing item)
///
/// Factories may hand back holes, e.g. `null` entries in a JSON catalog.
/// They are kept as-is in the cache and rejected at render time.
pub type ItemSlot = Option<Item>;
