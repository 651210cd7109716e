use serde::{Deserialize, Serialize};

use crate::item::Item;

/// An equipped item occupying a position in the avatar's visual stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Image URL drawn for this layer
    pub source: String,
}

impl Layer {
    pub fn new(source: impl Into<String>) -> Self {
        Layer {
            source: source.into(),
        }
    }
}

impl From<&Item> for Layer {
    fn from(item: &Item) -> Self {
        Layer::new(item.source.clone())
    }
}

/// Read access to an avatar's layers, bottom to top
pub trait LayerStack {
    fn layers(&self) -> &[Layer];
}

impl LayerStack for [Layer] {
    fn layers(&self) -> &[Layer] {
        self
    }
}

impl LayerStack for Vec<Layer> {
    fn layers(&self) -> &[Layer] {
        self
    }
}
