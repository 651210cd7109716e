use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layer::{Layer, LayerStack};
use crate::item::Item;

/// Errors that can occur while rearranging the avatar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvatarError {
    /// Layer index out of bounds
    #[error("No layer at index {index} (avatar has {len} layers)")]
    NoSuchLayer { index: usize, len: usize },
}

/// The avatar's layer stack
///
/// Index 0 is the bottom layer (drawn first); the last index is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarStack {
    layers: Vec<Layer>,
}

impl AvatarStack {
    /// Creates an avatar wearing nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Puts an item on top of the stack
    ///
    /// Returns the index of the new layer.
    pub fn equip(&mut self, item: &Item) -> usize {
        self.push(Layer::from(item))
    }

    /// Pushes a layer on top of the stack
    pub fn push(&mut self, layer: Layer) -> usize {
        tracing::debug!(source = %layer.source, "layer added");
        self.layers.push(layer);
        self.layers.len() - 1
    }

    /// Takes a layer off the avatar
    pub fn remove(&mut self, index: usize) -> Result<Layer, AvatarError> {
        self.check(index)?;
        Ok(self.layers.remove(index))
    }

    /// Moves a layer one step toward the top
    ///
    /// Returns the layer's new index; the top layer stays where it is.
    pub fn raise(&mut self, index: usize) -> Result<usize, AvatarError> {
        self.check(index)?;
        if index + 1 == self.layers.len() {
            return Ok(index);
        }
        self.layers.swap(index, index + 1);
        Ok(index + 1)
    }

    /// Moves a layer one step toward the bottom
    ///
    /// Returns the layer's new index; the bottom layer stays where it is.
    pub fn lower(&mut self, index: usize) -> Result<usize, AvatarError> {
        self.check(index)?;
        if index == 0 {
            return Ok(0);
        }
        self.layers.swap(index, index - 1);
        Ok(index - 1)
    }

    /// Removes every layer
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    fn check(&self, index: usize) -> Result<(), AvatarError> {
        if index >= self.layers.len() {
            return Err(AvatarError::NoSuchLayer {
                index,
                len: self.layers.len(),
            });
        }
        Ok(())
    }
}

impl LayerStack for AvatarStack {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl FromIterator<Layer> for AvatarStack {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        AvatarStack {
            layers: iter.into_iter().collect(),
        }
    }
}
