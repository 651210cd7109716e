// Avatar module
//
// This module provides the avatar's visual layer stack:
// - Layers (equipped items shown on the avatar)
// - The LayerStack capability read by the equipped view
// - A vector-backed stack with equip/remove/raise/lower

pub mod layer;
pub mod stack;

pub use layer::{Layer, LayerStack};
pub use stack::{AvatarError, AvatarStack};
