//! Avaku inventory
//!
//! Caches a user's wearable items per category and renders two HTML views
//! of them: the equipped panel (the avatar's layer stack, top-most first)
//! and the browser panel (items of one or more categories).
//!
//! Collaborators are passed in rather than looked up globally: the item
//! factory and render config at construction, the layer stack and handler
//! binder per render call.

pub mod avatar;
pub mod config;
pub mod dom;
pub mod gui;
pub mod inventory;
pub mod item;

pub use avatar::{AvatarStack, Layer, LayerStack};
pub use config::RenderConfig;
pub use dom::{Element, HandlerBinder, ItemNode};
pub use inventory::{Inventory, InventoryError};
pub use item::{CatalogItemFactory, Category, CategorySelection, Item, ItemFactory, ItemSlot};
