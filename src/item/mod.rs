// Item system module
//
// This module provides the wearable item model for Avaku, including:
// - Item definitions (image source)
// - Inventory categories and multi-category selections
// - Item factories that supply items per user and category

pub mod category;
pub mod definition;
pub mod factory;

// Re-export main types for convenient access
pub use category::{Category, CategorySelection, ParseCategoryError};
pub use definition::{Item, ItemSlot};
pub use factory::{CatalogItemFactory, FactoryError, ItemFactory};
