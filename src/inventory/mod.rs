// Inventory system module
//
// This module provides the inventory for Avaku, including:
// - Per-category item caching, filled lazily from an item factory
// - The equipped view (avatar layers, top-most first)
// - The browser view (cached items of one or more categories)

pub mod error;
pub mod inventory;

// Re-export main types
pub use error::InventoryError;
pub use inventory::Inventory;
