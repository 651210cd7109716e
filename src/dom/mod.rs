// Document model module
//
// This module provides the small slice of a browser document the
// inventory views need:
// - Elements holding rendered inner HTML
// - Class-based element lookup within an element's subtree
// - The handler binder capability that wires item controls

pub mod binder;
pub mod element;

pub use binder::HandlerBinder;
pub use element::{DomError, Element, ItemNode};
