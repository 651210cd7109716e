//! HTML GUI System
//!
//! This module turns inventory state into HTML markup.
//!
//! # Available Components
//!
//! - [`ItemFragment`] - Markup for one item entry (controls + image)
//! - [`render_page`] - Full document wrapping the equipped and browser panels
//!
//! # Example Usage
//!
//! ```rust
//! use avaku::config::RenderConfig;
//! use avaku::gui::ItemFragment;
//!
//! let html = ItemFragment::new("hat.png").render(&RenderConfig::default());
//! assert!(html.contains(r#"src="hat.png""#));
//! ```

pub mod item_fragment;
pub mod page;

pub use item_fragment::{html_escape, ItemFragment};
pub use page::render_page;
