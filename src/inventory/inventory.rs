use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use super::error::InventoryError;
use crate::avatar::LayerStack;
use crate::config::{ConfigError, RenderConfig};
use crate::dom::{Element, HandlerBinder};
use crate::gui::ItemFragment;
use crate::item::{Category, CategorySelection, ItemFactory, ItemSlot};

/// Categorized inventory of wearable items for one user session
///
/// Holds one item list per category, fetched lazily from the injected
/// item factory, and renders the two inventory views from it.
///
/// # Caching
/// A category is fetched only while its list is empty. A fetch that
/// returns nothing leaves the list empty, so the next `get_items` call
/// asks the factory again.
pub struct Inventory {
    /// Shared item source (not owned by the inventory)
    item_factory: Rc<dyn ItemFactory>,

    /// Item lists, always keyed by all four categories
    categories: BTreeMap<Category, Vec<ItemSlot>>,

    /// Markup settings used by both views
    config: RenderConfig,
}

impl Inventory {
    /// Creates an empty inventory with default render settings
    pub fn new(item_factory: Rc<dyn ItemFactory>) -> Self {
        Self::build(item_factory, RenderConfig::default())
    }

    /// Creates an empty inventory with the given render settings
    ///
    /// The config is validated first, so the item class is always usable
    /// for the lookup `print_equipped` performs.
    pub fn with_config(
        item_factory: Rc<dyn ItemFactory>,
        config: RenderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(item_factory, config))
    }

    fn build(item_factory: Rc<dyn ItemFactory>, config: RenderConfig) -> Self {
        Inventory {
            item_factory,
            categories: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            config,
        }
    }

    /// Render settings shared by both views
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Loads a category's items for `user` unless they are already cached
    ///
    /// The fetched list replaces the cached one wholesale. On a factory
    /// error the cache is left untouched.
    pub fn get_items(&mut self, user: &str, category: Category) -> Result<(), InventoryError> {
        let cached = self.categories.entry(category).or_default();
        if !cached.is_empty() {
            tracing::debug!(user, %category, count = cached.len(), "inventory cache hit");
            return Ok(());
        }

        let items = self
            .item_factory
            .get_items(user, category)
            .map_err(|source| InventoryError::Fetch {
                user: user.to_string(),
                category,
                source,
            })?;

        tracing::debug!(user, %category, count = items.len(), "fetched inventory items");
        *cached = items;
        Ok(())
    }

    /// Cached item slots of a category (empty until fetched)
    pub fn items(&self, category: Category) -> &[ItemSlot] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Renders the avatar's layers into `elem`, top-most layer first
    ///
    /// Replaces the element's content, then hands every rendered item
    /// element to `binder` so its controls can be wired up.
    pub fn print_equipped<S, B>(
        &self,
        elem: &mut Element,
        avatar: &S,
        binder: &mut B,
    ) -> Result<(), InventoryError>
    where
        S: LayerStack + ?Sized,
        B: HandlerBinder + ?Sized,
    {
        // Layers come bottom to top; pushing each to the front reverses them
        let mut equipped = VecDeque::with_capacity(avatar.layers().len());
        for layer in avatar.layers() {
            equipped.push_front(ItemFragment::new(&layer.source).render(&self.config));
        }

        let html: String = equipped.into_iter().collect();
        elem.set_inner_html(html);

        let nodes = elem.find_by_class(&self.config.item_class)?;
        tracing::trace!(element = elem.id(), bound = nodes.len(), "binding item handlers");
        binder.bind_item_handlers(&nodes);

        Ok(())
    }

    /// Appends the cached items of the selected categories to `elem`
    ///
    /// Categories are rendered in the order given. Nothing is fetched
    /// here, so call `get_items` first. A missing item aborts the render
    /// before anything is appended.
    pub fn print_html(
        &self,
        elem: &mut Element,
        selection: impl Into<CategorySelection>,
    ) -> Result<(), InventoryError> {
        let selection = selection.into();
        let mut html = String::new();

        for &category in selection.categories() {
            for (position, slot) in self.items(category).iter().enumerate() {
                let item = slot
                    .as_ref()
                    .ok_or(InventoryError::InvalidItem { category, position })?;
                ItemFragment::new(&item.source).write_to(&mut html, &self.config);
            }
        }

        elem.append_html(&html);
        Ok(())
    }
}
