use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The class name cannot be turned into a `.class` selector
    #[error("Invalid class selector: {0}")]
    InvalidSelector(String),
}

/// A document element whose content is HTML text
///
/// Views either replace the content (`set_inner_html`) or append to it
/// (`append_html`), mirroring `innerHTML` assignment in a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: String,
    inner_html: String,
}

/// An element found by class lookup
///
/// Owned snapshot of the matched element, so binders can keep it after
/// the container is re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    /// Index among the matches, in document order
    pub position: usize,

    /// Outer HTML of the matched element
    pub html: String,

    /// `data-src` of the first image inside the element, if any
    pub data_src: Option<String>,
}

impl Element {
    /// Creates an empty element with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Element {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replaces the element's entire content
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    /// Appends markup after the existing content
    pub fn append_html(&mut self, html: &str) {
        self.inner_html.push_str(html);
    }

    /// Finds every element in this element's subtree carrying `class`
    pub fn find_by_class(&self, class: &str) -> Result<Vec<ItemNode>, DomError> {
        if class.is_empty() || class.chars().any(|c| c.is_whitespace() || c == '.') {
            return Err(DomError::InvalidSelector(class.to_string()));
        }

        let selector = Selector::parse(&format!(".{class}"))
            .map_err(|_| DomError::InvalidSelector(class.to_string()))?;
        let image = Selector::parse("img[data-src]")
            .map_err(|_| DomError::InvalidSelector("img[data-src]".to_string()))?;

        let fragment = Html::parse_fragment(&self.inner_html);
        let nodes: Vec<ItemNode> = fragment
            .select(&selector)
            .enumerate()
            .map(|(position, matched)| ItemNode {
                position,
                html: matched.html(),
                data_src: matched
                    .select(&image)
                    .next()
                    .and_then(|img| img.value().attr("data-src"))
                    .map(str::to_string),
            })
            .collect();

        tracing::trace!(element = %self.id, class, matches = nodes.len(), "class lookup");
        Ok(nodes)
    }
}
