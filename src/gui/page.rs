//! Standalone page wrapping both inventory panels

use crate::dom::Element;
use crate::gui::item_fragment::html_escape;

/// Renders a complete HTML document holding the equipped and browser panels
///
/// Each panel keeps its element id so the page can be re-rendered into the
/// same containers later.
pub fn render_page(title: &str, equipped: &Element, browser: &Element) -> String {
    let title = html_escape(title);
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head><meta charset=\"utf-8\" /><title>{title}</title></head>\n",
            "<body>\n",
            "<h1>{title}</h1>\n",
            "<h2>Equipped</h2>\n",
            "<div id=\"{equipped_id}\">{equipped}</div>\n",
            "<h2>Inventory</h2>\n",
            "<div id=\"{browser_id}\">{browser}</div>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = title,
        equipped_id = html_escape(equipped.id()),
        equipped = equipped.inner_html(),
        browser_id = html_escape(browser.id()),
        browser = browser.inner_html(),
    )
}
