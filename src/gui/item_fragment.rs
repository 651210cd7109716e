//! Item fragment builder
//!
//! Both inventory views render every entry with the same markup: the
//! remove/raise/lower controls followed by the item image. The image URL
//! is escaped before it is interpolated.

use std::fmt::Write;

use crate::config::RenderConfig;

/// One item entry of an inventory view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFragment<'a> {
    /// Image URL, unescaped
    pub source: &'a str,
}

impl<'a> ItemFragment<'a> {
    pub fn new(source: &'a str) -> Self {
        ItemFragment { source }
    }

    /// Appends the fragment markup to `out`
    pub fn write_to(&self, out: &mut String, config: &RenderConfig) {
        let src = html_escape(self.source);
        // Writing into a String cannot fail
        let _ = write!(
            out,
            concat!(
                r#"<div class="{class}">"#,
                r##"<a href="#" class="remove">x</a>"##,
                r##"<a href="#" class="raise">+</a>"##,
                r##"<a href="#" class="lower">-</a>"##,
                r##"<a href="#" class="layer">"##,
                r#"<img src="{src}" data-src="{src}" width="{width}" height="{height}" />"#,
                r#"</a>"#,
                r#"</div>"#,
            ),
            class = config.item_class,
            src = src,
            width = config.image_width,
            height = config.image_height,
        );
    }

    /// Renders the fragment to a new string
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        self.write_to(&mut out, config);
        out
    }
}

/// Escapes text for use inside an attribute value or element body
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_markup() {
        let html = ItemFragment::new("a.png").render(&RenderConfig::default());
        assert_eq!(
            html,
            r##"<div class="item"><a href="#" class="remove">x</a><a href="#" class="raise">+</a><a href="#" class="lower">-</a><a href="#" class="layer"><img src="a.png" data-src="a.png" width="120" height="165" /></a></div>"##
        );
    }

    #[test]
    fn test_fragment_uses_config() {
        let config = RenderConfig {
            item_class: "wearable".to_string(),
            image_width: 60,
            image_height: 80,
        };
        let html = ItemFragment::new("b.png").render(&config);

        assert!(html.starts_with(r#"<div class="wearable">"#));
        assert!(html.contains(r#"width="60" height="80""#));
    }

    #[test]
    fn test_source_is_escaped() {
        let html = ItemFragment::new(r#"x.png" onerror="alert(1)"#).render(&RenderConfig::default());

        assert!(html.contains(r#"src="x.png&quot; onerror=&quot;alert(1)""#));
        assert!(!html.contains(r#"" onerror=""#));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a&b<c>\"d\""), "a&amp;b&lt;c&gt;&quot;d&quot;");
        assert_eq!(html_escape("plain.png"), "plain.png");
    }
}
