use super::element::ItemNode;

/// Wires event handlers onto freshly rendered item elements
///
/// Called by the equipped view after every re-render, with the item
/// elements in the order they appear on the page.
pub trait HandlerBinder {
    fn bind_item_handlers(&mut self, items: &[ItemNode]);
}

impl<F> HandlerBinder for F
where
    F: FnMut(&[ItemNode]),
{
    fn bind_item_handlers(&mut self, items: &[ItemNode]) {
        self(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_binder() {
        let mut seen = Vec::new();
        {
            let mut binder = |items: &[ItemNode]| seen.extend(items.iter().map(|n| n.position));
            let nodes = vec![
                ItemNode { position: 0, html: String::new(), data_src: None },
                ItemNode { position: 1, html: String::new(), data_src: None },
            ];
            binder.bind_item_handlers(&nodes);
        }
        assert_eq!(seen, vec![0, 1]);
    }
}
