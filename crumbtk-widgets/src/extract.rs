// SPDX-License-Identifier: LGPL-3.0-only
//! Reading rendered items back into segments.
//!
//! Active items hold their label as direct text, clickable items wrap it in
//! a link. Both shapes are accepted; anything else yields an empty label.

use crate::render::{ItemFlags, CONTEXT_ATTRIBUTE, ITEM_TAG, LEVEL_ATTRIBUTE};
use crumbtk_core::context;
use crumbtk_core::dom::{Element, Node};
use crumbtk_core::path::{Path, Segment};
use serde_json::Value;

/// The label of a rendered item.
pub fn extract_label(item: &Element) -> String {
    let label = match item.first_child() {
        Some(Node::Text(text)) => Some(text.as_str()),
        Some(Node::Element(wrapper)) => wrapper.first_child().and_then(Node::as_text),
        None => None,
    };
    label.unwrap_or_default().to_string()
}

/// The decoded context of a rendered item.
pub fn extract_context(item: &Element) -> Option<Value> {
    context::decode(item.attribute(CONTEXT_ATTRIBUTE))
}

/// The 1-based level of a rendered item.
pub fn extract_level(item: &Element) -> Option<usize> {
    item.attribute(LEVEL_ATTRIBUTE)?.trim().parse().ok()
}

/// Read a full segment from a rendered item.
pub fn extract_segment(item: &Element) -> Segment {
    Segment {
        label: extract_label(item),
        context: extract_context(item),
    }
}

/// Read a path from rendered items in display order.
///
/// Non-item children and collapse markers are skipped, so a collapsed
/// rendering reads back only its visible segments.
pub fn extract_path<'a>(items: impl IntoIterator<Item = &'a Element>) -> Path {
    items
        .into_iter()
        .filter(|item| item.tag() == ITEM_TAG)
        .filter(|item| !ItemFlags::of(item).contains(ItemFlags::COLLAPSED))
        .map(extract_segment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{active_item, ellipsis_item, link_item};
    use serde_json::json;

    #[test]
    fn test_both_label_shapes() {
        let segment = Segment::new("Docs");
        assert_eq!(extract_label(&active_item(&segment, 2)), "Docs");
        assert_eq!(extract_label(&link_item(&segment, 2, "/")), "Docs");
    }

    #[test]
    fn test_malformed_items_do_not_panic() {
        assert_eq!(extract_label(&Element::new("li")), "");
        let empty_link = Element::new("li").with_child(Element::new("a"));
        assert_eq!(extract_label(&empty_link), "");
        let nested = Element::new("li").with_child(Element::new("a").with_child(Element::new("b")));
        assert_eq!(extract_label(&nested), "");
        assert_eq!(extract_level(&Element::new("li").with_attribute(LEVEL_ATTRIBUTE, "x")), None);
    }

    #[test]
    fn test_context_attribute() {
        let item = active_item(&Segment::new("a").with_context(json!([1, "two"])), 1);
        assert_eq!(extract_context(&item), Some(json!([1, "two"])));

        let broken = Element::new("li").with_attribute(CONTEXT_ATTRIBUTE, "{oops");
        assert_eq!(extract_context(&broken), None);
        assert_eq!(extract_context(&Element::new("li")), None);
    }

    #[test]
    fn test_extract_path_skips_markers() {
        let items = vec![
            link_item(&Segment::new("Home"), 1, "/"),
            ellipsis_item("/"),
            Element::new("hr"),
            active_item(&Segment::new("Leaf"), 4),
        ];
        assert_eq!(extract_path(&items).labels(), vec!["Home", "Leaf"]);
    }
}
