// SPDX-License-Identifier: LGPL-3.0-only
//! Rendering of a breadcrumb path into list items.
//!
//! Every segment but the last becomes a link followed by the divider, the
//! last becomes the active item:
//!
//! ```text
//! <li data-breadcrumb-level="1"><a href="#">Home</a> <span class="divider">/</span></li>
//! <li data-breadcrumb-level="2" data-breadcrumb-context="{&quot;id&quot;:1}" class="active">Docs</li>
//! ```

use bitflags::bitflags;
use crumbtk_core::config::BreadcrumbConfig;
use crumbtk_core::container::ListContainer;
use crumbtk_core::context;
use crumbtk_core::dom::{Element, Node};
use crumbtk_core::path::{Path, Segment};

/// Tag of every rendered item.
pub const ITEM_TAG: &str = "li";
/// Tag of the link wrapping a clickable label.
pub const LINK_TAG: &str = "a";
/// Attribute holding the 1-based level of an item.
pub const LEVEL_ATTRIBUTE: &str = "data-breadcrumb-level";
/// Attribute holding the JSON-encoded context of an item.
pub const CONTEXT_ATTRIBUTE: &str = "data-breadcrumb-context";
/// Class of the active item.
pub const ACTIVE_CLASS: &str = "active";
/// Class of the collapse marker.
pub const ELLIPSIS_CLASS: &str = "ellipsis";
/// Class of the divider span.
pub const DIVIDER_CLASS: &str = "divider";
/// Text of the collapse marker.
pub const ELLIPSIS: &str = "…";

bitflags! {
    /// What a rendered item is.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ItemFlags: u8 {
        /// The last segment of the path.
        const ACTIVE = 1 << 0;
        /// A link navigating back to its segment.
        const CLICKABLE = 1 << 1;
        /// The marker standing in for collapsed segments.
        const COLLAPSED = 1 << 2;
        /// The item carries a context attribute.
        const HAS_CONTEXT = 1 << 3;
    }
}

impl ItemFlags {
    /// Classify a rendered item.
    pub fn of(item: &Element) -> Self {
        let mut flags = Self::empty();
        if item.has_class(ACTIVE_CLASS) {
            flags |= Self::ACTIVE;
        }
        if item.has_class(ELLIPSIS_CLASS) {
            flags |= Self::COLLAPSED;
        }
        let links = item
            .first_child()
            .and_then(Node::as_element)
            .is_some_and(|e| e.tag() == LINK_TAG);
        if links && !flags.contains(Self::COLLAPSED) {
            flags |= Self::CLICKABLE;
        }
        if item.attribute(CONTEXT_ATTRIBUTE).is_some() {
            flags |= Self::HAS_CONTEXT;
        }
        flags
    }
}

/// A visible position in the rendered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The segment at this 0-based index.
    Segment(usize),
    /// The collapse marker.
    Ellipsis,
}

/// The slots to render for a path of `depth` segments.
///
/// The active segment is always visible. With `max_items` set and exceeded,
/// the oldest segments (after the root, if `show_root`) collapse into a
/// single ellipsis slot.
pub fn visible_slots(depth: usize, config: &BreadcrumbConfig) -> Vec<Slot> {
    let max_items = match config.max_items {
        Some(max_items) if depth > max_items.max(1) => max_items.max(1),
        _ => return (0..depth).map(Slot::Segment).collect(),
    };

    let mut slots = Vec::with_capacity(max_items + 1);
    if max_items == 1 {
        slots.push(Slot::Segment(depth - 1));
    } else if config.show_root {
        slots.push(Slot::Segment(0));
        slots.push(Slot::Ellipsis);
        let start = depth.saturating_sub(max_items.saturating_sub(2).max(1)).max(1);
        slots.extend((start..depth).map(Slot::Segment));
    } else {
        slots.push(Slot::Ellipsis);
        let start = depth.saturating_sub(max_items - 1);
        slots.extend((start..depth).map(Slot::Segment));
    }
    slots
}

fn base_item(segment: &Segment, level: usize) -> Element {
    let item = Element::new(ITEM_TAG).with_attribute(LEVEL_ATTRIBUTE, level.to_string());
    match &segment.context {
        Some(value) => item.with_attribute(CONTEXT_ATTRIBUTE, context::encode(value)),
        None => item,
    }
}

fn divider(divider: &str) -> Element {
    Element::new("span").with_class(DIVIDER_CLASS).with_text(divider)
}

/// The active item: label as direct text.
pub fn active_item(segment: &Segment, level: usize) -> Element {
    base_item(segment, level)
        .with_class(ACTIVE_CLASS)
        .with_text(segment.label.as_str())
}

/// A clickable item: label inside a link, followed by the divider.
pub fn link_item(segment: &Segment, level: usize, divider_text: &str) -> Element {
    base_item(segment, level)
        .with_child(
            Element::new(LINK_TAG)
                .with_attribute("href", "#")
                .with_text(segment.label.as_str()),
        )
        .with_text(" ")
        .with_child(divider(divider_text))
}

/// The collapse marker.
pub fn ellipsis_item(divider_text: &str) -> Element {
    Element::new(ITEM_TAG)
        .with_class(ELLIPSIS_CLASS)
        .with_text(ELLIPSIS)
        .with_text(" ")
        .with_child(divider(divider_text))
}

/// Render a path into items.
pub fn project(path: &Path, config: &BreadcrumbConfig) -> Vec<Element> {
    let segments = path.segments();
    let last = segments.len().saturating_sub(1);
    visible_slots(segments.len(), config)
        .into_iter()
        .map(|slot| match slot {
            Slot::Ellipsis => ellipsis_item(&config.divider),
            Slot::Segment(index) if index == last => active_item(&segments[index], index + 1),
            Slot::Segment(index) => link_item(&segments[index], index + 1, &config.divider),
        })
        .collect()
}

/// Bring a container's breadcrumb items in line with `items`.
///
/// Only `li` children take part: leading items equal to the wanted ones
/// are kept, the rest are removed and the missing ones appended. Children
/// with any other tag stay where they are. Returns the number of items that
/// were kept.
pub fn sync<C: ListContainer + ?Sized>(container: &mut C, items: Vec<Element>) -> usize {
    let positions = container.positions_by_tag(ITEM_TAG);
    let kept = positions
        .iter()
        .zip(&items)
        .take_while(|(index, wanted)| container.child(**index) == Some(*wanted))
        .count();
    for &index in positions[kept..].iter().rev() {
        container.remove_child(index);
    }
    for item in items.into_iter().skip(kept) {
        container.append_child(item);
    }
    kept
}
