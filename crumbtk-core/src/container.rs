use crate::dom::Element;

/// A list-like container whose children are rendered items.
///
/// This is everything a breadcrumb needs from its host: appending items,
/// removing them by position, indexed and tag-based lookup, and attributes
/// on the container itself. A container may hold children the breadcrumb
/// does not own; those are only touched by the host.
pub trait ListContainer {
    /// Child items in display order.
    fn children(&self) -> &[Element];

    /// Append an item.
    fn append_child(&mut self, item: Element);

    /// Remove and return the item at `index`, or `None` if it is out of range.
    fn remove_child(&mut self, index: usize) -> Option<Element>;

    /// Read an attribute of the container.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Set an attribute of the container.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Number of items.
    fn len(&self) -> usize {
        self.children().len()
    }

    /// Whether the container holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `index`.
    fn child(&self, index: usize) -> Option<&Element> {
        self.children().get(index)
    }

    /// Items whose tag is `tag`.
    fn children_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.children().iter().filter(|c| c.tag() == tag).collect()
    }

    /// Positions of the items whose tag is `tag`.
    fn positions_by_tag(&self, tag: &str) -> Vec<usize> {
        self.children()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.tag() == tag)
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove every item whose tag is `tag`, leaving the others in place.
    /// Returns how many were removed.
    fn remove_children_by_tag(&mut self, tag: &str) -> usize {
        let positions = self.positions_by_tag(tag);
        for &index in positions.iter().rev() {
            self.remove_child(index);
        }
        positions.len()
    }
}

/// An in-memory list container, shaped like a `<ul>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementList {
    root: Element,
    items: Vec<Element>,
}

impl ElementList {
    /// Create an empty `ul` list.
    pub fn new() -> Self {
        Self::with_tag("ul")
    }

    /// Create an empty list with a custom tag.
    pub fn with_tag(tag: &str) -> Self {
        Self {
            root: Element::new(tag),
            items: Vec::new(),
        }
    }

    /// Builder variant of [ListContainer::set_attribute].
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.root.set_attribute(name, value);
        self
    }

    /// Builder variant of [ListContainer::append_child].
    pub fn with_item(mut self, item: Element) -> Self {
        self.items.push(item);
        self
    }

    /// The whole list, items included, as a single element.
    pub fn to_element(&self) -> Element {
        self.items
            .iter()
            .cloned()
            .fold(self.root.clone(), |root, item| root.with_child(item))
    }

    /// Render the list as markup.
    pub fn to_markup(&self) -> String {
        self.to_element().to_markup()
    }
}

impl Default for ElementList {
    fn default() -> Self {
        Self::new()
    }
}

impl ListContainer for ElementList {
    fn children(&self) -> &[Element] {
        &self.items
    }

    fn append_child(&mut self, item: Element) {
        self.items.push(item);
    }

    fn remove_child(&mut self, index: usize) -> Option<Element> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.root.attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.root.set_attribute(name, value);
    }
}
