// SPDX-License-Identifier: LGPL-3.0-only
//! Breadcrumbs widget for navigation within hierarchical structures.
//!
//! The widget keeps the visited path in memory and projects it onto a list
//! container after every change. Every segment but the last is rendered as
//! a link; clicking one cuts the path back to it.

use crate::extract;
use crate::render::{self, ItemFlags, ITEM_TAG};
use crumbtk_core::config::BreadcrumbConfig;
use crumbtk_core::container::{ElementList, ListContainer};
use crumbtk_core::path::{Path, Segment};
use crumbtk_core::signal::{ChangeEvent, ChangeKind, ChangeSignal, ListenerId};
use serde_json::Value;
use std::fmt;

/// A breadcrumb bound to a list container.
///
/// ### Usage Examples
///
/// ```rust
/// use crumbtk_core::config::BreadcrumbConfig;
/// use crumbtk_core::container::ElementList;
/// use crumbtk_core::path::Segment;
/// use crumbtk_widgets::Breadcrumb;
///
/// let mut breadcrumb = Breadcrumb::attach(ElementList::new(), BreadcrumbConfig::default())
///     .with_on_change(|event| println!("now at {:?}", event.path));
///
/// breadcrumb.push("Home");
/// breadcrumb.push(Segment::new("Docs").with_context(serde_json::json!({"id": 1})));
/// breadcrumb.pop_one();
/// assert_eq!(breadcrumb.labels(), vec!["Home"]);
/// ```
pub struct Breadcrumb<C: ListContainer = ElementList> {
    container: C,
    path: Path,
    config: BreadcrumbConfig,
    on_change: ChangeSignal,
}

impl<C: ListContainer> fmt::Debug for Breadcrumb<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breadcrumb")
            .field("path", &self.path.labels())
            .field("config", &self.config)
            .field("on_change", &self.on_change)
            .finish()
    }
}

impl<C: ListContainer> Breadcrumb<C> {
    /// Bind a breadcrumb to `container`.
    ///
    /// Items already in the container are read back as the initial path.
    pub fn attach(mut container: C, config: BreadcrumbConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("Breadcrumb attached with questionable config: {}", e);
        }
        if container.attribute("class").is_none() {
            container.set_attribute("class", "breadcrumb");
        }

        let path = extract::extract_path(container.children_by_tag(ITEM_TAG));
        if !path.is_empty() {
            log::debug!("Breadcrumb picked up existing path {:?}", path.labels());
        }

        let mut breadcrumb = Self {
            container,
            path,
            config,
            on_change: ChangeSignal::new(),
        };
        breadcrumb.render();
        breadcrumb
    }

    /// Register a change listener while building.
    pub fn with_on_change(mut self, listener: impl Fn(&ChangeEvent) + 'static) -> Self {
        self.on_change.listen(listener);
        self
    }

    /// Register a change listener.
    pub fn on_change(&mut self, listener: impl Fn(&ChangeEvent) + 'static) -> ListenerId {
        self.on_change.listen(listener)
    }

    /// Remove a change listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.on_change.unlisten(id)
    }

    /// Append a segment and make it the active one.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        let segment = segment.into();
        let context = segment.context.clone();
        log::debug!("Breadcrumb push {:?} at level {}", segment.label, self.path.depth() + 1);
        self.path.push(segment);
        self.render();
        self.emit(ChangeKind::Push, context);
    }

    /// Remove the last `count` segments and re-activate the new last one.
    ///
    /// Popping more segments than exist empties the path. The change event
    /// carries the newly active segment's context, or none once the path is
    /// empty. Returns the removed segments in path order.
    pub fn pop(&mut self, count: usize) -> Vec<Segment> {
        let removed = self.path.pop(count);
        log::debug!(
            "Breadcrumb pop {} (removed {}, depth now {})",
            count,
            removed.len(),
            self.path.depth()
        );
        self.render();
        self.emit(ChangeKind::Pop, self.path.active_context().cloned());
        removed
    }

    /// Remove the active segment.
    pub fn pop_one(&mut self) -> Option<Segment> {
        self.pop(1).pop()
    }

    /// Remove all segments.
    ///
    /// Only the rendered items go; other children of the container stay.
    pub fn reset(&mut self) {
        self.path.clear();
        let removed = self.container.remove_children_by_tag(ITEM_TAG);
        log::debug!("Breadcrumb reset (removed {} items)", removed);
        self.on_change.emit(&ChangeEvent::reset());
    }

    /// Cut the path back to the segment at the 1-based `level`.
    ///
    /// Returns `false` without emitting when `level` is not a link, which
    /// includes the active segment.
    pub fn navigate_to(&mut self, level: usize) -> bool {
        if level == 0 || level >= self.path.depth() {
            return false;
        }
        let removed = self.path.truncate_to(level).map_or(0, |r| r.len());
        log::debug!("Breadcrumb navigate to level {} (removed {})", level, removed);
        self.render();
        self.emit(ChangeKind::Navigate, self.path.active_context().cloned());
        true
    }

    /// Handle a click on the container child at `index`.
    ///
    /// Only links react. The item's level attribute decides where the path
    /// is cut, so the outcome does not depend on when the link was rendered.
    pub fn click(&mut self, index: usize) -> bool {
        let Some(item) = self.container.child(index) else {
            return false;
        };
        if !ItemFlags::of(item).contains(ItemFlags::CLICKABLE) {
            log::trace!("Ignoring click on inactive breadcrumb item {}", index);
            return false;
        }
        let Some(level) = extract::extract_level(item) else {
            log::warn!("Clicked breadcrumb item {} has no level", index);
            return false;
        };
        log::trace!(
            "Click on breadcrumb item {} (level {}, path {:?})",
            index,
            level,
            self.path.labels()
        );
        self.navigate_to(level)
    }

    /// Replace the configuration and re-render without emitting a change.
    pub fn set_config(&mut self, config: BreadcrumbConfig) {
        self.config = config;
        self.render();
    }

    /// The current path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current label sequence.
    pub fn labels(&self) -> Vec<String> {
        self.path.labels()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Context of the active segment.
    pub fn active_context(&self) -> Option<&Value> {
        self.path.active_context()
    }

    /// The configuration in use.
    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// The container the breadcrumb renders into.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Detach from the container and hand it back.
    pub fn into_container(self) -> C {
        self.container
    }

    fn render(&mut self) {
        let items = render::project(&self.path, &self.config);
        render::sync(&mut self.container, items);
    }

    fn emit(&self, kind: ChangeKind, context: Option<Value>) {
        let event = ChangeEvent {
            kind,
            path: self.path.labels(),
            context,
        };
        self.on_change.emit(&event);
    }
}

impl<C: ListContainer> fmt::Display for Breadcrumb<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!(" {} ", self.config.divider);
        f.write_str(&self.path.labels().join(&separator))
    }
}
