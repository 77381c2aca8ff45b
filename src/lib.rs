#![warn(missing_docs)]

//! Breadcrumb navigation for list containers.
//!
//! A [Breadcrumb](widgets::Breadcrumb) tracks a path of visited labels,
//! renders it into a list container and notifies listeners whenever the
//! path changes.

pub use crumbtk_core as core;
pub use crumbtk_services as services;
pub use crumbtk_widgets as widgets;

/// A "prelude" for users of crumbtk.
///
/// ```rust
/// use crumbtk::prelude::*;
///
/// let mut breadcrumb = Breadcrumb::attach(ElementList::new(), BreadcrumbConfig::default());
/// breadcrumb.push("Home");
/// assert_eq!(breadcrumb.depth(), 1);
/// ```
pub mod prelude {
    pub use crate::core::config::BreadcrumbConfig;
    pub use crate::core::container::{ElementList, ListContainer};
    pub use crate::core::dom::{Element, Node};
    pub use crate::core::error::{CrumbError, CrumbResult};
    pub use crate::core::path::{Path, Segment};
    pub use crate::core::signal::{ChangeEvent, ChangeKind, ListenerId};
    pub use crate::services::SettingsRegistry;
    pub use crate::widgets::Breadcrumb;
    pub use serde_json::{json, Value};
}
