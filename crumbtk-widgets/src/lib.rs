// SPDX-License-Identifier: LGPL-3.0-only
//! Widgets for crumbtk.
//!
//! Contains the breadcrumb widget and the rendering and extraction helpers
//! it uses to keep a list container in step with its path.

/// Contains the [breadcrumb::Breadcrumb] widget.
pub mod breadcrumb;
pub use breadcrumb::Breadcrumb;

/// Reads segments back out of rendered items.
pub mod extract;

/// Projects a path onto rendered items.
pub mod render;
