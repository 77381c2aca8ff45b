#![warn(missing_docs)]

//! Core library for crumbtk => See `crumbtk` crate.
//!
//! Contains the breadcrumb path model, the list container abstraction and
//! the change signal that widgets emit through.

/// Contains the [BreadcrumbConfig](config::BreadcrumbConfig) struct.
pub mod config;

/// Contains the list container abstraction the widgets render into.
pub mod container;

/// Contains segment context encoding and decoding.
pub mod context;

/// Contains a small element tree used as the rendering target.
pub mod dom;

/// Contains the error types of crumbtk.
pub mod error;

/// Contains the breadcrumb [Path](path::Path) and [Segment](path::Segment) types.
pub mod path;

/// Contains the change signal for notifying listeners about path changes.
pub mod signal;

pub use serde_json::Value;
