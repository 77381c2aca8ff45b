// SPDX-License-Identifier: LGPL-3.0-only
//! Services for crumbtk.
//!
//! Currently the layered settings registry.

/// Layered settings loading.
pub mod settings;
pub use settings::{Config, SettingsRegistry};
