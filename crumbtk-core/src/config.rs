//! # Breadcrumb Configuration
//!
//! [BreadcrumbConfig] holds the options a breadcrumb widget is created with.
//! It can be built programmatically, parsed from TOML, or overridden from
//! the environment:
//!
//! - `CRUMBTK_DIVIDER`: divider string placed after each link
//! - `CRUMBTK_MAX_ITEMS`: collapse paths deeper than this
//! - `CRUMBTK_SHOW_ROOT`: keep the root visible while collapsing (`true`/`false`)
//!
//! ```toml
//! [breadcrumb]
//! divider = ">"
//! max_items = 4
//! show_root = true
//! ```

use crate::error::{CrumbError, CrumbResult};
use serde::Deserialize;
use std::path::Path;

/// Default divider placed after every clickable item.
pub const DEFAULT_DIVIDER: &str = "/";

/// Options of a breadcrumb widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbConfig {
    /// Divider inserted after each non-terminal, clickable segment.
    pub divider: String,
    /// Collapse the middle of paths deeper than this into an ellipsis.
    pub max_items: Option<usize>,
    /// Keep the first segment visible when collapsing.
    pub show_root: bool,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            divider: DEFAULT_DIVIDER.to_string(),
            max_items: None,
            show_root: true,
        }
    }
}

/// Partial breadcrumb options as read from a config layer.
///
/// Every field is optional so that later layers only override what they set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BreadcrumbSettings {
    /// See [BreadcrumbConfig::divider].
    pub divider: Option<String>,
    /// See [BreadcrumbConfig::max_items].
    pub max_items: Option<usize>,
    /// See [BreadcrumbConfig::show_root].
    pub show_root: Option<bool>,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    breadcrumb: BreadcrumbSettings,
}

impl BreadcrumbConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the divider.
    pub fn with_divider(mut self, divider: impl Into<String>) -> Self {
        self.divider = divider.into();
        self
    }

    /// Collapse paths deeper than `max_items`.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Set whether the root stays visible when collapsing.
    pub fn with_show_root(mut self, show_root: bool) -> Self {
        self.show_root = show_root;
        self
    }

    /// Apply the fields a config layer sets.
    pub fn merge(&mut self, settings: BreadcrumbSettings) {
        if let Some(divider) = settings.divider {
            self.divider = divider;
        }
        if settings.max_items.is_some() {
            self.max_items = settings.max_items;
        }
        if let Some(show_root) = settings.show_root {
            self.show_root = show_root;
        }
    }

    /// Check that the configuration can be rendered.
    pub fn validate(&self) -> CrumbResult<()> {
        if self.max_items == Some(0) {
            return Err(CrumbError::invalid_config("max_items must be at least 1"));
        }
        if self.divider.contains('\n') {
            return Err(CrumbError::invalid_config("divider must be a single line"));
        }
        Ok(())
    }

    /// Parse the `[breadcrumb]` table of a TOML document on top of the defaults.
    pub fn from_toml(content: &str) -> CrumbResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| CrumbError::parse_error("toml", e.to_string()))?;
        let mut config = Self::default();
        config.merge(file.breadcrumb);
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> CrumbResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CrumbError::file_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            CrumbError::ConfigParse { details, .. } => {
                CrumbError::parse_error(path.display().to_string(), details)
            },
            other => other,
        })
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> CrumbResult<()> {
        let mut settings = BreadcrumbSettings {
            divider: lookup("CRUMBTK_DIVIDER"),
            ..Default::default()
        };
        if let Some(raw) = lookup("CRUMBTK_MAX_ITEMS") {
            let max_items = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| CrumbError::parse_error("CRUMBTK_MAX_ITEMS", e.to_string()))?;
            settings.max_items = Some(max_items);
        }
        if let Some(raw) = lookup("CRUMBTK_SHOW_ROOT") {
            let show_root = raw
                .trim()
                .parse::<bool>()
                .map_err(|e| CrumbError::parse_error("CRUMBTK_SHOW_ROOT", e.to_string()))?;
            settings.show_root = Some(show_root);
        }
        let mut candidate = self.clone();
        candidate.merge(settings);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}
