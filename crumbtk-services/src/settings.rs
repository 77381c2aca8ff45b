// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use crumbtk_core::config::{BreadcrumbConfig, BreadcrumbSettings};
use serde::Deserialize;
use smol::fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// XDG prefix the settings live under.
pub const XDG_PREFIX: &str = "crumbtk-0";

/// Name of the settings file.
pub const CONFIG_FILE: &str = "config.toml";

/// The main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Breadcrumb widget settings
    #[serde(default)]
    pub breadcrumb: BreadcrumbSettings,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

/// The `[general]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    /// Enables debug output.
    pub debug: Option<bool>,
    /// Log filter passed to the logger, e.g. `debug` or `crumbtk_widgets=trace`.
    pub log_level: Option<String>,
}

/// Registry for managing settings.
pub struct SettingsRegistry {
    config: Config,
}

impl SettingsRegistry {
    /// Create a registry with defaults only.
    pub fn empty() -> Self {
        Self {
            config: Config {
                general: GeneralSettings {
                    debug: Some(false),
                    log_level: None,
                },
                breadcrumb: BreadcrumbSettings::default(),
                other: HashMap::new(),
            },
        }
    }

    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::empty();
        registry.load().await?;
        Ok(registry)
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/crumbtk-0/config.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/crumbtk-0/config.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/crumbtk-0/config.toml (XDG_CONFIG_HOME)
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;

        for path in xdg_dirs.find_data_files(CONFIG_FILE).rev() {
            self.load_file(&path).await;
        }

        // Config dirs come before the user's config home once reversed.
        for path in xdg_dirs.find_config_files(CONFIG_FILE).rev() {
            self.load_file(&path).await;
        }

        Ok(())
    }

    async fn load_file(&mut self, path: &Path) {
        log::info!("Loading config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse config file {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
            },
        }
    }

    /// Merge a loaded config into the current config.
    fn merge(&mut self, other: Config) {
        if let Some(debug) = other.general.debug {
            self.config.general.debug = Some(debug);
        }
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }

        let breadcrumb = &mut self.config.breadcrumb;
        if other.breadcrumb.divider.is_some() {
            breadcrumb.divider = other.breadcrumb.divider;
        }
        if other.breadcrumb.max_items.is_some() {
            breadcrumb.max_items = other.breadcrumb.max_items;
        }
        if other.breadcrumb.show_root.is_some() {
            breadcrumb.show_root = other.breadcrumb.show_root;
        }

        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// The log filter to hand to the logger, if one is configured.
    pub fn log_filter(&self) -> Option<&str> {
        match (&self.config.general.log_level, self.config.general.debug) {
            (Some(level), _) => Some(level.as_str()),
            (None, Some(true)) => Some("debug"),
            _ => None,
        }
    }

    /// Resolve the breadcrumb configuration: defaults, then loaded files,
    /// then `CRUMBTK_*` environment variables.
    ///
    /// A layer that would produce an invalid configuration is logged and
    /// skipped.
    pub fn breadcrumb_config(&self) -> BreadcrumbConfig {
        self.breadcrumb_config_with(|key| std::env::var(key).ok())
    }

    /// [SettingsRegistry::breadcrumb_config] with variables read through `lookup`.
    pub fn breadcrumb_config_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> BreadcrumbConfig {
        let mut config = BreadcrumbConfig::default();
        let mut from_files = config.clone();
        from_files.merge(self.config.breadcrumb.clone());
        match from_files.validate() {
            Ok(()) => config = from_files,
            Err(e) => log::warn!("Ignoring breadcrumb settings from files: {}", e),
        }
        if let Err(e) = config.apply_env_with(lookup) {
            log::warn!("Ignoring breadcrumb environment overrides: {}", e);
        }
        config
    }

    /// Load configuration from multiple custom paths asynchronously.
    pub async fn load_from_paths_async(&mut self, paths: Vec<PathBuf>) -> Vec<Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;

                let loaded_config: Config = toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e))?;

                self.merge(loaded_config);
                Ok(())
            }
            .await;

            results.push(result);
        }

        results
    }

    /// Reload configuration asynchronously (re-runs the full load process).
    pub async fn reload_async(&mut self) -> Result<()> {
        *self = Self::empty();
        self.load().await
    }
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::empty()
    }
}
