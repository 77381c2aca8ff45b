//! Loading from the XDG base directories.
//!
//! The XDG variables are process-wide, so everything that depends on them
//! lives in this one test binary and runs as a single test.

use crumbtk_services::settings::{CONFIG_FILE, XDG_PREFIX};
use crumbtk_services::SettingsRegistry;
use std::fs;
use std::path::{Path, PathBuf};

fn write_config(base: &Path, content: &str) -> PathBuf {
    let dir = base.join(XDG_PREFIX);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_xdg_layers_load_and_reload() {
    let root = tempfile::tempdir().unwrap();
    let data_dirs = root.path().join("share");
    let data_home = root.path().join("data-home");
    let config_dirs = root.path().join("etc");
    let config_home = root.path().join("config-home");
    for dir in [&data_dirs, &data_home, &config_dirs, &config_home] {
        fs::create_dir_all(dir).unwrap();
    }

    std::env::set_var("HOME", root.path());
    std::env::set_var("XDG_DATA_DIRS", &data_dirs);
    std::env::set_var("XDG_DATA_HOME", &data_home);
    std::env::set_var("XDG_CONFIG_DIRS", &config_dirs);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);

    write_config(
        &data_dirs,
        "[general]\ndebug = true\n[breadcrumb]\ndivider = \">\"\nmax_items = 8\n",
    );
    write_config(&data_home, "[breadcrumb]\ndivider = \"»\"\nmax_items = 7\n");
    let system = write_config(&config_dirs, "[breadcrumb]\nmax_items = 5\nshow_root = false\n");
    let user = write_config(&config_home, "[breadcrumb]\nmax_items = 4\n");

    let mut registry = smol::block_on(SettingsRegistry::new()).unwrap();
    let breadcrumb = &registry.get().breadcrumb;
    assert_eq!(breadcrumb.divider.as_deref(), Some("»"));
    assert_eq!(breadcrumb.max_items, Some(4));
    assert_eq!(breadcrumb.show_root, Some(false));
    assert_eq!(registry.log_filter(), Some("debug"));

    let config = registry.breadcrumb_config_with(|_| None);
    assert_eq!(config.divider, "»");
    assert_eq!(config.max_items, Some(4));
    assert!(!config.show_root);

    // Reloading starts over, so removed settings do not linger.
    fs::write(&user, "[breadcrumb]\nmax_items = 3\n").unwrap();
    fs::remove_file(&system).unwrap();
    smol::block_on(registry.reload_async()).unwrap();
    let breadcrumb = &registry.get().breadcrumb;
    assert_eq!(breadcrumb.max_items, Some(3));
    assert_eq!(breadcrumb.show_root, None);
    assert_eq!(breadcrumb.divider.as_deref(), Some("»"));

    // A broken user file is skipped and the lower layers still apply.
    fs::write(&user, "[breadcrumb\nmax_items = ").unwrap();
    smol::block_on(registry.load()).unwrap();
    assert_eq!(registry.get().breadcrumb.max_items, Some(3));
    smol::block_on(registry.reload_async()).unwrap();
    assert_eq!(registry.get().breadcrumb.max_items, Some(7));
}
