//! Configuration loading tests
//!
//! Covers:
//! - TOML file parsing and rejection of malformed files
//! - Priority order: command line > TOML file > compiled defaults
//! - Default config file discovery in the user config directory
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked #[serial] so they do not
//! race each other.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tegh_common::config::{
    find_config_file, load_toml_config, ConfigOverrides, SiteConfig, DEFAULT_PORT,
};
use tegh_common::Error;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_full_toml_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
bind = "127.0.0.1"
port = 8123
content_dir = "/srv/tegh/content"
public_dir = "/srv/tegh/public"

[logging]
level = "warn"
"#,
    );

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.bind.as_deref(), Some("127.0.0.1"));
    assert_eq!(config.port, Some(8123));
    assert_eq!(config.content_dir, Some(PathBuf::from("/srv/tegh/content")));
    assert_eq!(config.public_dir, Some(PathBuf::from("/srv/tegh/public")));
    assert_eq!(config.logging.level.as_deref(), Some("warn"));
}

#[test]
fn test_empty_toml_config_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let config = load_toml_config(&path).unwrap();
    assert!(config.port.is_none());
    assert!(config.logging.level.is_none());
}

#[test]
fn test_malformed_toml_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = \"not a number\"\n");

    let result = load_toml_config(&path);
    assert!(matches!(result, Err(Error::Toml(_))));
}

#[test]
fn test_unknown_toml_key_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "database_path = \"/tmp/x.db\"\n");

    assert!(load_toml_config(&path).is_err());
}

#[test]
fn test_explicit_missing_config_file_is_error() {
    let overrides = ConfigOverrides {
        config_file: Some(PathBuf::from("/nonexistent/tegh/config.toml")),
        ..Default::default()
    };

    let result = SiteConfig::resolve(&overrides);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_config_file_applied_under_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = 8123\ncontent_dir = \"/srv/content\"\n");

    let overrides = ConfigOverrides {
        port: Some(9000),
        config_file: Some(path.clone()),
        ..Default::default()
    };

    let config = SiteConfig::resolve(&overrides).unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
    assert_eq!(config.config_file, Some(path));
}

#[test]
#[serial]
fn test_config_discovered_in_user_config_dir() {
    let dir = TempDir::new().unwrap();
    let tegh_dir = dir.path().join("tegh");
    fs::create_dir_all(&tegh_dir).unwrap();
    fs::write(tegh_dir.join("config.toml"), "port = 6001\n").unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let found = find_config_file();
    let config = SiteConfig::resolve(&ConfigOverrides::default());

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    #[cfg(target_os = "linux")]
    {
        assert_eq!(found, Some(tegh_dir.join("config.toml")));
        assert_eq!(config.unwrap().port, 6001);
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = (found, config);
    }
}

#[test]
#[serial]
fn test_malformed_discovered_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let tegh_dir = dir.path().join("tegh");
    fs::create_dir_all(&tegh_dir).unwrap();
    fs::write(tegh_dir.join("config.toml"), "port = [[[\n").unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = SiteConfig::resolve(&ConfigOverrides::default());

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    #[cfg(target_os = "linux")]
    {
        let config = config.expect("malformed default config should not abort startup");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.config_file.is_none());
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = config;
    }
}
