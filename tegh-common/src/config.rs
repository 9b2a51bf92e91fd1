//! Configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument or its environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! A missing TOML file is not an error. An explicitly requested file that
//! cannot be read or parsed is.

use crate::{Error, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Content file names inside the content directory
pub const GURDWARA_DATA_FILE: &str = "gurdwara-data.json";
pub const BAANI_TEXT_FILE: &str = "baani.txt";
pub const BAANI_RAAGS_FILE: &str = "baani-raags.json";

const CONFIG_DIR_NAME: &str = "tegh";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration as read from a TOML file
///
/// Every field is optional; anything left out falls back to the compiled
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub bind: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Directory holding `gurdwara-data.json` and `baani.txt`
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Directory served as static files (audio, PDFs, images)
    #[serde(default)]
    pub public_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Values supplied on the command line (or through the matching
/// environment variables)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub content_dir: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Explicit TOML file; disables the default file search
    pub config_file: Option<PathBuf>,
}

/// Fully resolved site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind: String,
    pub port: u16,
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    pub log_level: String,
    /// TOML file the configuration was read from, if any
    pub config_file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            content_dir: PathBuf::from("./content"),
            public_dir: PathBuf::from("./public"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_file: None,
        }
    }
}

impl SiteConfig {
    /// Resolve configuration from command-line overrides, TOML file and
    /// compiled defaults
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let (toml, source) = match &overrides.config_file {
            Some(path) => (Some(load_toml_config(path)?), Some(path.clone())),
            None => match find_config_file() {
                Some(path) => match load_toml_config(&path) {
                    Ok(config) => (Some(config), Some(path)),
                    Err(e) => {
                        warn!("Ignoring config file {}: {}", path.display(), e);
                        (None, None)
                    }
                },
                None => (None, None),
            },
        };

        let mut config = Self::from_sources(overrides, toml)?;
        config.config_file = source;
        Ok(config)
    }

    /// Merge overrides over TOML values over defaults
    pub fn from_sources(overrides: &ConfigOverrides, toml: Option<TomlConfig>) -> Result<Self> {
        let toml = toml.unwrap_or_default();
        let defaults = Self::default();

        let config = Self {
            bind: overrides
                .bind
                .clone()
                .or(toml.bind)
                .unwrap_or(defaults.bind),
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            content_dir: overrides
                .content_dir
                .clone()
                .or(toml.content_dir)
                .unwrap_or(defaults.content_dir),
            public_dir: overrides
                .public_dir
                .clone()
                .or(toml.public_dir)
                .unwrap_or(defaults.public_dir),
            log_level: overrides
                .log_level
                .clone()
                .or(toml.logging.level)
                .unwrap_or(defaults.log_level),
            config_file: None,
        };

        config.socket_addr()?;
        Ok(config)
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("Invalid bind address: {:?}", self.bind)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn gurdwara_data_path(&self) -> PathBuf {
        self.content_dir.join(GURDWARA_DATA_FILE)
    }

    pub fn baani_text_path(&self) -> PathBuf {
        self.content_dir.join(BAANI_TEXT_FILE)
    }

    pub fn baani_raags_path(&self) -> PathBuf {
        self.content_dir.join(BAANI_RAAGS_FILE)
    }
}

/// Read and parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    Ok(toml::from_str(&content)?)
}

/// Locate the default configuration file
///
/// Looks in the user config directory (`~/.config/tegh/config.toml` on
/// Linux) first, then `/etc/tegh/config.toml` on Unix.
pub fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    if let Some(path) = user_config {
        if path.is_file() {
            return Some(path);
        }
    }

    if cfg!(unix) {
        let system_config = PathBuf::from("/etc")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        if system_config.is_file() {
            return Some(system_config);
        }
    }

    None
}
