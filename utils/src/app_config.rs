use std::sync::RwLock;

use config::{Config, Environment, File, FileFormat};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::error::Result;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (debug, info, warn, error).
    pub level: String,
    /// Directory for the file drain. Terminal-only logging when unset.
    pub directory: Option<String>,
}

/// Daemon invocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Executable that replaces the launcher process.
    pub binary: String,
    /// User the daemon runs as (`-u`).
    pub user: String,
    /// File whose presence signals containerized execution.
    pub container_marker: String,
}

/// Runtime directory layout, relative to the snap roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directories created under $SNAP_DATA.
    pub data_dirs: Vec<String>,
    /// Directories created under $SNAP_COMMON.
    pub common_dirs: Vec<String>,
    /// Packaged configuration template, relative to $SNAP.
    pub config_template: String,
    /// Installed configuration file, relative to $SNAP_DATA.
    pub config_file: String,
}

/// Effective application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub debug: bool,
    pub log: LogConfig,
    pub daemon: DaemonConfig,
    pub layout: LayoutConfig,
}

impl AppConfig {
    /// Initialize the global configuration from the embedded defaults and
    /// the `APP_*` environment overlay.
    pub fn init(default_config: Option<&str>) -> Result<()> {
        let mut builder = Config::builder();

        // Embedded file contents. Check include_str! at the call site.
        if let Some(config_contents) = default_config {
            builder = builder.add_source(File::from_str(config_contents, FileFormat::Toml));
        }

        // Environment overrides, e.g. APP_DAEMON__BINARY. The prefix is
        // separated by a single underscore, sections by a double one.
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder.build()?;

        // Save Config to RwLock
        {
            let mut w = CONFIG.write()?;
            *w = settings;
        }

        Ok(())
    }

    /// Merge an additional configuration file over the current settings.
    pub fn merge_config(config_file: Option<&str>) -> Result<()> {
        if let Some(config_file_path) = config_file {
            let current = { CONFIG.read()?.clone() };
            let settings = Config::builder()
                .add_source(current)
                .add_source(File::with_name(config_file_path))
                .build()?;

            let mut w = CONFIG.write()?;
            *w = settings;
        }

        Ok(())
    }

    /// Override a single value by dotted key.
    pub fn set(key: &str, value: &str) -> Result<()> {
        let current = { CONFIG.read()?.clone() };
        let settings = Config::builder()
            .add_source(current)
            .set_override(key, value)?
            .build()?;

        let mut w = CONFIG.write()?;
        *w = settings;

        Ok(())
    }

    /// Get a single value by dotted key.
    pub fn get<'de, T>(key: &str) -> Result<T>
    where
        T: Deserialize<'de>,
    {
        Ok(CONFIG.read()?.get::<T>(key)?)
    }

    /// Deserialize the whole configuration.
    ///
    /// This clones the shared `Config`, so the result is a snapshot; fetch
    /// again after changing the configuration.
    pub fn fetch() -> Result<AppConfig> {
        let config = { CONFIG.read()?.clone() };

        Ok(config.try_deserialize()?)
    }
}
