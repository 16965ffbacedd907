//! Application configuration for tocify.
//!
//! User config lives at `~/.tocify/tocify.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TocifyError};
use crate::types::DEFAULT_MARKER;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "tocify.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".tocify";

// ---------------------------------------------------------------------------
// Config structs (matching tocify.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Parser settings.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Upload server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[parser]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Character whose leading repetition marks a section heading.
    #[serde(default = "default_marker")]
    pub section_marker: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            section_marker: default_marker(),
        }
    }
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted upload size, in mebibytes.
    #[serde(default = "default_max_upload_size_mb")]
    pub max_upload_size_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_size_mb: default_max_upload_size_mb(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}
fn default_max_upload_size_mb() -> usize {
    10
}

impl ServerConfig {
    /// Upload size limit in bytes.
    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_mb * 1024 * 1024
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.tocify/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| TocifyError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.tocify/tocify.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TocifyError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| TocifyError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| TocifyError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| TocifyError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| TocifyError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
