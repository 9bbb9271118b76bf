//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment, if one exists
//! 2. Attempts to load from environment variables
//! 3. If the API key is missing, falls back to loading from file
//! 4. Probes the working directory for config files
//! 5. Supports TOML, JSON and the legacy XML settings format
//!
//! ## Environment Variables
//! - `RECURLY_API_KEY`: Private API key (required)
//! - `RECURLY_JS_KEY`: Public key for client-side integrations
//! - `RECURLY_BASE_URL`: API root, defaults to the production endpoint
//! - `RECURLY_DEBUG`: Request/response diagnostics (true/false)
//! - `RECURLY_TIMEOUT_SECS`: Per-request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following names in the working directory (in
//! order): `recurly.toml`, `recurly.json`, `recurly.xml`, `config.toml`,
//! `config.json`, `config.xml`.
//!
//! ## XML Settings
//! The XML format is a flat document with the two keys only:
//!
//! ```xml
//! <settings>
//!   <apikey>...</apikey>
//!   <jskey>...</jskey>
//! </settings>
//! ```

use std::path::{Path, PathBuf};

use recurly_domain::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_DEBUG, ENV_JS_KEY, ENV_TIMEOUT_SECS,
};
use recurly_domain::{ClientConfig, RecurlyError, Result};
use serde::Deserialize;

use crate::errors::InfraError;

const CONFIG_STEMS: [&str; 2] = ["recurly", "config"];
const CONFIG_EXTENSIONS: [&str; 3] = ["toml", "json", "xml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables (after reading any
/// `.env` file). If the API key is not set, falls back to loading from a
/// config file.
///
/// # Errors
/// Returns `RecurlyError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) => tracing::trace!(error = %e, "No .env file loaded"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `RECURLY_API_KEY` must be present and non-empty; every other variable is
/// optional.
///
/// # Errors
/// Returns `RecurlyError::Config` if the API key is missing or a numeric
/// variable has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    let api_key = env_var(ENV_API_KEY)?;
    let mut config = ClientConfig::new(api_key);

    if let Some(js_key) = env_opt(ENV_JS_KEY) {
        config = config.with_js_key(js_key);
    }
    if let Some(base_url) = env_opt(ENV_BASE_URL) {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = env_opt(ENV_TIMEOUT_SECS) {
        let secs = secs.parse::<u64>().map_err(|e| {
            RecurlyError::Config(format!("Invalid {}: {}", ENV_TIMEOUT_SECS, e))
        })?;
        config = config.with_timeout_secs(secs);
    }

    Ok(config.with_debug(env_bool(ENV_DEBUG, false)))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the working directory for config files.
/// The format is detected by file extension.
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `RecurlyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The API key is missing or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RecurlyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RecurlyError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    parse_config(&contents, &config_path)
}

/// Legacy `<settings>` document.
#[derive(Debug, Deserialize)]
#[serde(rename = "settings")]
struct XmlSettings {
    apikey: String,
    #[serde(default)]
    jskey: Option<String>,
}

impl From<XmlSettings> for ClientConfig {
    fn from(settings: XmlSettings) -> Self {
        let config = ClientConfig::new(settings.apikey.trim());
        match settings.jskey.as_deref().map(str::trim) {
            Some(js_key) if !js_key.is_empty() => config.with_js_key(js_key),
            _ => config,
        }
    }
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml`, `.json` or `.xml`).
///
/// # Errors
/// Returns `RecurlyError::Config` if format is invalid, parsing fails, or the
/// API key is empty.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    let config: ClientConfig = match extension {
        "toml" => toml::from_str(contents).map_err(InfraError::from)?,
        "json" => serde_json::from_str(contents).map_err(InfraError::from)?,
        "xml" => quick_xml::de::from_str::<XmlSettings>(contents).map_err(InfraError::from)?.into(),
        _ => {
            return Err(RecurlyError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    if config.api_key.trim().is_empty() {
        return Err(RecurlyError::Config(format!(
            "API key is empty in {}",
            path.display()
        )));
    }

    Ok(config)
}

/// Probe the working directory for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_config_paths_in(&cwd)
}

/// Probe `dir` for configuration files, in the order documented on this
/// module.
pub fn probe_config_paths_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_STEMS
        .iter()
        .flat_map(|stem| CONFIG_EXTENSIONS.iter().map(move |ext| dir.join(format!("{stem}.{ext}"))))
        .find(|path| path.is_file())
}

/// Get required, non-empty environment variable
///
/// # Errors
/// Returns `RecurlyError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        RecurlyError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
