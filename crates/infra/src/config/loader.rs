//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. If a config file is given or found nearby, it replaces the defaults
//! 3. Environment variables override individual fields
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BIZHUB_API_BASE_URL` (or `REACT_APP_BACKEND_URL`): Backend base URL
//! - `BIZHUB_APP_ORIGIN`: Value of the `Origin` header
//! - `BIZHUB_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `BIZHUB_STORAGE_PATH`: Key-value storage file
//! - `BIZHUB_LOG_LEVEL`: `EnvFilter` directive
//! - `BIZHUB_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./bizhub.{json,toml}` or `./config.{json,toml}` (current working directory)
//! 2. `../` and `../../` variants (parent directories)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use bizhub_domain::{BizHubError, Config, Result};

const ENV_BASE_URL: &str = "BIZHUB_API_BASE_URL";
const ENV_BASE_URL_ALIAS: &str = "REACT_APP_BACKEND_URL";
const ENV_ORIGIN: &str = "BIZHUB_APP_ORIGIN";
const ENV_TIMEOUT: &str = "BIZHUB_API_TIMEOUT_SECS";
const ENV_STORAGE_PATH: &str = "BIZHUB_STORAGE_PATH";
const ENV_LOG_LEVEL: &str = "BIZHUB_LOG_LEVEL";
const ENV_LOG_JSON: &str = "BIZHUB_LOG_JSON";

/// Load configuration: file (explicit or discovered), then environment overrides
///
/// An explicit `path` must exist. When no file is found, the defaults
/// are used.
///
/// # Errors
/// Returns `BizHubError::Config` if:
/// - The explicit file does not exist
/// - File format is invalid
/// - An environment override has an invalid value
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let base = match path.or_else(find_config_file) {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(base)
}

/// Override individual fields from the environment
///
/// # Errors
/// Returns `BizHubError::Config` on an unparseable timeout.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(url) = env_var(ENV_BASE_URL).or_else(|| env_var(ENV_BASE_URL_ALIAS)) {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(origin) = env_var(ENV_ORIGIN) {
        config.api.origin = origin;
    }
    if let Some(raw) = env_var(ENV_TIMEOUT) {
        config.api.timeout_secs = raw
            .parse::<u64>()
            .map_err(|e| BizHubError::Config(format!("Invalid {}: {}", ENV_TIMEOUT, e)))?;
    }
    if let Some(path) = env_var(ENV_STORAGE_PATH) {
        config.storage.path = PathBuf::from(path);
    }
    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    if config.api.timeout_secs == 0 {
        return Err(BizHubError::Config("API timeout must be at least one second".into()));
    }
    Ok(config)
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `BizHubError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(BizHubError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| BizHubError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BizHubError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BizHubError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(BizHubError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    let names = ["bizhub.json", "bizhub.toml", "config.json", "config.toml"];

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        for dir in [cwd.clone(), cwd.join(".."), cwd.join("../..")] {
            candidates.extend(names.iter().map(|name| dir.join(name)));
        }
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(names.iter().map(|name| exe_dir.join(name)));
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.is_file())
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
