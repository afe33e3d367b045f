//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ayurassist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::RequestFlags;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AyurConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub api_url: Option<String>,
    pub enrich_with_llm: Option<bool>,
    pub top_conditions: Option<u8>,
    pub request_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_URL: &str = "https://aravindkv28--ayurparam-service-fastapi-app.modal.run";
pub const DEFAULT_TOP_CONDITIONS: u8 = 5;

/// Env vars checked for the endpoint, in priority order. The second one is
/// what the web deployment's `.env` files already set.
const API_URL_ENV_VARS: [&str; 2] = ["AYURASSIST_API_URL", "NEXT_PUBLIC_API_URL"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub flags: RequestFlags,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.ayurassist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ayurassist").join("config.toml"))
}

/// Load config from `~/.ayurassist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AyurConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AyurConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AyurConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AyurConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<AyurConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AyurConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# AyurAssist Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# api_url = "https://aravindkv28--ayurparam-service-fastapi-app.modal.run"
#                                    # Or set AYURASSIST_API_URL / NEXT_PUBLIC_API_URL
# enrich_with_llm = true
# top_conditions = 5
# request_timeout_secs = 120         # Unset = HTTP client default
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AyurConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    let env_api_url = first_env_api_url(|name| std::env::var(name).ok());
    resolve_with_env(config, env_api_url, cli_api_url)
}

/// First endpoint env var that is set to something non-blank. A blank
/// variable is skipped rather than hiding the ones after it.
fn first_env_api_url(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_URL_ENV_VARS
        .iter()
        .find_map(|name| lookup(name).filter(|url| !url.trim().is_empty()))
}

/// Resolution with the environment lookup already done, so tests don't
/// depend on process-wide env vars.
fn resolve_with_env(
    config: &AyurConfig,
    env_api_url: Option<String>,
    cli_api_url: Option<&str>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let api_url = cli_api_url
        .map(|s| s.to_string())
        .or(env_api_url)
        .or_else(|| config.service.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let defaults = RequestFlags::default();
    let flags = RequestFlags {
        enrich_with_llm: config
            .service
            .enrich_with_llm
            .unwrap_or(defaults.enrich_with_llm),
        top_conditions: config
            .service
            .top_conditions
            .unwrap_or(DEFAULT_TOP_CONDITIONS),
    };

    ResolvedConfig {
        api_url,
        flags,
        request_timeout: config
            .service
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
    }
}
