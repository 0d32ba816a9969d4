//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "ROST_CONFIG";
/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "ROST_PAGE_SIZE";
/// Environment variable overriding the empty-state message.
pub const ENV_EMPTY_MESSAGE: &str = "ROST_EMPTY_MESSAGE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rost/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page in the viewer. `0` disables pagination.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Placeholder shown for an empty page.
    #[serde(default)]
    pub empty_message: Option<String>,

    /// Show the pagination footer.
    #[serde(default)]
    pub show_pagination: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Registry manifest read by `rost registry`.
    #[serde(default)]
    pub registry_manifest: Option<PathBuf>,

    /// Output directory written by `rost registry`.
    #[serde(default)]
    pub registry_out_dir: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page (`0` = pagination disabled).
    pub page_size: usize,
    /// Empty-state placeholder.
    pub empty_message: String,
    /// Show the pagination footer.
    pub show_pagination: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Registry manifest path.
    pub registry_manifest: PathBuf,
    /// Registry output directory.
    pub registry_out_dir: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            empty_message: crate::view_state::DEFAULT_EMPTY_MESSAGE.to_string(),
            show_pagination: true,
            log_file_path: default_log_path(),
            registry_manifest: PathBuf::from("registry.json"),
            registry_out_dir: PathBuf::from("components-json"),
        }
    }
}

impl ResolvedConfig {
    /// Page size as the engine expects it (`None` disables pagination).
    pub fn page_size(&self) -> Option<usize> {
        (self.page_size > 0).then_some(self.page_size)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rost/rost.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rost").join("rost.log")
    } else {
        PathBuf::from("rost.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rost/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rost").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROST_CONFIG` environment variable
/// 3. Default path `~/.config/rost/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        empty_message: config.empty_message.unwrap_or(defaults.empty_message),
        show_pagination: config.show_pagination.unwrap_or(defaults.show_pagination),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        registry_manifest: config
            .registry_manifest
            .unwrap_or(defaults.registry_manifest),
        registry_out_dir: config.registry_out_dir.unwrap_or(defaults.registry_out_dir),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROST_PAGE_SIZE`: Override page size (unparseable values are ignored with a warning)
/// - `ROST_EMPTY_MESSAGE`: Override empty-state placeholder
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        match raw.trim().parse::<usize>() {
            Ok(page_size) => config.page_size = page_size,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", ENV_PAGE_SIZE),
        }
    }

    if let Ok(message) = std::env::var(ENV_EMPTY_MESSAGE) {
        config.empty_message = message;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
    empty_message_override: Option<String>,
    show_pagination_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(message) = empty_message_override {
        config.empty_message = message;
    }

    if let Some(show) = show_pagination_override {
        config.show_pagination = show;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
