//! Configuration constants and utilities for syntaxguard
//!
//! The correction endpoint is resolved from, in order: the command line,
//! the `SYNTAXGUARD_ENDPOINT` environment variable, and the INI profile file.
//! An empty endpoint means the service is not configured.

use ini::Ini;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default profile file path for syntaxguard
pub const DEFAULT_PROFILE_PATH: &str = "~/.syntaxguard/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "SYNTAXGUARD_PROFILE_PATH";

/// Environment variable carrying the correction endpoint URL
pub const ENDPOINT_ENV_VAR: &str = "SYNTAXGUARD_ENDPOINT";

/// Environment variable read by the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "SYNTAXGUARD_LOG_LEVEL";

/// Profile section used when none is given
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Request timeout used when neither the command line nor the profile sets one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const ENDPOINT_KEY: &str = "endpoint";
const TIMEOUT_KEY: &str = "timeout";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read profile file {path}: {message}")]
    ProfileRead { path: String, message: String },

    #[error("invalid timeout '{value}' in profile '{profile}': expected whole seconds greater than zero")]
    InvalidTimeout { profile: String, value: String },

    #[error("invalid correction endpoint '{value}': {message}")]
    InvalidEndpoint { value: String, message: String },
}

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Get the endpoint from the environment, if set
pub fn get_env_endpoint() -> Option<String> {
    std::env::var_os(ENDPOINT_ENV_VAR).and_then(|val| val.into_string().ok())
}

/// Settings read from one profile section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSettings {
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
}

/// Load a named profile section. A missing file or section yields `None`.
pub fn load_profile(
    profile_path: &str,
    profile_name: &str,
) -> Result<Option<ProfileSettings>, ConfigError> {
    let expanded = shellexpand::tilde(profile_path).into_owned();
    if !Path::new(&expanded).exists() {
        tracing::debug!("Profile file '{}' not found", expanded);
        return Ok(None);
    }

    let ini = Ini::load_from_file(&expanded).map_err(|e| ConfigError::ProfileRead {
        path: expanded.clone(),
        message: e.to_string(),
    })?;

    let Some(section) = ini.section(Some(profile_name)) else {
        tracing::debug!("Profile '{}' not found in '{}'", profile_name, expanded);
        return Ok(None);
    };

    let timeout = match section.get(TIMEOUT_KEY) {
        Some(value) => Some(parse_timeout(value).ok_or_else(|| {
            ConfigError::InvalidTimeout {
                profile: profile_name.to_string(),
                value: value.to_string(),
            }
        })?),
        None => None,
    };

    Ok(Some(ProfileSettings {
        endpoint: section.get(ENDPOINT_KEY).map(str::to_string),
        timeout,
    }))
}

fn parse_timeout(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Connection settings for the correction service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    endpoint: Option<String>,
    timeout: Duration,
}

impl ServiceConfig {
    /// Blank or whitespace-only endpoints are treated as not configured.
    /// A zero timeout falls back to `DEFAULT_TIMEOUT`.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        Self { endpoint, timeout }
    }

    pub fn unconfigured() -> Self {
        Self::new(None, DEFAULT_TIMEOUT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(Some(endpoint.into()), DEFAULT_TIMEOUT)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::unconfigured()
    }
}

/// Apply precedence: command line, then environment, then profile file
pub fn resolve_service_config(
    cli_endpoint: Option<&str>,
    cli_timeout: Option<Duration>,
    env_endpoint: Option<String>,
    profile: Option<ProfileSettings>,
) -> ServiceConfig {
    let profile = profile.unwrap_or_default();
    let endpoint = cli_endpoint
        .map(str::to_string)
        .or(env_endpoint)
        .or(profile.endpoint);
    let timeout = cli_timeout.or(profile.timeout).unwrap_or(DEFAULT_TIMEOUT);
    ServiceConfig::new(endpoint, timeout)
}

/// Resolve the service configuration from the environment and profile file
pub fn load_service_config(
    profile_name: &str,
    cli_endpoint: Option<&str>,
    cli_timeout: Option<Duration>,
) -> Result<ServiceConfig, ConfigError> {
    let profile_path = get_profile_path();
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);
    let profile = load_profile(&profile_path, profile_name)?;

    let config = resolve_service_config(cli_endpoint, cli_timeout, get_env_endpoint(), profile);
    if config.is_configured() {
        tracing::info!("Correction endpoint configured");
    } else {
        tracing::warn!("Correction endpoint is not configured");
    }
    Ok(config)
}
