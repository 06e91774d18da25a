//! Runtime settings read from the environment.
//!
//! The monitor file says *what* to watch; these settings say how to fetch
//! and notify. All have defaults, so an empty environment is valid.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;
pub const DEFAULT_NOTIFY_COMMAND: &str = "notify-send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit monitor file; replaces the home-directory search when set.
    pub config_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_fetches: usize,
    pub notify_command: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            notify_command: DEFAULT_NOTIFY_COMMAND.to_owned(),
        }
    }
}

fn default_user_agent() -> String {
    format!("webmon/{}", env!("CARGO_PKG_VERSION"))
}

/// Load settings from the process environment.
///
/// `.env` is not read here; the binary loads it once at startup, before
/// logging is configured, so `RUST_LOG` from `.env` applies too.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a variable is set to an
/// unusable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build settings from an arbitrary lookup so tests can feed a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        lookup(var).map_or(Ok(default), |raw| {
            raw.trim().parse::<u64>().map_err(|e| invalid(var, e.to_string()))
        })
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        lookup(var).map_or(Ok(default), |raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|e| invalid(var, e.to_string()))
        })
    };

    let config_path = lookup("WEBMON_CONFIG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let request_timeout_secs =
        parse_u64("WEBMON_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "WEBMON_REQUEST_TIMEOUT_SECS",
            "must be at least 1".into(),
        ));
    }
    let connect_timeout_secs =
        parse_u64("WEBMON_CONNECT_TIMEOUT_SECS", defaults.connect_timeout_secs)?;
    if connect_timeout_secs == 0 {
        return Err(invalid(
            "WEBMON_CONNECT_TIMEOUT_SECS",
            "must be at least 1".into(),
        ));
    }

    let user_agent = lookup("WEBMON_USER_AGENT").unwrap_or(defaults.user_agent);
    let max_concurrent_fetches =
        parse_usize("WEBMON_MAX_CONCURRENT_FETCHES", defaults.max_concurrent_fetches)?.max(1);
    let notify_command = lookup("WEBMON_NOTIFY_COMMAND")
        .ok()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(defaults.notify_command);

    Ok(AppConfig {
        config_path,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        max_concurrent_fetches,
        notify_command,
    })
}

#[cfg(test)]
#[path = "app_config_test.rs"]
mod tests;
