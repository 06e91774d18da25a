use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_environment_yields_defaults() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert!(cfg.config_path.is_none());
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.connect_timeout_secs, 5);
    assert!(cfg.user_agent.starts_with("webmon/"));
    assert_eq!(cfg.max_concurrent_fetches, 4);
    assert_eq!(cfg.notify_command, "notify-send");
}

#[test]
fn overrides_are_applied() {
    let mut map = HashMap::new();
    map.insert("WEBMON_CONFIG_PATH", "/etc/webmon.ini");
    map.insert("WEBMON_REQUEST_TIMEOUT_SECS", "30");
    map.insert("WEBMON_CONNECT_TIMEOUT_SECS", "2");
    map.insert("WEBMON_USER_AGENT", "custom-agent/2.0");
    map.insert("WEBMON_MAX_CONCURRENT_FETCHES", "8");
    map.insert("WEBMON_NOTIFY_COMMAND", "/usr/local/bin/alert");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.config_path, Some(PathBuf::from("/etc/webmon.ini")));
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.connect_timeout_secs, 2);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.max_concurrent_fetches, 8);
    assert_eq!(cfg.notify_command, "/usr/local/bin/alert");
}

#[test]
fn blank_config_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("WEBMON_CONFIG_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.config_path.is_none());
}

#[test]
fn zero_concurrency_is_clamped_to_one() {
    let mut map = HashMap::new();
    map.insert("WEBMON_MAX_CONCURRENT_FETCHES", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_concurrent_fetches, 1);
}

#[test]
fn invalid_timeout_fails() {
    let mut map = HashMap::new();
    map.insert("WEBMON_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WEBMON_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(WEBMON_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn zero_timeout_fails() {
    let mut map = HashMap::new();
    map.insert("WEBMON_CONNECT_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WEBMON_CONNECT_TIMEOUT_SECS"),
        "expected InvalidEnvVar(WEBMON_CONNECT_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn invalid_concurrency_fails() {
    let mut map = HashMap::new();
    map.insert("WEBMON_MAX_CONCURRENT_FETCHES", "many");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WEBMON_MAX_CONCURRENT_FETCHES"),
        "expected InvalidEnvVar(WEBMON_MAX_CONCURRENT_FETCHES), got: {result:?}"
    );
}
