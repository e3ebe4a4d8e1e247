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
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ADRESSE_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.theme, Theme::default());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_ENV", "production");
    map.insert("ADRESSE_LOG_LEVEL", "debug");
    map.insert("ADRESSE_API_BASE_URL", "http://localhost:7878");
    map.insert("ADRESSE_REQUEST_TIMEOUT_SECS", "3");
    map.insert("ADRESSE_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.api_base_url, "http://localhost:7878");
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_fails_with_invalid_environment() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSE_ENV"),
        "expected InvalidEnvVar(ADRESSE_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_API_BASE_URL", "ftp://example.org");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSE_API_BASE_URL"),
        "expected InvalidEnvVar(ADRESSE_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ADRESSE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ADRESSE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_theme_colours() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_THEME_PRIMARY", "#ff0000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.theme.primary, Color::rgb(255, 0, 0));
    assert_eq!(cfg.theme.white, Theme::default().white);
}

#[test]
fn build_app_config_fails_with_invalid_theme_colour() {
    let mut map = HashMap::new();
    map.insert("ADRESSE_THEME_WHITE", "white");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSE_THEME_WHITE"),
        "expected InvalidEnvVar(ADRESSE_THEME_WHITE), got: {result:?}"
    );
}
