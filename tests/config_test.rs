use std::collections::HashMap;

use genremix::Error;
use genremix::config::{Config, DEFAULT_API_URL, DEFAULT_AUTH_URL, DEFAULT_SCOPE, DEFAULT_TOKEN_URL};

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, Error> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

fn required() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client-id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "client-secret"),
        ("SPOTIFY_API_REDIRECT_URI", "http://localhost:8888/callback"),
    ]
}

#[test]
fn test_defaults_applied() {
    let config = config_from(&required()).unwrap();

    assert_eq!(config.client_id, "client-id");
    assert_eq!(config.client_secret, "client-secret");
    assert_eq!(config.redirect_uri, "http://localhost:8888/callback");
    assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.scope, DEFAULT_SCOPE);
    assert!(config.server_address.is_none());
}

#[test]
fn test_missing_required_values() {
    for missing in [
        "SPOTIFY_API_AUTH_CLIENT_ID",
        "SPOTIFY_API_AUTH_CLIENT_SECRET",
        "SPOTIFY_API_REDIRECT_URI",
    ] {
        let vars: Vec<_> = required().into_iter().filter(|(k, _)| *k != missing).collect();

        match config_from(&vars) {
            Err(Error::Config(msg)) => assert!(msg.contains(missing)),
            other => panic!("Expected Config error for {}, got: {:?}", missing, other),
        }
    }
}

#[test]
fn test_blank_value_counts_as_missing() {
    let mut vars = required();
    vars[1] = ("SPOTIFY_API_AUTH_CLIENT_SECRET", "   ");

    assert!(matches!(config_from(&vars), Err(Error::Config(_))));
}

#[test]
fn test_overrides() {
    let mut vars = required();
    vars.push(("SPOTIFY_API_URL", "http://127.0.0.1:9999/v1/"));
    vars.push(("SPOTIFY_API_AUTH_SCOPE", "playlist-modify-private"));
    vars.push(("SERVER_ADDRESS", "0.0.0.0:9000"));

    let config = config_from(&vars).unwrap();

    // Trailing slash is trimmed
    assert_eq!(config.api_url, "http://127.0.0.1:9999/v1");
    assert_eq!(config.scope, "playlist-modify-private");
    assert_eq!(config.callback_addr().unwrap().to_string(), "0.0.0.0:9000");
}

#[test]
fn test_callback_address_from_redirect_uri() {
    let config = config_from(&required()).unwrap();

    assert_eq!(config.callback_addr().unwrap().to_string(), "127.0.0.1:8888");
    assert_eq!(config.callback_path().unwrap(), "/callback");
}

#[test]
fn test_callback_path_defaults_when_redirect_has_none() {
    let mut vars = required();
    vars[2] = ("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:7777");

    let config = config_from(&vars).unwrap();

    assert_eq!(config.callback_path().unwrap(), "/callback");
    assert_eq!(config.callback_addr().unwrap().port(), 7777);
}

#[test]
fn test_invalid_redirect_uri() {
    let mut vars = required();
    vars[2] = ("SPOTIFY_API_REDIRECT_URI", "not a url");

    let config = config_from(&vars).unwrap();

    assert!(matches!(config.callback_addr(), Err(Error::Config(_))));
}
