//! Configuration management for genremix.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults for the endpoint URLs and scope
//!
//! The three app credentials have no default; [`Config::from_env`] fails when
//! any of them is missing.

use std::{env, net::SocketAddr, path::PathBuf};

use reqwest::Url;

use crate::error::{Error, Result};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SCOPE: &str = "playlist-modify-public";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/genremix/.env`
/// - macOS: `~/Library/Application Support/genremix/.env`
/// - Windows: `%LOCALAPPDATA%/genremix/.env`
///
/// The parent directory is created if needed. A missing file is fine since the
/// values may come from the process environment instead; variables that are
/// already set are never overwritten.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| {
            Error::Config(format!("cannot load {}: {}", path.display(), e))
        })?;
    }

    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("genremix/.env");
    path
}

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub scope: String,
    pub server_address: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `SPOTIFY_API_AUTH_CLIENT_ID`,
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET` or `SPOTIFY_API_REDIRECT_URI` is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            value(key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            auth_url: value("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.into()),
            token_url: value("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.into()),
            api_url: value("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.into())
                .trim_end_matches('/')
                .to_string(),
            scope: value("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.into()),
            server_address: value("SERVER_ADDRESS"),
        })
    }

    /// Address the local callback server binds to.
    ///
    /// Uses `SERVER_ADDRESS` when set, otherwise the host and port of the
    /// redirect URI.
    pub fn callback_addr(&self) -> Result<SocketAddr> {
        let raw = match &self.server_address {
            Some(addr) => addr.clone(),
            None => {
                let url = self.redirect_url()?;
                let host = url.host_str().unwrap_or("127.0.0.1");
                let host = if host == "localhost" { "127.0.0.1" } else { host };
                let port = url.port_or_known_default().unwrap_or(80);
                format!("{}:{}", host, port)
            }
        };

        raw.parse()
            .map_err(|e| Error::Config(format!("invalid callback address {}: {}", raw, e)))
    }

    /// Route the callback server listens on, taken from the redirect URI.
    pub fn callback_path(&self) -> Result<String> {
        let url = self.redirect_url()?;
        match url.path() {
            "" | "/" => Ok("/callback".to_string()),
            path => Ok(path.to_string()),
        }
    }

    fn redirect_url(&self) -> Result<Url> {
        Url::parse(&self.redirect_uri).map_err(|e| {
            Error::Config(format!(
                "SPOTIFY_API_REDIRECT_URI is not a valid URL ({}): {}",
                self.redirect_uri, e
            ))
        })
    }
}
