//! Error types shared by the session, catalog and assembler layers.

use thiserror::Error;

/// Everything that can go wrong while authenticating or building a playlist.
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration value is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The authorization code could not be extracted or was rejected by the
    /// identity provider.
    #[error("Authorization failed: {0}")]
    AuthExchange(String),

    /// The refresh token was rejected; the user has to log in again.
    #[error("Token refresh failed: {0}")]
    TokenRefresh(String),

    /// No credential is held by the session.
    #[error("Not authenticated. Log in first.")]
    NotAuthenticated,

    /// Sampling tracks for a single genre failed.
    #[error("Failed to fetch tracks for genre {genre}: {reason}")]
    GenreFetch { genre: String, reason: String },

    /// The playlist could not be created or filled.
    #[error("Playlist creation failed: {0}")]
    PlaylistCreation(String),

    /// The request was rejected before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The catalog answered 429.
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    /// The catalog answered with an unexpected status.
    #[error("Spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for genremix operations.
pub type Result<T> = std::result::Result<T, Error>;
