//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API genremix needs, plus the
//! OAuth 2.0 authorization-code flow against the accounts service.
//!
//! ## Overview
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization code + refresh)
//!     ├── Search (playlists by genre query)
//!     ├── Playlists (read items, create, replace, append)
//!     └── User (current profile)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Every catalog call takes the bearer token as a plain `&str`; keeping the
//! token fresh is the job of [`crate::management::SessionManager`].
//!
//! ## Error Handling
//!
//! Responses are checked by [`SpotifyClient::check`]:
//! - `429 Too Many Requests` becomes [`Error::RateLimited`] carrying the
//!   `Retry-After` value. Nothing is retried automatically.
//! - Any other non-success status becomes [`Error::Api`] with the message from
//!   Spotify's error envelope when one is present.
//!
//! ## API Coverage
//!
//! - `GET /search` - playlists matching a genre
//! - `GET /playlists/{id}/tracks` - items of a playlist
//! - `GET /me` - the authenticated user
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `PUT /playlists/{id}/tracks` - replace all items
//! - `POST /playlists/{id}/tracks` - append items

pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;

use reqwest::{Client, Response, StatusCode};

use crate::{
    error::{Error, Result},
    types::ApiErrorResponse,
};

/// Maximum number of items a single playlist write call accepts.
pub const PLAYLIST_WRITE_LIMIT: usize = 100;

/// Maximum number of items a single playlist read call returns.
pub const PLAYLIST_READ_LIMIT: u32 = 100;

/// Maximum number of results a single search call returns.
pub const SEARCH_LIMIT: u32 = 50;

/// Client for the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client for the given API base URL, e.g.
    /// `https://api.spotify.com/v1`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Turns non-success responses into errors.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            return Err(Error::RateLimited { retry_after_secs });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => body,
        };

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}
