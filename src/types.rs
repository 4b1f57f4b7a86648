use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Genres offered for selection.
pub const GENRES: [&str; 14] = [
    "rock",
    "metal",
    "pop",
    "hip hop",
    "country",
    "jazz",
    "classical",
    "indie",
    "alternative",
    "electronic",
    "blues",
    "folk",
    "funk",
    "punk",
];

/// Bearer credential held by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Body of a successful token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: String,
    pub expires_in: i64,
    pub refresh_token: Option<String>,
}

/// Body of a rejected token endpoint request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// Opaque catalog identifier of a track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URI form accepted by the playlist write endpoints.
    pub fn uri(&self) -> String {
        format!("spotify:track:{}", self.0)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct PlaylistRequest {
    pub name: String,
    pub target_total: u32,
    pub genres: Vec<String>,
}

/// Identifier and link of a created playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistHandle {
    pub id: String,
    pub url: String,
}

/// Result of sampling a single genre.
#[derive(Debug, Clone, PartialEq)]
pub enum GenreOutcome {
    Sampled(Vec<TrackId>),
    Failed(String),
}

impl GenreOutcome {
    /// Tracks contributed by this genre; empty when sampling failed.
    pub fn tracks(&self) -> &[TrackId] {
        match self {
            GenreOutcome::Sampled(tracks) => tracks,
            GenreOutcome::Failed(_) => &[],
        }
    }
}

/// Per-genre bookkeeping of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreReport {
    pub genre: String,
    pub sampled: usize,
    pub taken: usize,
    pub failure: Option<String>,
}

#[derive(Tabled)]
pub struct GenreListRow {
    #[tabled(rename = "#")]
    pub number: usize,
    pub genre: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub sampled: usize,
    pub taken: usize,
    pub status: String,
}

impl From<&GenreReport> for GenreTableRow {
    fn from(report: &GenreReport) -> Self {
        Self {
            genre: report.genre.clone(),
            sampled: report.sampled,
            taken: report.taken,
            status: report.failure.clone().unwrap_or_else(|| "ok".to_string()),
        }
    }
}

/// Everything `build_playlist` produced.
#[derive(Debug, Clone)]
pub struct GeneratedPlaylist {
    pub handle: PlaylistHandle,
    pub per_genre_quota: usize,
    pub tracks: Vec<TrackId>,
    pub genres: Vec<GenreReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlaylistsResponse {
    pub playlists: Option<PlaylistPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<Option<SimplifiedPlaylist>>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}
