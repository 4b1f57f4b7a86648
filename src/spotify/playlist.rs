use crate::{
    error::{Error, Result},
    spotify::{PLAYLIST_READ_LIMIT, PLAYLIST_WRITE_LIMIT, SpotifyClient},
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, PlaylistItem, PlaylistItemsRequest,
        PlaylistItemsResponse, SnapshotResponse, TrackId,
    },
};

impl SpotifyClient {
    /// Reads the first `limit` items of a playlist.
    ///
    /// Only the first page is fetched; callers that sample a playlist do not
    /// need the rest.
    pub async fn playlist_items(
        &self,
        token: &str,
        playlist_id: &str,
        limit: u32,
    ) -> Result<Vec<PlaylistItem>> {
        let limit = limit.clamp(1, PLAYLIST_READ_LIMIT).to_string();
        let response = self
            .http
            .get(self.url(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(token)
            .query(&[("limit", limit.as_str()), ("additional_types", "track")])
            .send()
            .await?;

        let json = Self::check(response)
            .await?
            .json::<PlaylistItemsResponse>()
            .await?;

        Ok(json.items)
    }

    /// Creates an empty playlist owned by `user_id`.
    pub async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatePlaylistResponse> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: String::new(),
            public,
        };

        let response = self
            .http
            .post(self.url(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response)
            .await?
            .json::<CreatePlaylistResponse>()
            .await?)
    }

    /// Replaces every item of the playlist with `tracks`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when more than
    /// [`PLAYLIST_WRITE_LIMIT`] tracks are passed.
    pub async fn replace_playlist_items(
        &self,
        token: &str,
        playlist_id: &str,
        tracks: &[TrackId],
    ) -> Result<SnapshotResponse> {
        let body = Self::items_body(tracks)?;
        let response = self
            .http
            .put(self.url(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response)
            .await?
            .json::<SnapshotResponse>()
            .await?)
    }

    /// Appends `tracks` to the end of the playlist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when more than
    /// [`PLAYLIST_WRITE_LIMIT`] tracks are passed.
    pub async fn add_playlist_items(
        &self,
        token: &str,
        playlist_id: &str,
        tracks: &[TrackId],
    ) -> Result<SnapshotResponse> {
        let body = Self::items_body(tracks)?;
        let response = self
            .http
            .post(self.url(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response)
            .await?
            .json::<SnapshotResponse>()
            .await?)
    }

    fn items_body(tracks: &[TrackId]) -> Result<PlaylistItemsRequest> {
        if tracks.len() > PLAYLIST_WRITE_LIMIT {
            return Err(Error::InvalidRequest(format!(
                "at most {} tracks per write call, got {}",
                PLAYLIST_WRITE_LIMIT,
                tracks.len()
            )));
        }

        Ok(PlaylistItemsRequest {
            uris: tracks.iter().map(TrackId::uri).collect(),
        })
    }
}
