use crate::{
    error::Result,
    spotify::{SEARCH_LIMIT, SpotifyClient},
    types::{SearchPlaylistsResponse, SimplifiedPlaylist},
};

impl SpotifyClient {
    /// Searches public playlists whose metadata matches `query`.
    ///
    /// Results keep Spotify's relevance order. Spotify occasionally returns
    /// `null` entries in the item list; those are dropped.
    ///
    /// # Arguments
    ///
    /// * `token` - Valid access token
    /// * `query` - Free text query, e.g. a genre label
    /// * `limit` - Maximum number of playlists (clamped to 1..=50)
    pub async fn search_playlists(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<SimplifiedPlaylist>> {
        let limit = limit.clamp(1, SEARCH_LIMIT).to_string();
        let response = self
            .http
            .get(self.url("/search"))
            .bearer_auth(token)
            .query(&[("q", query), ("type", "playlist"), ("limit", limit.as_str())])
            .send()
            .await?;

        let json = Self::check(response)
            .await?
            .json::<SearchPlaylistsResponse>()
            .await?;

        Ok(json
            .playlists
            .map(|page| page.items.into_iter().flatten().collect())
            .unwrap_or_default())
    }
}
