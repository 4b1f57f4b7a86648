use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    error::{Error, Result},
    info,
    spotify::{PLAYLIST_WRITE_LIMIT, SpotifyClient},
    success,
    types::{
        GeneratedPlaylist, GenreOutcome, GenreReport, PlaylistHandle, PlaylistRequest, TrackId,
    },
    utils, warning,
};

/// Knobs of the sampling step.
#[derive(Debug, Clone)]
pub struct SamplingOptions {
    /// Playlists read per genre.
    pub sample_playlists: u32,
    /// Items read per sampled playlist.
    pub tracks_per_playlist: u32,
    /// Items per playlist write call.
    pub write_limit: usize,
    /// Pause between two genres.
    pub genre_delay: Duration,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            sample_playlists: 5,
            tracks_per_playlist: 50,
            write_limit: PLAYLIST_WRITE_LIMIT,
            genre_delay: Duration::from_millis(200),
        }
    }
}

/// Turns a [`PlaylistRequest`] into a playlist on the user's account.
pub struct PlaylistAssembler<'a> {
    client: &'a SpotifyClient,
    options: SamplingOptions,
}

impl<'a> PlaylistAssembler<'a> {
    pub fn new(client: &'a SpotifyClient) -> Self {
        Self::with_options(client, SamplingOptions::default())
    }

    pub fn with_options(client: &'a SpotifyClient, options: SamplingOptions) -> Self {
        Self { client, options }
    }

    /// Collects the unique track ids of the playlists found for `genre`.
    ///
    /// Never fails: every problem, including a search without results, is
    /// reported as [`GenreOutcome::Failed`].
    pub async fn sample_tracks_for_genre(&self, token: &str, genre: &str) -> GenreOutcome {
        match self.try_sample(token, genre).await {
            Ok(tracks) => GenreOutcome::Sampled(tracks),
            Err(Error::GenreFetch { reason, .. }) => GenreOutcome::Failed(reason),
            Err(e) => GenreOutcome::Failed(e.to_string()),
        }
    }

    async fn try_sample(&self, token: &str, genre: &str) -> Result<Vec<TrackId>> {
        let playlists = self
            .client
            .search_playlists(token, genre, self.options.sample_playlists)
            .await?;

        if playlists.is_empty() {
            return Err(Error::GenreFetch {
                genre: genre.to_string(),
                reason: "no playlists found".to_string(),
            });
        }

        let mut tracks: Vec<TrackId> = Vec::new();
        for playlist in playlists {
            let items = self
                .client
                .playlist_items(token, &playlist.id, self.options.tracks_per_playlist)
                .await?;

            tracks.extend(
                items
                    .into_iter()
                    .filter_map(|item| item.track.and_then(|track| track.id))
                    .filter(|id| !id.is_empty())
                    .map(TrackId),
            );
        }

        utils::remove_duplicate_tracks(&mut tracks);
        Ok(tracks)
    }

    /// Samples every genre and writes the result to a new playlist.
    ///
    /// Genres are handled one after another with a short pause in between.
    /// A genre that fails only loses its share of the tracks. Creating or
    /// filling the playlist aborts the whole build on failure.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] when no genre is selected.
    /// - [`Error::PlaylistCreation`] when the user lookup, the creation or a
    ///   write call fails.
    pub async fn build_playlist(
        &self,
        token: &str,
        request: &PlaylistRequest,
    ) -> Result<GeneratedPlaylist> {
        if request.genres.is_empty() {
            return Err(Error::InvalidRequest("select at least one genre".to_string()));
        }

        let quota = utils::per_genre_quota(request.target_total, request.genres.len());

        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let mut samples: Vec<Vec<TrackId>> = Vec::with_capacity(request.genres.len());
        let mut reports: Vec<GenreReport> = Vec::with_capacity(request.genres.len());
        let genres_total = request.genres.len();

        for (index, genre) in request.genres.iter().enumerate() {
            if index > 0 && !self.options.genre_delay.is_zero() {
                sleep(self.options.genre_delay).await;
            }

            pb.set_message(format!(
                "Sampling tracks for {genre} ({count}/{total})",
                genre = genre,
                count = index + 1,
                total = genres_total
            ));

            let outcome = self.sample_tracks_for_genre(token, genre).await;
            if let GenreOutcome::Failed(reason) = &outcome {
                pb.suspend(|| warning!("Error fetching tracks for {}: {}", genre, reason));
            }

            let sampled = outcome.tracks().len();
            reports.push(GenreReport {
                genre: genre.clone(),
                sampled,
                taken: sampled.min(quota),
                failure: match &outcome {
                    GenreOutcome::Failed(reason) => Some(reason.clone()),
                    GenreOutcome::Sampled(_) => None,
                },
            });
            samples.push(outcome.tracks().to_vec());
        }

        pb.finish_and_clear();

        let tracks = utils::merge_genre_samples(&samples, quota, &mut rand::rng());
        info!(
            "Collected {} unique tracks from {} genres",
            tracks.len(),
            genres_total
        );

        let handle = self.create_and_fill(token, &request.name, &tracks).await?;

        Ok(GeneratedPlaylist {
            handle,
            per_genre_quota: quota,
            tracks,
            genres: reports,
        })
    }

    async fn create_and_fill(
        &self,
        token: &str,
        name: &str,
        tracks: &[TrackId],
    ) -> Result<PlaylistHandle> {
        let user = self
            .client
            .current_user(token)
            .await
            .map_err(|e| Error::PlaylistCreation(format!("cannot resolve current user: {}", e)))?;

        let created = self
            .client
            .create_playlist(token, &user.id, name, true)
            .await
            .map_err(|e| Error::PlaylistCreation(e.to_string()))?;

        success!("Playlist {} created", created.name);

        let handle = PlaylistHandle {
            url: created
                .external_urls
                .spotify
                .unwrap_or_else(|| format!("https://open.spotify.com/playlist/{}", created.id)),
            id: created.id,
        };

        if tracks.is_empty() {
            warning!("No tracks found, playlist {} stays empty", name);
            return Ok(handle);
        }

        for (index, batch) in utils::write_batches(tracks, self.options.write_limit)
            .into_iter()
            .enumerate()
        {
            let written = if index == 0 {
                self.client
                    .replace_playlist_items(token, &handle.id, batch)
                    .await
            } else {
                self.client.add_playlist_items(token, &handle.id, batch).await
            };

            written.map_err(|e| {
                Error::PlaylistCreation(format!(
                    "failed to write tracks to playlist {}: {}",
                    handle.id, e
                ))
            })?;
        }

        Ok(handle)
    }
}
