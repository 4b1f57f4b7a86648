use std::time::Duration;

use tabled::Table;

use crate::{
    cli::auth,
    config::Config,
    error::Result,
    info,
    management::{PlaylistAssembler, SamplingOptions, SessionManager},
    spotify::{SpotifyClient, auth::OAuthClient},
    success,
    types::{GenreTableRow, PlaylistRequest},
    utils,
};

/// `genremix generate`: log in, sample the genres and create the playlist.
pub async fn generate(
    config: &Config,
    genres: Vec<String>,
    target_total: u32,
    name: String,
    callback: bool,
    delay_ms: u64,
) -> Result<()> {
    let request = PlaylistRequest {
        name,
        target_total,
        genres: utils::dedup_genres(genres),
    };

    let mut session = SessionManager::new(OAuthClient::new(config));
    auth::login(&mut session, config, callback).await?;

    let token = session.access_token().await?;
    let client = SpotifyClient::new(&config.api_url);
    let assembler = PlaylistAssembler::with_options(
        &client,
        SamplingOptions {
            genre_delay: Duration::from_millis(delay_ms),
            ..SamplingOptions::default()
        },
    );

    info!(
        "Sampling up to {} tracks from each of {} genres for \"{}\"",
        utils::per_genre_quota(request.target_total, request.genres.len()),
        request.genres.len(),
        request.name
    );

    let generated = assembler.build_playlist(&token, &request).await?;

    let rows: Vec<GenreTableRow> = generated.genres.iter().map(GenreTableRow::from).collect();
    println!("{}", Table::new(rows));

    success!("Playlist created with {} tracks!", generated.tracks.len());
    println!("Open playlist on Spotify: {}", generated.handle.url);

    Ok(())
}
