use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::types::{GENRES, TrackId};

pub const MIN_TRACKS: u32 = 20;
pub const MAX_TRACKS: u32 = 200;
pub const TRACK_STEP: u32 = 10;

/// Number of tracks each genre may contribute.
///
/// Integer division: whatever does not divide evenly is dropped. An empty
/// selection yields zero.
pub fn per_genre_quota(target_total: u32, genre_count: usize) -> usize {
    if genre_count == 0 {
        return 0;
    }
    target_total as usize / genre_count
}

/// Removes repeated track ids, keeping the first occurrence.
pub fn remove_duplicate_tracks(tracks: &mut Vec<TrackId>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.clone()));
}

/// Merges per-genre samples into one shuffled list without duplicates.
///
/// Each sample is shuffled and cut to `quota` before it is added, so the
/// result never exceeds `quota * samples.len()` tracks. A track that shows
/// up for two genres only counts once.
pub fn merge_genre_samples<R: Rng + ?Sized>(
    samples: &[Vec<TrackId>],
    quota: usize,
    rng: &mut R,
) -> Vec<TrackId> {
    let mut merged: HashSet<TrackId> = HashSet::new();

    for sample in samples {
        merged.extend(take_random(sample, quota, rng));
    }

    let mut tracks: Vec<TrackId> = merged.into_iter().collect();
    tracks.shuffle(rng);
    tracks
}

/// Up to `count` randomly chosen tracks of `sample`.
pub fn take_random<R: Rng + ?Sized>(sample: &[TrackId], count: usize, rng: &mut R) -> Vec<TrackId> {
    let mut shuffled = sample.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Splits `tracks` into write pages of at most `limit` items.
///
/// The first page is meant for the replace call, the rest for appends.
pub fn write_batches(tracks: &[TrackId], limit: usize) -> Vec<&[TrackId]> {
    tracks.chunks(limit.max(1)).collect()
}

/// Clap value parser for `--tracks`: 20 to 200 in steps of 10.
pub fn parse_track_count(s: &str) -> Result<u32, String> {
    let count: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !(MIN_TRACKS..=MAX_TRACKS).contains(&count) {
        return Err(format!(
            "track count must be between {} and {}",
            MIN_TRACKS, MAX_TRACKS
        ));
    }

    if count % TRACK_STEP != 0 {
        return Err(format!("track count must be a multiple of {}", TRACK_STEP));
    }

    Ok(count)
}

/// Clap value parser for `--genre`; accepts the supported labels in any case.
pub fn parse_genre(s: &str) -> Result<String, String> {
    let genre = s.trim().to_lowercase();
    if GENRES.contains(&genre.as_str()) {
        Ok(genre)
    } else {
        Err(format!(
            "unknown genre '{}', choose one of: {}",
            s,
            GENRES.join(", ")
        ))
    }
}

/// Drops repeated genres while keeping the selection order.
pub fn dedup_genres(genres: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    genres
        .into_iter()
        .filter(|genre| seen.insert(genre.clone()))
        .collect()
}
