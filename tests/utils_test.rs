use genremix::types::{GENRES, TrackId};
use genremix::utils::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

// Helper function to create track ids from string literals
fn tracks(ids: &[&str]) -> Vec<TrackId> {
    ids.iter().map(|id| TrackId::new(*id)).collect()
}

fn numbered_tracks(prefix: &str, count: usize) -> Vec<TrackId> {
    (0..count)
        .map(|i| TrackId::new(format!("{}{}", prefix, i)))
        .collect()
}

#[test]
fn test_per_genre_quota() {
    assert_eq!(per_genre_quota(100, 1), 100);
    assert_eq!(per_genre_quota(40, 2), 20);
    assert_eq!(per_genre_quota(200, 14), 14);

    // Remainder is dropped
    assert_eq!(per_genre_quota(20, 3), 6);
    assert_eq!(per_genre_quota(50, 4), 12);

    // No genres, no quota
    assert_eq!(per_genre_quota(100, 0), 0);
}

#[test]
fn test_per_genre_quota_matches_integer_division() {
    for total in (MIN_TRACKS..=MAX_TRACKS).step_by(TRACK_STEP as usize) {
        for genres in 1..=GENRES.len() {
            assert_eq!(per_genre_quota(total, genres), total as usize / genres);
        }
    }
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut list = tracks(&["a", "b", "a", "c", "b"]);

    remove_duplicate_tracks(&mut list);

    // First occurrence of each id is kept, in order
    assert_eq!(list, tracks(&["a", "b", "c"]));
}

#[test]
fn test_take_random_respects_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let sample = numbered_tracks("t", 30);

    let taken = take_random(&sample, 10, &mut rng);
    assert_eq!(taken.len(), 10);
    assert!(taken.iter().all(|t| sample.contains(t)));

    // Asking for more than available returns everything
    let all = take_random(&sample, 100, &mut rng);
    assert_eq!(all.len(), 30);
}

#[test]
fn test_merge_genre_samples_without_overlap() {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = vec![numbered_tracks("rock", 50), numbered_tracks("jazz", 50)];

    let merged = merge_genre_samples(&samples, 20, &mut rng);

    assert_eq!(merged.len(), 40);
    let unique: HashSet<&TrackId> = merged.iter().collect();
    assert_eq!(unique.len(), merged.len());

    let rock = merged.iter().filter(|t| t.as_str().starts_with("rock")).count();
    let jazz = merged.iter().filter(|t| t.as_str().starts_with("jazz")).count();
    assert_eq!(rock, 20);
    assert_eq!(jazz, 20);
}

#[test]
fn test_merge_genre_samples_collapses_overlap() {
    let mut rng = StdRng::seed_from_u64(1);
    // Both genres return the very same tracks
    let shared = numbered_tracks("shared", 5);
    let samples = vec![shared.clone(), shared.clone()];

    let merged = merge_genre_samples(&samples, 5, &mut rng);

    assert_eq!(merged.len(), 5);
    let unique: HashSet<&TrackId> = merged.iter().collect();
    assert_eq!(unique.len(), 5);
}

#[test]
fn test_merge_genre_samples_with_empty_genre() {
    let mut rng = StdRng::seed_from_u64(3);
    let samples = vec![numbered_tracks("pop", 10), Vec::new()];

    let merged = merge_genre_samples(&samples, 6, &mut rng);

    // The failed genre contributes nothing, the other one is still capped
    assert_eq!(merged.len(), 6);
}

#[test]
fn test_merge_genre_samples_never_exceeds_target() {
    let mut rng = StdRng::seed_from_u64(99);
    let samples = vec![
        numbered_tracks("a", 40),
        numbered_tracks("b", 40),
        numbered_tracks("c", 40),
    ];
    let quota = per_genre_quota(20, samples.len());

    let merged = merge_genre_samples(&samples, quota, &mut rng);

    assert_eq!(merged.len(), 18);
    assert!(merged.len() <= 20);
}

#[test]
fn test_write_batches() {
    let list = numbered_tracks("t", 250);

    let batches = write_batches(&list, 100);

    let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);

    // Order is preserved across batches
    assert_eq!(batches[0][0], list[0]);
    assert_eq!(batches[2][49], list[249]);
}

#[test]
fn test_write_batches_edge_cases() {
    assert!(write_batches(&[], 100).is_empty());

    let exact = numbered_tracks("t", 100);
    assert_eq!(write_batches(&exact, 100).len(), 1);

    let one_more = numbered_tracks("t", 101);
    let sizes: Vec<usize> = write_batches(&one_more, 100).iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![100, 1]);
}

#[test]
fn test_parse_track_count() {
    assert_eq!(parse_track_count("20"), Ok(20));
    assert_eq!(parse_track_count("100"), Ok(100));
    assert_eq!(parse_track_count(" 200 "), Ok(200));

    assert!(parse_track_count("10").is_err());
    assert!(parse_track_count("210").is_err());
    assert!(parse_track_count("25").is_err());
    assert!(parse_track_count("lots").is_err());
}

#[test]
fn test_parse_genre() {
    assert_eq!(parse_genre("rock"), Ok("rock".to_string()));
    assert_eq!(parse_genre("Hip Hop"), Ok("hip hop".to_string()));
    assert_eq!(parse_genre(" JAZZ "), Ok("jazz".to_string()));

    let err = parse_genre("polka").unwrap_err();
    assert!(err.contains("polka"));
    assert!(err.contains("rock"));
}

#[test]
fn test_dedup_genres_keeps_order() {
    let genres = vec![
        "jazz".to_string(),
        "rock".to_string(),
        "jazz".to_string(),
        "funk".to_string(),
    ];

    assert_eq!(dedup_genres(genres), vec!["jazz", "rock", "funk"]);
}

#[test]
fn test_track_uri() {
    let id = TrackId::new("4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(id.uri(), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(id.to_string(), "4uLU6hMCjMI75M1A2tKUQC");
}
