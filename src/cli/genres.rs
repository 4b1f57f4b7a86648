use tabled::Table;

use crate::types::{GENRES, GenreListRow};

/// `genremix genres`: print the genres that can be passed to `--genre`.
pub fn genres() {
    let rows: Vec<GenreListRow> = GENRES
        .iter()
        .enumerate()
        .map(|(index, genre)| GenreListRow {
            number: index + 1,
            genre: genre.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
