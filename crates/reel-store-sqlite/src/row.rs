//! Mapping between `movies` rows and domain types.
//!
//! Every `SELECT` in [`crate::queries`] returns the columns in the order of
//! [`crate::queries::MOVIE_COLUMNS`].

use reel_core::movie::{GenreViews, Movie};
use rusqlite::Row;

pub fn read_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
  Ok(Movie {
    id:          row.get(0)?,
    title:       row.get(1)?,
    description: row.get(2)?,
    duration:    row.get(3)?,
    artists:     row.get(4)?,
    genre:       row.get(5)?,
    watch_url:   row.get(6)?,
    vote:        row.get(7)?,
    view_count:  row.get(8)?,
  })
}

/// Reads `(genre, total_views)`.
pub fn read_genre_views(row: &Row<'_>) -> rusqlite::Result<GenreViews> {
  Ok(GenreViews { genre: row.get(0)?, view_count: row.get(1)? })
}
