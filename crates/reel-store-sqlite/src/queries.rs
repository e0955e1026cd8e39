//! The catalog of SQL statements issued by [`crate::SqliteStore`].
//!
//! Fixed statements bind every value positionally. The two templated
//! statements (single sorted row, filtered listing) splice in column names
//! taken from the closed enums in [`reel_core::query`]; the values they
//! compare against are still bound.

use reel_core::query::{MovieFilter, SortOrder};

/// Column order expected by [`crate::row::read_movie`].
pub const MOVIE_COLUMNS: &str =
  "id, title, description, duration, artists, genre, watchURL, vote, viewcount";

pub const INSERT_MOVIE: &str = "
INSERT INTO movies (title, description, duration, artists, genre, watchURL, vote, viewcount)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

pub const UPDATE_MOVIE: &str = "
UPDATE movies
   SET title = ?1, description = ?2, duration = ?3, artists = ?4,
       genre = ?5, watchURL = ?6, vote = ?7, viewcount = ?8
 WHERE id = ?9";

pub const INCREMENT_VOTE: &str = "UPDATE movies SET vote = vote + 1 WHERE id = ?1";

pub const SELECT_MOVIE_BY_ID: &str = "
SELECT id, title, description, duration, artists, genre, watchURL, vote, viewcount
  FROM movies
 WHERE id = ?1";

pub const SELECT_MOST_VIEWED_GENRE: &str = "
SELECT genre, SUM(viewcount) AS total_views
  FROM movies
 GROUP BY genre
 ORDER BY total_views DESC, genre ASC
 LIMIT 1";

pub const SELECT_PAGE: &str = "
SELECT id, title, description, duration, artists, genre, watchURL, vote, viewcount
  FROM movies
 ORDER BY id
 LIMIT ?1 OFFSET ?2";

/// `SELECT ... ORDER BY <fields> <DIR> LIMIT 1`.
pub fn select_one_sorted(order: &SortOrder) -> String {
  format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY {order} LIMIT 1")
}

/// `SELECT ... WHERE <conditions>` plus the values to bind, in placeholder
/// order. An empty filter selects every row.
///
/// Conditions use `instr` rather than `LIKE` so that `%` and `_` in a value
/// match themselves and comparison stays case-sensitive.
pub fn select_filtered(filter: &MovieFilter) -> (String, Vec<String>) {
  let mut conds  = Vec::with_capacity(filter.len());
  let mut params = Vec::with_capacity(filter.len());

  for (n, (field, value)) in filter.iter().enumerate() {
    conds.push(format!("instr({}, ?{}) > 0", field.column(), n + 1));
    params.push(value.to_owned());
  }

  let where_clause = if conds.is_empty() {
    "1=1".to_owned()
  } else {
    conds.join(" AND ")
  };

  (
    format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE {where_clause} ORDER BY id"),
    params,
  )
}
