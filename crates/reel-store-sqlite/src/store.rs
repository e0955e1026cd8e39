//! [`SqliteStore`] — the SQLite implementation of [`MovieStore`].

use std::path::Path;

use reel_core::{
  movie::{GenreViews, Movie, MovieInput},
  query::{MovieFilter, Page, SortOrder},
  store::MovieStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result, queries,
  row::{read_genre_views, read_movie},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movie catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a movie-returning `SELECT` with text parameters bound in order.
  async fn query_movies(&self, sql: String, params: Vec<String>) -> Result<Vec<Movie>> {
    tracing::debug!(%sql, "querying movies");
    let movies = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), read_movie)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(movies)
  }
}

// ─── MovieStore impl ─────────────────────────────────────────────────────────

impl MovieStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create_movie(&self, input: MovieInput) -> Result<Movie> {
    let input = input.with_counters_reset();
    let row   = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          queries::INSERT_MOVIE,
          rusqlite::params![
            row.title,
            row.description,
            row.duration,
            row.artists,
            row.genre,
            row.watch_url,
            0_i64,
            0_i64,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Movie::from_input(id, input))
  }

  async fn update_movie(&self, id: i64, input: MovieInput) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          queries::UPDATE_MOVIE,
          rusqlite::params![
            input.title,
            input.description,
            input.duration,
            input.artists,
            input.genre,
            input.watch_url,
            input.vote,
            input.view_count,
            id,
          ],
        )?)
      })
      .await?;

    // A missing row is the caller's concern, not an error here.
    tracing::debug!(id, affected, "movie update executed");
    Ok(())
  }

  async fn increment_vote(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| Ok(conn.execute(queries::INCREMENT_VOTE, [id])?))
      .await?;
    Ok(affected > 0)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get_movie(&self, id: i64) -> Result<Option<Movie>> {
    let movie = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(queries::SELECT_MOVIE_BY_ID, [id], read_movie)
            .optional()?,
        )
      })
      .await?;
    Ok(movie)
  }

  async fn get_one_sorted_by(&self, order: &SortOrder) -> Result<Option<Movie>> {
    let sql = queries::select_one_sorted(order);
    tracing::debug!(%sql, "querying single sorted movie");

    let movie = self
      .conn
      .call(move |conn| Ok(conn.query_row(&sql, [], read_movie).optional()?))
      .await?;
    Ok(movie)
  }

  async fn most_viewed_genre(&self) -> Result<Option<GenreViews>> {
    let top = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(queries::SELECT_MOST_VIEWED_GENRE, [], read_genre_views)
            .optional()?,
        )
      })
      .await?;
    Ok(top)
  }

  async fn list_movies(&self, page: Page) -> Result<Vec<Movie>> {
    let (limit, offset) = (page.limit(), page.offset());

    let movies = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(queries::SELECT_PAGE)?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], read_movie)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(movies)
  }

  async fn search_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>> {
    let (sql, params) = queries::select_filtered(filter);
    self.query_movies(sql, params).await
  }
}
