//! The `MovieStore` trait: one data-access operation per use case.
//!
//! Implemented by storage backends (e.g. `reel-store-sqlite`). The service
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  movie::{GenreViews, Movie, MovieInput},
  query::{MovieFilter, Page, SortOrder},
};

/// Abstraction over a movie catalog backend.
///
/// Every operation is a single statement; backends do not retry. Absence is
/// reported as `None` rather than as an error, and multi-row reads return an
/// empty vector when nothing matches.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait MovieStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert a new movie and return it with its store-assigned id.
  ///
  /// `vote` and `view_count` are always written as zero.
  fn create_movie(
    &self,
    input: MovieInput,
  ) -> impl Future<Output = Result<Movie, Self::Error>> + Send + '_;

  /// Overwrite every mutable column of movie `id`, counters included.
  ///
  /// Does not check that `id` exists: an update that matches no row
  /// succeeds without effect.
  fn update_movie(
    &self,
    id: i64,
    input: MovieInput,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Add one to the vote counter of movie `id`. Returns `false` if no row
  /// matched.
  fn increment_vote(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  fn get_movie(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// The first movie under `order`, or `None` if the catalog is empty.
  fn get_one_sorted_by<'a>(
    &'a self,
    order: &'a SortOrder,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + 'a;

  /// The genre with the highest summed view count.
  fn most_viewed_genre(
    &self,
  ) -> impl Future<Output = Result<Option<GenreViews>, Self::Error>> + Send + '_;

  /// One page of movies ordered by ascending id.
  fn list_movies(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;

  /// Every movie matching all substring conditions in `filter`.
  fn search_movies<'a>(
    &'a self,
    filter: &'a MovieFilter,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + 'a;
}
