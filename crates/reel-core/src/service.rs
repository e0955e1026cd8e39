//! [`MovieService`] — business rules between the HTTP layer and the store.
//!
//! The only rule with teeth is that an update requires the target to exist.
//! Everything else delegates to the store, translating absence into a tagged
//! [`Error`] and wrapping store failures with the name of the operation.

use crate::{
  Error, Result,
  movie::{GenreViews, Movie, MovieInput, ViewCount},
  query::{MovieFilter, Page, SortDirection, SortField, SortOrder},
  store::MovieStore,
};

pub struct MovieService<S> {
  store: S,
}

impl<S: MovieStore> MovieService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  #[cfg(test)]
  pub(crate) fn store(&self) -> &S { &self.store }

  pub async fn create_movie(&self, input: MovieInput) -> Result<Movie> {
    let movie = self
      .store
      .create_movie(input)
      .await
      .map_err(|e| store_failure("create movie", e))?;
    tracing::info!(id = movie.id, title = %movie.title, "movie created");
    Ok(movie)
  }

  /// Overwrite movie `id`. Fails with [`Error::MovieNotFound`] before any
  /// write if the movie does not exist.
  pub async fn update_movie(&self, id: i64, input: MovieInput) -> Result<()> {
    self.get_movie(id).await?;

    self
      .store
      .update_movie(id, input)
      .await
      .map_err(|e| store_failure("update movie", e))?;
    tracing::info!(id, "movie updated");
    Ok(())
  }

  pub async fn get_movie(&self, id: i64) -> Result<Movie> {
    self
      .store
      .get_movie(id)
      .await
      .map_err(|e| store_failure("look up movie", e))?
      .ok_or(Error::MovieNotFound(id))
  }

  /// Record one vote for movie `id` and return the movie as it now stands.
  pub async fn vote_movie(&self, id: i64) -> Result<Movie> {
    let found = self
      .store
      .increment_vote(id)
      .await
      .map_err(|e| store_failure("vote for movie", e))?;
    if !found {
      return Err(Error::MovieNotFound(id));
    }
    self.get_movie(id).await
  }

  pub async fn most_viewed_movie(&self) -> Result<Movie> {
    let order = SortOrder::by(SortField::ViewCount, SortDirection::Desc);
    self
      .store
      .get_one_sorted_by(&order)
      .await
      .map_err(|e| store_failure("find most viewed movie", e))?
      .ok_or(Error::NoMovies)
  }

  pub async fn most_viewed_genre(&self) -> Result<GenreViews> {
    self
      .store
      .most_viewed_genre()
      .await
      .map_err(|e| store_failure("find most viewed genre", e))?
      .ok_or(Error::NoMovies)
  }

  pub async fn list_movies(&self, page: Page) -> Result<Vec<Movie>> {
    self
      .store
      .list_movies(page)
      .await
      .map_err(|e| store_failure("list movies", e))
  }

  pub async fn search_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>> {
    self
      .store
      .search_movies(filter)
      .await
      .map_err(|e| store_failure("search movies", e))
  }

  pub async fn movie_view_count(&self, id: i64) -> Result<ViewCount> {
    let movie = self.get_movie(id).await?;
    Ok(ViewCount { title: movie.title, view_count: movie.view_count })
  }
}

fn store_failure<E>(context: &'static str, err: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  tracing::error!(error = %err, "failed to {context}");
  Error::store(context, err)
}
