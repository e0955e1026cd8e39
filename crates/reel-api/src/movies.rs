//! Handlers for the movie endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/movies` | `?page` (default 1), `?perpage` (default 10) |
//! | `GET`  | `/movieswithopts` | Optional `title`, `description`, `artist`, `genre` substrings |
//! | `GET`  | `/movieviewcount` | `?movieid` required |
//! | `GET`  | `/movie/{id}` | 404 if not found |
//! | `POST` | `/movie/{id}/vote` | Adds one vote |
//! | `POST` | `/movie` | Admin. Body: [`MovieInput`]; counters start at zero |
//! | `PUT`  | `/movie/{id}` | Admin. Body: [`MovieInput`]; 404 if not found |
//! | `GET`  | `/mostviewedmovie` | Admin |
//! | `GET`  | `/mostviewedgenre` | Admin |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
};
use reel_core::{
  movie::{GenreViews, Movie, MovieInput, ViewCount},
  query::{FilterField, MovieFilter, Page},
  service::MovieService,
  store::MovieStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /movie`
pub async fn create<S>(
  State(service): State<Arc<MovieService<S>>>,
  body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: MovieStore,
{
  let Json(input) = body?;
  let movie = service.create_movie(input).await?;
  Ok(Json(json!({ "message": "Movie created successfully", "id": movie.id })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /movie/{id}`
pub async fn update<S>(
  State(service): State<Arc<MovieService<S>>>,
  id: Result<Path<i64>, PathRejection>,
  body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: MovieStore,
{
  let Path(id) = id?;
  let Json(input) = body?;
  service.update_movie(id, input).await?;
  Ok(Json(json!({ "message": "Movie updated successfully" })))
}

// ─── Single movie ─────────────────────────────────────────────────────────────

/// `GET /movie/{id}`
pub async fn get_one<S>(
  State(service): State<Arc<MovieService<S>>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, ApiError>
where
  S: MovieStore,
{
  let Path(id) = id?;
  Ok(Json(service.get_movie(id).await?))
}

/// `POST /movie/{id}/vote`
pub async fn vote<S>(
  State(service): State<Arc<MovieService<S>>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: MovieStore,
{
  let Path(id) = id?;
  let movie = service.vote_movie(id).await?;
  Ok(Json(json!({ "message": "Vote recorded", "vote": movie.vote })))
}

// ─── Most viewed ──────────────────────────────────────────────────────────────

/// `GET /mostviewedmovie`
pub async fn most_viewed_movie<S>(
  State(service): State<Arc<MovieService<S>>>,
) -> Result<Json<Movie>, ApiError>
where
  S: MovieStore,
{
  Ok(Json(service.most_viewed_movie().await?))
}

/// `GET /mostviewedgenre`
pub async fn most_viewed_genre<S>(
  State(service): State<Arc<MovieService<S>>>,
) -> Result<Json<GenreViews>, ApiError>
where
  S: MovieStore,
{
  Ok(Json(service.most_viewed_genre().await?))
}

// ─── Paginated listing ────────────────────────────────────────────────────────

/// Raw pagination parameters; parsed by [`Page::parse`] so that a bad value
/// yields a JSON 400 rather than a plain-text extractor rejection.
#[derive(Debug, Deserialize, Default)]
pub struct PageParams {
  pub page:    Option<String>,
  pub perpage: Option<String>,
}

/// `GET /movies[?page=<n>][&perpage=<n>]`
pub async fn list<S>(
  State(service): State<Arc<MovieService<S>>>,
  params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError>
where
  S: MovieStore,
{
  let Query(params) = params?;
  let page = Page::parse(params.page.as_deref(), params.perpage.as_deref())?;
  Ok(Json(service.list_movies(page).await?))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  pub title:       Option<String>,
  pub description: Option<String>,
  /// Matched against the `artists` column.
  pub artist:      Option<String>,
  pub genre:       Option<String>,
}

impl SearchParams {
  /// Each present, non-empty parameter becomes a condition on its own column.
  pub fn into_filter(self) -> MovieFilter {
    let mut filter = MovieFilter::new();
    let fields = [
      (FilterField::Title, self.title),
      (FilterField::Description, self.description),
      (FilterField::Artists, self.artist),
      (FilterField::Genre, self.genre),
    ];
    for (field, value) in fields {
      if let Some(value) = value.filter(|v| !v.is_empty()) {
        filter.insert(field, value);
      }
    }
    filter
  }
}

/// `GET /movieswithopts[?title=...][&description=...][&artist=...][&genre=...]`
pub async fn search<S>(
  State(service): State<Arc<MovieService<S>>>,
  params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError>
where
  S: MovieStore,
{
  let Query(params) = params?;
  let filter = params.into_filter();
  Ok(Json(service.search_movies(&filter).await?))
}

// ─── View count ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ViewCountParams {
  pub movieid: Option<String>,
}

/// `GET /movieviewcount?movieid=<id>`
pub async fn view_count<S>(
  State(service): State<Arc<MovieService<S>>>,
  params: Result<Query<ViewCountParams>, QueryRejection>,
) -> Result<Json<ViewCount>, ApiError>
where
  S: MovieStore,
{
  let Query(params) = params?;
  let raw = params
    .movieid
    .filter(|id| !id.is_empty())
    .ok_or_else(|| ApiError::BadRequest("please input movie id".into()))?;
  let id: i64 = raw
    .parse()
    .map_err(|_| ApiError::BadRequest(format!("movie id must be an integer, got {raw:?}")))?;

  Ok(Json(service.movie_view_count(id).await?))
}
