//! The movie entity and the shapes derived from it.

use serde::{Deserialize, Serialize};

/// A movie as stored in the catalog.
///
/// `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  /// Free-form, e.g. `"2h 15m"`.
  pub duration:    String,
  /// Free-form; a single string rather than a list.
  pub artists:     String,
  pub genre:       String,
  #[serde(rename = "watchURL")]
  pub watch_url:   String,
  pub vote:        i64,
  #[serde(rename = "viewCount")]
  pub view_count:  i64,
}

impl Movie {
  /// Combine a store-assigned `id` with the mutable fields of `input`.
  pub fn from_input(id: i64, input: MovieInput) -> Self {
    Self {
      id,
      title: input.title,
      description: input.description,
      duration: input.duration,
      artists: input.artists,
      genre: input.genre,
      watch_url: input.watch_url,
      vote: input.vote,
      view_count: input.view_count,
    }
  }
}

/// The client-writable fields of a movie, accepted by create and update.
///
/// Every field is optional on the wire; a missing field is an empty string or
/// zero. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInput {
  pub title:       String,
  pub description: String,
  pub duration:    String,
  pub artists:     String,
  pub genre:       String,
  #[serde(rename = "watchURL")]
  pub watch_url:   String,
  pub vote:        i64,
  #[serde(rename = "viewCount")]
  pub view_count:  i64,
}

impl MovieInput {
  /// The same input with both counters reset, as written on creation.
  pub fn with_counters_reset(self) -> Self {
    Self { vote: 0, view_count: 0, ..self }
  }
}

/// Total views aggregated over every movie of one genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreViews {
  pub genre:      String,
  #[serde(rename = "viewCount")]
  pub view_count: i64,
}

/// The view counter of a single movie, labelled with its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCount {
  pub title:      String,
  #[serde(rename = "viewCount")]
  pub view_count: i64,
}
