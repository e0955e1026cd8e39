//! JSON REST API for Reel.
//!
//! Exposes two axum routers backed by a [`MovieService`]: the public routes
//! and the admin routes. Auth, TLS, and transport concerns are the caller's
//! responsibility; the caller is expected to gate [`admin_router`].
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .merge(reel_api::public_router(service.clone()))
//!   .merge(reel_api::admin_router(service).route_layer(auth))
//! ```

pub mod error;
pub mod movies;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use reel_core::{service::MovieService, store::MovieStore};

pub use error::ApiError;

/// Routes anyone may call.
pub fn public_router<S>(service: Arc<MovieService<S>>) -> Router<()>
where
  S: MovieStore + 'static,
{
  Router::new()
    .route("/movies", get(movies::list::<S>))
    .route("/movieswithopts", get(movies::search::<S>))
    .route("/movieviewcount", get(movies::view_count::<S>))
    .route("/movie/{id}", get(movies::get_one::<S>))
    .route("/movie/{id}/vote", post(movies::vote::<S>))
    .with_state(service)
}

/// Routes that create or modify movies, or expose catalog-wide statistics.
pub fn admin_router<S>(service: Arc<MovieService<S>>) -> Router<()>
where
  S: MovieStore + 'static,
{
  Router::new()
    .route("/movie", post(movies::create::<S>))
    .route("/movie/{id}", put(movies::update::<S>))
    .route("/mostviewedmovie", get(movies::most_viewed_movie::<S>))
    .route("/mostviewedgenre", get(movies::most_viewed_genre::<S>))
    .with_state(service)
}

// ─── Request validation tests ────────────────────────────────────────────────
