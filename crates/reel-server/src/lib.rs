//! HTTP server for Reel.
//!
//! Composes the public and admin routers from `reel-api`, gates the admin
//! routes behind HTTP Basic auth, and adds request tracing.

pub mod auth;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, middleware, routing::get};
use reel_core::{service::MovieService, store::MovieStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::{AuthConfig, require_admin};

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;

/// Runtime server configuration, read once at startup.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  pub store_path:          PathBuf,
  pub admin_username:      String,
  pub admin_password_hash: String,
}

impl ServerConfig {
  /// Layer `REEL_*` environment variables over the TOML file at `path`
  /// (which may be absent) over the built-in defaults.
  ///
  /// Fails if `store_path` or either admin credential is missing.
  pub fn load(path: PathBuf) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("REEL").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn auth(&self) -> AuthConfig {
    AuthConfig {
      username:      self.admin_username.clone(),
      password_hash: self.admin_password_hash.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router<S>(service: Arc<MovieService<S>>, auth: Arc<AuthConfig>) -> Router
where
  S: MovieStore + 'static,
{
  let admin = reel_api::admin_router(service.clone())
    .route_layer(middleware::from_fn_with_state(auth, require_admin));

  Router::new()
    .route("/ping", get(ping))
    .merge(reel_api::public_router(service))
    .merge(admin)
    .layer(TraceLayer::new_for_http())
}

/// `GET /ping`
async fn ping() -> &'static str { "pong" }

// ─── Integration tests ────────────────────────────────────────────────────────
