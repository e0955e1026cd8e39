//! Core types and trait definitions for the Reel movie catalog.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! implements [`store::MovieStore`]; the HTTP layer talks only to
//! [`service::MovieService`].

pub mod error;
pub mod movie;
pub mod query;
pub mod service;
pub mod store;

pub use error::{Error, Result};
