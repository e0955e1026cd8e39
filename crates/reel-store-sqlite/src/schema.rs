//! SQL schema for the Reel SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS movies (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL DEFAULT '',
    description TEXT    NOT NULL DEFAULT '',
    duration    TEXT    NOT NULL DEFAULT '',   -- free-form, e.g. '2h 15m'
    artists     TEXT    NOT NULL DEFAULT '',   -- free-form, not a list
    genre       TEXT    NOT NULL DEFAULT '',
    watchURL    TEXT    NOT NULL DEFAULT '',
    vote        INTEGER NOT NULL DEFAULT 0,
    viewcount   INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS movies_genre_idx ON movies(genre);

PRAGMA user_version = 1;
";
