//! Core library for Sprout.
//!
//! Holds the plant record model, the local blob store that persists the plant list between
//! sessions, and the [`Repository`] that owns the list while a session is running.

use std::path::PathBuf;

use thiserror::Error;

pub mod fs;
pub mod repository;

pub use repository::Repository;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Internal database error {0}")]
    Internal(#[from] agdb::DbError),
    #[error("Failed to encode or decode plant records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration file: {0}")]
    ConfigDecode(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("$HOME must be set to locate the Sprout directories")]
    NoHome,
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
