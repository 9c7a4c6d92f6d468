//! Local persistence for the plant list.
//!
//! The whole list is written as a single JSON blob under one key of a [`BlobStore`]. Every
//! save overwrites the previous snapshot. Reads are best effort: a missing or unreadable blob
//! is treated as an empty list, since the in-memory list is the source of truth for a running
//! session and the blob is only a cache of it.

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::{Result, repository::entities::Plant};

mod db;
mod memory;

pub use db::DbBlobStore;
pub use memory::MemoryBlobStore;

/// The key the plant list is saved under unless configured otherwise.
pub const DEFAULT_KEY: &str = "savedPlants";

/// A simple key-value store for small serialized blobs.
pub trait BlobStore: Debug {
    /// Read the blob stored under `key`, if there is one.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `blob` under `key`, replacing whatever was there before.
    fn write(&self, key: &str, blob: String) -> Result<()>;
}

/// Saves and loads the full plant list under a fixed key.
#[derive(Debug)]
pub struct PlantStore {
    blobs: Box<dyn BlobStore>,
    key: String,
}

impl PlantStore {
    pub fn new(blobs: impl BlobStore + 'static, key: impl Into<String>) -> Self {
        Self {
            blobs: Box::new(blobs),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize `plants` and overwrite the stored snapshot with it.
    pub fn save(&self, plants: &[Plant]) -> Result<()> {
        let blob = serde_json::to_string(plants)?;
        self.blobs.write(&self.key, blob)
    }

    /// Read the stored snapshot. `Ok(None)` means nothing has been saved under the key yet.
    pub fn try_load(&self) -> Result<Option<Vec<Plant>>> {
        let Some(blob) = self.blobs.read(&self.key)? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&blob)?))
    }

    /// Read the stored snapshot, falling back to an empty list if it is missing or corrupt.
    pub fn load(&self) -> Vec<Plant> {
        match self.try_load() {
            Ok(Some(plants)) => plants,
            Ok(None) => {
                debug!("No saved plants under '{}'", self.key);
                Vec::new()
            }
            Err(err) => {
                warn!("Discarding unreadable plant list under '{}': {err}", self.key);
                Vec::new()
            }
        }
    }
}
