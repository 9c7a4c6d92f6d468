use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::{Result, repository::store::BlobStore};

/// A [`BlobStore`] that only lives as long as the process.
///
/// Clones share the same underlying map, so one handle can be given to a [`PlantStore`] while
/// another is kept around to inspect or seed the stored blobs.
///
/// [`PlantStore`]: crate::repository::store::PlantStore
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.read().get(key).cloned())
    }

    fn write(&self, key: &str, blob: String) -> Result<()> {
        self.blobs.write().insert(key.to_string(), blob);
        Ok(())
    }
}
