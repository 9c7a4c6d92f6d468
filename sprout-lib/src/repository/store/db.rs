use std::{path::Path, sync::Arc};

use agdb::{DbAny, DbValue, QueryBuilder};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::{Error, Result, repository::store::BlobStore};

/// Alias of the node whose key-value pairs hold the stored blobs.
const SETTINGS: &str = "settings";

/// A durable [`BlobStore`] backed by an `agdb` database file.
///
/// Every blob is a string value on a single `settings` node, keyed by its store key.
#[derive(Debug, Clone)]
pub struct DbBlobStore {
    db: Arc<RwLock<DbAny>>,
}

impl DbBlobStore {
    /// Open the database at `path`, creating it if it doesn't exist.
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;

        let store = Self {
            db: Arc::new(RwLock::new(DbAny::new_file(path_str)?)),
        };

        store.init()?;

        debug!("Opened blob store at {}", path.display());

        Ok(store)
    }

    /// Create a memory backed database. Nothing written to it outlives the process.
    pub fn in_memory() -> Result<Self> {
        let store = Self {
            db: Arc::new(RwLock::new(DbAny::new_memory("sprout")?)),
        };

        store.init()?;

        Ok(store)
    }

    fn init(&self) -> Result<()> {
        let alias_count = self
            .db
            .read()
            .exec(QueryBuilder::select().aliases().query())?
            .result;

        // Insert the settings node if it doesn't exist
        if alias_count == 0 {
            self.db
                .write()
                .exec_mut(QueryBuilder::insert().nodes().aliases([SETTINGS]).query())?;
        }

        Ok(())
    }
}

impl BlobStore for DbBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let wanted = DbValue::from(key);

        let Some(settings) = self
            .db
            .read()
            .exec(QueryBuilder::select().ids(SETTINGS).query())?
            .elements
            .pop()
        else {
            return Ok(None);
        };

        let Some(entry) = settings.values.into_iter().find(|kv| kv.key == wanted) else {
            return Ok(None);
        };

        match entry.value {
            DbValue::String(blob) => Ok(Some(blob)),
            other => {
                warn!("Ignoring non-string value stored under '{key}': {other:?}");
                Ok(None)
            }
        }
    }

    fn write(&self, key: &str, blob: String) -> Result<()> {
        self.db.write().exec_mut(
            QueryBuilder::insert()
                .values([[(key, blob).into()]])
                .ids(SETTINGS)
                .query(),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_absent_key() {
        let store = DbBlobStore::in_memory().unwrap();

        assert_eq!(store.read("savedPlants").unwrap(), None);
    }

    #[test]
    fn test_write_read() {
        let store = DbBlobStore::in_memory().unwrap();

        store.write("savedPlants", "[]".into()).unwrap();

        assert_eq!(store.read("savedPlants").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.read("otherKey").unwrap(), None);
    }

    #[test]
    fn test_overwrite() {
        let store = DbBlobStore::in_memory().unwrap();

        store.write("savedPlants", "[]".into()).unwrap();
        store.write("savedPlants", "[1]".into()).unwrap();

        assert_eq!(store.read("savedPlants").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_persists_across_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.db");

        {
            let store = DbBlobStore::open(&path).unwrap();
            store.write("savedPlants", "[]".into()).unwrap();
        }

        let store = DbBlobStore::open(&path).unwrap();

        assert_eq!(store.read("savedPlants").unwrap().as_deref(), Some("[]"));
    }
}
