use tracing::{debug, warn};

use crate::{
    Result,
    repository::store::{DbBlobStore, PlantStore},
};

pub mod config;
pub mod entities;
pub mod store;

pub use config::CoreConfig;
pub use entities::{Light, Plant, PlantFields, PlantId, Room, WaterAmount};

/// Owner of the plant list for a running session.
///
/// The [`Repository`] holds the canonical, ordered list of plants and is the only thing that
/// mutates it. Every mutation is followed by a save of the whole list to its [`PlantStore`].
/// A failed save is logged and otherwise ignored: the in-memory list stays authoritative until
/// the session ends.
///
/// Operations on an id that isn't in the list are no-ops, reported through their return value.
#[derive(Debug)]
pub struct Repository {
    plants: Vec<Plant>,
    store: PlantStore,
}

impl Repository {
    /// Open the configured blob store and load the saved plant list from it.
    pub fn new(cfg: &CoreConfig) -> Result<Self> {
        let blobs = DbBlobStore::open(&cfg.store_path()?)?;
        Ok(Self::open(PlantStore::new(blobs, cfg.storage_key())))
    }

    /// Build a [`Repository`] over `store` and load the saved plant list from it.
    pub fn open(store: PlantStore) -> Self {
        let mut repo = Self::with_store(store);
        repo.load_initial();
        repo
    }

    /// Build an empty [`Repository`] over `store` without reading from it.
    pub fn with_store(store: PlantStore) -> Self {
        Self {
            plants: Vec::new(),
            store,
        }
    }

    /// Replace the in-memory list with whatever the store holds.
    pub fn load_initial(&mut self) {
        self.plants = self.store.load();
        debug!("Loaded {} plants", self.plants.len());
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id() == id)
    }

    /// Add a new, unwatered plant to the end of the list.
    pub fn create(&mut self, fields: PlantFields) -> Plant {
        let mut id = PlantId::generate();
        while self.get(id).is_some() {
            id = PlantId::generate();
        }

        let plant = Plant::new(id, fields);
        self.plants.push(plant.clone());
        self.persist();

        debug!("Created new plant: {} ({id})", plant.name());

        plant
    }

    /// Replace the editable fields of a plant. Returns `false` if there is no such plant.
    pub fn update(&mut self, id: PlantId, fields: PlantFields) -> bool {
        let Some(plant) = self.plants.iter_mut().find(|p| p.id() == id) else {
            warn!("No plant with id {id} to update");
            return false;
        };

        plant.apply(fields);
        self.persist();

        debug!("Updated plant {id}");

        true
    }

    /// Flip a plant's watered state. Returns the new state, or `None` if there is no such plant.
    pub fn toggle_watered(&mut self, id: PlantId) -> Option<bool> {
        let Some(plant) = self.plants.iter_mut().find(|p| p.id() == id) else {
            warn!("No plant with id {id} to water");
            return None;
        };

        let is_watered = plant.toggle_watered();
        self.persist();

        debug!("Plant {id} watered: {is_watered}");

        Some(is_watered)
    }

    /// Remove a plant. Returns `false` if there is no such plant.
    pub fn delete(&mut self, id: PlantId) -> bool {
        let Some(index) = self.plants.iter().position(|p| p.id() == id) else {
            warn!("No plant with id {id} to delete");
            return false;
        };

        let plant = self.plants.remove(index);
        self.persist();

        debug!("Removed plant: {} ({id})", plant.name());

        true
    }

    /// Remove the plants at the given list positions, ignoring any that are out of range.
    /// Returns how many were removed.
    pub fn delete_at(&mut self, offsets: &[usize]) -> usize {
        let before = self.plants.len();

        let mut index = 0;
        self.plants.retain(|_| {
            let keep = !offsets.contains(&index);
            index += 1;
            keep
        });

        let removed = before - self.plants.len();
        if removed > 0 {
            self.persist();
            debug!("Removed {removed} plants");
        }

        removed
    }

    /// Whether every plant has been watered. An empty list never counts as done.
    pub fn all_watered(&self) -> bool {
        !self.plants.is_empty() && self.plants.iter().all(Plant::is_watered)
    }

    /// Number of plants that still need water.
    pub fn remaining(&self) -> usize {
        self.plants.iter().filter(|p| !p.is_watered()).count()
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.plants) {
            warn!("Failed to save plants under '{}': {err}", self.store.key());
        }
    }

    #[cfg(test)]
    /// Return a mock version of a [`Repository`] backed by an in-memory blob store.
    pub(crate) fn mock() -> Self {
        use crate::repository::store::{DEFAULT_KEY, MemoryBlobStore};

        Self::with_store(PlantStore::new(MemoryBlobStore::new(), DEFAULT_KEY))
    }
}
