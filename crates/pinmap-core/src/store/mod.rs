//! Pin store and its storage backends
//!
//! The store keeps the committed pins in insertion order in memory and
//! mirrors them to a single key-value slot after every mutation. Absence
//! of the slot means "no pins yet"; the store never distinguishes that
//! from a cleared slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::models::{DraftPin, Pin, PinId};

/// A single named slot of durable storage holding the serialized pin list.
pub trait StorageBackend: Send + Sync {
    /// Read the slot. An absent slot is `Ok(None)`, not an error.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot with the given payload.
    fn write(&self, payload: &str) -> Result<()>;

    /// Remove the slot entirely. Clearing an absent slot is a no-op.
    fn clear(&self) -> Result<()>;
}

/// File-backed storage slot: one JSON document on disk.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory storage slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.lock().ok().and_then(|slot| slot.clone()))
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(payload.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// The ordered collection of committed pins, mirrored to durable storage.
pub struct PinStore {
    pins: Vec<Pin>,
    storage: Box<dyn StorageBackend>,
}

impl PinStore {
    /// Create an empty store over the given backend. Call [`Self::load`]
    /// to hydrate it from whatever the backend already holds.
    #[must_use]
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            pins: Vec::new(),
            storage,
        }
    }

    /// Hydrate the in-memory collection from the storage slot.
    ///
    /// An absent slot yields an empty collection. A malformed payload is
    /// downgraded to an empty collection with a warning; only backend I/O
    /// failures surface as errors.
    pub fn load(&mut self) -> Result<()> {
        self.pins = match self.storage.read()? {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(pins) => pins,
                Err(error) => {
                    tracing::warn!("Malformed persisted pins, starting empty: {error}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(())
    }

    /// Commit a draft: append it to the collection and re-persist.
    pub fn commit(&mut self, draft: DraftPin) -> Result<Pin> {
        let pin = draft.into_pin();
        tracing::debug!("Committing pin {} at ({}, {})", pin.id, pin.lat, pin.lng);
        self.pins.push(pin.clone());
        self.persist()?;
        Ok(pin)
    }

    /// Remove the pin with the given id.
    ///
    /// Re-persists the remaining pins, or clears the slot entirely when the
    /// collection became empty. Removing an unknown id is a quiet no-op.
    pub fn remove(&mut self, id: PinId) -> Result<bool> {
        let before = self.pins.len();
        self.pins.retain(|pin| pin.id != id);
        if self.pins.len() == before {
            return Ok(false);
        }

        tracing::debug!("Removed pin {id}");
        if self.pins.is_empty() {
            self.storage.clear()?;
        } else {
            self.persist()?;
        }
        Ok(true)
    }

    /// The committed pins, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Pin] {
        &self.pins
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.pins)?;
        self.storage.write(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(remark: &str, lat: f64, lng: f64) -> DraftPin {
        let mut draft = DraftPin::new(lat, lng);
        draft.set_remark(remark);
        draft
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let mut store = PinStore::new(Box::new(MemoryStorage::new()));
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_payload_is_empty() {
        let storage = MemoryStorage::new();
        storage.write("not json at all {{{").unwrap();

        let mut store = PinStore::new(Box::new(storage));
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_persists_immediately() {
        let mut store = PinStore::new(Box::new(MemoryStorage::new()));
        store.commit(draft("Coffee shop", 12.9, 77.6)).unwrap();

        assert_eq!(store.len(), 1);
        let persisted = store.storage.read().unwrap().unwrap();
        let pins: Vec<Pin> = serde_json::from_str(&persisted).unwrap();
        assert_eq!(pins, store.list().to_vec());
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut store = PinStore::new(Box::new(MemoryStorage::new()));
        store.commit(draft("first", 1.0, 1.0)).unwrap();
        store.commit(draft("second", 2.0, 2.0)).unwrap();
        store.commit(draft("third", 3.0, 3.0)).unwrap();

        let victim = store.list()[1].id;
        assert!(store.remove(victim).unwrap());

        let remarks: Vec<&str> = store.list().iter().map(|p| p.remark.as_str()).collect();
        assert_eq!(remarks, vec!["first", "third"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = PinStore::new(Box::new(MemoryStorage::new()));
        store.commit(draft("only", 1.0, 1.0)).unwrap();

        assert!(!store.remove(PinId::new()).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_last_pin_clears_slot() {
        let storage = Box::new(MemoryStorage::new());
        let mut store = PinStore::new(storage);
        let id = store.commit(draft("only", 1.0, 1.0)).unwrap().id;
        assert!(store.storage.read().unwrap().is_some());

        store.remove(id).unwrap();
        assert!(store.storage.read().unwrap().is_none());

        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut store = PinStore::new(Box::new(MemoryStorage::new()));
        store.commit(draft("a", 1.0, -1.0)).unwrap();
        store.commit(draft("b", 2.0, -2.0)).unwrap();
        store.commit(draft("c", 3.0, -3.0)).unwrap();
        let committed = store.list().to_vec();

        let payload = store.storage.read().unwrap().unwrap();
        let reloaded_storage = MemoryStorage::new();
        reloaded_storage.write(&payload).unwrap();
        let mut reloaded = PinStore::new(Box::new(reloaded_storage));
        reloaded.load().unwrap();

        assert_eq!(reloaded.list().to_vec(), committed);
    }

    #[test]
    fn test_json_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("pins.json"));

        assert!(storage.read().unwrap().is_none());
        storage.write(r#"[{"stub":true}]"#).unwrap();
        assert_eq!(storage.read().unwrap().unwrap(), r#"[{"stub":true}]"#);

        storage.clear().unwrap();
        assert!(storage.read().unwrap().is_none());
        // Clearing again must stay a no-op.
        storage.clear().unwrap();
    }

    #[test]
    fn test_json_file_store_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pins.json");

        let mut store = PinStore::new(Box::new(JsonFileStorage::new(path.clone())));
        store.load().unwrap();
        store.commit(draft("Park", 10.0, 20.0)).unwrap();
        let committed = store.list().to_vec();

        let mut reopened = PinStore::new(Box::new(JsonFileStorage::new(path)));
        reopened.load().unwrap();
        assert_eq!(reopened.list().to_vec(), committed);
    }
}
