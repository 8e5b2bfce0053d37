//! Store location and startup hydration

use pinmap_core::store::{JsonFileStorage, MemoryStorage, PinStore, StorageBackend};

const APP_DIR: &str = "pinmap";
const STORE_FILE: &str = "pins.json";

fn default_backend() -> Box<dyn StorageBackend> {
    match dirs::data_dir() {
        Some(base) => {
            let path = base.join(APP_DIR).join(STORE_FILE);
            tracing::debug!("Pin store at {}", path.display());
            Box::new(JsonFileStorage::new(path))
        }
        None => {
            tracing::warn!("No platform data directory; pins will not survive this session");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Open the default store and hydrate it from disk.
///
/// Load failures degrade to an empty collection; the app stays usable.
#[must_use]
pub fn open_store() -> PinStore {
    let mut store = PinStore::new(default_backend());
    if let Err(error) = store.load() {
        tracing::warn!("Failed to load persisted pins: {error}");
    }
    tracing::info!("Loaded {} pins", store.len());
    store
}
