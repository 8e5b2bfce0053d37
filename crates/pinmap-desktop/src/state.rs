//! Application state management
//!
//! Global state accessible via Dioxus context providers. All mutations run
//! on the main event thread; the only background work is the fire-and-forget
//! geocode resolution, whose result goes through the draft workflow's
//! relevance guard.

use dioxus::prelude::*;

use pinmap_core::draft::DraftWorkflow;
use pinmap_core::geocode::{GeocodeClient, FALLBACK_ADDRESS};
use pinmap_core::search::filter_pins;
use pinmap_core::store::PinStore;
use pinmap_core::{Pin, PinId};

use crate::map;

/// Which pane a narrow viewport shows; irrelevant when wide, where the map
/// and the list are visible side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    MapFocused,
    ListFocused,
}

impl ViewMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::MapFocused => Self::ListFocused,
            Self::ListFocused => Self::MapFocused,
        }
    }

    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::ListFocused)
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Committed pins, mirrored from the store after every mutation
    pub pins: Signal<Vec<Pin>>,
    /// The single in-progress draft, if any
    pub draft: Signal<DraftWorkflow>,
    /// Current search query
    pub search_query: Signal<String>,
    /// Narrow-viewport pane selection
    pub view_mode: Signal<ViewMode>,
    /// Whether the window is below the narrow-layout threshold
    pub narrow_viewport: Signal<bool>,
    /// The persistent pin store
    pub store: Signal<PinStore>,
    /// Geocode client; None when the HTTP client failed to build
    pub geocoder: Signal<Option<GeocodeClient>>,
}

impl AppState {
    /// Pins matching the current search query, in insertion order.
    #[must_use]
    pub fn filtered_pins(&self) -> Vec<Pin> {
        filter_pins(&(self.pins)(), &(self.search_query)())
    }

    /// Map click: start a fresh draft (superseding any current one) and
    /// resolve its address in the background, tagged with the draft id.
    pub fn handle_map_click(&mut self, lat: f64, lng: f64) {
        let id = self.draft.write().begin(lat, lng);
        let geocoder = self.geocoder.read().clone();
        let mut draft = self.draft;
        spawn(async move {
            let address = match geocoder {
                Some(client) => client.resolve(lat, lng).await,
                None => FALLBACK_ADDRESS.to_string(),
            };
            draft.write().apply_address(id, address);
        });
    }

    /// Save the current draft into the store; no-op when Idle.
    pub fn save_draft(&mut self) {
        let Some(draft) = self.draft.write().take() else {
            return;
        };
        let committed = self.store.write().commit(draft);
        match committed {
            Ok(pin) => {
                tracing::debug!("Saved pin {}", pin.id);
                self.refresh_pins();
            }
            Err(error) => tracing::error!("Failed to save pin: {error}"),
        }
    }

    /// Delete a committed pin and re-sync the visible collection.
    pub fn delete_pin(&mut self, id: PinId) {
        match self.store.write().remove(id) {
            Ok(true) => self.refresh_pins(),
            Ok(false) => {}
            Err(error) => tracing::error!("Failed to delete pin {id}: {error}"),
        }
    }

    /// Fly the map to a pin; narrow viewports switch to the map pane so
    /// the transition is visible.
    pub fn select_pin(&mut self, lat: f64, lng: f64) {
        map::fly_to(lat, lng);
        if (self.narrow_viewport)() {
            self.view_mode.set(ViewMode::MapFocused);
        }
    }

    fn refresh_pins(&mut self) {
        let snapshot = self.store.read().list().to_vec();
        self.pins.set(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_defaults_to_map() {
        assert_eq!(ViewMode::default(), ViewMode::MapFocused);
    }

    #[test]
    fn test_view_mode_toggles_both_ways() {
        assert_eq!(ViewMode::MapFocused.toggled(), ViewMode::ListFocused);
        assert_eq!(ViewMode::ListFocused.toggled(), ViewMode::MapFocused);
        assert!(ViewMode::ListFocused.is_list());
        assert!(!ViewMode::MapFocused.is_list());
    }
}
