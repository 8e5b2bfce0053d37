//! Map panel component
//!
//! Hosts the `#map` div the Leaflet bootstrap attaches to, owns the click
//! event channel, and keeps the rendered marker set in sync with the pins
//! and the current draft.

use dioxus::prelude::*;

use crate::map::{self, MapMarker};
use crate::state::AppState;

#[component]
pub fn MapPanel() -> Element {
    let mut state = use_context::<AppState>();

    // One long-lived channel: bootstrap the map, then forward its events.
    // The first message is the ready signal (null); clicks follow as
    // [lat, lng] pairs.
    use_future(move || async move {
        let mut eval = document::eval(map::MAP_BOOTSTRAP_JS);
        loop {
            match eval.recv::<Option<(f64, f64)>>().await {
                Ok(Some((lat, lng))) => state.handle_map_click(lat, lng),
                Ok(None) => map::sync_markers(&current_markers(&state)),
                Err(error) => {
                    tracing::error!("Map event channel closed: {error}");
                    break;
                }
            }
        }
    });

    // Re-sync markers whenever the pins or the draft change.
    use_effect(move || {
        map::sync_markers(&current_markers(&state));
    });

    rsx! {
        div {
            id: "map",
            style: "height: 100%; width: 100%;",
        }
    }
}

/// The full marker set: every committed pin plus the draft, if any.
fn current_markers(state: &AppState) -> Vec<MapMarker> {
    let mut markers: Vec<MapMarker> = state.pins.read().iter().map(MapMarker::committed).collect();
    if let Some(draft) = state.draft.read().current() {
        markers.push(MapMarker::draft(draft));
    }
    markers
}
