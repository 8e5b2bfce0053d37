//! Map surface bridge
//!
//! The map itself is Leaflet running inside the webview. This module is the
//! port between Rust state and that surface: a long-lived eval channel
//! (owned by `MapPanel`) delivers click events as `[lat, lng]` pairs, and
//! fire-and-forget evals push commands back through the `window.__pinmap`
//! helpers the bootstrap script installs.

use dioxus::document;
use serde::Serialize;

use pinmap_core::{DraftPin, Pin};

const FLY_ZOOM: u32 = 15;
const FLY_DURATION_SECS: f64 = 1.5;

/// Bootstraps Leaflet in the `#map` div, forwards clicks over the eval
/// channel, and installs the command helpers. The Leaflet script itself is
/// injected by the root component; we poll until it has loaded.
pub const MAP_BOOTSTRAP_JS: &str = r#"
    while (!window.L) {
        await new Promise((resolve) => setTimeout(resolve, 50));
    }
    const container = document.getElementById('map');
    const map = L.map(container).setView([12.9716, 77.5946], 11);
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
        attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
    }).addTo(map);

    const icon = L.icon({
        iconUrl: 'https://cdn0.iconfinder.com/data/icons/small-n-flat/24/678111-map-marker-512.png',
        iconSize: [32, 32],
        iconAnchor: [16, 32],
        popupAnchor: [0, -32]
    });

    const markerLayer = L.layerGroup().addTo(map);

    // The pane is hidden/resized by the narrow-viewport layout.
    new ResizeObserver(() => map.invalidateSize()).observe(container);

    map.on('click', (event) => {
        dioxus.send([event.latlng.lat, event.latlng.lng]);
    });

    window.__pinmap = {
        setMarkers(markers) {
            markerLayer.clearLayers();
            for (const m of markers) {
                const marker = L.marker([m.lat, m.lng], { icon });
                if (!m.draft) {
                    const body = document.createElement('div');
                    const title = document.createElement('p');
                    title.style.fontWeight = '600';
                    title.style.margin = '0';
                    title.textContent = m.title;
                    const subtitle = document.createElement('p');
                    subtitle.style.fontSize = '12px';
                    subtitle.style.margin = '4px 0 0 0';
                    subtitle.textContent = m.subtitle;
                    body.append(title, subtitle);
                    marker.bindPopup(body);
                }
                marker.addTo(markerLayer);
            }
        },
        flyTo(lat, lng, zoom, duration) {
            map.flyTo([lat, lng], zoom, { duration });
        }
    };

    // Ready signal; clicks follow as [lat, lng] pairs.
    dioxus.send(null);
"#;

/// One marker as the map surface sees it.
#[derive(Debug, Serialize)]
pub struct MapMarker {
    id: String,
    lat: f64,
    lng: f64,
    title: String,
    subtitle: String,
    draft: bool,
}

impl MapMarker {
    #[must_use]
    pub fn committed(pin: &Pin) -> Self {
        Self {
            id: pin.id.as_str(),
            lat: pin.lat,
            lng: pin.lng,
            title: pin.display_remark().to_string(),
            subtitle: pin.address.clone(),
            draft: false,
        }
    }

    #[must_use]
    pub fn draft(draft: &DraftPin) -> Self {
        Self {
            id: draft.id.as_str(),
            lat: draft.lat,
            lng: draft.lng,
            title: String::new(),
            subtitle: draft.address.clone(),
            draft: true,
        }
    }
}

/// Replace the rendered marker set.
pub fn sync_markers(markers: &[MapMarker]) {
    match serde_json::to_string(markers) {
        Ok(json) => {
            let _ = document::eval(&format!(
                "window.__pinmap && window.__pinmap.setMarkers({json});"
            ));
        }
        Err(error) => tracing::error!("Failed to serialize markers: {error}"),
    }
}

/// Animated center-and-zoom to a coordinate.
pub fn fly_to(lat: f64, lng: f64) {
    let _ = document::eval(&format!(
        "window.__pinmap && window.__pinmap.flyTo({lat}, {lng}, {FLY_ZOOM}, {FLY_DURATION_SECS});"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmap_core::models::PENDING_ADDRESS;

    #[test]
    fn test_committed_marker_uses_remark_fallback() {
        let pin = DraftPin::new(1.0, 2.0).into_pin();
        let marker = MapMarker::committed(&pin);
        assert_eq!(marker.title, "No remark");
        assert!(!marker.draft);
    }

    #[test]
    fn test_draft_marker_carries_pending_address() {
        let draft = DraftPin::new(1.0, 2.0);
        let marker = MapMarker::draft(&draft);
        assert!(marker.draft);
        assert_eq!(marker.subtitle, PENDING_ADDRESS);
    }
}
