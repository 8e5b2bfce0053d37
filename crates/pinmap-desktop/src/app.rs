//! Main application component

use dioxus::prelude::*;

use pinmap_core::draft::DraftWorkflow;
use pinmap_core::geocode::GeocodeClient;

use crate::services;
use crate::state::{AppState, ViewMode};
use crate::theme::PALETTE;
use crate::views::Home;

/// Windows below this width collapse to a single pane.
const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Reports the window width on startup and on every resize.
const VIEWPORT_WATCH_JS: &str = r#"
    const report = () => dioxus.send(window.innerWidth);
    window.addEventListener('resize', report);
    report();
"#;

/// Root application component
#[component]
pub fn App() -> Element {
    // Hydrate the store synchronously; it is one small JSON file.
    let store = use_signal(services::open_store);
    let pins = use_signal(move || store.peek().list().to_vec());
    let draft = use_signal(DraftWorkflow::new);
    let search_query = use_signal(String::new);
    let view_mode = use_signal(ViewMode::default);
    let mut narrow_viewport = use_signal(|| false);
    let geocoder = use_signal(|| match GeocodeClient::new() {
        Ok(client) => Some(client),
        Err(error) => {
            tracing::error!("Failed to build geocode client: {error}");
            None
        }
    });

    use_context_provider(|| AppState {
        pins,
        draft,
        search_query,
        view_mode,
        narrow_viewport,
        store,
        geocoder,
    });

    // Track viewport width for the narrow-layout policy.
    use_future(move || async move {
        let mut eval = document::eval(VIEWPORT_WATCH_JS);
        while let Ok(width) = eval.recv::<f64>().await {
            narrow_viewport.set(width < NARROW_VIEWPORT_PX);
        }
    });

    let colors = PALETTE;

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css",
        }
        document::Script { src: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" }

        div {
            class: "app-container",
            style: "
                height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
