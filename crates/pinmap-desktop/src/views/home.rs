//! Home view - map surface plus the saved-pins sidebar
//!
//! Wide viewports show both panes side by side. Narrow viewports stack
//! them and let the view mode pick the dominant pane; the map pane stays
//! mounted (just collapsed) so the Leaflet instance survives toggling.

use dioxus::prelude::*;

use crate::components::{DraftEditor, MapPanel, PinList};
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let narrow = (state.narrow_viewport)();
    let mode = (state.view_mode)();

    let container_style = if narrow {
        "display: flex; flex-direction: column; height: 100%; width: 100%;"
    } else {
        "display: flex; height: 100%; width: 100%;"
    };

    let map_style = if narrow {
        if mode.is_list() {
            "position: relative; display: none;"
        } else {
            "position: relative; flex: 3; min-height: 0;"
        }
    } else {
        "position: relative; flex: 1;"
    };

    let list_style = if narrow {
        "flex: 1; min-height: 0;"
    } else {
        "width: 33%; min-width: 320px;"
    };

    rsx! {
        div {
            class: "home-container",
            style: container_style,

            div {
                class: "map-pane",
                style: map_style,

                MapPanel {}
                DraftEditor {}
            }

            div {
                class: "list-pane",
                style: list_style,

                PinList {}
            }
        }
    }
}
