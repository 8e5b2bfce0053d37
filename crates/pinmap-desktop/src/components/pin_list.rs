//! Saved-pins sidebar

use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant, PinCard, SearchBar};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Sidebar panel: header, search bar, and the scrollable pin list.
#[component]
pub fn PinList() -> Element {
    let mut state = use_context::<AppState>();
    let colors = PALETTE;
    let filtered = state.filtered_pins();
    let narrow = (state.narrow_viewport)();
    let mode = (state.view_mode)();
    let has_pins = !(state.pins)().is_empty();

    rsx! {
        div {
            class: "pin-list",
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                box-sizing: border-box;
                padding: 16px;
                background: {colors.surface};
                border-left: 1px solid {colors.border};
            ",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h2 {
                    style: "margin: 0; font-size: 22px; color: {colors.text_primary};",
                    "Saved Pins"
                }
                if narrow {
                    Button {
                        variant: ButtonVariant::Subtle,
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            let next = (state.view_mode)().toggled();
                            state.view_mode.set(next);
                        },
                        if mode.is_list() { "Map" } else { "List" }
                    }
                }
            }

            SearchBar {}

            div {
                class: "pin-scroll",
                style: "flex: 1; overflow-y: auto; min-height: 0;",

                if filtered.is_empty() {
                    div {
                        style: "padding: 20px; text-align: center; color: {colors.text_muted};",
                        if has_pins { "No matching pins" } else { "No pins yet" }
                    }
                } else {
                    for pin in filtered {
                        {
                            let pin_id = pin.id;
                            let (lat, lng) = (pin.lat, pin.lng);

                            rsx! {
                                PinCard {
                                    key: "{pin_id}",
                                    pin: pin.clone(),
                                    onselect: move |_| state.select_pin(lat, lng),
                                    ondelete: move |_| state.delete_pin(pin_id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
