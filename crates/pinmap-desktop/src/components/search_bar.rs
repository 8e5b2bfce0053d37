//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::PALETTE;

/// Search input filtering the pin list by remark or address
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = PALETTE;

    rsx! {
        input {
            r#type: "text",
            placeholder: "Search pins...",
            value: "{state.search_query}",
            oninput: move |evt| {
                state.search_query.set(evt.value());
            },
            style: "
                width: 100%;
                box-sizing: border-box;
                padding: 8px 12px;
                margin-bottom: 16px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                font-size: 14px;
                background: {colors.surface_raised};
                color: {colors.text_primary};
                outline: none;
            ",
        }
    }
}
