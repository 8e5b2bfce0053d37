//! Draft pin editor overlay
//!
//! Shown over the map while a draft is being edited. The address line
//! tracks the geocode resolution in place; only the remark is editable.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::PALETTE;

#[component]
pub fn DraftEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = PALETTE;

    let draft = state.draft.read().current().cloned();
    let Some(draft) = draft else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "draft-editor",
            // Above the Leaflet panes and controls.
            style: "
                position: absolute;
                top: 16px;
                right: 16px;
                z-index: 1100;
                width: 280px;
                box-sizing: border-box;
                padding: 12px;
                border-radius: 8px;
                background: {colors.surface};
                border: 1px solid {colors.border};
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
            ",

            textarea {
                value: "{draft.remark}",
                placeholder: "Enter your remark",
                rows: "3",
                oninput: move |evt| {
                    state.draft.write().set_remark(evt.value());
                },
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    padding: 8px;
                    margin-bottom: 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.surface_raised};
                    color: {colors.text_primary};
                    resize: vertical;
                    outline: none;
                ",
            }

            p {
                style: "font-size: 12px; color: {colors.text_muted}; margin: 0 0 8px 0;",
                strong { "Address: " }
                "{draft.address}"
            }

            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| state.save_draft(),
                "Save Pin"
            }
        }
    }
}
