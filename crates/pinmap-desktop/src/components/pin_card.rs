//! Pin card component

use dioxus::prelude::*;

use pinmap_core::Pin;

use super::{Button, ButtonSize, ButtonVariant};
use crate::theme::PALETTE;

/// A single saved pin rendered in the sidebar list.
#[component]
pub fn PinCard(
    pin: Pin,
    onselect: EventHandler<MouseEvent>,
    ondelete: EventHandler<MouseEvent>,
) -> Element {
    let colors = PALETTE;
    let remark = pin.display_remark().to_string();

    rsx! {
        div {
            class: "pin-card",
            style: "
                display: flex;
                align-items: flex-start;
                justify-content: space-between;
                margin-bottom: 12px;
                padding: 12px;
                border-radius: 8px;
                background: {colors.surface_raised};
                border: 1px solid {colors.border};
            ",

            div {
                class: "pin-card-body",
                style: "display: flex; align-items: flex-start; flex: 1; cursor: pointer; min-width: 0;",
                onclick: move |evt| onselect.call(evt),

                span {
                    style: "margin-right: 10px; color: {colors.accent};",
                    "📍"
                }
                div {
                    style: "min-width: 0;",
                    p {
                        style: "font-weight: 600; margin: 0; color: {colors.text_primary};",
                        "{remark}"
                    }
                    p {
                        style: "
                            font-size: 12px;
                            margin: 4px 0 0 0;
                            color: {colors.text_muted};
                            overflow: hidden;
                            text-overflow: ellipsis;
                        ",
                        "{pin.address}"
                    }
                }
            }

            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                onclick: move |evt| ondelete.call(evt),
                "✕"
            }
        }
    }
}
