//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod draft_editor;
mod map_panel;
mod pin_card;
mod pin_list;
mod search_bar;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use draft_editor::DraftEditor;
pub use map_panel::MapPanel;
pub use pin_card::PinCard;
pub use pin_list::PinList;
pub use search_bar::SearchBar;
