//! Data models for Pinmap

mod pin;

pub use pin::{DraftPin, Pin, PinId, PENDING_ADDRESS};
