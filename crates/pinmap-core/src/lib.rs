//! pinmap-core - Core library for Pinmap
//!
//! This crate contains the pin model, the persistent pin store, the
//! reverse-geocoding adapter, the draft-pin workflow, and the search
//! filter shared by all Pinmap interfaces.

pub mod draft;
pub mod error;
pub mod geocode;
pub mod models;
pub mod search;
pub mod store;

pub use error::{Error, Result};
pub use models::{DraftPin, Pin, PinId};
