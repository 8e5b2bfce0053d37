//! Pin model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Placeholder address shown while a reverse-geocode request is in flight.
///
/// Display-only interim state; it is never re-resolved once a pin commits.
pub const PENDING_ADDRESS: &str = "Fetching address...";

/// A unique identifier for a pin, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId(Uuid);

impl PinId {
    /// Create a new unique pin ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for PinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PinId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A committed map annotation: coordinate, resolved address, and remark.
///
/// All fields are frozen once the pin is committed; the address is whatever
/// was resolved (or still pending) at save time and is never re-resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Unique identifier
    pub id: PinId,
    /// Latitude, immutable after creation
    pub lat: f64,
    /// Longitude, immutable after creation
    pub lng: f64,
    /// Human-readable address resolved at creation time
    pub address: String,
    /// Free-text remark, frozen at commit
    pub remark: String,
}

impl Pin {
    /// Remark text for display; empty remarks render as "No remark"
    #[must_use]
    pub fn display_remark(&self) -> &str {
        if self.remark.trim().is_empty() {
            "No remark"
        } else {
            &self.remark
        }
    }
}

/// An unsaved, in-progress pin awaiting user confirmation.
///
/// Only the remark is user-editable; the address is updated in place when
/// the geocode resolution lands (or falls back).
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPin {
    pub id: PinId,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub remark: String,
}

impl DraftPin {
    /// Create a draft at the clicked coordinate, address pending resolution
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            id: PinId::new(),
            lat,
            lng,
            address: PENDING_ADDRESS.to_string(),
            remark: String::new(),
        }
    }

    /// Replace the remark text
    pub fn set_remark(&mut self, remark: impl Into<String>) {
        self.remark = remark.into();
    }

    /// Freeze this draft into a committed pin
    #[must_use]
    pub fn into_pin(self) -> Pin {
        Pin {
            id: self.id,
            lat: self.lat,
            lng: self.lng,
            address: self.address,
            remark: self.remark,
        }
    }
}
