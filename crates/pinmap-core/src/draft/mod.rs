//! Draft-pin workflow
//!
//! Holds the single in-progress pin between "map clicked" and "pin saved".
//! A new click unconditionally supersedes the current draft. Geocode
//! resolutions are fire-and-forget, so each is tagged with the id of the
//! draft it was issued for; [`DraftWorkflow::apply_address`] drops results
//! whose draft is no longer current.

use crate::models::{DraftPin, PinId};

/// Two-state holder: Idle (no draft) or Editing (exactly one draft).
#[derive(Debug, Default)]
pub struct DraftWorkflow {
    current: Option<DraftPin>,
}

impl DraftWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh draft at the clicked coordinate, discarding any draft
    /// already being edited. Returns the new draft's id so the caller can
    /// tag the geocode request it issues for it.
    pub fn begin(&mut self, lat: f64, lng: f64) -> PinId {
        if let Some(superseded) = &self.current {
            tracing::debug!("Superseding unsaved draft {}", superseded.id);
        }
        let draft = DraftPin::new(lat, lng);
        let id = draft.id;
        self.current = Some(draft);
        id
    }

    /// Update the remark of the draft being edited; ignored when Idle.
    pub fn set_remark(&mut self, remark: impl Into<String>) {
        if let Some(draft) = &mut self.current {
            draft.set_remark(remark);
        }
    }

    /// Apply a resolved (or fallback) address to the draft it was issued
    /// for. Returns false, leaving the state untouched, when that draft is
    /// no longer current, whether superseded or already committed.
    pub fn apply_address(&mut self, id: PinId, address: impl Into<String>) -> bool {
        match &mut self.current {
            Some(draft) if draft.id == id => {
                draft.address = address.into();
                true
            }
            _ => {
                tracing::debug!("Dropping stale geocode result for {id}");
                false
            }
        }
    }

    /// The save path: hand the draft to the caller (who commits it to the
    /// store) and return to Idle.
    pub fn take(&mut self) -> Option<DraftPin> {
        self.current.take()
    }

    #[must_use]
    pub fn current(&self) -> Option<&DraftPin> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.current.is_some()
    }
}
