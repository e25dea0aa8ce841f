//! Output contracts from the timeline.
//!
//! Outputs carry the changes sampled this tick, keyed by track, and a separate
//! list of transient events for the host to surface.

use serde::{Deserialize, Serialize};

use crate::change::Change;
use crate::ids::TrackId;

/// One sampled change for a given track this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackChange {
    pub track: TrackId,
    pub change: Change,
}

/// Discrete signals emitted while sampling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreEvent {
    /// Short user-facing message, e.g. for an overlay.
    Warning { track: TrackId, message: String },
}

/// Outputs returned by Timeline::update().
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<TrackChange>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: TrackChange) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
