//! Identifiers and a simple allocator for timeline tracks.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TrackId(pub u32);

/// Monotonic allocator for TrackId. Ids are never reused within a timeline,
/// so a removed track's id cannot alias a later one.
#[derive(Default, Debug, Clone)]
pub struct IdAllocator {
    next_track: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_track(&mut self) -> TrackId {
        let id = TrackId(self.next_track);
        self.next_track = self.next_track.wrapping_add(1);
        id
    }
}
