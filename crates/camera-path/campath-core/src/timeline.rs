//! Timeline: the set of tracks played together, sampled once per tick.

use crate::config::Config;
use crate::handler::KeyframeHandler;
use crate::ids::{IdAllocator, TrackId};
use crate::outputs::{CoreEvent, Outputs, TrackChange};
use crate::realtime::RealTimeMapping;
use crate::sampling::Sampler;
use crate::track::KeyframeTrack;

pub struct Timeline {
    tracks: Vec<(TrackId, KeyframeTrack)>,
    ids: IdAllocator,
    sampler: Sampler,
    mapping: Option<Box<dyn RealTimeMapping>>,
    outputs: Outputs,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("tracks", &self.tracks)
            .field("config", self.sampler.config())
            .field("has_mapping", &self.mapping.is_some())
            .finish()
    }
}

impl Timeline {
    pub fn new(cfg: Config) -> Self {
        Self {
            tracks: Vec::new(),
            ids: IdAllocator::new(),
            sampler: Sampler::new(cfg),
            mapping: None,
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        self.sampler.config()
    }

    /// Append a track; tracks are sampled in insertion order.
    pub fn add_track(&mut self, track: KeyframeTrack) -> TrackId {
        let id = self.ids.alloc_track();
        self.tracks.push((id, track));
        id
    }

    pub fn remove_track(&mut self, id: TrackId) -> Option<KeyframeTrack> {
        let idx = self.tracks.iter().position(|(tid, _)| *tid == id)?;
        Some(self.tracks.remove(idx).1)
    }

    pub fn track(&self, id: TrackId) -> Option<&KeyframeTrack> {
        self.tracks
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, track)| track)
    }

    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut KeyframeTrack> {
        self.tracks
            .iter_mut()
            .find(|(tid, _)| *tid == id)
            .map(|(_, track)| track)
    }

    pub fn tracks(&self) -> impl Iterator<Item = (TrackId, &KeyframeTrack)> + '_ {
        self.tracks.iter().map(|(id, track)| (*id, track))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Install (or clear) the speed ramp shared by every track.
    pub fn set_real_time_mapping(&mut self, mapping: Option<Box<dyn RealTimeMapping>>) {
        self.mapping = mapping;
    }

    /// Sample every enabled track at `tick`.
    ///
    /// The returned outputs are reused between calls and only valid until the
    /// next update.
    pub fn update(&mut self, tick: f64) -> &Outputs {
        self.outputs.clear();
        let mapping = self.mapping.as_deref();

        for (id, track) in &self.tracks {
            if !track.enabled {
                log::debug!("track {} disabled; skipping", id.0);
                continue;
            }
            let outcome = self.sampler.sample_with_warning(track, tick, mapping);
            if let Some(message) = outcome.warning {
                self.outputs.push_event(CoreEvent::Warning {
                    track: *id,
                    message,
                });
            }
            match outcome.change {
                Some(change) => self.outputs.push_change(TrackChange { track: *id, change }),
                None => log::debug!("track {} produced no change at tick {tick}", id.0),
            }
        }

        &self.outputs
    }

    /// Sample at `tick` and hand every change to `handler`.
    ///
    /// Returns how many changes the handler accepted.
    pub fn apply(&mut self, tick: f64, handler: &mut dyn KeyframeHandler) -> usize {
        self.update(tick)
            .changes
            .iter()
            .filter(|c| c.change.apply(handler))
            .count()
    }
}
