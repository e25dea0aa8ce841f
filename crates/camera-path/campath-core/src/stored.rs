//! On-disk shape of tracks and timelines, with strict and lenient loading.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{CampathError, Result};
use crate::keyframe::{Keyframe, KeyframeKind};
use crate::timeline::Timeline;
use crate::track::KeyframeTrack;

/// Track as it appears in a saved timeline, before kind checks.
///
/// Keyframe ticks are object keys, so `serde_json` reads them from strings.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackDocument {
    pub keyframe_type: KeyframeKind,
    #[serde(default)]
    pub keyframes: BTreeMap<i32, Keyframe>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub custom_colour: u32,
}

fn default_enabled() -> bool {
    true
}

impl TrackDocument {
    /// Convert into a track. Strict mode rejects the first keyframe whose kind
    /// differs from the track; lenient mode drops it and carries on.
    pub fn into_track(self, lenient: bool) -> Result<KeyframeTrack> {
        let expected = self.keyframe_type;
        let mut keyframes = BTreeMap::new();
        for (tick, keyframe) in self.keyframes {
            let actual = keyframe.kind();
            if actual == expected {
                keyframes.insert(tick, keyframe);
            } else if lenient {
                log::warn!(
                    "dropping {} keyframe at tick {tick} from {} track",
                    actual.name(),
                    expected.name()
                );
            } else {
                return Err(CampathError::KeyframeKindMismatch { expected, actual });
            }
        }
        Ok(KeyframeTrack::from_parts(
            expected,
            keyframes,
            self.enabled,
            self.custom_name,
            self.custom_colour,
        ))
    }
}

impl TryFrom<TrackDocument> for KeyframeTrack {
    type Error = CampathError;

    fn try_from(doc: TrackDocument) -> Result<Self> {
        doc.into_track(false)
    }
}

#[derive(Debug, Deserialize)]
struct TimelineDocument {
    #[serde(default)]
    tracks: Vec<TrackDocument>,
}

#[derive(Serialize)]
struct TimelineDocumentRef<'a> {
    tracks: Vec<&'a KeyframeTrack>,
}

/// Parse a saved timeline. Any keyframe stored under a track of another kind
/// is an error.
pub fn parse_timeline_json(s: &str) -> Result<Timeline> {
    parse_with(s, false)
}

/// Parse a saved timeline, dropping keyframes whose kind does not match their
/// track (each drop is logged).
pub fn parse_timeline_json_lenient(s: &str) -> Result<Timeline> {
    parse_with(s, true)
}

fn parse_with(s: &str, lenient: bool) -> Result<Timeline> {
    let doc: TimelineDocument = serde_json::from_str(s)?;
    let mut timeline = Timeline::new(Config::default());
    for track in doc.tracks {
        timeline.add_track(track.into_track(lenient)?);
    }
    Ok(timeline)
}

/// Serialize tracks in timeline order. Track ids are not persisted; they are
/// reassigned in order on load.
pub fn to_json(timeline: &Timeline) -> Result<String> {
    let doc = TimelineDocumentRef {
        tracks: timeline.tracks().map(|(_, track)| track).collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
