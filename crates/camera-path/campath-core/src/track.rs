//! Ordered keyframe store for one animatable channel.
//!
//! A track holds keyframes of a single [`KeyframeKind`] keyed by unique
//! integer ticks. Editing operations keep both invariants; the sampler only
//! reads through the lookup helpers below.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::error::{CampathError, Result};
use crate::interpolation::InterpolationType;
use crate::keyframe::{Keyframe, KeyframeKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "crate::stored::TrackDocument")]
pub struct KeyframeTrack {
    keyframe_type: KeyframeKind,
    keyframes: BTreeMap<i32, Keyframe>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    pub custom_colour: u32,
}

impl KeyframeTrack {
    pub fn new(keyframe_type: KeyframeKind) -> Self {
        Self {
            keyframe_type,
            keyframes: BTreeMap::new(),
            enabled: true,
            custom_name: None,
            custom_colour: 0,
        }
    }

    /// Assemble a track whose keyframes were already checked against `keyframe_type`.
    pub(crate) fn from_parts(
        keyframe_type: KeyframeKind,
        keyframes: BTreeMap<i32, Keyframe>,
        enabled: bool,
        custom_name: Option<String>,
        custom_colour: u32,
    ) -> Self {
        Self {
            keyframe_type,
            keyframes,
            enabled,
            custom_name,
            custom_colour,
        }
    }

    #[inline]
    pub fn keyframe_type(&self) -> KeyframeKind {
        self.keyframe_type
    }

    #[inline]
    pub fn keyframes(&self) -> &BTreeMap<i32, Keyframe> {
        &self.keyframes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &Keyframe)> + '_ {
        self.keyframes.iter().map(|(t, k)| (*t, k))
    }

    pub fn get(&self, tick: i32) -> Option<&Keyframe> {
        self.keyframes.get(&tick)
    }

    /// Insert or replace the keyframe at `tick`, returning the replaced one.
    pub fn insert(&mut self, tick: i32, keyframe: Keyframe) -> Result<Option<Keyframe>> {
        self.check_kind(&keyframe)?;
        Ok(self.keyframes.insert(tick, keyframe))
    }

    pub fn remove(&mut self, tick: i32) -> Result<Keyframe> {
        self.keyframes
            .remove(&tick)
            .ok_or(CampathError::KeyframeNotFound { tick })
    }

    /// Move a keyframe to another tick. The destination must be free.
    pub fn move_keyframe(&mut self, from: i32, to: i32) -> Result<()> {
        if !self.keyframes.contains_key(&from) {
            return Err(CampathError::KeyframeNotFound { tick: from });
        }
        if from == to {
            return Ok(());
        }
        if self.keyframes.contains_key(&to) {
            return Err(CampathError::TickOccupied { tick: to });
        }
        if let Some(keyframe) = self.keyframes.remove(&from) {
            self.keyframes.insert(to, keyframe);
        }
        Ok(())
    }

    pub fn set_interpolation_type(
        &mut self,
        tick: i32,
        interpolation_type: InterpolationType,
    ) -> Result<()> {
        let keyframe = self
            .keyframes
            .get_mut(&tick)
            .ok_or(CampathError::KeyframeNotFound { tick })?;
        keyframe.interpolation_type = interpolation_type;
        Ok(())
    }

    /// Greatest entry with tick `<= tick`.
    pub fn floor_entry(&self, tick: i32) -> Option<(i32, &Keyframe)> {
        self.keyframes
            .range(..=tick)
            .next_back()
            .map(|(t, k)| (*t, k))
    }

    /// Least entry with tick `>= tick`.
    pub fn ceiling_entry(&self, tick: i32) -> Option<(i32, &Keyframe)> {
        self.keyframes.range(tick..).next().map(|(t, k)| (*t, k))
    }

    /// Greatest entry with tick `< tick`.
    pub fn lower_entry(&self, tick: i32) -> Option<(i32, &Keyframe)> {
        self.keyframes
            .range(..tick)
            .next_back()
            .map(|(t, k)| (*t, k))
    }

    /// Least entry with tick `> tick`.
    pub fn higher_entry(&self, tick: i32) -> Option<(i32, &Keyframe)> {
        self.keyframes
            .range((Bound::Excluded(tick), Bound::Unbounded))
            .next()
            .map(|(t, k)| (*t, k))
    }

    pub fn first(&self) -> Option<(i32, &Keyframe)> {
        self.keyframes.iter().next().map(|(t, k)| (*t, k))
    }

    pub fn last(&self) -> Option<(i32, &Keyframe)> {
        self.keyframes.iter().next_back().map(|(t, k)| (*t, k))
    }

    fn check_kind(&self, keyframe: &Keyframe) -> Result<()> {
        if keyframe.kind() == self.keyframe_type {
            Ok(())
        } else {
            Err(CampathError::KeyframeKindMismatch {
                expected: self.keyframe_type,
                actual: keyframe.kind(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframe::{FovKeyframe, TimeOfDayKeyframe};

    fn fov(v: f64) -> Keyframe {
        Keyframe::new(FovKeyframe { fov: v }, InterpolationType::default())
    }

    fn track() -> KeyframeTrack {
        let mut t = KeyframeTrack::new(KeyframeKind::Fov);
        for (tick, v) in [(0, 70.0), (20, 80.0), (40, 90.0)] {
            t.insert(tick, fov(v)).unwrap();
        }
        t
    }

    #[test]
    fn neighbour_lookups() {
        let t = track();
        assert_eq!(t.floor_entry(20).map(|e| e.0), Some(20));
        assert_eq!(t.floor_entry(19).map(|e| e.0), Some(0));
        assert_eq!(t.floor_entry(-1), None);
        assert_eq!(t.ceiling_entry(20).map(|e| e.0), Some(20));
        assert_eq!(t.ceiling_entry(21).map(|e| e.0), Some(40));
        assert_eq!(t.lower_entry(20).map(|e| e.0), Some(0));
        assert_eq!(t.higher_entry(20).map(|e| e.0), Some(40));
        assert_eq!(t.higher_entry(40), None);
        assert_eq!(t.first().map(|e| e.0), Some(0));
        assert_eq!(t.last().map(|e| e.0), Some(40));
    }

    #[test]
    fn rejects_other_kinds() {
        let mut t = track();
        let err = t
            .insert(5, Keyframe::new(TimeOfDayKeyframe { time: 1 }, InterpolationType::HOLD))
            .unwrap_err();
        assert_eq!(
            err,
            CampathError::KeyframeKindMismatch {
                expected: KeyframeKind::Fov,
                actual: KeyframeKind::TimeOfDay,
            }
        );
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn editing_keeps_ticks_unique() {
        let mut t = track();
        assert_eq!(t.move_keyframe(0, 20), Err(CampathError::TickOccupied { tick: 20 }));
        assert_eq!(t.move_keyframe(7, 8), Err(CampathError::KeyframeNotFound { tick: 7 }));
        t.move_keyframe(0, 10).unwrap();
        assert!(t.get(0).is_none());
        assert_eq!(t.get(10), Some(&fov(70.0)));

        let replaced = t.insert(10, fov(75.0)).unwrap();
        assert_eq!(replaced, Some(fov(70.0)));

        t.set_interpolation_type(10, InterpolationType::HOLD).unwrap();
        assert_eq!(t.get(10).map(|k| k.interpolation_type), Some(InterpolationType::HOLD));

        let removed = t.remove(10).unwrap();
        assert_eq!(removed.interpolation_type, InterpolationType::HOLD);
        assert_eq!(t.remove(10), Err(CampathError::KeyframeNotFound { tick: 10 }));
    }
}
