//! Host boundary: where sampled changes land.
//!
//! The host implements [`KeyframeHandler`] for whatever owns scene state and
//! passes it to [`Change::apply`](crate::change::Change::apply) or
//! [`Timeline::apply`](crate::timeline::Timeline::apply). Every apply method
//! defaults to a no-op so a handler only implements what it supports.

use crate::change::ChangeKind;
use crate::math::Vector3;

pub trait KeyframeHandler {
    fn supports_change(&self, kind: ChangeKind) -> bool;

    fn apply_camera_position(&mut self, _position: Vector3, _yaw: f64, _pitch: f64, _roll: f64) {}

    fn apply_fov(&mut self, _fov: f64) {}

    fn apply_time_of_day(&mut self, _time_of_day: i64) {}

    fn apply_tickrate(&mut self, _tickrate: f64) {}

    fn apply_camera_shake(
        &mut self,
        _frequency_x: f64,
        _amplitude_x: f64,
        _frequency_y: f64,
        _amplitude_y: f64,
    ) {
    }
}

/// Handler that records every applied change; handy for previews and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingHandler {
    pub camera: Option<(Vector3, f64, f64, f64)>,
    pub fov: Option<f64>,
    pub time_of_day: Option<i64>,
    pub tickrate: Option<f64>,
    /// `(frequency_x, amplitude_x, frequency_y, amplitude_y)`
    pub camera_shake: Option<(f64, f64, f64, f64)>,
}

impl KeyframeHandler for RecordingHandler {
    fn supports_change(&self, _kind: ChangeKind) -> bool {
        true
    }

    fn apply_camera_position(&mut self, position: Vector3, yaw: f64, pitch: f64, roll: f64) {
        self.camera = Some((position, yaw, pitch, roll));
    }

    fn apply_fov(&mut self, fov: f64) {
        self.fov = Some(fov);
    }

    fn apply_time_of_day(&mut self, time_of_day: i64) {
        self.time_of_day = Some(time_of_day);
    }

    fn apply_tickrate(&mut self, tickrate: f64) {
        self.tickrate = Some(tickrate);
    }

    fn apply_camera_shake(
        &mut self,
        frequency_x: f64,
        amplitude_x: f64,
        frequency_y: f64,
        amplitude_y: f64,
    ) {
        self.camera_shake = Some((frequency_x, amplitude_x, frequency_y, amplitude_y));
    }
}
