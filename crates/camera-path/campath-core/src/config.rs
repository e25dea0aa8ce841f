//! Core configuration for campath-core.

use serde::{Deserialize, Serialize};

/// Sampler tuning. Keep this minimal; every field has a serde default so older
/// documents keep loading when fields are added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nominal ticks per second. A timelapse segment that compresses `n` target
    /// ticks into `m` timeline ticks plays at `m / n * base_tickrate`.
    pub base_tickrate: f64,
    /// Segment durations at or below this are treated as 1 when computing the
    /// blend amount.
    pub segment_epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_tickrate: 20.0,
            segment_epsilon: 1e-6,
        }
    }
}
