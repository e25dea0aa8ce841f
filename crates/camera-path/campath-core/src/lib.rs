//! Campath Core (engine-agnostic)
//!
//! Keyframe tracks for a cinematic camera-path editor. A track stores keyframes
//! of one kind at integer ticks; the sampler turns any (possibly fractional)
//! tick into a single [`Change`] by blending the surrounding keyframes with
//! the spline family their interpolation types select. The [`Timeline`]
//! samples every track at once and hands the changes to a host
//! [`KeyframeHandler`].

pub mod change;
pub mod config;
pub mod error;
pub mod handler;
pub mod ids;
pub mod interpolation;
pub mod keyframe;
pub mod math;
pub mod outputs;
pub mod realtime;
pub mod sampling;
pub mod spline;
pub mod stored;
pub mod timeline;
pub mod track;

pub use change::{
    interpolate_safe, look_normal, CameraOrbitChange, CameraPositionChange, CameraShakeChange,
    Change, ChangeKind,
};
pub use config::Config;
pub use error::{CampathError, Result};
pub use handler::{KeyframeHandler, RecordingHandler};
pub use ids::TrackId;
pub use interpolation::{InterpolationType, SidedInterpolationType, SplineContext};
pub use keyframe::{
    CameraKeyframe, CameraOrbitKeyframe, CameraOverrides, CameraShakeKeyframe, FovKeyframe,
    Keyframe, KeyframeKind, KeyframePayload, KeyframeValue, TimeOfDayKeyframe, TimelapseKeyframe,
};
pub use math::Vector3;
pub use outputs::{CoreEvent, Outputs, TrackChange};
pub use realtime::{RealTimeMapping, SpeedRampMapping};
pub use sampling::{sample_track, SampleOutcome, Sampler, TIMELAPSE_WARNING};
pub use spline::{FivePointFamily, FourPointFamily};
pub use stored::{parse_timeline_json, parse_timeline_json_lenient, to_json};
pub use timeline::Timeline;
pub use track::KeyframeTrack;
