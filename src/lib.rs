//! Procedural motion engine behind the Dressense landing page.
//!
//! Two independent numeric pieces, both pure functions of their inputs:
//!
//! 1. **Curve interpolation**: a uniform Catmull-Rom spline through a [`ControlPath`] is sampled
//!    once into a [`Keyframe`] sequence that drives the one-shot orb entrance
//!    ([`EntranceTimeline`]).
//! 2. **Orbit sampling**: every frame, each decorative [`Particle`] around the agent orb is mapped
//!    to a position, scale and opacity from elapsed time and an angular speed
//!    ([`sample_particle`], [`sample_all`]).
//!
//! Around them sit the host-side pieces the widgets need: per-state configuration
//! ([`StateTable`]), the `Running`/`Stopped` orbit loop ([`OrbitAnimation`], [`OrbitTicker`]) and
//! the pointer interaction models of the chat input and image viewer.
//!
//! The engine never reads a clock: callers pass elapsed seconds in, which keeps every sampler
//! deterministic and testable with synthetic time.
#![forbid(unsafe_code)]

mod curve;
mod foundation;
mod interact;
mod orbit;

pub use curve::catmull_rom::{ControlPath, ControlPoint, PathSample, catmull_rom, interpolate};
pub use curve::ease::Ease;
pub use curve::keyframes::{
    Keyframe, KeyframeIter, KeyframeShaping, KeyframeTracks, generate_keyframe_sequence,
    generate_keyframe_sequence_with,
};
pub use curve::timeline::{EntranceTimeline, Lerp};
pub use foundation::error::{MotionError, MotionResult};
pub use interact::haptics::{HapticPattern, HapticSink, haptic};
pub use interact::input::{ChatInput, InputKey};
pub use interact::magnetic::{MagneticField, MagneticFollower, glow_opacity};
pub use interact::pan_zoom::{
    DOUBLE_CLICK_SCALE, MAX_SCALE, MIN_SCALE, PanZoom, ViewTransform, ZOOM_STEP,
};
pub use interact::spring::SpringParams;
pub use orbit::animation::{OrbitAnimation, OrbitFrame, OrbitPhase};
pub use orbit::particle::{
    PULSE_RATE, PULSE_SCALE_MAX, PULSE_SCALE_MIN, Particle, ParticleSample, orbit_offset,
    sample_all, sample_all_into, sample_particle,
};
pub use orbit::ring::{
    INNER_RING_COUNT, INNER_RING_SPEED, OUTER_RING_COUNT, OrbSize, inner_ring, outer_ring,
};
pub use orbit::state::{OrbState, StateConfig, StateTable};
pub use orbit::ticker::{OrbitSnapshot, OrbitTicker, TickerOpts};

pub use kurbo::{Point, Rect, Vec2};
