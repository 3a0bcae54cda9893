use serde::{Deserialize, Serialize};

use crate::orbit::particle::{Particle, ParticleSample, sample_all_into};
use crate::orbit::ring::{INNER_RING_COUNT, INNER_RING_SPEED, OUTER_RING_COUNT, inner_ring, outer_ring};
use crate::orbit::state::{OrbState, StateTable};

/// Whether the per-frame orbit loop is armed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum OrbitPhase {
    Stopped,
    Running { started_at: f64 },
}

/// Samples produced by one tick.
#[derive(Clone, Copy, Debug)]
pub struct OrbitFrame<'a> {
    pub state: OrbState,
    pub elapsed_secs: f64,
    pub outer: &'a [ParticleSample],
    /// Empty unless the state shows the inner ring.
    pub inner: &'a [ParticleSample],
}

/// Host-side driver for one orb widget.
///
/// Owns the particle rings, the state table and the `Running`/`Stopped` phase. Time is always
/// supplied by the caller as seconds on a monotonic clock; the animation never reads a clock.
/// A single value holds at most one armed run, so re-arming replaces the previous start time
/// instead of stacking loops.
#[derive(Clone, Debug)]
pub struct OrbitAnimation {
    outer: Vec<Particle>,
    inner: Vec<Particle>,
    table: StateTable,
    state: OrbState,
    phase: OrbitPhase,
    elapsed_secs: f64,
    outer_samples: Vec<ParticleSample>,
    inner_samples: Vec<ParticleSample>,
}

impl OrbitAnimation {
    /// A stopped animation for an orb of `orb_px` pixels, in `state`.
    pub fn new(orb_px: f64, state: OrbState, table: StateTable) -> Self {
        Self {
            outer: outer_ring(orb_px, OUTER_RING_COUNT),
            inner: inner_ring(orb_px, INNER_RING_COUNT),
            table,
            state,
            phase: OrbitPhase::Stopped,
            elapsed_secs: 0.0,
            outer_samples: Vec::new(),
            inner_samples: Vec::new(),
        }
    }

    pub fn state(&self) -> OrbState {
        self.state
    }

    pub fn phase(&self) -> OrbitPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, OrbitPhase::Running { .. })
    }

    pub fn outer_particles(&self) -> &[Particle] {
        &self.outer
    }

    pub fn inner_particles(&self) -> &[Particle] {
        &self.inner
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Widget mount: arm the loop if the current state is active.
    pub fn start(&mut self, now: f64) {
        self.rearm(now);
    }

    /// Switch state. Entering an active state (re)arms the loop at `now`; an inactive state
    /// stops it. Setting the current state again is a no-op.
    pub fn set_state(&mut self, state: OrbState, now: f64) {
        if state == self.state && self.is_running() {
            return;
        }
        tracing::debug!(from = %self.state, to = %state, "orb state change");
        self.state = state;
        self.rearm(now);
    }

    /// Rebuild both rings for a new pixel size; a running loop restarts at `now`.
    pub fn resize(&mut self, orb_px: f64, now: f64) {
        self.outer = outer_ring(orb_px, OUTER_RING_COUNT);
        self.inner = inner_ring(orb_px, INNER_RING_COUNT);
        if self.is_running() {
            self.rearm(now);
        }
    }

    /// Widget teardown.
    pub fn stop(&mut self) {
        if self.is_running() {
            tracing::debug!(state = %self.state, "orbit loop stopped");
        }
        self.phase = OrbitPhase::Stopped;
        self.elapsed_secs = 0.0;
        self.outer_samples.clear();
        self.inner_samples.clear();
    }

    fn rearm(&mut self, now: f64) {
        if self.state.animates_particles() {
            self.phase = OrbitPhase::Running { started_at: now };
            tracing::debug!(state = %self.state, started_at = now, "orbit loop armed");
        } else {
            self.stop();
        }
    }

    /// Advance to `now` and return the fresh samples, or `None` while stopped.
    ///
    /// Elapsed time is floored at zero if `now` precedes the start time.
    pub fn tick(&mut self, now: f64) -> Option<OrbitFrame<'_>> {
        let OrbitPhase::Running { started_at } = self.phase else {
            return None;
        };
        let elapsed = (now - started_at).max(0.0);
        self.elapsed_secs = elapsed;

        let speed = self.table.orbit_angular_speed(self.state);
        sample_all_into(&self.outer, elapsed, speed, &mut self.outer_samples);
        if self.state.shows_inner_ring() {
            sample_all_into(&self.inner, elapsed, INNER_RING_SPEED, &mut self.inner_samples);
        } else {
            self.inner_samples.clear();
        }
        tracing::trace!(elapsed, speed, "orbit tick");

        Some(self.latest())
    }

    /// The most recent samples (empty before the first tick or after a stop).
    pub fn latest(&self) -> OrbitFrame<'_> {
        OrbitFrame {
            state: self.state,
            elapsed_secs: self.elapsed_secs,
            outer: &self.outer_samples,
            inner: &self.inner_samples,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orbit/animation.rs"]
mod tests;
