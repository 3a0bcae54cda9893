use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender, TrySendError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{MotionError, MotionResult};
use crate::orbit::animation::OrbitAnimation;
use crate::orbit::particle::ParticleSample;
use crate::orbit::state::OrbState;

/// Owned copy of one tick, sent to the render side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSnapshot {
    pub state: OrbState,
    pub elapsed_secs: f64,
    pub outer: Vec<ParticleSample>,
    pub inner: Vec<ParticleSample>,
}

enum Command {
    SetState(OrbState),
    Resize(f64),
    Stop,
}

#[derive(Clone, Copy, Debug)]
pub struct TickerOpts {
    pub frame_interval: Duration,
    /// Snapshots buffered for the consumer; further frames are dropped while it is full.
    pub channel_capacity: usize,
}

impl Default for TickerOpts {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_micros(16_667),
            channel_capacity: 4,
        }
    }
}

/// Background per-frame loop driving one [`OrbitAnimation`].
///
/// The animation is moved into the worker thread, so one animation has exactly one ticker.
/// While the animation is stopped the worker parks on its command queue and issues no ticks.
/// [`OrbitTicker::stop`] or dropping the ticker cancels the loop and joins the thread.
pub struct OrbitTicker {
    wakeups: Arc<AtomicU64>,
    commands: Sender<Command>,
    handle: Option<JoinHandle<OrbitAnimation>>,
}

impl OrbitTicker {
    /// Mount `animation` (arming it at time zero of the ticker clock) and start ticking.
    pub fn spawn(
        animation: OrbitAnimation,
        opts: TickerOpts,
    ) -> MotionResult<(Self, Receiver<OrbitSnapshot>)> {
        if opts.frame_interval.is_zero() {
            return Err(MotionError::validation("ticker frame_interval must be > 0"));
        }
        if opts.channel_capacity == 0 {
            return Err(MotionError::validation("ticker channel_capacity must be > 0"));
        }

        let wakeups = Arc::new(AtomicU64::new(0));
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (frame_tx, frame_rx) = mpsc::sync_channel(opts.channel_capacity);

        let worker_wakeups = Arc::clone(&wakeups);
        let handle = std::thread::Builder::new()
            .name("orbit-ticker".to_string())
            .spawn(move || {
                run(
                    animation,
                    opts.frame_interval,
                    &worker_wakeups,
                    &cmd_rx,
                    &frame_tx,
                )
            })
            .map_err(|e| MotionError::Other(anyhow!("spawn orbit ticker: {e}")))?;

        tracing::debug!(interval = ?opts.frame_interval, "orbit ticker spawned");
        Ok((
            Self {
                wakeups,
                commands: cmd_tx,
                handle: Some(handle),
            },
            frame_rx,
        ))
    }

    pub fn set_state(&self, state: OrbState) -> MotionResult<()> {
        self.send(Command::SetState(state))
    }

    pub fn resize(&self, orb_px: f64) -> MotionResult<()> {
        self.send(Command::Resize(orb_px))
    }

    /// Frame wakeups performed so far; flat while the animation is stopped.
    pub fn wakeups(&self) -> u64 {
        self.wakeups.load(Ordering::Relaxed)
    }

    fn send(&self, cmd: Command) -> MotionResult<()> {
        self.commands
            .send(cmd)
            .map_err(|_| MotionError::Other(anyhow!("orbit ticker is no longer running")))
    }

    /// Cancel the loop, join the worker and hand the (stopped) animation back.
    pub fn stop(mut self) -> MotionResult<OrbitAnimation> {
        // The worker may already be gone if the consumer hung up.
        let _ = self.commands.send(Command::Stop);
        let handle = self
            .handle
            .take()
            .ok_or_else(|| MotionError::Other(anyhow!("orbit ticker already joined")))?;
        handle
            .join()
            .map_err(|_| MotionError::Other(anyhow!("orbit ticker thread panicked")))
    }
}

impl Drop for OrbitTicker {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Stop);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(
    mut animation: OrbitAnimation,
    interval: Duration,
    wakeups: &AtomicU64,
    commands: &Receiver<Command>,
    frames: &SyncSender<OrbitSnapshot>,
) -> OrbitAnimation {
    let clock = Instant::now();
    animation.start(0.0);

    loop {
        let now = clock.elapsed().as_secs_f64();

        if !animation.is_running() {
            // Parked: nothing to draw until a command re-arms the loop.
            tracing::trace!("orbit ticker parked");
            match commands.recv() {
                Ok(cmd) => {
                    let now = clock.elapsed().as_secs_f64();
                    if !apply(&mut animation, cmd, now) {
                        break;
                    }
                }
                Err(_) => break,
            }
            continue;
        }

        wakeups.fetch_add(1, Ordering::Relaxed);
        if let Some(frame) = animation.tick(now) {
            let snapshot = OrbitSnapshot {
                state: frame.state,
                elapsed_secs: frame.elapsed_secs,
                outer: frame.outer.to_vec(),
                inner: frame.inner.to_vec(),
            };
            match frames.try_send(snapshot) {
                Ok(()) | Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => {
                    tracing::debug!("orbit consumer gone, stopping ticker");
                    break;
                }
            }
        }

        // Sleep until the next frame, waking early for commands.
        let deadline = Instant::now() + interval;
        let mut alive = true;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match commands.recv_timeout(remaining) {
                Ok(cmd) => {
                    let now = clock.elapsed().as_secs_f64();
                    if !apply(&mut animation, cmd, now) {
                        alive = false;
                        break;
                    }
                    if !animation.is_running() {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    alive = false;
                    break;
                }
            }
        }
        if !alive {
            break;
        }
    }

    animation.stop();
    animation
}

/// Apply one command; `false` means the loop should exit.
fn apply(animation: &mut OrbitAnimation, cmd: Command, now: f64) -> bool {
    match cmd {
        Command::SetState(state) => animation.set_state(state, now),
        Command::Resize(px) => animation.resize(px, now),
        Command::Stop => return false,
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/orbit/ticker.rs"]
mod tests;
