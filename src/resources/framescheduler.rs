//! Tick scheduling for the compositor.
//!
//! The scheduler models a self-rescheduling "next animation frame" request.
//! At most one tick is ever pending: [`FrameScheduler::start`] cancels the
//! pending tick before issuing a new one, and firing a tick always consumes the
//! pending handle and issues exactly one replacement. It decides per fired tick
//! whether the scene should be drawn:
//!
//! 1. bitmaps still loading -> skip ([`TickOutcome::NotReady`])
//! 2. less than `min_frame_interval_ms` since the last accepted tick -> skip
//!    ([`TickOutcome::Throttled`])
//! 3. only every `frozen_frames`-th accepted tick draws
//!    ([`TickOutcome::Frozen`] otherwise)

use bevy_ecs::prelude::Resource;
use log::debug;

/// Identifier of a scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
}

/// What happened when a tick fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No tick was pending; the scheduler is stopped.
    Idle,
    /// A required bitmap has not finished loading.
    NotReady,
    /// Too soon after the previous accepted tick.
    Throttled,
    /// Accepted, but not a drawing tick under the scene throttle.
    Frozen,
    /// The frame must be composited.
    Draw,
}

#[derive(Resource, Debug, Clone)]
pub struct FrameScheduler {
    state: SchedulerState,
    pending: Option<TickHandle>,
    next_id: u64,
    last_timestamp: Option<f64>,
    tick_counter: u64,
    pub min_frame_interval_ms: f64,
    frozen_frames: u32,
}

impl FrameScheduler {
    pub fn new(min_frame_interval_ms: f64, frozen_frames: u32) -> Self {
        Self {
            state: SchedulerState::Idle,
            pending: None,
            next_id: 0,
            last_timestamp: None,
            tick_counter: 0,
            min_frame_interval_ms: min_frame_interval_ms.max(0.0),
            frozen_frames: frozen_frames.max(1),
        }
    }

    /// Cancel any pending tick and schedule a fresh one.
    pub fn start(&mut self) -> TickHandle {
        if let Some(old) = self.pending.take() {
            debug!("Cancelled pending tick {:?}", old);
        }
        self.state = SchedulerState::Running;
        self.schedule()
    }

    /// Cancel the pending tick and go idle.
    pub fn stop(&mut self) {
        if let Some(old) = self.pending.take() {
            debug!("Stopped; cancelled pending tick {:?}", old);
        }
        self.state = SchedulerState::Idle;
    }

    fn schedule(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn is_pending(&self, handle: TickHandle) -> bool {
        self.pending == Some(handle)
    }

    pub fn tick_counter(&self) -> u64 {
        self.tick_counter
    }

    pub fn frozen_frames(&self) -> u32 {
        self.frozen_frames
    }

    /// Fire the pending tick at `timestamp_ms`.
    ///
    /// Every outcome except [`TickOutcome::Idle`] leaves exactly one new tick
    /// pending.
    pub fn fire(&mut self, timestamp_ms: f64, assets_ready: bool) -> TickOutcome {
        if self.pending.take().is_none() {
            return TickOutcome::Idle;
        }
        self.schedule();

        if !assets_ready {
            return TickOutcome::NotReady;
        }

        if let Some(last) = self.last_timestamp {
            if timestamp_ms - last < self.min_frame_interval_ms {
                return TickOutcome::Throttled;
            }
        }
        self.last_timestamp = Some(timestamp_ms);

        self.tick_counter += 1;
        if self.tick_counter % self.frozen_frames as u64 != 0 {
            return TickOutcome::Frozen;
        }
        TickOutcome::Draw
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(16.0, 1)
    }
}
