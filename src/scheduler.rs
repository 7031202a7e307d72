//! Fixed-timestep frame scheduler
//!
//! Each frame callback converts elapsed wall-clock time into a whole number
//! of simulation ticks, runs all of them, draws once and asks the host for
//! the next frame. Simulation speed therefore does not depend on the display
//! refresh rate. After a long stall the full backlog of ticks runs in one
//! frame; it is never compressed.

use crate::error::SceneError;
use crate::platform::FrameDriver;
use crate::renderer::{self, Color, Surface};
use crate::settings::Settings;
use crate::sim::{SimState, TickReport, tick};

/// Lifecycle of a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Built, no frame requested yet
    Idle,
    /// Frames are being requested and processed
    Running,
    /// Terminal: no further ticks or draws
    Stopped,
}

/// Summary of one processed frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Timestamp the frame was delivered with
    pub timestamp: f64,
    /// Simulation ticks run during this frame
    pub ticks: u64,
    /// Rectangles drawn
    pub rects_drawn: usize,
    /// Combined collision activity of all ticks
    pub activity: TickReport,
}

/// Number of whole ticks due at `timestamp`.
///
/// Zero until `timestamp` is strictly past the next tick boundary.
pub fn ticks_due(timestamp: f64, last_tick_time: f64, tick_interval_ms: f64) -> u64 {
    if timestamp > last_tick_time + tick_interval_ms {
        ((timestamp - last_tick_time) / tick_interval_ms).floor() as u64
    } else {
        0
    }
}

/// Drives a `SimState` from host frame callbacks.
///
/// `H` is the host's frame handle type (see `FrameDriver::Handle`).
#[derive(Debug, Clone)]
pub struct Scheduler<H> {
    sim: SimState,
    tick_interval_ms: f64,
    fill_color: Color,
    last_tick_time: f64,
    last_render_time: f64,
    phase: FramePhase,
    pending: Option<H>,
    frames: u64,
}

impl<H: Copy + PartialEq + std::fmt::Debug> Scheduler<H> {
    pub fn new(
        sim: SimState,
        tick_interval_ms: f64,
        fill_color: Color,
    ) -> Result<Self, SceneError> {
        if !(tick_interval_ms > 0.0 && tick_interval_ms.is_finite()) {
            return Err(SceneError::InvalidTickInterval(tick_interval_ms));
        }
        Ok(Self {
            sim,
            tick_interval_ms,
            fill_color,
            last_tick_time: 0.0,
            last_render_time: 0.0,
            phase: FramePhase::Idle,
            pending: None,
            frames: 0,
        })
    }

    pub fn from_settings(sim: SimState, settings: &Settings) -> Result<Self, SceneError> {
        Self::new(sim, settings.tick_interval_ms, settings.fill_color)
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    pub fn last_tick_time(&self) -> f64 {
        self.last_tick_time
    }

    pub fn last_render_time(&self) -> f64 {
        self.last_render_time
    }

    /// Frames processed since start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether a frame request is outstanding
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin the loop at time `now` and request the first frame.
    ///
    /// Returns `false` (and does nothing) unless the scheduler is idle.
    pub fn start<D>(&mut self, now: f64, driver: &mut D) -> bool
    where
        D: FrameDriver<Handle = H>,
    {
        if self.phase != FramePhase::Idle {
            return false;
        }
        self.last_tick_time = now;
        self.last_render_time = now;
        self.phase = FramePhase::Running;
        self.pending = Some(driver.request_frame());

        log::info!(
            "Scheduler started at {:.1} ms with {} rects, tick every {} ms",
            now,
            self.sim.len(),
            self.tick_interval_ms
        );
        true
    }

    /// Handle one frame callback delivered at `timestamp`.
    ///
    /// Runs every due tick, draws once, then requests the next frame.
    /// Returns `None` without touching anything unless running.
    pub fn on_frame<D, S>(
        &mut self,
        timestamp: f64,
        surface: &mut S,
        driver: &mut D,
    ) -> Option<FrameReport>
    where
        D: FrameDriver<Handle = H>,
        S: Surface + ?Sized,
    {
        if self.phase != FramePhase::Running {
            return None;
        }
        // This callback is the one that was pending
        self.pending = None;

        let ticks = ticks_due(timestamp, self.last_tick_time, self.tick_interval_ms);
        if ticks > 10 {
            log::debug!(
                "Catching up {} ticks after {:.1} ms gap",
                ticks,
                timestamp - self.last_tick_time
            );
        }

        let mut activity = TickReport::default();
        for _ in 0..ticks {
            self.last_tick_time += self.tick_interval_ms;
            activity.merge(tick(&mut self.sim));
        }

        let rects_drawn = renderer::draw(surface, &self.sim, self.fill_color);
        self.last_render_time = timestamp;
        self.frames += 1;

        self.pending = Some(driver.request_frame());

        let report = FrameReport {
            timestamp,
            ticks,
            rects_drawn,
            activity,
        };
        log::trace!("Frame {}: {:?}", self.frames, report);
        Some(report)
    }

    /// Stop the loop: cancel the pending frame and refuse further work.
    ///
    /// Safe to call in any phase and any number of times.
    pub fn stop<D>(&mut self, driver: &mut D)
    where
        D: FrameDriver<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            driver.cancel_frame(handle);
        }
        if self.phase != FramePhase::Stopped {
            log::info!(
                "Scheduler stopped after {} frames, {} ticks, {} rects remaining",
                self.frames,
                self.sim.time_ticks,
                self.sim.len()
            );
            self.phase = FramePhase::Stopped;
        }
    }
}
