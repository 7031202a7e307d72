//! Platform abstraction layer
//!
//! The scheduler needs exactly two primitives from its host: "call me again
//! on the next frame" and "forget that request". The browser provides them
//! through `requestAnimationFrame`; headless runs use a simulated clock.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AnimationFrames;

use crate::consts::SIMULATED_FRAME_MS;

/// Host timing source that delivers frame callbacks
pub trait FrameDriver {
    /// Opaque token identifying one pending request
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Ask for the next frame callback
    fn request_frame(&mut self) -> Self::Handle;

    /// Cancel a pending request; cancelling a handle twice is harmless
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Deterministic frame source for headless runs and tests.
///
/// Nothing calls back on its own: the owner polls `next_frame()` and hands the
/// timestamp to the scheduler, which mirrors how a browser would have invoked
/// the callback.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now: f64,
    frame_ms: f64,
    next_handle: u32,
    pending: Option<u32>,
    requested: u32,
    cancelled: u32,
}

impl SimulatedClock {
    pub fn new(start: f64, frame_ms: f64) -> Self {
        Self {
            now: start,
            frame_ms,
            next_handle: 1,
            pending: None,
            requested: 0,
            cancelled: 0,
        }
    }

    /// Current time in milliseconds
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Jump the clock forward without delivering a frame (simulates a stall)
    pub fn stall(&mut self, ms: f64) {
        self.now += ms;
    }

    /// Consume the pending request and return its timestamp, one frame
    /// period later. `None` when nothing is pending.
    pub fn next_frame(&mut self) -> Option<f64> {
        self.pending.take()?;
        self.now += self.frame_ms;
        Some(self.now)
    }

    /// Whether a frame has been requested and not yet delivered or cancelled
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total requests made so far
    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Total requests cancelled while still pending
    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::new(0.0, SIMULATED_FRAME_MS)
    }
}

impl FrameDriver for SimulatedClock {
    type Handle = u32;

    fn request_frame(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.pending = Some(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_deliver() {
        let mut clock = SimulatedClock::new(100.0, 10.0);
        assert_eq!(clock.next_frame(), None);

        let h = clock.request_frame();
        assert!(clock.has_pending());
        assert_eq!(clock.next_frame(), Some(110.0));
        assert!(!clock.has_pending());

        // Delivered handles can no longer be cancelled
        clock.cancel_frame(h);
        assert_eq!(clock.cancelled(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut clock = SimulatedClock::default();
        let h = clock.request_frame();
        clock.cancel_frame(h);
        clock.cancel_frame(h);
        assert_eq!(clock.cancelled(), 1);
        assert_eq!(clock.next_frame(), None);
    }

    #[test]
    fn test_stall_moves_time() {
        let mut clock = SimulatedClock::new(0.0, 16.0);
        clock.stall(500.0);
        clock.request_frame();
        assert_eq!(clock.next_frame(), Some(516.0));
        assert_eq!(clock.requested(), 1);
    }
}
