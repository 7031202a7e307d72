//! Bounce Rects - axis-aligned rectangles bouncing inside a fixed viewport
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall/pair collisions, retirement)
//! - `scene`: Initial rectangle layouts and their validation
//! - `scheduler`: Fixed-timestep frame driver (tick catch-up, render, reschedule)
//! - `renderer`: Drawing surface abstraction and the draw pass
//! - `platform`: Frame request/cancel primitives (browser and simulated clock)
//! - `settings`: Tunables persisted as JSON

pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use error::SceneError;
pub use renderer::{Color, Surface};
pub use scene::Scene;
pub use scheduler::{FramePhase, FrameReport, Scheduler};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds
    pub const TICK_INTERVAL_MS: f64 = 15.0;
    /// Collisions a rectangle survives before it is retired
    pub const COLLISION_LIMIT: u32 = 3;

    /// Viewport used when no window size is available (headless runs)
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

    /// Frame period of the simulated clock (~60 Hz)
    pub const SIMULATED_FRAME_MS: f64 = 1000.0 / 60.0;
}
