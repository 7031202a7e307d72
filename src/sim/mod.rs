//! Deterministic simulation module
//!
//! All rectangle logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::is_colliding;
pub use rect::Rectangle;
pub use state::SimState;
pub use tick::{TickReport, tick};
