//! Initial rectangle layouts
//!
//! A `Scene` is the untrusted description of a run's starting rectangles.
//! Validation happens once, when it is turned into a `SimState`; after that
//! the simulation never has to check its inputs again.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::sim::{Rectangle, SimState};

const SCATTER_MIN_SIZE: f32 = 20.0;
const SCATTER_MAX_SIZE: f32 = 60.0;

/// `Scene::scattered` needs both viewport sides larger than this: the largest
/// rectangle plus a pixel of clearance from each wall, with room to place it.
pub const SCATTER_MIN_BOUND: f32 = SCATTER_MAX_SIZE + 4.0;

/// Bounds must be finite and strictly greater than `min` on both axes
fn check_bounds(bounds: Vec2, min: f32) -> Result<(), SceneError> {
    if bounds.is_finite() && bounds.x > min && bounds.y > min {
        Ok(())
    } else {
        Err(SceneError::InvalidBounds {
            width: bounds.x,
            height: bounds.y,
        })
    }
}

/// Starting parameters of one rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub velocity_x: f32,
    #[serde(default)]
    pub velocity_y: f32,
}

impl RectSpec {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            velocity_x: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn with_velocity(mut self, velocity_x: f32, velocity_y: f32) -> Self {
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
        self
    }

    fn validate(&self, index: usize) -> Result<(), SceneError> {
        let all_finite = [self.x, self.y, self.velocity_x, self.velocity_y]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(SceneError::NonFinite { index });
        }
        // NaN fails both comparisons, so it lands here too
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(SceneError::InvalidSize {
                index,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Ordered list of starting rectangles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub rects: Vec<RectSpec>,
}

impl Scene {
    pub fn new(rects: Vec<RectSpec>) -> Self {
        Self { rects }
    }

    /// The three-rectangle layout the demo starts with
    pub fn classic() -> Self {
        Self::new(vec![
            RectSpec::new(10.0, 10.0, 50.0, 50.0).with_velocity(5.0, 3.0),
            RectSpec::new(400.0, 300.0, 50.0, 50.0).with_velocity(-4.0, 2.0),
            RectSpec::new(200.0, 150.0, 50.0, 50.0).with_velocity(3.0, -3.0),
        ])
    }

    /// Seeded random layout: same seed, count and bounds give the same scene.
    ///
    /// Rectangles are placed fully inside the bounds; they may overlap. Both
    /// bounds must be finite and larger than `SCATTER_MIN_BOUND`.
    pub fn scattered(seed: u64, count: usize, bounds: Vec2) -> Result<Self, SceneError> {
        check_bounds(bounds, SCATTER_MIN_BOUND)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut rects = Vec::with_capacity(count);

        for _ in 0..count {
            let width = rng.random_range(SCATTER_MIN_SIZE..=SCATTER_MAX_SIZE);
            let height = rng.random_range(SCATTER_MIN_SIZE..=SCATTER_MAX_SIZE);
            let x = rng.random_range(1.0..bounds.x - width - 1.0);
            let y = rng.random_range(1.0..bounds.y - height - 1.0);
            let vx = rng.random_range(1.0..=6.0f32) * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let vy = rng.random_range(1.0..=6.0f32) * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            rects.push(RectSpec::new(x, y, width, height).with_velocity(vx, vy));
        }

        Ok(Self::new(rects))
    }

    /// Parse and validate a scene from JSON
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every rectangle, reporting the first problem found
    pub fn validate(&self) -> Result<(), SceneError> {
        self.rects
            .iter()
            .enumerate()
            .try_for_each(|(index, spec)| spec.validate(index))
    }

    /// Build the simulation state for a run inside `bounds`.
    ///
    /// Ids follow scene order, starting at 0.
    pub fn into_state(self, bounds: Vec2, collision_limit: u32) -> Result<SimState, SceneError> {
        check_bounds(bounds, 0.0)?;
        if collision_limit == 0 {
            return Err(SceneError::InvalidCollisionLimit);
        }
        self.validate()?;

        let rects = self
            .rects
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                Rectangle::new(
                    i as u32,
                    Vec2::new(spec.x, spec.y),
                    Vec2::new(spec.width, spec.height),
                    Vec2::new(spec.velocity_x, spec.velocity_y),
                )
            })
            .collect();

        Ok(SimState::new(rects, bounds, collision_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLLISION_LIMIT;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_classic_into_state() {
        let state = Scene::classic().into_state(BOUNDS, COLLISION_LIMIT).unwrap();
        assert_eq!(state.len(), 3);
        assert_eq!(state.rects[1].id, 1);
        assert_eq!(state.rects[1].pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.rects[1].vel, Vec2::new(-4.0, 2.0));
        assert!(state.rects.iter().all(|r| r.collision_count == 0));
    }

    #[test]
    fn test_from_json_defaults_velocity() {
        let scene = Scene::from_json(r#"{"rects":[{"x":1,"y":2,"width":3,"height":4}]}"#).unwrap();
        assert_eq!(scene.rects[0], RectSpec::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_json_round_trip_classic() {
        let json = Scene::classic().to_json().unwrap();
        assert_eq!(Scene::from_json(&json).unwrap(), Scene::classic());
    }

    #[test]
    fn test_rejects_zero_width() {
        let scene = Scene::new(vec![
            RectSpec::new(0.0, 0.0, 10.0, 10.0),
            RectSpec::new(0.0, 0.0, 0.0, 10.0),
        ]);
        assert!(matches!(
            scene.into_state(BOUNDS, COLLISION_LIMIT),
            Err(SceneError::InvalidSize { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_nan_velocity() {
        let scene = Scene::new(vec![
            RectSpec::new(0.0, 0.0, 10.0, 10.0).with_velocity(f32::NAN, 1.0),
        ]);
        assert!(matches!(scene.validate(), Err(SceneError::NonFinite { index: 0 })));
    }

    #[test]
    fn test_rejects_bad_bounds_and_limit() {
        assert!(matches!(
            Scene::classic().into_state(Vec2::new(0.0, 600.0), COLLISION_LIMIT),
            Err(SceneError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Scene::classic().into_state(BOUNDS, 0),
            Err(SceneError::InvalidCollisionLimit)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Scene::from_json("{"), Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_scattered_is_seeded() {
        let a = Scene::scattered(42, 8, BOUNDS).unwrap();
        let b = Scene::scattered(42, 8, BOUNDS).unwrap();
        let c = Scene::scattered(43, 8, BOUNDS).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.rects.len(), 8);
        for spec in &a.rects {
            assert!(spec.x > 0.0 && spec.x + spec.width < BOUNDS.x);
            assert!(spec.y > 0.0 && spec.y + spec.height < BOUNDS.y);
            assert!(spec.velocity_x != 0.0 && spec.velocity_y != 0.0);
        }
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_scattered_rejects_unusable_bounds() {
        for bounds in [
            Vec2::new(f32::INFINITY, 600.0),
            Vec2::new(800.0, f32::NAN),
            Vec2::new(40.0, 600.0),
            Vec2::new(800.0, SCATTER_MIN_BOUND),
        ] {
            assert!(matches!(
                Scene::scattered(1, 1, bounds),
                Err(SceneError::InvalidBounds { .. })
            ));
        }
    }

    #[test]
    fn test_scattered_fits_smallest_bounds() {
        let side = SCATTER_MIN_BOUND + 1.0;
        let scene = Scene::scattered(9, 50, Vec2::splat(side)).unwrap();
        for spec in &scene.rects {
            assert!(spec.x > 0.0 && spec.x + spec.width < side);
            assert!(spec.y > 0.0 && spec.y + spec.height < side);
        }
    }
}
