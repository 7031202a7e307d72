//! Rectangle entity
//!
//! Position is the top-left corner in pixel space (y grows downward).

use glam::Vec2;

/// A moving axis-aligned rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Insertion-order id, stable for the whole run
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both > 0, never change)
    pub size: Vec2,
    /// Displacement applied per tick
    pub vel: Vec2,
    /// Wall and pair collisions accumulated so far
    pub collision_count: u32,
}

impl Rectangle {
    pub fn new(id: u32, pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            vel,
            collision_count: 0,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Advance one tick along the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Reverse both velocity components (pair collision response)
    #[inline]
    pub fn reverse(&mut self) {
        self.vel = -self.vel;
    }

    /// Record one collision
    #[inline]
    pub fn hit(&mut self) {
        self.collision_count += 1;
    }

    /// Whether the rectangle has used up its collision allowance
    #[inline]
    pub fn is_spent(&self, limit: u32) -> bool {
        self.collision_count >= limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_zero_collisions() {
        let r = Rectangle::new(7, Vec2::new(10.0, 20.0), Vec2::splat(50.0), Vec2::new(1.0, -1.0));
        assert_eq!(r.collision_count, 0);
        assert_eq!(r.max(), Vec2::new(60.0, 70.0));
    }

    #[test]
    fn test_spent_boundary() {
        let mut r = Rectangle::new(0, Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        r.hit();
        r.hit();
        assert!(!r.is_spent(3));
        r.hit();
        assert!(r.is_spent(3));
    }
}
