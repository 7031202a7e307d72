//! Axis-aligned bounding box overlap test

use super::rect::Rectangle;

/// True iff the two rectangles' bounding boxes overlap.
///
/// Comparisons are strict, so boxes that only share an edge do not collide.
/// Symmetric in its arguments; callers never pass the same rectangle twice.
#[inline]
pub fn is_colliding(a: &Rectangle, b: &Rectangle) -> bool {
    let (a_min, a_max) = (a.pos, a.max());
    let (b_min, b_max) = (b.pos, b.max());

    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}
