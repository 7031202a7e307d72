//! Fixed timestep simulation tick
//!
//! One tick is three passes over the active set:
//! 1. integrate: move each rectangle, then reflect it off the walls
//! 2. resolve pairs: every unordered pair `(i, j)`, `i < j`, tested once
//!    against the post-move positions
//! 3. retire: drop rectangles whose collision count reached the limit
//!
//! Pair responses only negate velocities and bump counters, and negations
//! commute, so the outcome does not depend on pair visiting order. A pair
//! that overlaps on consecutive ticks is counted on each of them.

use super::collision::is_colliding;
use super::state::SimState;

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Wall reflections (a corner hit counts twice)
    pub wall_hits: u32,
    /// Colliding pairs resolved
    pub pair_hits: u32,
    /// Ids of rectangles retired at the end of the tick
    pub retired: Vec<u32>,
}

impl TickReport {
    /// Fold another tick's report into this one
    pub fn merge(&mut self, other: TickReport) {
        self.wall_hits += other.wall_hits;
        self.pair_hits += other.pair_hits;
        self.retired.extend(other.retired);
    }
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState) -> TickReport {
    let mut report = TickReport::default();

    integrate(state, &mut report);
    resolve_pairs(state, &mut report);
    retire(state, &mut report);

    state.time_ticks += 1;
    report
}

fn integrate(state: &mut SimState, report: &mut TickReport) {
    let bounds = state.bounds;

    for rect in state.rects.iter_mut() {
        rect.advance();

        // Axes are independent: a corner hit flips both and counts twice
        if rect.x() <= 0.0 || rect.max().x >= bounds.x {
            rect.vel.x = -rect.vel.x;
            rect.hit();
            report.wall_hits += 1;
        }
        if rect.y() <= 0.0 || rect.max().y >= bounds.y {
            rect.vel.y = -rect.vel.y;
            rect.hit();
            report.wall_hits += 1;
        }
    }
}

fn resolve_pairs(state: &mut SimState, report: &mut TickReport) {
    let n = state.rects.len();

    for i in 0..n {
        let (head, tail) = state.rects.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if is_colliding(a, b) {
                a.reverse();
                a.hit();
                b.reverse();
                b.hit();
                report.pair_hits += 1;
            }
        }
    }
}

fn retire(state: &mut SimState, report: &mut TickReport) {
    let limit = state.collision_limit;

    state.rects.retain(|rect| {
        if rect.is_spent(limit) {
            log::debug!(
                "Rect {} retired after {} collisions at ({:.1}, {:.1})",
                rect.id,
                rect.collision_count,
                rect.x(),
                rect.y()
            );
            report.retired.push(rect.id);
            false
        } else {
            true
        }
    });
}
