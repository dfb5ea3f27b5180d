use crate::pipeline::geometry;
use crate::pipeline::index::RouteIndex;
use crate::types::route::{Coordinate, Route, RouteProgress};

/// Index of the next flattened point the vehicle has not yet passed.
///
/// Counts the points remaining ahead of the live progress (rest of the
/// current step, later steps of the current leg, later legs) and derives
/// `total - remaining - 1`, clamped into range. Cheap relative to location
/// updates and safe to call on every one of them.
pub fn locate_cursor(route: &Route, index: &RouteIndex, progress: &RouteProgress) -> usize {
    let total = index.len();
    let mut remaining = 0usize;

    for (leg_position, leg) in route.legs.iter().enumerate() {
        if leg_position < progress.leg_index {
            continue;
        }
        if leg_position > progress.leg_index {
            remaining += leg.steps.iter().map(|step| step.shape.len()).sum::<usize>();
            continue;
        }
        for (step_position, step) in leg.steps.iter().enumerate() {
            if step_position < progress.step_index {
                continue;
            }
            if step_position > progress.step_index {
                remaining += step.shape.len();
                continue;
            }
            remaining +=
                remaining_points_in_step(&step.shape, progress.distance_traveled_in_step);
        }
    }

    total
        .saturating_sub(remaining + 1)
        .min(total.saturating_sub(1))
}

// Points of the step strictly ahead of the traveled distance. Whole step when
// nothing was traveled yet or the shape is too degenerate to locate a
// distance on; zero when the step has been overshot.
fn remaining_points_in_step(shape: &[Coordinate], distance_traveled: f64) -> usize {
    if distance_traveled <= 0.0 || shape.len() < 2 {
        return shape.len();
    }

    let mut cumulative = 0.0;
    for i in 1..shape.len() {
        cumulative += geometry::haversine_distance(shape[i - 1], shape[i]);
        if cumulative >= distance_traveled {
            return shape.len() - 1 - i;
        }
    }

    if cumulative <= 0.0 {
        // Zero-length shape: the traveled distance cannot be located on it.
        return shape.len();
    }
    0
}
