use crate::pipeline::geometry;
use crate::pipeline::index::RouteIndex;
use crate::types::route::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractionOutcome {
    /// Transient rejection; the previous fraction stays in effect.
    Rejected,
    Advanced(f64),
    /// The route is fully traversed; tracking state must be torn down.
    Completed,
}

/// Normalized fraction-traveled scalar for one continuous route.
/// Non-decreasing until the route is replaced or the estimator is reset.
#[derive(Debug, Clone, Default)]
pub struct FractionEstimator {
    fraction: f64,
    last_position: Option<Coordinate>,
}

impl FractionEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(
        &mut self,
        position: Coordinate,
        zoom: f64,
        jitter_pixels: f64,
        index: &RouteIndex,
        cursor: usize,
    ) -> FractionOutcome {
        if self.last_position == Some(position) {
            return FractionOutcome::Rejected;
        }
        if let Some(previous) = self.last_position {
            let moved = geometry::haversine_distance(previous, position);
            if moved < jitter_pixels * geometry::meters_per_pixel(position.latitude, zoom) {
                tracing::trace!(moved_meters = moved, "sub-pixel movement ignored");
                return FractionOutcome::Rejected;
            }
        }

        let total = index.total_distance();
        if total <= 0.0 {
            // Nothing left to traverse on a zero-length route.
            self.fraction = 1.0;
            self.last_position = Some(position);
            return FractionOutcome::Completed;
        }

        let remaining = index.distance_remaining(cursor)
            + geometry::haversine_distance(index.point(cursor), position);
        let fraction = 1.0 - remaining / total;

        if fraction < 0.0 || fraction < self.fraction {
            tracing::trace!(fraction, "overshoot fraction rejected");
            return FractionOutcome::Rejected;
        }
        if fraction >= 1.0 {
            self.fraction = 1.0;
            self.last_position = Some(position);
            return FractionOutcome::Completed;
        }

        self.fraction = fraction;
        self.last_position = Some(position);
        FractionOutcome::Advanced(fraction)
    }
}
