use crate::error::IndexError;
use crate::pipeline::geometry;
use crate::types::route::{Coordinate, Route};

/// Flattened route polyline plus the reverse-cumulative distance table.
/// Built once per route assignment; `distances[i]` holds the meters remaining
/// from point `i` to the final point.
#[derive(Debug, Clone)]
pub struct RouteIndex {
    points: Vec<Coordinate>,
    distances: Vec<f64>,
}

impl RouteIndex {
    pub fn build(route: &Route) -> Result<Self, IndexError> {
        let mut points = Vec::with_capacity(route.coordinate_count());
        for leg in &route.legs {
            for step in &leg.steps {
                // Adjacent steps share a duplicated boundary coordinate;
                // keep it, consumers must not assume uniqueness.
                points.extend_from_slice(&step.shape);
            }
        }
        if points.is_empty() {
            return Err(IndexError::EmptyRoute);
        }

        let mut distances = vec![0.0; points.len()];
        for i in (0..points.len() - 1).rev() {
            distances[i] = distances[i + 1] + geometry::haversine_distance(points[i], points[i + 1]);
        }

        Ok(Self { points, distances })
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Point at `index`, clamped into range.
    pub fn point(&self, index: usize) -> Coordinate {
        self.points[index.min(self.points.len() - 1)]
    }

    pub fn distance_remaining(&self, index: usize) -> f64 {
        self.distances.get(index).copied().unwrap_or(0.0)
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn total_distance(&self) -> f64 {
        self.distances.first().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
