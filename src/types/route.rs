use serde::{Deserialize, Serialize};

use crate::types::congestion::AnnotatedSegment;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    pub shape: Vec<Coordinate>,
}

impl RouteStep {
    pub fn new(shape: Vec<Coordinate>) -> Self {
        Self { shape }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub steps: Vec<RouteStep>,
    /// Ordered congestion/restriction tags covering the leg with no gaps.
    pub segments: Vec<AnnotatedSegment>,
}

impl RouteLeg {
    pub fn new(steps: Vec<RouteStep>, segments: Vec<AnnotatedSegment>) -> Self {
        Self { steps, segments }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
}

impl Route {
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }

    pub fn coordinate_count(&self) -> usize {
        self.legs
            .iter()
            .flat_map(|leg| &leg.steps)
            .map(|step| step.shape.len())
            .sum()
    }

    /// All annotated segments in travel order.
    pub fn segments(&self) -> impl Iterator<Item = &AnnotatedSegment> {
        self.legs.iter().flat_map(|leg| &leg.segments)
    }
}

/// Live navigation progress as reported by the progress/location source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteProgress {
    pub leg_index: usize,
    pub step_index: usize,
    pub distance_traveled_in_step: f64,
}

impl RouteProgress {
    pub fn new(leg_index: usize, step_index: usize, distance_traveled_in_step: f64) -> Self {
        Self {
            leg_index,
            step_index,
            distance_traveled_in_step,
        }
    }
}
