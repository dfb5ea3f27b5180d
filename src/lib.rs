//! Progressive route-line styling: turns an annotated route polyline plus a
//! stream of position updates into renderer-ready gradient stop maps.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod types;

pub use config::TrackingConfig;
pub use error::{IndexError, TrackError};
pub use session::{LineGradient, RouteSession, SessionState, UpdateOutcome};
pub use types::congestion::{AnnotatedSegment, CongestionLevel};
pub use types::gradient::{Color, GradientMode, GradientStop, GradientStopMap, TrafficPalette};
pub use types::route::{Coordinate, Route, RouteLeg, RouteProgress, RouteStep};
