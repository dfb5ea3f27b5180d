use crate::config::TrackingConfig;
use crate::error::{IndexError, TrackError};
use crate::pipeline::fraction::{FractionEstimator, FractionOutcome};
use crate::pipeline::gradient::{self, StopColors};
use crate::pipeline::index::RouteIndex;
use crate::pipeline::{offroute, progress};
use crate::types::congestion::AnnotatedSegment;
use crate::types::gradient::{Color, GradientStopMap};
use crate::types::route::{Coordinate, Route, RouteProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Route tables built, no accepted progress update yet.
    Indexed,
    Tracking,
    /// Terminal until the route is replaced.
    Completed,
}

/// Styling output of one accepted update, consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGradient {
    pub fraction_traveled: f64,
    pub congestion_stops: GradientStopMap,
    pub restricted_stops: GradientStopMap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Transient rejection (off-route, sub-pixel movement, overshoot); the
    /// previously computed gradient stays valid.
    Unchanged,
    Updated(LineGradient),
    /// The route is fully traversed; the caller must remove the rendered
    /// line and reset or replace the session.
    Completed,
}

/// Owns all mutable tracking state for one route. Single-threaded by
/// contract: the thread receiving location updates drives it sequentially.
#[derive(Debug)]
pub struct RouteSession {
    config: TrackingConfig,
    route: Route,
    index: RouteIndex,
    segments: Vec<AnnotatedSegment>,
    cursor: usize,
    estimator: FractionEstimator,
    state: SessionState,
    needs_redraw: bool,
    congestion_stops: GradientStopMap,
    restricted_stops: GradientStopMap,
}

impl RouteSession {
    pub fn new(route: Route, config: TrackingConfig) -> Result<Self, IndexError> {
        let index = RouteIndex::build(&route)?;
        let segments: Vec<AnnotatedSegment> = route.segments().copied().collect();
        tracing::info!(
            points = index.len(),
            total_meters = index.total_distance(),
            segments = segments.len(),
            "route indexed"
        );
        Ok(Self {
            config,
            route,
            index,
            segments,
            cursor: 0,
            estimator: FractionEstimator::new(),
            state: SessionState::Indexed,
            needs_redraw: true,
            congestion_stops: GradientStopMap::new(),
            restricted_stops: GradientStopMap::new(),
        })
    }

    /// Swaps in a new route (reroute or style reload) and discards every
    /// piece of derived state. Stale cursors would index into the wrong
    /// flattened route otherwise.
    pub fn replace_route(&mut self, route: Route) -> Result<(), IndexError> {
        let index = RouteIndex::build(&route)?;
        self.segments = route.segments().copied().collect();
        self.route = route;
        self.index = index;
        self.cursor = 0;
        self.estimator.reset();
        self.state = SessionState::Indexed;
        self.needs_redraw = true;
        self.congestion_stops = GradientStopMap::new();
        self.restricted_stops = GradientStopMap::new();
        tracing::info!(points = self.index.len(), "route replaced, tracking reset");
        Ok(())
    }

    /// Runs the full per-update pipeline: cursor relocation, off-route gate,
    /// fraction estimation, gradient rebuild.
    pub fn update(
        &mut self,
        route_progress: &RouteProgress,
        position: Coordinate,
        zoom: f64,
    ) -> Result<UpdateOutcome, TrackError> {
        if self.state == SessionState::Completed {
            return Err(TrackError::RouteCompleted);
        }

        let force_redraw = std::mem::replace(&mut self.needs_redraw, false);
        // Relocating is idempotent and cheap, so it runs on every update
        // rather than only on leg/step transitions.
        self.cursor = progress::locate_cursor(&self.route, &self.index, route_progress);

        // The off-route check runs against the freshly located cursor, except
        // on a forced redraw where the previous fix may be stale.
        if !force_redraw
            && !offroute::is_on_route(
                position,
                &self.index,
                self.cursor,
                self.config.off_route_window_size,
                self.config.off_route_threshold_meters,
            )
        {
            tracing::debug!(cursor = self.cursor, "position off route, gradient kept");
            return Ok(UpdateOutcome::Unchanged);
        }

        match self.estimator.update(
            position,
            zoom,
            self.config.jitter_pixel_threshold,
            &self.index,
            self.cursor,
        ) {
            FractionOutcome::Rejected => Ok(UpdateOutcome::Unchanged),
            FractionOutcome::Completed => {
                self.state = SessionState::Completed;
                tracing::info!("route fully traversed");
                Ok(UpdateOutcome::Completed)
            }
            FractionOutcome::Advanced(fraction) => {
                self.state = SessionState::Tracking;
                self.rebuild_stops(fraction);
                Ok(UpdateOutcome::Updated(LineGradient {
                    fraction_traveled: fraction,
                    congestion_stops: self.congestion_stops.clone(),
                    restricted_stops: self.restricted_stops.clone(),
                }))
            }
        }
    }

    fn rebuild_stops(&mut self, fraction: f64) {
        let palette = self.config.palette;
        self.congestion_stops = gradient::build_stops(
            &self.segments,
            fraction,
            self.config.gradient_mode,
            self.config.fade_distance_meters,
            StopColors {
                traversed: palette.traversed,
                base: palette.route_base,
            },
            |segment| palette.color_for(segment.congestion),
        );
        self.restricted_stops = gradient::build_stops(
            &self.segments,
            fraction,
            self.config.gradient_mode,
            self.config.fade_distance_meters,
            StopColors {
                traversed: Color::TRANSPARENT,
                base: Color::TRANSPARENT,
            },
            |segment| palette.restricted_color(segment.restricted),
        );
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn fraction_traveled(&self) -> f64 {
        self.estimator.fraction()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_distance(&self) -> f64 {
        self.index.total_distance()
    }

    /// Last accepted congestion gradient; empty until the first accepted
    /// update.
    pub fn congestion_stops(&self) -> &GradientStopMap {
        &self.congestion_stops
    }

    pub fn restricted_stops(&self) -> &GradientStopMap {
        &self.restricted_stops
    }

    pub fn line_gradient(&self) -> LineGradient {
        LineGradient {
            fraction_traveled: self.estimator.fraction(),
            congestion_stops: self.congestion_stops.clone(),
            restricted_stops: self.restricted_stops.clone(),
        }
    }
}
