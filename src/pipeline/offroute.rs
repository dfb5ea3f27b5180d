use crate::pipeline::geometry;
use crate::pipeline::index::RouteIndex;
use crate::types::route::Coordinate;

/// Whether the live position still lies within `threshold_meters` of the
/// route, measured against a local window of up to `window_size` points
/// preceding the cursor through `cursor + 1`.
pub fn is_on_route(
    position: Coordinate,
    index: &RouteIndex,
    cursor: usize,
    window_size: usize,
    threshold_meters: f64,
) -> bool {
    let points = index.points();
    if points.is_empty() {
        return true;
    }

    let start = cursor.saturating_sub(window_size);
    let end = (cursor + 2).min(points.len());
    let window = &points[start.min(end)..end];

    match geometry::project_onto_polyline(position, window) {
        Some(projection) => projection.distance_meters <= threshold_meters,
        // Degenerate window: never block progress on it.
        None => true,
    }
}
