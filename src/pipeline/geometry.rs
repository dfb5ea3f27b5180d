use crate::types::route::Coordinate;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Ground meters covered by one screen pixel at the given latitude and
/// web-mercator zoom level (256px tiles).
pub fn meters_per_pixel(latitude: f64, zoom: f64) -> f64 {
    let equator = 2.0 * std::f64::consts::PI * EARTH_RADIUS_METERS;
    equator * latitude.to_radians().cos() / (256.0 * 2f64.powf(zoom))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub point: Coordinate,
    pub distance_meters: f64,
}

/// Nearest point on the polyline to `point`. Returns None when the polyline
/// has no segments to project onto.
pub fn project_onto_polyline(point: Coordinate, line: &[Coordinate]) -> Option<Projection> {
    if line.len() < 2 {
        return None;
    }

    let mut best: Option<Projection> = None;
    for pair in line.windows(2) {
        let candidate = project_onto_segment(point, pair[0], pair[1]);
        let distance_meters = haversine_distance(point, candidate);
        if best
            .as_ref()
            .map(|b| distance_meters < b.distance_meters)
            .unwrap_or(true)
        {
            best = Some(Projection {
                point: candidate,
                distance_meters,
            });
        }
    }
    best
}

// Projection on a local plane centered at `a`, with longitude scaled by
// cos(latitude). Accurate at the sub-kilometer scale the off-route window
// operates on.
fn project_onto_segment(p: Coordinate, a: Coordinate, b: Coordinate) -> Coordinate {
    let ref_cos = a.latitude.to_radians().cos();
    let px = (p.longitude - a.longitude).to_radians() * ref_cos;
    let py = (p.latitude - a.latitude).to_radians();
    let bx = (b.longitude - a.longitude).to_radians() * ref_cos;
    let by = (b.latitude - a.latitude).to_radians();

    let len_sq = bx * bx + by * by;
    if len_sq <= f64::EPSILON {
        return a;
    }

    let t = ((px * bx + py * by) / len_sq).clamp(0.0, 1.0);
    Coordinate::new(
        a.latitude + (by * t).to_degrees(),
        a.longitude + (bx * t / ref_cos).to_degrees(),
    )
}
