use routeline_rs::pipeline::index::RouteIndex;
use routeline_rs::pipeline::{offroute, progress};
use routeline_rs::{AnnotatedSegment, CongestionLevel, Coordinate, Route, RouteLeg, RouteProgress, RouteStep};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

fn coord_at(meters: f64) -> Coordinate {
    Coordinate::new(0.0, (meters / EARTH_RADIUS_METERS).to_degrees())
}

fn lateral_coord(along_meters: f64, offset_meters: f64) -> Coordinate {
    Coordinate::new(
        (offset_meters / EARTH_RADIUS_METERS).to_degrees(),
        (along_meters / EARTH_RADIUS_METERS).to_degrees(),
    )
}

fn shape(from_meters: f64, to_meters: f64, spacing: f64) -> Vec<Coordinate> {
    let count = ((to_meters - from_meters) / spacing).round() as usize;
    (0..=count)
        .map(|i| coord_at(from_meters + i as f64 * spacing))
        .collect()
}

fn uniform_segments(length: f64) -> Vec<AnnotatedSegment> {
    vec![AnnotatedSegment::new(length, CongestionLevel::Low, false)]
}

fn single_step_route() -> Route {
    Route::new(vec![RouteLeg::new(
        vec![RouteStep::new(shape(0.0, 1000.0, 100.0))],
        uniform_segments(1000.0),
    )])
}

fn two_step_route() -> Route {
    Route::new(vec![RouteLeg::new(
        vec![
            RouteStep::new(shape(0.0, 500.0, 100.0)),
            RouteStep::new(shape(500.0, 1000.0, 100.0)),
        ],
        uniform_segments(1000.0),
    )])
}

#[test]
fn distance_index_is_monotonic_and_ends_at_zero() {
    let index = RouteIndex::build(&single_step_route()).expect("index");
    let distances = index.distances();

    assert_eq!(distances.len(), 11);
    for pair in distances.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert_eq!(*distances.last().expect("last"), 0.0);
    assert!((index.total_distance() - 1000.0).abs() < 1.0);
}

#[test]
fn empty_route_fails_fast() {
    let err = RouteIndex::build(&Route::new(vec![])).expect_err("empty route must not index");
    assert!(matches!(err, routeline_rs::IndexError::EmptyRoute));

    let no_coords = Route::new(vec![RouteLeg::new(vec![RouteStep::new(vec![])], vec![])]);
    assert!(RouteIndex::build(&no_coords).is_err());
}

#[test]
fn duplicated_step_boundary_is_kept() {
    let index = RouteIndex::build(&two_step_route()).expect("index");

    // 6 points per step, boundary coordinate present twice.
    assert_eq!(index.len(), 12);
    assert_eq!(index.point(5), index.point(6));
    assert!((index.distance_remaining(5) - index.distance_remaining(6)).abs() < 1e-9);
    assert!((index.distance_remaining(5) - 500.0).abs() < 1.0);
}

#[test]
fn cursor_locates_next_unpassed_point() {
    let route = single_step_route();
    let index = RouteIndex::build(&route).expect("index");

    // 450m traveled: point 5 (500m) is the next one not yet passed.
    let cursor = progress::locate_cursor(&route, &index, &RouteProgress::new(0, 0, 450.0));
    assert_eq!(cursor, 5);

    // Exactly on a point counts that point as the cursor.
    let cursor = progress::locate_cursor(&route, &index, &RouteProgress::new(0, 0, 500.0));
    assert_eq!(cursor, 5);
}

#[test]
fn cursor_clamps_at_route_ends() {
    let route = single_step_route();
    let index = RouteIndex::build(&route).expect("index");

    let at_start = progress::locate_cursor(&route, &index, &RouteProgress::new(0, 0, 0.0));
    assert_eq!(at_start, 0);

    let beyond_end = progress::locate_cursor(&route, &index, &RouteProgress::new(0, 0, 2000.0));
    assert_eq!(beyond_end, 10);

    // Out-of-range leg/step indices clamp to the final point.
    let bogus = progress::locate_cursor(&route, &index, &RouteProgress::new(7, 3, 0.0));
    assert_eq!(bogus, 10);
}

#[test]
fn cursor_handles_multiple_legs() {
    let route = Route::new(vec![
        RouteLeg::new(
            vec![RouteStep::new(shape(0.0, 500.0, 100.0))],
            uniform_segments(500.0),
        ),
        RouteLeg::new(
            vec![RouteStep::new(shape(500.0, 1000.0, 100.0))],
            uniform_segments(500.0),
        ),
    ]);
    let index = RouteIndex::build(&route).expect("index");
    assert_eq!(index.len(), 12);

    // Start of the second leg: whole leg remaining, cursor sits on the
    // duplicated boundary coordinate.
    let cursor = progress::locate_cursor(&route, &index, &RouteProgress::new(1, 0, 0.0));
    assert_eq!(cursor, 5);
    assert!((index.distance_remaining(cursor) - 500.0).abs() < 1.0);

    // 200m into the second leg.
    let cursor = progress::locate_cursor(&route, &index, &RouteProgress::new(1, 0, 200.0));
    assert_eq!(cursor, 8);
    assert!((index.distance_remaining(cursor) - 300.0).abs() < 1.0);
}

#[test]
fn degenerate_step_shape_treats_whole_step_as_remaining() {
    let route = Route::new(vec![RouteLeg::new(
        vec![
            RouteStep::new(vec![coord_at(0.0)]),
            RouteStep::new(shape(0.0, 500.0, 100.0)),
        ],
        uniform_segments(500.0),
    )]);
    let index = RouteIndex::build(&route).expect("index");

    // Single-point shape cannot locate a traveled distance.
    let cursor = progress::locate_cursor(&route, &index, &RouteProgress::new(0, 0, 50.0));
    assert_eq!(cursor, 0);
}

#[test]
fn off_route_guard_rejects_far_positions() {
    let route = single_step_route();
    let index = RouteIndex::build(&route).expect("index");

    let nearby = lateral_coord(350.0, 5.0);
    assert!(offroute::is_on_route(nearby, &index, 5, 10, 15.0));

    let far = lateral_coord(350.0, 100.0);
    assert!(!offroute::is_on_route(far, &index, 5, 10, 15.0));
}

#[test]
fn off_route_guard_fails_open_on_degenerate_window() {
    let route = Route::new(vec![RouteLeg::new(
        vec![RouteStep::new(vec![coord_at(0.0)])],
        vec![],
    )]);
    let index = RouteIndex::build(&route).expect("index");

    let far = lateral_coord(0.0, 500.0);
    assert!(offroute::is_on_route(far, &index, 0, 10, 15.0));
}
