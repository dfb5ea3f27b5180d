use crate::types::congestion::AnnotatedSegment;
use crate::types::gradient::{Color, GradientMode, GradientStopMap};

// Floor for the fractional stop gap; keeps soft-mode stops distinct even on
// very long routes.
const MINIMUM_STOP_GAP: f64 = 2e-16;

/// Colors that do not come from the per-segment color function.
#[derive(Debug, Clone, Copy)]
pub struct StopColors {
    pub traversed: Color,
    /// Used when no annotated segments are supplied, e.g. a uniform casing
    /// layer.
    pub base: Color,
}

/// Builds the sparse fraction → color stop set for one render pass.
///
/// Walks the segments in route order, emitting a stop per color transition
/// (hard mode: the new color just past the boundary; soft mode: a crossfade
/// window bounded by each segment's stop gap). Stops at or behind
/// `fraction_traveled` are folded into the head color instead of being
/// emitted, and the canonical stops at `0.0`, just behind the head, and at
/// the head itself are always written.
pub fn build_stops(
    segments: &[AnnotatedSegment],
    fraction_traveled: f64,
    mode: GradientMode,
    fade_distance_meters: f64,
    colors: StopColors,
    color_of: impl Fn(&AnnotatedSegment) -> Color,
) -> GradientStopMap {
    let fraction_traveled = fraction_traveled.clamp(0.0, 1.0);
    let mut stops = GradientStopMap::new();

    let total: f64 = segments.iter().map(|s| s.distance_meters).sum();
    if segments.is_empty() || total <= 0.0 {
        write_head_stops(&mut stops, fraction_traveled, colors.traversed, colors.base);
        return stops;
    }

    let mut head_color = color_of(&segments[0]);
    let mut previous_color = head_color;
    let mut previous_gap = stop_gap(&segments[0], total, fade_distance_meters);
    let mut cumulative = segments[0].distance_meters;

    for segment in segments.iter().skip(1) {
        let color = color_of(segment);
        let gap = stop_gap(segment, total, fade_distance_meters);
        let boundary = cumulative / total;
        cumulative += segment.distance_meters;

        if color == previous_color {
            // Same-color run continues; no transition stop needed.
            previous_gap = gap;
            continue;
        }

        match mode {
            GradientMode::Hard => {
                record(
                    &mut stops,
                    boundary.next_up(),
                    color,
                    fraction_traveled,
                    &mut head_color,
                );
            }
            GradientMode::Soft => {
                record(
                    &mut stops,
                    (boundary - previous_gap).max(0.0),
                    previous_color,
                    fraction_traveled,
                    &mut head_color,
                );
                record(
                    &mut stops,
                    (boundary + gap).min(1.0),
                    color,
                    fraction_traveled,
                    &mut head_color,
                );
            }
        }

        previous_color = color;
        previous_gap = gap;
    }

    write_head_stops(&mut stops, fraction_traveled, colors.traversed, head_color);
    stops
}

fn stop_gap(segment: &AnnotatedSegment, total: f64, fade_distance_meters: f64) -> f64 {
    if total <= 0.0 {
        return MINIMUM_STOP_GAP;
    }
    // Capped at 10% of the segment's own length so short segments keep a
    // visible core color.
    (fade_distance_meters.min(segment.distance_meters * 0.1) / total).max(MINIMUM_STOP_GAP)
}

// Stops behind the head are not rendered as part of the remaining palette;
// the latest one folded here carries the color the line shows at the head.
fn record(
    stops: &mut GradientStopMap,
    position: f64,
    color: Color,
    fraction_traveled: f64,
    head_color: &mut Color,
) {
    if position <= fraction_traveled {
        *head_color = color;
    } else if position <= 1.0 {
        stops.set(position, color);
    }
}

fn write_head_stops(
    stops: &mut GradientStopMap,
    fraction_traveled: f64,
    traversed: Color,
    head_color: Color,
) {
    stops.set(0.0, traversed);
    let behind = fraction_traveled.next_down();
    if behind >= 0.0 {
        // Hard edge immediately behind the vehicle.
        stops.set(behind, traversed);
    }
    stops.set(fraction_traveled, head_color);
}
