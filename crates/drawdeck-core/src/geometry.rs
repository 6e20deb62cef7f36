//! Pure geometry helpers for the drawing tools.

use kurbo::Point;

/// Number of segments a quadratic bezier is flattened into.
/// Sampling produces `BEZIER_SEGMENTS + 1` points.
pub const BEZIER_SEGMENTS: usize = 50;

/// Sample a quadratic bezier `P(t) = (1-t)²·start + 2(1-t)t·control + t²·end`
/// at `t = i / BEZIER_SEGMENTS` for `i = 0..=BEZIER_SEGMENTS`.
///
/// The first sample is exactly `start` and the last exactly `end`; the
/// control point only influences the interior of the curve.
pub fn sample_quadratic_bezier(start: Point, control: Point, end: Point) -> Vec<Point> {
    (0..=BEZIER_SEGMENTS)
        .map(|i| {
            let t = i as f64 / BEZIER_SEGMENTS as f64;
            let u = 1.0 - t;
            Point::new(
                u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
                u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
            )
        })
        .collect()
}

/// Flatten a point sequence into an alternating `[x0, y0, x1, y1, ..]` buffer.
pub fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
