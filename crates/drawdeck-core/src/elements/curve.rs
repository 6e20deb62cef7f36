//! Quadratic curve element.

use super::Rgba;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A committed curve, stored as the pre-baked sample polyline rather
/// than as start/control/end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Flattened `[x0, y0, x1, y1, ..]` sample buffer.
    pub points: Vec<f64>,
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
}

impl Curve {
    pub fn new(points: Vec<f64>, color: Rgba, stroke_width: f64) -> Self {
        Self {
            points,
            color,
            stroke_width,
        }
    }

    /// Build a curve from a sampled point sequence.
    pub fn from_samples(samples: &[Point], color: Rgba, stroke_width: f64) -> Self {
        Self::new(crate::geometry::flatten(samples), color, stroke_width)
    }

    /// Number of (x, y) samples in the buffer.
    pub fn point_count(&self) -> usize {
        self.points.len() / 2
    }
}
