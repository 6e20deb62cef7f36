//! Polygon shape element.

use super::Rgba;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A polygon stored as a flattened `[x0, y0, x1, y1, ..]` vertex buffer.
///
/// When committed, the buffer is a closed ring: the first vertex is
/// appended again at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub id: Uuid,
    /// Flattened vertex buffer.
    pub points: Vec<f64>,
    /// Stroke color.
    pub stroke: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
    /// Set when the closing click commits the shape.
    pub complete: bool,
}

impl PolygonShape {
    /// Create an in-progress polygon from an initial vertex buffer.
    pub fn new(points: Vec<f64>, stroke: Rgba, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            stroke,
            stroke_width,
            complete: false,
        }
    }

    /// Number of (x, y) vertices in the buffer, counting the closing
    /// repeat of the first vertex when present.
    pub fn vertex_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Whether the buffer ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 4
            && self.points[0] == self.points[self.points.len() - 2]
            && self.points[1] == self.points[self.points.len() - 1]
    }
}
