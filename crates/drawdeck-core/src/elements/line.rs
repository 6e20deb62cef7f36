//! Straight line segment element.

use super::Rgba;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A committed two-point line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Endpoint buffer `[x1, y1, x2, y2]`.
    pub points: [f64; 4],
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
}

impl LineSegment {
    pub fn new(points: [f64; 4], color: Rgba, stroke_width: f64) -> Self {
        Self {
            points,
            color,
            stroke_width,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.points[0], self.points[1])
    }

    pub fn end(&self) -> Point {
        Point::new(self.points[2], self.points[3])
    }

    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}
