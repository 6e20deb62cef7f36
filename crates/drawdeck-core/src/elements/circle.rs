//! Circle shape element.

use super::Rgba;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle defined by its center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub id: Uuid,
    /// Center point (the gesture's anchor).
    pub center: Point,
    /// Radius; tracks the pointer while drawing.
    pub radius: f64,
    /// Stroke color.
    pub stroke: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
    /// Set when the second click commits the shape.
    pub complete: bool,
}

impl CircleShape {
    /// Create an in-progress circle with radius zero.
    pub fn new(center: Point, stroke: Rgba, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: 0.0,
            stroke,
            stroke_width,
            complete: false,
        }
    }
}
