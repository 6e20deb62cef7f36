//! Rectangle shape element.

use super::Rgba;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle anchored at the first click, with signed extents.
///
/// `width`/`height` are negative when the pointer is dragged left/up of
/// the anchor; they are stored as-is, never normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub id: Uuid,
    /// Anchor corner (the first click).
    pub origin: Point,
    /// Signed horizontal extent from the origin.
    pub width: f64,
    /// Signed vertical extent from the origin.
    pub height: f64,
    /// Stroke color.
    pub stroke: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
    /// Set when the second click commits the shape.
    pub complete: bool,
}

impl RectShape {
    /// Create an in-progress rectangle with zero extents.
    pub fn new(origin: Point, stroke: Rgba, stroke_width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width: 0.0,
            height: 0.0,
            stroke,
            stroke_width,
            complete: false,
        }
    }
}
