//! Committed element definitions for the canvas.

mod circle;
mod curve;
mod line;
mod polygon;
mod rect;

pub use circle::CircleShape;
pub use curve::Curve;
pub use line::LineSegment;
pub use polygon::PolygonShape;
pub use rect::RectShape;

use serde::{Deserialize, Serialize};

/// Serializable stroke color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Parse a `#rgb`, `#rrggbb`, or `#rrggbbaa` hex string.
    ///
    /// Malformed input falls back to opaque black rather than failing;
    /// the toolbar is the only producer of these strings.
    pub fn from_hex(color: &str) -> Self {
        if let Some(hex) = color.strip_prefix('#') {
            let hex = hex.trim();
            // Byte-indexed slicing below; non-ASCII input is malformed
            // and must not panic on a char boundary.
            if !hex.is_ascii() {
                return Self::black();
            }
            match hex.len() {
                3 => {
                    let r = u8::from_str_radix(&hex[0..1], 16).unwrap_or(0) * 17;
                    let g = u8::from_str_radix(&hex[1..2], 16).unwrap_or(0) * 17;
                    let b = u8::from_str_radix(&hex[2..3], 16).unwrap_or(0) * 17;
                    return Self::new(r, g, b, 255);
                }
                6 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                    return Self::new(r, g, b, 255);
                }
                8 => {
                    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                    let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
                    return Self::new(r, g, b, a);
                }
                _ => {}
            }
        }
        Self::black()
    }

    /// Format as `#rrggbb` (or `#rrggbbaa` when not fully opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

/// Enum wrapper for all committed element kinds.
///
/// Dispatch on element kind is exhaustive; the presence of a field never
/// determines what an element is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Line(LineSegment),
    Curve(Curve),
    Circle(CircleShape),
    Rect(RectShape),
    Polygon(PolygonShape),
}

impl Element {
    /// Stroke color of the element.
    pub fn stroke(&self) -> Rgba {
        match self {
            Element::Line(e) => e.color,
            Element::Curve(e) => e.color,
            Element::Circle(e) => e.stroke,
            Element::Rect(e) => e.stroke,
            Element::Polygon(e) => e.stroke,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        match self {
            Element::Line(e) => e.stroke_width,
            Element::Curve(e) => e.stroke_width,
            Element::Circle(e) => e.stroke_width,
            Element::Rect(e) => e.stroke_width,
            Element::Polygon(e) => e.stroke_width,
        }
    }

    /// Whether the element is fully constructed. Lines and curves have
    /// no partial committed form, so they always report complete.
    pub fn is_complete(&self) -> bool {
        match self {
            Element::Line(_) | Element::Curve(_) => true,
            Element::Circle(e) => e.complete,
            Element::Rect(e) => e.complete,
            Element::Polygon(e) => e.complete,
        }
    }
}
