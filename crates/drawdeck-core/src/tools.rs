//! Drawing tool state machine.
//!
//! One gesture is live at a time. Pointer clicks drive each tool's
//! protocol forward; pointer moves only reshape the in-progress preview
//! and never produce an element. A completed gesture yields the
//! committed [`Element`] for the caller to append to the history log.

use crate::elements::{CircleShape, Curve, Element, LineSegment, PolygonShape, RectShape, Rgba};
use crate::geometry::{flatten, sample_quadratic_bezier};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Distance within which a polygon click snaps to the first vertex and
/// closes the ring.
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Stroke width range offered by the toolbar. The core consumes widths
/// as given and does not clamp to this range.
pub const MIN_STROKE_WIDTH: f64 = 5.0;
pub const MAX_STROKE_WIDTH: f64 = 50.0;

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Line,
    Curve,
    Circle,
    Rectangle,
    Polygon,
}

/// Read-only drawing configuration supplied by the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub tool: ToolKind,
    pub color: Rgba,
    pub stroke_width: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: Rgba::black(),
            stroke_width: MIN_STROKE_WIDTH,
        }
    }
}

/// State of the in-progress gesture, one variant per tool protocol.
#[derive(Debug, Clone, Default)]
pub enum DrawState {
    /// No element is mid-construction.
    #[default]
    Idle,
    /// Two-click line; the endpoint of the buffer tracks the pointer
    /// between clicks.
    Line { segment: LineSegment },
    /// Three-click quadratic curve. Until the control point is fixed by
    /// the second click, the preview treats the pointer as the control.
    Curve {
        start: Point,
        control: Option<Point>,
        preview: Curve,
    },
    /// Two-click circle; the radius tracks the pointer.
    Circle { anchor: Point, shape: CircleShape },
    /// Two-click rectangle with signed extents from the anchor.
    Rect { anchor: Point, shape: RectShape },
    /// Click-driven polygon. `vertices` holds only clicked points; the
    /// shape's buffer may carry one provisional trailing point from the
    /// last move, replaced wholesale on the next event.
    Polygon {
        vertices: Vec<Point>,
        shape: PolygonShape,
    },
}

/// Geometry handed to the renderer for the in-progress element.
#[derive(Debug, Clone)]
pub struct Preview {
    /// The element as it would look if committed right now.
    pub element: Element,
    /// Fixed curve control point, once the second click has set it.
    pub control_point: Option<Point>,
    /// First click of the gesture.
    pub anchor_point: Option<Point>,
}

/// Drives the per-tool interaction protocol.
#[derive(Debug, Clone, Default)]
pub struct ToolController {
    state: DrawState,
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an element is mid-construction.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DrawState::Idle)
    }

    /// Handle a pointer-down for the selected tool.
    ///
    /// Returns the committed element when the click completes a gesture;
    /// intermediate clicks return `None`.
    pub fn press(&mut self, pos: Point, settings: &ToolSettings) -> Option<Element> {
        match settings.tool {
            ToolKind::Line => self.press_line(pos, settings),
            ToolKind::Curve => self.press_curve(pos, settings),
            ToolKind::Circle => self.press_circle(pos, settings),
            ToolKind::Rectangle => self.press_rect(pos, settings),
            ToolKind::Polygon => self.press_polygon(pos, settings),
        }
    }

    /// Handle a pointer move. A no-op while idle.
    pub fn motion(&mut self, pos: Point) {
        match &mut self.state {
            DrawState::Idle => {}
            DrawState::Line { segment } => {
                segment.points[2] = pos.x;
                segment.points[3] = pos.y;
            }
            DrawState::Curve {
                start,
                control,
                preview,
            } => {
                let control = control.unwrap_or(pos);
                preview.points = flatten(&sample_quadratic_bezier(*start, control, pos));
            }
            DrawState::Circle { anchor, shape } => {
                shape.radius = anchor.distance(pos);
            }
            DrawState::Rect { anchor, shape } => {
                shape.width = pos.x - anchor.x;
                shape.height = pos.y - anchor.y;
            }
            DrawState::Polygon { vertices, shape } => {
                if vertices.is_empty() {
                    return;
                }
                // Provisional trailing point: rebuilt from the vertex
                // list every move, so it never accumulates.
                let mut points = flatten(vertices);
                points.push(pos.x);
                points.push(pos.y);
                shape.points = points;
            }
        }
    }

    /// Discard the in-progress element unconditionally.
    pub fn cancel(&mut self) {
        self.state = DrawState::Idle;
    }

    /// Preview geometry for the renderer, if a gesture is active.
    pub fn preview(&self) -> Option<Preview> {
        match &self.state {
            DrawState::Idle => None,
            DrawState::Line { segment } => Some(Preview {
                element: Element::Line(segment.clone()),
                control_point: None,
                anchor_point: Some(segment.start()),
            }),
            DrawState::Curve {
                start,
                control,
                preview,
            } => Some(Preview {
                element: Element::Curve(preview.clone()),
                control_point: *control,
                anchor_point: Some(*start),
            }),
            DrawState::Circle { anchor, shape } => Some(Preview {
                element: Element::Circle(shape.clone()),
                control_point: None,
                anchor_point: Some(*anchor),
            }),
            DrawState::Rect { anchor, shape } => Some(Preview {
                element: Element::Rect(shape.clone()),
                control_point: None,
                anchor_point: Some(*anchor),
            }),
            DrawState::Polygon { vertices, shape } => Some(Preview {
                element: Element::Polygon(shape.clone()),
                control_point: None,
                anchor_point: vertices.first().copied(),
            }),
        }
    }

    fn press_line(&mut self, pos: Point, settings: &ToolSettings) -> Option<Element> {
        match std::mem::take(&mut self.state) {
            // Second click: commit the buffer as-is. The endpoint was
            // set by the last move, not by this click's position.
            DrawState::Line { segment } => Some(Element::Line(segment)),
            _ => {
                let segment = LineSegment::new(
                    [pos.x, pos.y, pos.x, pos.y],
                    settings.color,
                    settings.stroke_width,
                );
                self.state = DrawState::Line { segment };
                None
            }
        }
    }

    fn press_curve(&mut self, pos: Point, settings: &ToolSettings) -> Option<Element> {
        match std::mem::take(&mut self.state) {
            // Third click: bake the curve and commit. Styled with the
            // toolbar values in effect now.
            DrawState::Curve {
                start,
                control: Some(control),
                ..
            } => {
                let samples = sample_quadratic_bezier(start, control, pos);
                Some(Element::Curve(Curve::from_samples(
                    &samples,
                    settings.color,
                    settings.stroke_width,
                )))
            }
            // Second click: fix the control point, stay uncommitted.
            DrawState::Curve {
                start,
                control: None,
                preview,
            } => {
                self.state = DrawState::Curve {
                    start,
                    control: Some(pos),
                    preview,
                };
                None
            }
            _ => {
                let preview = Curve::new(vec![pos.x, pos.y], settings.color, settings.stroke_width);
                self.state = DrawState::Curve {
                    start: pos,
                    control: None,
                    preview,
                };
                None
            }
        }
    }

    fn press_circle(&mut self, pos: Point, settings: &ToolSettings) -> Option<Element> {
        match std::mem::take(&mut self.state) {
            DrawState::Circle { mut shape, .. } => {
                shape.complete = true;
                Some(Element::Circle(shape))
            }
            _ => {
                let shape = CircleShape::new(pos, settings.color, settings.stroke_width);
                self.state = DrawState::Circle { anchor: pos, shape };
                None
            }
        }
    }

    fn press_rect(&mut self, pos: Point, settings: &ToolSettings) -> Option<Element> {
        match std::mem::take(&mut self.state) {
            DrawState::Rect { mut shape, .. } => {
                shape.complete = true;
                Some(Element::Rect(shape))
            }
            _ => {
                let shape = RectShape::new(pos, settings.color, settings.stroke_width);
                self.state = DrawState::Rect { anchor: pos, shape };
                None
            }
        }
    }

    fn press_polygon(&mut self, pos: Point, settings: &ToolSettings) -> Option<Element> {
        match std::mem::take(&mut self.state) {
            DrawState::Polygon {
                mut vertices,
                mut shape,
            } => {
                let closing =
                    vertices.len() > 2 && vertices[0].distance(pos) < SNAP_THRESHOLD;
                if closing {
                    // Close the ring back to the first vertex; the click
                    // position itself is not part of the ring.
                    let mut points = flatten(&vertices);
                    points.push(vertices[0].x);
                    points.push(vertices[0].y);
                    shape.points = points;
                    shape.complete = true;
                    Some(Element::Polygon(shape))
                } else {
                    vertices.push(pos);
                    shape.points = flatten(&vertices);
                    self.state = DrawState::Polygon { vertices, shape };
                    None
                }
            }
            _ => {
                let shape =
                    PolygonShape::new(vec![pos.x, pos.y], settings.color, settings.stroke_width);
                self.state = DrawState::Polygon {
                    vertices: vec![pos],
                    shape,
                };
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(tool: ToolKind) -> ToolSettings {
        ToolSettings {
            tool,
            ..ToolSettings::default()
        }
    }

    #[test]
    fn test_line_two_click_commit() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Line);

        assert!(tc.press(Point::new(10.0, 10.0), &cfg).is_none());
        assert!(tc.is_active());

        tc.motion(Point::new(50.0, 60.0));
        let element = tc.press(Point::new(50.0, 60.0), &cfg).unwrap();

        match element {
            Element::Line(line) => assert_eq!(line.points, [10.0, 10.0, 50.0, 60.0]),
            other => panic!("expected line, got {other:?}"),
        }
        assert!(!tc.is_active());
    }

    #[test]
    fn test_line_without_move_commits_degenerate() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Line);

        tc.press(Point::new(5.0, 5.0), &cfg);
        let element = tc.press(Point::new(5.0, 5.0), &cfg).unwrap();
        match element {
            Element::Line(line) => assert_eq!(line.points, [5.0, 5.0, 5.0, 5.0]),
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_line_commit_uses_buffer_not_click_position() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Line);

        tc.press(Point::new(0.0, 0.0), &cfg);
        tc.motion(Point::new(30.0, 30.0));
        // Click lands elsewhere without an intervening move.
        let Element::Line(line) = tc.press(Point::new(99.0, 99.0), &cfg).unwrap() else {
            panic!("expected line");
        };
        assert_eq!(line.points, [0.0, 0.0, 30.0, 30.0]);
    }

    #[test]
    fn test_curve_three_phase_protocol() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Curve);

        assert!(tc.press(Point::new(0.0, 0.0), &cfg).is_none());
        tc.motion(Point::new(25.0, 80.0));
        assert!(tc.press(Point::new(50.0, 100.0), &cfg).is_none());
        assert!(tc.is_active());
        tc.motion(Point::new(80.0, 20.0));

        let element = tc.press(Point::new(100.0, 0.0), &cfg).unwrap();
        let Element::Curve(curve) = element else {
            panic!("expected curve");
        };
        assert_eq!(curve.point_count(), crate::geometry::BEZIER_SEGMENTS + 1);
        assert_eq!(&curve.points[..2], &[0.0, 0.0]);
        assert_eq!(&curve.points[curve.points.len() - 2..], &[100.0, 0.0]);
        assert!(!tc.is_active());
    }

    #[test]
    fn test_curve_preview_tracks_pointer_as_control_until_fixed() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Curve);

        tc.press(Point::new(0.0, 0.0), &cfg);
        tc.motion(Point::new(100.0, 0.0));
        let before = tc.preview().unwrap();
        // With control == endpoint the sampled curve stays on the segment.
        let Element::Curve(curve) = &before.element else {
            panic!("expected curve preview");
        };
        assert!(curve.points.iter().skip(1).step_by(2).all(|y| *y == 0.0));
        assert!(before.control_point.is_none());

        tc.press(Point::new(50.0, 100.0), &cfg);
        let after = tc.preview().unwrap();
        assert_eq!(after.control_point, Some(Point::new(50.0, 100.0)));
    }

    #[test]
    fn test_circle_radius_tracks_pointer() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Circle);

        tc.press(Point::new(0.0, 0.0), &cfg);
        tc.motion(Point::new(3.0, 4.0));

        let Element::Circle(circle) = tc.press(Point::new(3.0, 4.0), &cfg).unwrap() else {
            panic!("expected circle");
        };
        assert_eq!(circle.center, Point::ZERO);
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
        assert!(circle.complete);
    }

    #[test]
    fn test_circle_zero_radius_commit_allowed() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Circle);

        tc.press(Point::new(10.0, 10.0), &cfg);
        let Element::Circle(circle) = tc.press(Point::new(10.0, 10.0), &cfg).unwrap() else {
            panic!("expected circle");
        };
        assert_eq!(circle.radius, 0.0);
        assert!(circle.complete);
    }

    #[test]
    fn test_rectangle_negative_drag() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Rectangle);

        tc.press(Point::new(50.0, 50.0), &cfg);
        tc.motion(Point::new(10.0, 20.0));

        let Element::Rect(rect) = tc.press(Point::new(10.0, 20.0), &cfg).unwrap() else {
            panic!("expected rectangle");
        };
        assert_eq!(rect.origin, Point::new(50.0, 50.0));
        assert_eq!(rect.width, -40.0);
        assert_eq!(rect.height, -30.0);
        assert!(rect.complete);
    }

    #[test]
    fn test_polygon_closure_snaps_to_first_vertex() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Polygon);

        assert!(tc.press(Point::new(0.0, 0.0), &cfg).is_none());
        assert!(tc.press(Point::new(100.0, 0.0), &cfg).is_none());
        assert!(tc.press(Point::new(100.0, 100.0), &cfg).is_none());

        // (3, 3) is within SNAP_THRESHOLD of the first vertex.
        let Element::Polygon(poly) = tc.press(Point::new(3.0, 3.0), &cfg).unwrap() else {
            panic!("expected polygon");
        };
        assert_eq!(
            poly.points,
            vec![0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 0.0]
        );
        assert!(poly.complete);
        assert!(poly.is_closed());
        assert!(!tc.is_active());
    }

    #[test]
    fn test_polygon_needs_three_vertices_to_close() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Polygon);

        tc.press(Point::new(0.0, 0.0), &cfg);
        tc.press(Point::new(100.0, 0.0), &cfg);
        // Near the first vertex, but only two vertices exist: appended,
        // not closed.
        assert!(tc.press(Point::new(2.0, 2.0), &cfg).is_none());
        assert!(tc.is_active());
    }

    #[test]
    fn test_polygon_provisional_move_point_not_accumulated() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Polygon);

        tc.press(Point::new(0.0, 0.0), &cfg);
        tc.press(Point::new(100.0, 0.0), &cfg);
        tc.motion(Point::new(50.0, 50.0));
        tc.motion(Point::new(60.0, 60.0));
        tc.motion(Point::new(70.0, 70.0));

        let Element::Polygon(poly) = tc.preview().unwrap().element else {
            panic!("expected polygon preview");
        };
        // Two clicked vertices plus exactly one provisional point.
        assert_eq!(poly.points, vec![0.0, 0.0, 100.0, 0.0, 70.0, 70.0]);
    }

    #[test]
    fn test_motion_while_idle_is_noop() {
        let mut tc = ToolController::new();
        tc.motion(Point::new(42.0, 42.0));
        assert!(!tc.is_active());
        assert!(tc.preview().is_none());
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut tc = ToolController::new();
        let cfg = settings(ToolKind::Rectangle);

        tc.press(Point::new(0.0, 0.0), &cfg);
        assert!(tc.is_active());
        tc.cancel();
        assert!(!tc.is_active());
        assert!(tc.preview().is_none());
    }

    #[test]
    fn test_style_captured_at_first_click() {
        let mut tc = ToolController::new();
        let mut cfg = settings(ToolKind::Line);
        cfg.color = Rgba::from_hex("#ff0000");

        tc.press(Point::new(0.0, 0.0), &cfg);
        cfg.color = Rgba::from_hex("#00ff00");
        tc.motion(Point::new(10.0, 10.0));

        let element = tc.press(Point::new(10.0, 10.0), &cfg).unwrap();
        assert_eq!(element.stroke(), Rgba::from_hex("#ff0000"));
    }
}
