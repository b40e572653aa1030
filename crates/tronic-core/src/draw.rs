//! Draw commands.
//!
//! All rendering reduces to these primitives. A [`crate::RecordingCanvas`]
//! produces them; a real backend rasterizes the same calls directly.

use crate::image::ImageHandle;
use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Line style of a border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    /// No border
    None,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
    /// Solid line
    #[default]
    Solid,
    /// Sunken 3D edge
    Inset,
    /// Raised 3D edge
    Outset,
}

/// One edge of a rectangle border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderEdge {
    /// Edge color
    pub color: Color,
    /// Edge thickness in pixels (not validated)
    pub width: i32,
    /// Line style
    pub style: BorderStyle,
}

impl BorderEdge {
    /// Create a border edge.
    #[must_use]
    pub const fn new(color: Color, width: i32, style: BorderStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }
}

/// Per-edge border description, in left, top, right, bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderEdges {
    /// Left edge
    pub left: BorderEdge,
    /// Top edge
    pub top: BorderEdge,
    /// Right edge
    pub right: BorderEdge,
    /// Bottom edge
    pub bottom: BorderEdge,
}

impl BorderEdges {
    /// Same edge on all four sides.
    #[must_use]
    pub const fn uniform(edge: BorderEdge) -> Self {
        Self {
            left: edge,
            top: edge,
            right: edge,
            bottom: edge,
        }
    }

    /// `near` on the left and top edges, `far` on the right and bottom edges.
    #[must_use]
    pub const fn two_tone(near: BorderEdge, far: BorderEdge) -> Self {
        Self {
            left: near,
            top: near,
            right: far,
            bottom: far,
        }
    }
}

/// Alignment along one axis of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Left or top
    #[default]
    Near,
    /// Centered
    Center,
    /// Right or bottom
    Far,
}

/// Placement of text inside its layout rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAlign {
    /// Horizontal alignment
    pub horizontal: Alignment,
    /// Vertical alignment
    pub vertical: Alignment,
}

impl TextAlign {
    /// Centered on both axes.
    pub const CENTERED: Self = Self {
        horizontal: Alignment::Center,
        vertical: Alignment::Center,
    };
}

/// Integer translation applied to subsequent draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transform2D {
    /// Translation offset
    pub offset: Point,
}

impl Transform2D {
    /// Identity transformation.
    pub const IDENTITY: Self = Self {
        offset: Point::ORIGIN,
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: i32, y: i32) -> Self {
        Self {
            offset: Point::new(x, y),
        }
    }

    /// Chain transforms: first apply self, then apply other.
    #[must_use]
    pub const fn then(&self, other: &Self) -> Self {
        Self::translate(
            self.offset.x + other.offset.x,
            self.offset.y + other.offset.y,
        )
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Drop any clip region inherited from the caller
    ResetClip,

    /// Fill a rectangle with a solid color
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },

    /// Draw an image stretched to the bounds
    Image {
        /// Image to draw
        image: ImageHandle,
        /// Destination bounds
        bounds: Rect,
    },

    /// Draw a per-edge border just inside the bounds
    Border {
        /// Rectangle bounds
        bounds: Rect,
        /// Edge descriptions
        edges: BorderEdges,
    },

    /// Draw text laid out in a rectangle
    Text {
        /// Text content
        content: String,
        /// Layout rectangle
        bounds: Rect,
        /// Text style
        style: TextStyle,
        /// Alignment inside the rectangle
        align: TextAlign,
    },

    /// Fill a closed polygon
    Polygon {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Fill color
        color: Color,
        /// Whether edges are anti-aliased
        antialias: bool,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::FillRect { bounds, color }
    }

    /// Create a border with the same edge on every side.
    #[must_use]
    pub const fn uniform_border(bounds: Rect, edge: BorderEdge) -> Self {
        Self::Border {
            bounds,
            edges: BorderEdges::uniform(edge),
        }
    }

    /// Bounding rectangle touched by this command, if it has one.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::ResetClip => None,
            Self::FillRect { bounds, .. }
            | Self::Image { bounds, .. }
            | Self::Border { bounds, .. }
            | Self::Text { bounds, .. } => Some(*bounds),
            Self::Polygon { points, .. } => {
                let first = points.first()?;
                let (mut min, mut max) = (*first, *first);
                for p in points {
                    min = Point::new(min.x.min(p.x), min.y.min(p.y));
                    max = Point::new(max.x.max(p.x), max.y.max(p.y));
                }
                Some(Rect::from_points(min, max))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_default_is_solid() {
        assert_eq!(BorderStyle::default(), BorderStyle::Solid);
    }

    #[test]
    fn test_two_tone_edges() {
        let near = BorderEdge::new(Color::BLACK, 2, BorderStyle::Outset);
        let far = BorderEdge::new(Color::WHITE, 1, BorderStyle::Solid);
        let edges = BorderEdges::two_tone(near, far);
        assert_eq!(edges.left, near);
        assert_eq!(edges.top, near);
        assert_eq!(edges.right, far);
        assert_eq!(edges.bottom, far);
    }

    #[test]
    fn test_transform_then() {
        let t = Transform2D::translate(5, 5).then(&Transform2D::translate(-2, 3));
        assert_eq!(t, Transform2D::translate(3, 8));
        assert_eq!(Transform2D::IDENTITY.then(&t), t);
    }

    #[test]
    fn test_text_align_centered() {
        assert_eq!(TextAlign::CENTERED.horizontal, Alignment::Center);
        assert_eq!(TextAlign::CENTERED.vertical, Alignment::Center);
        assert_eq!(TextAlign::default().horizontal, Alignment::Near);
    }

    #[test]
    fn test_command_bounds() {
        assert_eq!(DrawCommand::ResetClip.bounds(), None);
        let rect = Rect::new(1, 2, 3, 4);
        assert_eq!(DrawCommand::filled_rect(rect, Color::RED).bounds(), Some(rect));

        let polygon = DrawCommand::Polygon {
            points: vec![
                Point::new(0, 0),
                Point::new(0, 19),
                Point::new(18, 19),
                Point::new(19, 0),
            ],
            color: Color::BLUE,
            antialias: true,
        };
        assert_eq!(polygon.bounds(), Some(Rect::new(0, 0, 19, 19)));

        let empty = DrawCommand::Polygon {
            points: Vec::new(),
            color: Color::BLUE,
            antialias: false,
        };
        assert_eq!(empty.bounds(), None);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::uniform_border(
            Rect::new(0, 0, 40, 20),
            BorderEdge::new(Color::BLACK, 1, BorderStyle::Dashed),
        );
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("Dashed"));
        assert!(json.contains("#000000"));
    }
}
