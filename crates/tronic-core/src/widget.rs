//! Widget trait and related types.
//!
//! This module defines the core `Widget` trait and supporting types for building
//! controls hosted by a retained widget tree.
//!
//! # Widget Lifecycle
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self and children within allocated bounds
//! 3. **Paint**: Issue draw calls against a [`Canvas`]
//!
//! Between frames the host forwards input through [`Widget::event`] and drains
//! repaint requests with [`collect_redraws`]. Widgets never paint on their own.
//!
//! # Examples
//!
//! ```
//! use tronic_core::{WidgetId, Font, FontWeight};
//!
//! let a = WidgetId::next();
//! let b = WidgetId::next();
//! assert_ne!(a, b);
//!
//! let bold = Font::default().with_weight(FontWeight::Bold);
//! assert_eq!(bold.weight, FontWeight::Bold);
//! ```

use crate::constraints::Constraints;
use crate::draw::{BorderEdges, Transform2D};
use crate::event::{Event, EventContext};
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageHandle;
use crate::{Color, TextAlign};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a widget ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-unique widget ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Capability a container exposes to children that want to announce they are
/// turning on.
pub trait ChildActivation {
    /// `child` (a direct child) is switching on.
    fn child_activated(&mut self, child: WidgetId);
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Instance identifier.
    fn id(&self) -> WidgetId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self and children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Issue draw calls for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event.
    fn event(&mut self, event: &Event, ctx: &mut EventContext) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Take (and clear) this widget's pending redraw request.
    fn take_redraw(&mut self) -> bool;

    /// Upcast for safe downcasting to a concrete widget type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for safe downcasting to a concrete widget type.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Smallest size layout may give this widget.
    fn min_size(&self) -> Size {
        Size::ZERO
    }

    /// Child-activation capability, when this widget is a container that
    /// reacts to children switching on.
    fn as_child_activation(&mut self) -> Option<&mut dyn ChildActivation> {
        None
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }

    /// Requested position inside the parent, for absolute-placement containers.
    fn location(&self) -> Point {
        Point::ORIGIN
    }
}

/// Forward `event` to every child of `parent` until one produces a message.
///
/// Each child gets its own [`EventContext`] telling it whether `parent` accepts
/// child activations. A recorded activation is delivered to the parent right
/// after that child returns, before the next child sees the event.
pub fn dispatch_to_children<W: Widget + ?Sized>(
    parent: &mut W,
    event: &Event,
) -> Option<Box<dyn Any + Send>> {
    let accepts = parent.as_child_activation().is_some();
    let count = parent.children().len();

    for index in 0..count {
        let mut ctx = EventContext::for_child(accepts);
        let message = parent.children_mut()[index].event(event, &mut ctx);

        if let Some(child) = ctx.take_activation() {
            if let Some(target) = parent.as_child_activation() {
                target.child_activated(child);
            }
        }

        if message.is_some() {
            return message;
        }
    }
    None
}

/// Drain pending redraw requests from `root` and all its descendants.
///
/// Returns the ids of widgets that asked to be repainted, parents before
/// children.
pub fn collect_redraws(root: &mut dyn Widget) -> Vec<WidgetId> {
    let mut out = Vec::new();
    collect_into(root, &mut out);
    out
}

fn collect_into(widget: &mut dyn Widget, out: &mut Vec<WidgetId>) {
    if widget.take_redraw() {
        out.push(widget.id());
    }
    for child in widget.children_mut() {
        collect_into(child.as_mut(), out);
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw an image stretched to `rect`.
    fn draw_image(&mut self, image: &ImageHandle, rect: Rect);

    /// Draw a border just inside `rect`, one description per edge.
    fn draw_border(&mut self, rect: Rect, edges: &BorderEdges);

    /// Draw text laid out in `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle, align: TextAlign);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Current anti-alias mode.
    fn antialias(&self) -> bool;

    /// Enable or disable anti-aliased edges for later fills.
    fn set_antialias(&mut self, enabled: bool);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);

    /// Drop every clip region pushed so far.
    fn reset_clip(&mut self);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

/// Font description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font size in pixels
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 12.0,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

impl Font {
    /// Same font at another size.
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Same font at another weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Text style for rendering.
///
/// # Examples
///
/// ```
/// use tronic_core::{Color, Font, TextStyle};
///
/// let style = TextStyle::new(Font::default(), Color::RED);
/// assert_eq!(style.font.size, 12.0);
/// assert_eq!(style.color, Color::RED);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font
    pub font: Font,
    /// Text color
    pub color: Color,
}

impl TextStyle {
    /// Create a text style.
    #[must_use]
    pub const fn new(font: Font, color: Color) -> Self {
        Self { font, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Font::default(), Color::BLACK)
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    Normal,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    /// Normal style
    Normal,
    /// Italic style
    Italic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::WidgetHandle;

    #[test]
    fn test_widget_id_eq() {
        assert_eq!(WidgetId::new(1), WidgetId::new(1));
        assert_ne!(WidgetId::new(1), WidgetId::new(2));
    }

    #[test]
    fn test_widget_id_next_is_unique() {
        let ids: Vec<_> = (0..64).map(|_| WidgetId::next()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_widget_id_display() {
        assert_eq!(WidgetId::new(12).to_string(), "#12");
    }

    #[test]
    fn test_font_builders() {
        let f = Font::default().with_size(18.0).with_weight(FontWeight::Light);
        assert_eq!(f.size, 18.0);
        assert_eq!(f.weight, FontWeight::Light);
        assert_eq!(f.style, FontStyle::Normal);
    }

    // Minimal tree for exercising dispatch and redraw collection.
    struct Leaf {
        handle: WidgetHandle,
        activate: bool,
    }

    impl Widget for Leaf {
        fn id(&self) -> WidgetId {
            self.handle.id()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(10, 10))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            self.handle.set_bounds(b);
            LayoutResult { size: b.size() }
        }
        fn paint(&self, _: &mut dyn Canvas) {}
        fn event(&mut self, _: &Event, ctx: &mut EventContext) -> Option<Box<dyn Any + Send>> {
            self.handle.request_redraw();
            if self.activate {
                ctx.notify_child_activated(self.handle.id());
            }
            None
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &[]
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut []
        }
        fn take_redraw(&mut self) -> bool {
            self.handle.take_redraw()
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct Parent {
        handle: WidgetHandle,
        accepts: bool,
        activations: Vec<WidgetId>,
        children: Vec<Box<dyn Widget>>,
    }

    impl ChildActivation for Parent {
        fn child_activated(&mut self, child: WidgetId) {
            self.activations.push(child);
        }
    }

    impl Widget for Parent {
        fn id(&self) -> WidgetId {
            self.handle.id()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::ZERO)
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            LayoutResult { size: b.size() }
        }
        fn paint(&self, _: &mut dyn Canvas) {}
        fn event(&mut self, event: &Event, _: &mut EventContext) -> Option<Box<dyn Any + Send>> {
            dispatch_to_children(self, event)
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &self.children
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut self.children
        }
        fn take_redraw(&mut self) -> bool {
            self.handle.take_redraw()
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
        fn as_child_activation(&mut self) -> Option<&mut dyn ChildActivation> {
            if self.accepts {
                Some(self)
            } else {
                None
            }
        }
    }

    fn tree(accepts: bool) -> (Parent, WidgetId, WidgetId) {
        let a = Leaf {
            handle: WidgetHandle::new(),
            activate: true,
        };
        let b = Leaf {
            handle: WidgetHandle::new(),
            activate: false,
        };
        let (ida, idb) = (a.id(), b.id());
        let parent = Parent {
            handle: WidgetHandle::new(),
            accepts,
            activations: Vec::new(),
            children: vec![Box::new(a), Box::new(b)],
        };
        (parent, ida, idb)
    }

    #[test]
    fn test_dispatch_delivers_activation_to_capable_parent() {
        let (mut parent, ida, _) = tree(true);
        let msg = parent.event(&Event::click(Point::ORIGIN), &mut EventContext::root());
        assert!(msg.is_none());
        assert_eq!(parent.activations, vec![ida]);
    }

    #[test]
    fn test_dispatch_skips_activation_for_plain_parent() {
        let (mut parent, _, _) = tree(false);
        parent.event(&Event::click(Point::ORIGIN), &mut EventContext::root());
        assert!(parent.activations.is_empty());
    }

    #[test]
    fn test_collect_redraws_drains_depth_first() {
        let (mut parent, ida, idb) = tree(false);
        parent.handle.request_redraw();
        parent.event(&Event::click(Point::ORIGIN), &mut EventContext::root());

        let ids = collect_redraws(&mut parent);
        assert_eq!(ids, vec![parent.id(), ida, idb]);
        assert!(collect_redraws(&mut parent).is_empty());
    }
}
