//! Plain container with absolutely placed children.

use std::any::Any;
use tronic_core::{
    dispatch_to_children, Canvas, Color, Constraints, Event, EventContext, LayoutResult,
    PaintScope, Point, Rect, Size, Widget, WidgetHandle, WidgetId,
};

/// Container that places each child at its own location.
///
/// Children are laid out at `panel origin + child.location()` with their
/// measured size. A panel does not react to children switching on.
#[derive(Default)]
pub struct Panel {
    /// Identity, placement and redraw state
    handle: WidgetHandle,
    /// Background color
    background: Option<Color>,
    /// Requested size
    size: Option<Size>,
    /// Children widgets
    children: Vec<Box<dyn Widget>>,
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.handle.id())
            .field("background", &self.background)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Panel {
    /// Create a new empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Request a size.
    #[must_use]
    pub const fn size(mut self, width: i32, height: i32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Place the panel inside its parent.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.handle.set_location(Point::new(x, y));
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.handle.set_test_id(id);
        self
    }

    /// Get the background color.
    #[must_use]
    pub const fn get_background(&self) -> Option<Color> {
        self.background
    }

    /// Append a child after construction.
    pub fn add_child(&mut self, widget: Box<dyn Widget>) {
        self.children.push(widget);
        self.handle.request_redraw();
    }

    /// Remove the child with `id`, returning it.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.children.iter().position(|c| c.id() == id)?;
        self.handle.request_redraw();
        Some(self.children.remove(index))
    }

    /// Change the background color.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
        self.handle.request_redraw();
    }
}

impl Widget for Panel {
    fn id(&self) -> WidgetId {
        self.handle.id()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let mut extent = self.size.unwrap_or(Size::ZERO);
        for child in &self.children {
            let size = child.measure(Constraints::unbounded());
            let at = child.location();
            extent = extent.max(Size::new(
                at.x.saturating_add(size.width),
                at.y.saturating_add(size.height),
            ));
        }
        constraints.constrain(extent)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        if self.handle.set_bounds(bounds) {
            self.handle.request_redraw();
        }

        let origin = bounds.origin();
        for child in &mut self.children {
            let size = child.measure(Constraints::unbounded());
            let at = child.location();
            child.layout(Rect::from_origin_size(origin.offset(at.x, at.y), size));
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(color) = self.background {
            let mut scope = PaintScope::new(canvas, self.handle.bounds().origin());
            scope.fill_rect(self.handle.client_rect(), color);
        }

        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event, _ctx: &mut EventContext) -> Option<Box<dyn Any + Send>> {
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

    fn test_id(&self) -> Option<&str> {
        self.handle.test_id()
    }

    fn bounds(&self) -> Rect {
        self.handle.bounds()
    }

    fn location(&self) -> Point {
        self.handle.location()
    }
}
