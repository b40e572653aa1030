//! Container that keeps at most one of its toggle buttons on.

use crate::panel::Panel;
use crate::toggle_button::ToggleButton;
use std::any::Any;
use tronic_core::{
    dispatch_to_children, Canvas, ChildActivation, Color, Constraints, Event, EventContext,
    LayoutResult, Point, Rect, Size, Widget, WidgetId,
};

/// Panel whose direct [`ToggleButton`] children are mutually exclusive.
///
/// When a child toggle is clicked on, every other direct child toggle is
/// switched off. Nothing is enforced when children are added, removed or
/// changed programmatically, so a group may briefly hold several toggles that
/// are on until the next click. Children of other types are left alone.
#[derive(Debug, Default)]
pub struct ToggleButtonGroup {
    panel: Panel,
}

impl ToggleButtonGroup {
    /// Create a new empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.panel = self.panel.background(color);
        self
    }

    /// Request a size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.panel = self.panel.size(width, height);
        self
    }

    /// Place the group inside its parent.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.panel = self.panel.location(x, y);
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.panel = self.panel.child(widget);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.panel = self.panel.test_id(id);
        self
    }

    /// Get the background color.
    #[must_use]
    pub const fn get_background(&self) -> Option<Color> {
        self.panel.get_background()
    }

    /// Append a child after construction. Does not touch other toggles.
    pub fn add_child(&mut self, widget: Box<dyn Widget>) {
        self.panel.add_child(widget);
    }

    /// Remove the child with `id`, returning it.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.panel.remove_child(id)
    }

    /// Change the background color.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.panel.set_background(color);
    }

    /// Switch off every direct child toggle except `excluding`.
    ///
    /// Toggles are forced off and asked to redraw whatever their current state.
    pub fn validate_buttons(&mut self, excluding: WidgetId) {
        let group = self.panel.id();
        let mut reset = 0usize;
        for child in self.panel.children_mut() {
            let Some(button) = child.as_any_mut().downcast_mut::<ToggleButton>() else {
                continue;
            };
            if button.id() == excluding {
                continue;
            }
            log::trace!("group {group} resets toggle {}", button.id());
            button.set_on(false);
            reset += 1;
        }
        log::debug!("group {group} reset {reset} toggle(s) for {excluding}");
    }

    /// Ids of the direct child toggles that are currently on.
    #[must_use]
    pub fn active_buttons(&self) -> Vec<WidgetId> {
        self.panel
            .children()
            .iter()
            .filter_map(|c| c.as_any().downcast_ref::<ToggleButton>())
            .filter(|b| b.is_on())
            .map(Widget::id)
            .collect()
    }
}

impl ChildActivation for ToggleButtonGroup {
    fn child_activated(&mut self, child: WidgetId) {
        self.validate_buttons(child);
    }
}

impl Widget for ToggleButtonGroup {
    fn id(&self) -> WidgetId {
        self.panel.id()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.panel.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.panel.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.panel.paint(canvas);
    }

    fn event(&mut self, event: &Event, _ctx: &mut EventContext) -> Option<Box<dyn Any + Send>> {
        dispatch_to_children(self, event)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        self.panel.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        self.panel.children_mut()
    }

    fn take_redraw(&mut self) -> bool {
        self.panel.take_redraw()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_child_activation(&mut self) -> Option<&mut dyn ChildActivation> {
        Some(self)
    }

    fn test_id(&self) -> Option<&str> {
        Widget::test_id(&self.panel)
    }

    fn bounds(&self) -> Rect {
        self.panel.bounds()
    }

    fn location(&self) -> Point {
        Widget::location(&self.panel)
    }
}
