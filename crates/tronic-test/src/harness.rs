//! Test harness for Tronic widget trees.
//!
//! Widgets are looked up by their test id. The harness owns the root, lays it
//! out over a viewport, and plays the host: it delivers clicks, collects the
//! messages widgets return, drains redraw requests and paints into a
//! [`RecordingCanvas`].

use std::any::Any;
use std::collections::VecDeque;
use tronic_core::{
    collect_redraws, Event, EventContext, Point, Rect, RecordingCanvas, Widget, WidgetId,
};

/// Test harness for interacting with Tronic widgets.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the tree, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport
    viewport: Rect,
}

impl Harness {
    /// Create a harness around `root` and lay it out over a 640x480 viewport.
    pub fn new(root: impl Widget + 'static) -> Self {
        let mut harness = Self {
            root: Box::new(root),
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0, 0, 640, 480),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the tree out again.
    #[must_use]
    pub fn viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Rect::new(0, 0, width, height);
        self.relayout();
        self
    }

    /// Lay the root out over the viewport.
    pub fn relayout(&mut self) -> &mut Self {
        self.root.layout(self.viewport);
        self
    }

    // === Event Simulation ===

    /// Simulate a primary click at the centre of the widget with `test_id`.
    ///
    /// Does nothing when no such widget exists.
    pub fn click(&mut self, test_id: &str) -> &mut Self {
        if let Some(bounds) = self.query_bounds(test_id) {
            self.event_queue.push_back(Event::click(bounds.center()));
            self.process_events();
        }
        self
    }

    /// Simulate a primary click at a tree position.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::click(position));
        self.process_events();
        self
    }

    /// Deliver an arbitrary event to the root.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Queries ===

    /// Find the widget with `test_id`.
    #[must_use]
    pub fn query(&self, test_id: &str) -> Option<&dyn Widget> {
        find_widget(self.root.as_ref(), test_id)
    }

    /// Find the widget with `test_id` as a concrete type.
    #[must_use]
    pub fn widget<T: Widget + 'static>(&self, test_id: &str) -> Option<&T> {
        self.query(test_id)?.as_any().downcast_ref::<T>()
    }

    /// Find the widget with `test_id` as a mutable concrete type.
    pub fn widget_mut<T: Widget + 'static>(&mut self, test_id: &str) -> Option<&mut T> {
        find_widget_mut(self.root.as_mut(), test_id)?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, test_id: &str) -> bool {
        self.query(test_id).is_some()
    }

    /// The root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        self.root.as_ref()
    }

    // === Host Side ===

    /// Take every message of type `T` returned so far, oldest first.
    ///
    /// Messages of other types stay queued.
    pub fn take_messages<T: 'static>(&mut self) -> Vec<T> {
        let mut taken = Vec::new();
        let mut kept = Vec::new();
        for message in self.messages.drain(..) {
            match message.downcast::<T>() {
                Ok(value) => taken.push(*value),
                Err(other) => kept.push(other),
            }
        }
        self.messages = kept;
        taken
    }

    /// Drain pending redraw requests from the whole tree.
    pub fn take_redraws(&mut self) -> Vec<WidgetId> {
        collect_redraws(self.root.as_mut())
    }

    /// Paint the tree into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, test_id: &str) -> &Self {
        assert!(
            self.exists(test_id),
            "Expected widget with test id '{test_id}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, test_id: &str) -> &Self {
        assert!(
            !self.exists(test_id),
            "Expected widget with test id '{test_id}' to not exist"
        );
        self
    }

    /// Assert that the next redraw drain contains exactly the given widgets.
    ///
    /// # Panics
    ///
    /// Panics if the drained ids differ from the ids of `test_ids`.
    pub fn assert_redraws(&mut self, test_ids: &[&str]) -> &mut Self {
        let mut expected: Vec<WidgetId> = test_ids
            .iter()
            .map(|id| match self.query(id) {
                Some(widget) => widget.id(),
                None => panic!("No widget with test id '{id}'"),
            })
            .collect();
        let mut actual = self.take_redraws();
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(
            actual, expected,
            "Expected redraws for {test_ids:?} but got {actual:?}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            let mut ctx = EventContext::root();
            if let Some(message) = self.root.event(&event, &mut ctx) {
                self.messages.push(message);
            }
        }
    }

    fn query_bounds(&self, test_id: &str) -> Option<Rect> {
        self.query(test_id).map(|w| w.bounds())
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, test_id: &str) -> Option<&'a dyn Widget> {
    if widget.test_id() == Some(test_id) {
        return Some(widget);
    }

    for child in widget.children() {
        if let Some(found) = find_widget(child.as_ref(), test_id) {
            return Some(found);
        }
    }

    None
}

fn find_widget_mut<'a>(widget: &'a mut dyn Widget, test_id: &str) -> Option<&'a mut dyn Widget> {
    if widget.test_id() == Some(test_id) {
        return Some(widget);
    }

    for child in widget.children_mut() {
        if let Some(found) = find_widget_mut(child.as_mut(), test_id) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tronic_core::{
        dispatch_to_children, Canvas, Color, Constraints, LayoutResult, Size, WidgetHandle,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Clicked(WidgetId);

    // Mock widget for testing
    struct MockWidget {
        handle: WidgetHandle,
        size: Size,
        clicks: usize,
        children: Vec<Box<dyn Widget>>,
    }

    impl MockWidget {
        fn new() -> Self {
            Self {
                handle: WidgetHandle::new(),
                size: Size::new(10, 10),
                clicks: 0,
                children: Vec::new(),
            }
        }

        fn with_test_id(mut self, id: &str) -> Self {
            self.handle.set_test_id(id);
            self
        }

        fn at(mut self, x: i32, y: i32) -> Self {
            self.handle.set_location(Point::new(x, y));
            self
        }

        fn with_child(mut self, child: MockWidget) -> Self {
            self.children.push(Box::new(child));
            self
        }
    }

    impl Widget for MockWidget {
        fn id(&self) -> WidgetId {
            self.handle.id()
        }

        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(self.size)
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            let at = self.handle.location();
            let own = Rect::from_origin_size(bounds.origin().offset(at.x, at.y), self.size);
            if self.handle.set_bounds(own) {
                self.handle.request_redraw();
            }
            for child in &mut self.children {
                child.layout(own);
            }
            LayoutResult { size: self.size }
        }

        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rect(self.handle.bounds(), Color::BLACK);
            for child in &self.children {
                child.paint(canvas);
            }
        }

        fn event(
            &mut self,
            event: &Event,
            _ctx: &mut EventContext,
        ) -> Option<Box<dyn Any + Send>> {
            if let Some(message) = dispatch_to_children(self, event) {
                return Some(message);
            }
            match event {
                Event::Click { position, .. } if self.handle.bounds().contains_point(position) => {
                    self.clicks += 1;
                    self.handle.request_redraw();
                    Some(Box::new(Clicked(self.handle.id())))
                }
                _ => None,
            }
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
    }

    fn tree() -> MockWidget {
        MockWidget::new()
            .with_test_id("root")
            .with_child(MockWidget::new().with_test_id("left").at(0, 0))
            .with_child(MockWidget::new().with_test_id("right").at(20, 0))
    }

    #[test]
    fn test_harness_lays_out_root() {
        let harness = Harness::new(tree());
        assert_eq!(harness.root().bounds(), Rect::new(0, 0, 10, 10));
        assert_eq!(
            harness.query("right").unwrap().bounds(),
            Rect::new(20, 0, 10, 10)
        );
    }

    #[test]
    fn test_query_and_exists() {
        let harness = Harness::new(tree());
        harness
            .assert_exists("root")
            .assert_exists("left")
            .assert_not_exists("missing");
        assert!(harness.widget::<MockWidget>("left").is_some());
    }

    #[test]
    fn test_click_by_test_id_delivers_message() {
        let mut harness = Harness::new(tree());
        let right = harness.query("right").unwrap().id();
        harness.click("right");

        assert_eq!(harness.take_messages::<Clicked>(), vec![Clicked(right)]);
        assert_eq!(harness.widget::<MockWidget>("right").unwrap().clicks, 1);
        assert_eq!(harness.widget::<MockWidget>("left").unwrap().clicks, 0);
    }

    #[test]
    fn test_click_missing_widget_is_noop() {
        let mut harness = Harness::new(tree());
        harness.click("missing");
        assert!(harness.take_messages::<Clicked>().is_empty());
    }

    #[test]
    fn test_take_messages_keeps_other_types() {
        let mut harness = Harness::new(tree());
        harness.click("left");
        assert!(harness.take_messages::<u32>().is_empty());
        assert_eq!(harness.take_messages::<Clicked>().len(), 1);
    }

    #[test]
    fn test_take_redraws_drains_tree() {
        let mut harness = Harness::new(tree());
        // First layout changed every bounds.
        assert_eq!(harness.take_redraws().len(), 3);
        assert!(harness.take_redraws().is_empty());

        harness.click("left");
        harness.assert_redraws(&["left"]);
    }

    #[test]
    fn test_widget_mut() {
        let mut harness = Harness::new(tree());
        harness.widget_mut::<MockWidget>("left").unwrap().clicks = 7;
        assert_eq!(harness.widget::<MockWidget>("left").unwrap().clicks, 7);
        assert!(harness.widget_mut::<MockWidget>("missing").is_none());
    }

    #[test]
    fn test_paint_records_tree() {
        let harness = Harness::new(tree());
        assert_eq!(harness.paint().command_count(), 3);
    }

    #[test]
    fn test_viewport_relayouts() {
        let harness = Harness::new(MockWidget::new().at(5, 5)).viewport(100, 100);
        assert_eq!(harness.root().bounds(), Rect::new(5, 5, 10, 10));
    }

    #[test]
    fn test_send_other_event() {
        let mut harness = Harness::new(tree());
        harness.send(Event::Resize {
            width: 1,
            height: 1,
        });
        assert!(harness.take_messages::<Clicked>().is_empty());
    }

    proptest! {
        #[test]
        fn take_messages_preserves_order_per_type(
            kinds in prop::collection::vec(any::<bool>(), 0..30),
        ) {
            let mut harness = Harness::new(MockWidget::new());
            let mut numbers = Vec::new();
            let mut clicks = Vec::new();
            for (i, is_number) in (0u32..).zip(&kinds) {
                if *is_number {
                    numbers.push(i);
                    harness.messages.push(Box::new(i));
                } else {
                    clicks.push(Clicked(WidgetId::new(u64::from(i))));
                    harness.messages.push(Box::new(Clicked(WidgetId::new(u64::from(i)))));
                }
            }

            prop_assert_eq!(harness.take_messages::<u32>(), numbers);
            prop_assert_eq!(harness.take_messages::<Clicked>(), clicks);
            prop_assert!(harness.messages.is_empty());
        }
    }
}
