//! Per-widget state shared by every control: identity, placement, and the
//! pending redraw request.

use crate::geometry::{Point, Rect};
use crate::widget::WidgetId;

/// Redraw bookkeeping for one widget.
///
/// Requests coalesce into a single pending flag that the host takes when it
/// schedules a repaint. The counter keeps growing so redundant requests stay
/// observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawRequest {
    pending: bool,
    count: u64,
}

impl RedrawRequest {
    /// Ask for a repaint.
    pub fn request(&mut self) {
        self.pending = true;
        self.count += 1;
    }

    /// Whether a repaint is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total number of requests ever made.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Take the pending flag, clearing it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Generic widget state embedded by concrete controls.
///
/// Cloning yields a new widget: the copy gets a fresh id and no pending redraw.
#[derive(Debug)]
pub struct WidgetHandle {
    id: WidgetId,
    location: Point,
    bounds: Rect,
    redraw: RedrawRequest,
    test_id: Option<String>,
}

impl Default for WidgetHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for WidgetHandle {
    fn clone(&self) -> Self {
        Self {
            id: WidgetId::next(),
            location: self.location,
            bounds: self.bounds,
            redraw: RedrawRequest::default(),
            test_id: self.test_id.clone(),
        }
    }
}

impl WidgetHandle {
    /// Fresh handle with a unique id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            location: Point::ORIGIN,
            bounds: Rect::default(),
            redraw: RedrawRequest::default(),
            test_id: None,
        }
    }

    /// Instance id.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Position relative to the parent's origin.
    #[must_use]
    pub const fn location(&self) -> Point {
        self.location
    }

    /// Move relative to the parent's origin.
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Bounds from the last layout, in parent-tree coordinates.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Record new bounds; returns `true` when they differ from the old ones.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        let changed = self.bounds != bounds;
        self.bounds = bounds;
        changed
    }

    /// Client rectangle: the bounds' size at the origin.
    #[must_use]
    pub const fn client_rect(&self) -> Rect {
        self.bounds.with_origin(Point::ORIGIN)
    }

    /// Schedule a repaint.
    pub fn request_redraw(&mut self) {
        self.redraw.request();
    }

    /// Take the pending repaint flag.
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.take()
    }

    /// Redraw bookkeeping.
    #[must_use]
    pub const fn redraw(&self) -> &RedrawRequest {
        &self.redraw
    }

    /// Test id used by harness lookups.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    /// Set the test id.
    pub fn set_test_id(&mut self, id: impl Into<String>) {
        self.test_id = Some(id.into());
    }
}
