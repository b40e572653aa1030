//! Input events for widgets.

use crate::geometry::Point;
use crate::widget::WidgetId;
use serde::{Deserialize, Serialize};

/// Input event types delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A completed click (press and release) at a position.
    Click {
        /// Position of the click
        position: Point,
        /// Button clicked
        button: MouseButton,
    },
    /// Window resized
    Resize {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },
}

impl Event {
    /// Primary-button click at `position`.
    #[must_use]
    pub const fn click(position: Point) -> Self {
        Self::Click {
            position,
            button: MouseButton::Left,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left (primary) button
    Left,
    /// Right (secondary) button
    Right,
    /// Middle button
    Middle,
}

/// Per-dispatch context handed to a widget together with an event.
///
/// A container builds one for each child it forwards an event to. It tells the
/// child whether its parent accepts child-activation notifications and carries
/// the notification back up once the child returns.
#[derive(Debug, Default)]
pub struct EventContext {
    parent_accepts_activation: bool,
    activated: Option<WidgetId>,
}

impl EventContext {
    /// Context for the root of a tree (no parent).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for a child whose parent does or does not accept activations.
    #[must_use]
    pub const fn for_child(parent_accepts_activation: bool) -> Self {
        Self {
            parent_accepts_activation,
            activated: None,
        }
    }

    /// Tell the parent that `child` is turning on.
    ///
    /// Returns `false` and records nothing when the parent lacks the capability.
    pub fn notify_child_activated(&mut self, child: WidgetId) -> bool {
        if !self.parent_accepts_activation {
            return false;
        }
        self.activated = Some(child);
        true
    }

    /// Take the pending activation, if any.
    pub fn take_activation(&mut self) -> Option<WidgetId> {
        self.activated.take()
    }
}
