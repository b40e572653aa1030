//! Toggle button widgets for Tronic.
//!
//! - [`ToggleButton`]: two-state button drawn as a classic bevelled button or
//!   as a slider switch
//! - [`ToggleButtonGroup`]: container keeping at most one child toggle on
//! - [`Panel`]: plain container with absolutely placed children

pub mod panel;
pub mod toggle_button;
pub mod toggle_button_group;

pub use panel::Panel;
pub use toggle_button::{
    slider_pad_x, thumb_polygon, ThumbPolygon, ToggleButton, ToggleChanged, ToggleStyle,
};
pub use toggle_button_group::ToggleButtonGroup;
