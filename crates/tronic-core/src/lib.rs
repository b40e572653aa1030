//! Core types and traits for the Tronic toggle controls.
//!
//! This crate provides the small retained widget model the controls plug into:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`] (whole pixels)
//! - Color representation: [`Color`] and the [`SystemColors`] palette
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`] and the per-dispatch [`EventContext`]
//! - Drawing: the [`Canvas`] trait, [`DrawCommand`]s and [`RecordingCanvas`]
//! - Widgets: the [`Widget`] trait, [`WidgetHandle`] and redraw requests

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod error;
mod event;
mod geometry;
mod handle;
mod image;
mod theme;
pub mod widget;

pub use canvas::{PaintScope, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{Alignment, BorderEdge, BorderEdges, BorderStyle, DrawCommand, TextAlign, Transform2D};
pub use error::ThemeError;
pub use event::{Event, EventContext, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use handle::{RedrawRequest, WidgetHandle};
pub use image::{ImageHandle, ImageId};
pub use theme::SystemColors;
pub use widget::{
    collect_redraws, dispatch_to_children, Canvas, ChildActivation, Font, FontStyle, FontWeight,
    LayoutResult, TextStyle, Widget, WidgetId,
};
