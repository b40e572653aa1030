//! Canvas implementations for rendering.

use crate::draw::{BorderEdges, DrawCommand, Transform2D};
use crate::image::ImageHandle;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect, TextAlign};
use std::ops::{Deref, DerefMut};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (dump commands from the demo binary)
///
/// Commands are stored in the coordinates they were issued in; the transform
/// stack is tracked but not applied.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
    antialias: bool,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands and state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
        self.antialias = false;
    }

    /// Combined transform of the whole stack (identity if empty).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .iter()
            .fold(Transform2D::IDENTITY, |acc, t| acc.then(t))
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            bounds: rect,
        });
    }

    fn draw_border(&mut self, rect: Rect, edges: &BorderEdges) {
        self.commands.push(DrawCommand::Border {
            bounds: rect,
            edges: *edges,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            bounds: rect,
            style: style.clone(),
            align,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            antialias: self.antialias,
        });
    }

    fn antialias(&self) -> bool {
        self.antialias
    }

    fn set_antialias(&mut self, enabled: bool) {
        self.antialias = enabled;
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn reset_clip(&mut self) {
        self.clip_stack.clear();
        self.commands.push(DrawCommand::ResetClip);
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.transform_stack.push(transform);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}

/// Canvas state held for the duration of one widget paint.
///
/// Creating the scope translates drawing to the widget's origin so the widget
/// paints in client coordinates. Dropping it pops the translation and restores
/// the anti-alias mode, including when painting unwinds.
pub struct PaintScope<'a> {
    canvas: &'a mut dyn Canvas,
    antialias: bool,
}

impl<'a> PaintScope<'a> {
    /// Enter client coordinates for a widget whose top-left corner is `origin`.
    pub fn new(canvas: &'a mut dyn Canvas, origin: Point) -> Self {
        let antialias = canvas.antialias();
        canvas.push_transform(Transform2D::translate(origin.x, origin.y));
        Self { canvas, antialias }
    }
}

impl<'a> Deref for PaintScope<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for PaintScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for PaintScope<'_> {
    fn drop(&mut self) {
        self.canvas.set_antialias(self.antialias);
        self.canvas.pop_transform();
    }
}
