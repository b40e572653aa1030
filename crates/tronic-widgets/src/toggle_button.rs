//! Two-state toggle button.
//!
//! A [`ToggleButton`] renders either as a classic bevelled push button or as a
//! slider switch whose thumb sits on the left when off and on the right when
//! on. A click flips the state; when the button is turning on inside a
//! [`ToggleButtonGroup`](crate::ToggleButtonGroup) the group switches its other
//! toggles off.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tronic_core::{
    BorderEdge, BorderEdges, BorderStyle, Canvas, Color, Constraints, Event, EventContext, Font,
    ImageHandle, LayoutResult, MouseButton, PaintScope, Point, Rect, Size, SystemColors,
    TextAlign, TextStyle, Widget, WidgetHandle, WidgetId,
};

/// Message emitted when a click flips a toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleChanged {
    /// Button that changed
    pub id: WidgetId,
    /// The new state
    pub on: bool,
}

/// Visual style of a toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleStyle {
    /// Bevelled two-colour button
    #[default]
    Classic,
    /// Track with a sliding thumb
    Slider,
}

impl ToggleStyle {
    /// Smallest size a button of this style can be laid out at.
    #[must_use]
    pub const fn min_size(self) -> Size {
        match self {
            Self::Classic => Size::new(20, 20),
            Self::Slider => Size::new(40, 20),
        }
    }
}

/// Horizontal offset of the slider thumb inside `content`.
#[must_use]
pub const fn slider_pad_x(on: bool, content: Rect) -> i32 {
    if on {
        content.right() - content.width / 2
    } else {
        0
    }
}

/// Slider thumb outline: a quadrilateral half as wide as the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbPolygon {
    /// Vertices in drawing order: top-left, bottom-left, bottom-right, top-right
    pub points: [Point; 4],
}

impl ThumbPolygon {
    /// Top-left vertex.
    #[must_use]
    pub const fn p1(&self) -> Point {
        self.points[0]
    }

    /// Bottom-left vertex.
    #[must_use]
    pub const fn p2(&self) -> Point {
        self.points[1]
    }

    /// Bottom-right vertex.
    #[must_use]
    pub const fn p3(&self) -> Point {
        self.points[2]
    }

    /// Top-right vertex.
    #[must_use]
    pub const fn p4(&self) -> Point {
        self.points[3]
    }

    /// Rectangle the thumb label is centred in.
    #[must_use]
    pub const fn label_rect(&self) -> Rect {
        let p1 = self.p1();
        Rect::from_origin_size(p1, Size::new(self.p3().x - p1.x, self.p2().y - p1.y))
    }
}

/// Thumb outline for a thumb starting at `pad_x` inside `content`.
#[must_use]
pub const fn thumb_polygon(pad_x: i32, content: Rect) -> ThumbPolygon {
    let p1 = Point::new(pad_x, content.top());
    let p2 = Point::new(pad_x, content.bottom() - 1);
    let p4 = Point::new(p1.x + content.width / 2 - 1, content.top());
    let p3 = if p4.x == content.right() {
        Point::new(p4.x, content.bottom())
    } else {
        Point::new(p4.x - 1, content.bottom() - 1)
    };
    ThumbPolygon {
        points: [p1, p2, p3, p4],
    }
}

/// Two-state button with classic and slider renderings.
#[derive(Debug, Clone)]
pub struct ToggleButton {
    /// Identity, placement and redraw state
    handle: WidgetHandle,
    /// Current state
    on: bool,
    /// Rendering style
    style: ToggleStyle,
    /// Label when on
    text_on: String,
    /// Label when off
    text_off: String,
    /// Label color when on
    fore_color_on: Color,
    /// Label color when off
    fore_color_off: Color,
    /// Face (classic) or thumb (slider) color when on
    back_color_on: Color,
    /// Face (classic) or thumb (slider) color when off
    back_color_off: Color,
    /// Slider track color
    back_color: Color,
    /// Classic face image when on
    image_on: Option<ImageHandle>,
    /// Classic face image when off
    image_off: Option<ImageHandle>,
    /// Border line style
    border_style: BorderStyle,
    /// Border color
    border_color: Color,
    /// Width of the bevelled border edges
    border_size: i32,
    /// Label font
    font: Font,
    /// Palette for bevel highlight and shadow
    system_colors: SystemColors,
    /// Export name of the on image
    image_on_name: Option<String>,
    /// Export name of the off image
    image_off_name: Option<String>,
    /// Requested size
    size: Option<Size>,
}

impl Default for ToggleButton {
    fn default() -> Self {
        let system_colors = SystemColors::default();
        Self {
            handle: WidgetHandle::new(),
            on: false,
            style: ToggleStyle::Classic,
            text_on: "Z".to_string(),
            text_off: "V".to_string(),
            fore_color_on: Color::GREEN,
            fore_color_off: Color::RED,
            back_color_on: system_colors.control_light,
            back_color_off: system_colors.control_light,
            back_color: system_colors.control,
            image_on: None,
            image_off: None,
            border_style: BorderStyle::Solid,
            border_color: Color::BLACK,
            border_size: 2,
            font: Font::default(),
            system_colors,
            image_on_name: None,
            image_off_name: None,
            size: None,
        }
    }
}

impl ToggleButton {
    /// Create a new toggle button (off, classic style).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toggle button with the given state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        Self::default().on(on)
    }

    // ----- builders -----

    /// Set the initial state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set the rendering style.
    #[must_use]
    pub const fn style(mut self, style: ToggleStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the label shown when on.
    #[must_use]
    pub fn text_on(mut self, text: impl Into<String>) -> Self {
        self.text_on = text.into();
        self
    }

    /// Set the label shown when off.
    #[must_use]
    pub fn text_off(mut self, text: impl Into<String>) -> Self {
        self.text_off = text.into();
        self
    }

    /// Set the label color when on.
    #[must_use]
    pub const fn fore_color_on(mut self, color: Color) -> Self {
        self.fore_color_on = color;
        self
    }

    /// Set the label color when off.
    #[must_use]
    pub const fn fore_color_off(mut self, color: Color) -> Self {
        self.fore_color_off = color;
        self
    }

    /// Set the face/thumb color when on.
    #[must_use]
    pub const fn back_color_on(mut self, color: Color) -> Self {
        self.back_color_on = color;
        self
    }

    /// Set the face/thumb color when off.
    #[must_use]
    pub const fn back_color_off(mut self, color: Color) -> Self {
        self.back_color_off = color;
        self
    }

    /// Set the slider track color.
    #[must_use]
    pub const fn back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    /// Set the classic face image shown when on.
    #[must_use]
    pub fn image_on(mut self, image: ImageHandle) -> Self {
        self.image_on = Some(image);
        self
    }

    /// Set the classic face image shown when off.
    #[must_use]
    pub fn image_off(mut self, image: ImageHandle) -> Self {
        self.image_off = Some(image);
        self
    }

    /// Set the border line style.
    #[must_use]
    pub const fn border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the bevel width.
    #[must_use]
    pub const fn border_size(mut self, size: i32) -> Self {
        self.border_size = size;
        self
    }

    /// Set the label font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the system palette.
    #[must_use]
    pub const fn system_colors(mut self, colors: SystemColors) -> Self {
        self.system_colors = colors;
        self
    }

    /// Set the export name of the on image.
    #[must_use]
    pub fn image_on_name(mut self, name: impl Into<String>) -> Self {
        self.image_on_name = Some(name.into());
        self
    }

    /// Set the export name of the off image.
    #[must_use]
    pub fn image_off_name(mut self, name: impl Into<String>) -> Self {
        self.image_off_name = Some(name.into());
        self
    }

    /// Place the button inside its parent.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.handle.set_location(Point::new(x, y));
        self
    }

    /// Request a size.
    #[must_use]
    pub const fn size(mut self, width: i32, height: i32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.handle.set_test_id(id);
        self
    }

    // ----- getters -----

    /// Get the current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Get the rendering style.
    #[must_use]
    pub const fn get_style(&self) -> ToggleStyle {
        self.style
    }

    /// Get the label shown when on.
    #[must_use]
    pub fn get_text_on(&self) -> &str {
        &self.text_on
    }

    /// Get the label shown when off.
    #[must_use]
    pub fn get_text_off(&self) -> &str {
        &self.text_off
    }

    /// Get the label color when on.
    #[must_use]
    pub const fn get_fore_color_on(&self) -> Color {
        self.fore_color_on
    }

    /// Get the label color when off.
    #[must_use]
    pub const fn get_fore_color_off(&self) -> Color {
        self.fore_color_off
    }

    /// Get the face/thumb color when on.
    #[must_use]
    pub const fn get_back_color_on(&self) -> Color {
        self.back_color_on
    }

    /// Get the face/thumb color when off.
    #[must_use]
    pub const fn get_back_color_off(&self) -> Color {
        self.back_color_off
    }

    /// Get the slider track color.
    #[must_use]
    pub const fn get_back_color(&self) -> Color {
        self.back_color
    }

    /// Get the on image.
    #[must_use]
    pub const fn get_image_on(&self) -> Option<&ImageHandle> {
        self.image_on.as_ref()
    }

    /// Get the off image.
    #[must_use]
    pub const fn get_image_off(&self) -> Option<&ImageHandle> {
        self.image_off.as_ref()
    }

    /// Get the border line style.
    #[must_use]
    pub const fn get_border_style(&self) -> BorderStyle {
        self.border_style
    }

    /// Get the border color.
    #[must_use]
    pub const fn get_border_color(&self) -> Color {
        self.border_color
    }

    /// Get the bevel width.
    #[must_use]
    pub const fn get_border_size(&self) -> i32 {
        self.border_size
    }

    /// Get the label font.
    #[must_use]
    pub const fn get_font(&self) -> &Font {
        &self.font
    }

    /// Get the system palette.
    #[must_use]
    pub const fn get_system_colors(&self) -> &SystemColors {
        &self.system_colors
    }

    /// Get the export name of the on image.
    #[must_use]
    pub fn get_image_on_name(&self) -> Option<&str> {
        self.image_on_name.as_deref()
    }

    /// Get the export name of the off image.
    #[must_use]
    pub fn get_image_off_name(&self) -> Option<&str> {
        self.image_off_name.as_deref()
    }

    /// Get the requested size.
    #[must_use]
    pub const fn get_size(&self) -> Option<Size> {
        self.size
    }

    /// Get the position inside the parent.
    #[must_use]
    pub const fn get_location(&self) -> Point {
        self.handle.location()
    }

    /// Number of redraws requested over the button's lifetime.
    #[must_use]
    pub const fn redraw_count(&self) -> u64 {
        self.handle.redraw().count()
    }

    // ----- setters -----

    /// Flip the state without notifying the parent.
    pub fn toggle(&mut self) {
        self.set_on(!self.on);
    }

    /// Set the state without notifying the parent.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        self.handle.request_redraw();
    }

    /// Change the rendering style.
    pub fn set_style(&mut self, style: ToggleStyle) {
        self.style = style;
        self.handle.request_redraw();
    }

    /// Change the label shown when on.
    pub fn set_text_on(&mut self, text: impl Into<String>) {
        self.text_on = text.into();
        self.handle.request_redraw();
    }

    /// Change the label shown when off.
    pub fn set_text_off(&mut self, text: impl Into<String>) {
        self.text_off = text.into();
        self.handle.request_redraw();
    }

    /// Change the label color when on.
    pub fn set_fore_color_on(&mut self, color: Color) {
        self.fore_color_on = color;
        self.handle.request_redraw();
    }

    /// Change the label color when off.
    pub fn set_fore_color_off(&mut self, color: Color) {
        self.fore_color_off = color;
        self.handle.request_redraw();
    }

    /// Change the face/thumb color when on.
    pub fn set_back_color_on(&mut self, color: Color) {
        self.back_color_on = color;
        self.handle.request_redraw();
    }

    /// Change the face/thumb color when off.
    pub fn set_back_color_off(&mut self, color: Color) {
        self.back_color_off = color;
        self.handle.request_redraw();
    }

    /// Change the slider track color.
    pub fn set_back_color(&mut self, color: Color) {
        self.back_color = color;
        self.handle.request_redraw();
    }

    /// Change or clear the on image.
    pub fn set_image_on(&mut self, image: Option<ImageHandle>) {
        self.image_on = image;
        self.handle.request_redraw();
    }

    /// Change or clear the off image.
    pub fn set_image_off(&mut self, image: Option<ImageHandle>) {
        self.image_off = image;
        self.handle.request_redraw();
    }

    /// Change the border line style.
    pub fn set_border_style(&mut self, style: BorderStyle) {
        self.border_style = style;
        self.handle.request_redraw();
    }

    /// Change the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.handle.request_redraw();
    }

    /// Change the bevel width. Any value is accepted.
    pub fn set_border_size(&mut self, size: i32) {
        self.border_size = size;
        self.handle.request_redraw();
    }

    /// Change the label font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.handle.request_redraw();
    }

    /// Change the system palette.
    pub fn set_system_colors(&mut self, colors: SystemColors) {
        self.system_colors = colors;
        self.handle.request_redraw();
    }

    /// Change the export name of the on image. Does not redraw.
    pub fn set_image_on_name(&mut self, name: Option<String>) {
        self.image_on_name = name;
    }

    /// Change the export name of the off image. Does not redraw.
    pub fn set_image_off_name(&mut self, name: Option<String>) {
        self.image_off_name = name;
    }

    /// Move inside the parent; takes effect on the next layout.
    pub fn set_location(&mut self, location: Point) {
        self.handle.set_location(location);
    }

    /// Change the requested size; takes effect on the next layout.
    pub fn set_size(&mut self, size: Option<Size>) {
        self.size = size;
        self.handle.request_redraw();
    }

    // ----- painting -----

    fn paint_classic(&self, canvas: &mut PaintScope<'_>, content: Rect) {
        let (image, back, text, fore) = if self.on {
            (
                self.image_on.as_ref(),
                self.back_color_on,
                &self.text_on,
                self.fore_color_on,
            )
        } else {
            (
                self.image_off.as_ref(),
                self.back_color_off,
                &self.text_off,
                self.fore_color_off,
            )
        };

        match image {
            Some(image) => canvas.draw_image(image, content),
            None => canvas.fill_rect(content, back),
        }

        let thin = BorderEdge::new(self.border_color, 1, BorderStyle::Solid);
        let edges = if self.on {
            let shadow = BorderEdge::new(
                self.system_colors.control_dark,
                self.border_size,
                BorderStyle::Outset,
            );
            BorderEdges::two_tone(shadow, thin)
        } else {
            let highlight = BorderEdge::new(
                self.system_colors.control_light,
                self.border_size,
                BorderStyle::Outset,
            );
            BorderEdges::two_tone(thin, highlight)
        };
        canvas.draw_border(content, &edges);

        let style = TextStyle::new(self.font.clone(), fore);
        canvas.draw_text(text, content, &style, TextAlign::CENTERED);
    }

    fn paint_slider(&self, canvas: &mut PaintScope<'_>, content: Rect) {
        let pad_x = slider_pad_x(self.on, content);

        canvas.fill_rect(content, self.back_color);
        canvas.draw_border(
            content,
            &BorderEdges::uniform(BorderEdge::new(self.border_color, 1, self.border_style)),
        );

        // Thumb side follows the computed offset, not the state flag.
        let (thumb, text, fore) = if pad_x == 0 {
            (self.back_color_off, &self.text_off, self.fore_color_off)
        } else {
            (self.back_color_on, &self.text_on, self.fore_color_on)
        };

        canvas.set_antialias(true);
        let polygon = thumb_polygon(pad_x, content);
        canvas.fill_polygon(&polygon.points, thumb);

        let style = TextStyle::new(self.font.clone(), fore);
        canvas.draw_text(text, polygon.label_rect(), &style, TextAlign::CENTERED);
    }
}

impl Widget for ToggleButton {
    fn id(&self) -> WidgetId {
        self.handle.id()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let min = self.min_size();
        let preferred = self.size.map_or(min, |size| size.max(min));
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let size = bounds.size().max(self.min_size());
        if self
            .handle
            .set_bounds(Rect::from_origin_size(bounds.origin(), size))
        {
            self.handle.request_redraw();
        }
        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let mut scope = PaintScope::new(canvas, self.handle.bounds().origin());
        scope.reset_clip();

        let content = self.handle.client_rect();
        match self.style {
            ToggleStyle::Classic => self.paint_classic(&mut scope, content),
            ToggleStyle::Slider => self.paint_slider(&mut scope, content),
        }
    }

    fn event(&mut self, event: &Event, ctx: &mut EventContext) -> Option<Box<dyn Any + Send>> {
        let Event::Click {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };
        if !self.handle.bounds().contains_point(position) {
            return None;
        }

        let id = self.handle.id();
        if !self.on && ctx.notify_child_activated(id) {
            log::debug!("toggle {id} notified its group");
        }

        self.on = !self.on;
        self.handle.request_redraw();
        log::debug!("toggle {id} switched {}", if self.on { "on" } else { "off" });

        Some(Box::new(ToggleChanged { id, on: self.on }))
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

    fn min_size(&self) -> Size {
        self.style.min_size()
    }

    fn is_focusable(&self) -> bool {
        true
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
