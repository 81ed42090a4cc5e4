//! Circular image widget model
//!
//! [`CircularImage`] owns the widget's size, style and checked state and turns
//! them into an ordered list of [`DrawOp`]s. It has no dependency on a live
//! toolkit: the host reports size changes through [`CircularImage::resize`],
//! drives the flip animation with [`CircularImage::tick`] and replays
//! [`CircularImage::render`] onto its canvas (see [`crate::ui`]).
//!
//! # Draw order
//!
//! - checked: background disc, then the rotated checkmark, nothing else
//! - otherwise: image disc or placeholder disc (+ initials), then the border ring

pub mod attributes;
pub mod checkmark;
pub mod draw_op;
pub mod fit;
pub mod metrics;
pub mod placeholder;
pub mod style;
pub mod transition;

use std::sync::Arc;
use std::time::Instant;

use iced::{Color, Point};

pub use attributes::{Attributes, Dimension};
pub use checkmark::{CHECKMARK_ROTATION_DEGREES, Checkmark};
pub use draw_op::DrawOp;
pub use fit::FitTransform;
pub use metrics::{GlyphMetrics, ProportionalMetrics, TextMetrics};
pub use style::{AvatarStyle, BorderPolicy, DefaultStyle, StyleProvider, StyleVariant};
pub use transition::{CheckTransition, Phase};

use crate::error::{CircularImageError, Result};

/// Decoded source bitmap
pub type Bitmap = Arc<image_rs::RgbaImage>;

/// Circular image with placeholder, border ring and checked state
#[derive(Debug, Clone)]
pub struct CircularImage {
    width: u32,
    height: u32,
    radius: u32,

    border_width: u32,
    border_color: Color,
    placeholder_background_color: Color,
    placeholder_text: Option<String>,
    placeholder_text_color: Color,
    placeholder_text_size: u32,
    checked_background_color: Color,
    checked: bool,
    color_filter: Option<Color>,
    density: f32,

    image: Option<Bitmap>,
    fit: Option<FitTransform>,

    style: Arc<dyn StyleProvider>,
    metrics: Arc<dyn TextMetrics>,
    animate_checked_state: bool,
    transition: CheckTransition,

    needs_redraw: bool,
}

impl Default for CircularImage {
    fn default() -> Self {
        let attrs = Attributes::default();
        Self {
            width: 0,
            height: 0,
            radius: 0,
            border_width: 0,
            border_color: attrs.border_color,
            placeholder_background_color: attrs.placeholder_background_color,
            placeholder_text: None,
            placeholder_text_color: attrs.placeholder_text_color,
            placeholder_text_size: 0,
            checked_background_color: attrs.checked_background_color,
            checked: false,
            color_filter: None,
            density: attrs.density,
            image: None,
            fit: None,
            style: attrs.style.provider(),
            metrics: Arc::new(ProportionalMetrics::default()),
            animate_checked_state: false,
            transition: CheckTransition::default(),
            needs_redraw: true,
        }
    }
}

impl CircularImage {
    /// Widget with default attributes and the flip animation turned off
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a widget from an attribute set, validating sizes like the setters do
    pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
        let density = if attrs.density > 0.0 { attrs.density } else { 1.0 };
        let border_width = attrs.border_width.to_px("border_width", density)?;
        let text_size = attrs
            .placeholder_text_size
            .to_px("placeholder_text_size", density)?;

        Ok(Self {
            border_width,
            border_color: attrs.border_color,
            placeholder_background_color: attrs.placeholder_background_color,
            placeholder_text: attrs
                .placeholder_text
                .as_deref()
                .and_then(placeholder::normalize),
            placeholder_text_color: attrs.placeholder_text_color,
            placeholder_text_size: text_size,
            checked_background_color: attrs.checked_background_color,
            checked: attrs.checked,
            color_filter: attrs.color_filter,
            density,
            style: attrs.style.provider(),
            animate_checked_state: attrs.animates_checked_state(),
            ..Self::default()
        })
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Report a new surface size. Recomputes the radius and the image fit.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.radius = width.min(height) / 2;
        self.update_fit();
        tracing::debug!(width, height, radius = self.radius, "circular image resized");
        self.invalidate();
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    fn is_sized(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn center(&self) -> Point {
        Point::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    // ------------------------------------------------------------------
    // Image
    // ------------------------------------------------------------------

    /// Replace the displayed bitmap; `None` shows the placeholder
    pub fn set_image(&mut self, image: Option<Bitmap>) {
        self.image = image;
        if self.is_sized() || self.image.is_none() {
            self.update_fit();
        } else {
            // Computed on the next resize
            self.fit = None;
        }
        self.invalidate();
    }

    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Current center-crop transform, if an image is set and the widget is sized
    pub fn fit(&self) -> Option<FitTransform> {
        self.fit
    }

    fn update_fit(&mut self) {
        self.fit = self.image.as_ref().and_then(|bitmap| {
            FitTransform::center_crop(
                (self.width, self.height),
                self.radius,
                self.border_width,
                bitmap.dimensions(),
            )
        });
    }

    /// Tint multiplied into the image pixels; `None` draws the image untouched
    pub fn set_color_filter(&mut self, tint: Option<Color>) {
        if self.color_filter != tint {
            self.color_filter = tint;
            self.invalidate();
        }
    }

    pub fn color_filter(&self) -> Option<Color> {
        self.color_filter
    }

    // ------------------------------------------------------------------
    // Border
    // ------------------------------------------------------------------

    /// Set border width (pixels) and color. Fails on a negative width.
    pub fn set_border(&mut self, width_px: i32, color: Color) -> Result<()> {
        if width_px < 0 {
            return Err(CircularImageError::negative("border_width", width_px));
        }
        self.apply_border(width_px as u32, color);
        Ok(())
    }

    /// Set border width in pixels or density-independent units
    pub fn set_border_width(&mut self, width: Dimension) -> Result<()> {
        let px = width.to_px("border_width", self.density)?;
        self.apply_border(px, self.border_color);
        Ok(())
    }

    pub fn set_border_color(&mut self, color: Color) {
        if color != self.border_color {
            self.apply_border(self.border_width, color);
        }
    }

    fn apply_border(&mut self, width: u32, color: Color) {
        let width_changed = width != self.border_width;
        self.border_width = width;
        self.border_color = color;
        if width_changed {
            self.update_fit();
        }
        self.invalidate();
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    // ------------------------------------------------------------------
    // Placeholder
    // ------------------------------------------------------------------

    /// Set placeholder initials and colors. Empty text keeps the background.
    pub fn set_placeholder(&mut self, text: &str, background_color: Color, text_color: Color) {
        let text = placeholder::normalize(text);
        let changed = text != self.placeholder_text
            || background_color != self.placeholder_background_color
            || text_color != self.placeholder_text_color;

        if changed {
            self.placeholder_text = text;
            self.placeholder_background_color = background_color;
            self.placeholder_text_color = text_color;
            self.invalidate();
        }
    }

    /// Set only the placeholder initials
    pub fn set_placeholder_text(&mut self, text: &str) {
        self.set_placeholder(
            text,
            self.placeholder_background_color,
            self.placeholder_text_color,
        );
    }

    /// Set the placeholder text size. Fails on a negative size.
    pub fn set_placeholder_text_size(&mut self, size: Dimension) -> Result<()> {
        let px = size.to_px("placeholder_text_size", self.density)?;
        if px != self.placeholder_text_size {
            self.placeholder_text_size = px;
            self.invalidate();
        }
        Ok(())
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder_text.as_deref()
    }

    pub fn placeholder_text_size(&self) -> u32 {
        self.placeholder_text_size
    }

    pub fn placeholder_background_color(&self) -> Color {
        self.placeholder_background_color
    }

    fn placeholder_text_enabled(&self) -> bool {
        self.placeholder_text.is_some() && self.placeholder_text_size > 0
    }

    /// Font metrics used to center the initials
    pub fn set_text_metrics(&mut self, metrics: Arc<dyn TextMetrics>) {
        self.metrics = metrics;
        self.invalidate();
    }

    pub fn text_metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    pub fn set_style(&mut self, style: Arc<dyn StyleProvider>) {
        self.style = style;
        self.invalidate();
    }

    pub fn style(&self) -> &dyn StyleProvider {
        self.style.as_ref()
    }

    /// Pixels per density-independent unit; non-positive values are ignored
    pub fn set_density(&mut self, density: f32) {
        if density > 0.0 && density != self.density {
            self.density = density;
            self.invalidate();
        }
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn set_checked_background_color(&mut self, color: Color) {
        if color != self.checked_background_color {
            self.checked_background_color = color;
            if self.checked {
                self.invalidate();
            }
        }
    }

    pub fn checked_background_color(&self) -> Color {
        self.checked_background_color
    }

    // ------------------------------------------------------------------
    // Checked state
    // ------------------------------------------------------------------

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Enable or disable the flip animation. Disabling finishes any running flip.
    pub fn set_check_animation(&mut self, enabled: bool) {
        self.animate_checked_state = enabled;
        if !enabled {
            self.cancel_transition();
        }
    }

    pub fn animates_checked_state(&self) -> bool {
        self.animate_checked_state
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.set_checked_at(checked, Instant::now());
    }

    /// Same as [`Self::set_checked`] with an explicit clock
    pub fn set_checked_at(&mut self, checked: bool, now: Instant) {
        if self.animate_checked_state {
            if self.transition.request(self.checked, checked, now) {
                self.invalidate();
            }
        } else if checked != self.checked {
            self.checked = checked;
            tracing::debug!(checked, "circular image checked state changed");
            self.invalidate();
        }
    }

    /// Flip towards the opposite of the state the widget is heading to
    pub fn toggle(&mut self) {
        self.toggle_at(Instant::now());
    }

    pub fn toggle_at(&mut self, now: Instant) {
        let target = !self.transition.settled_state(self.checked);
        self.set_checked_at(target, now);
    }

    /// Advance the flip animation. Returns whether it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.transition.is_animating() {
            return false;
        }
        if let Some(checked) = self.transition.tick(now) {
            self.checked = checked;
            tracing::debug!(checked, "circular image checked state flipped");
        }
        self.invalidate();
        self.transition.is_animating()
    }

    /// Stop the flip animation, settling on the state it was heading to
    pub fn cancel_transition(&mut self) {
        if !self.transition.is_animating() {
            return;
        }
        if let Some(checked) = self.transition.cancel() {
            self.checked = checked;
        }
        self.invalidate();
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Horizontal scale the host applies about the center while flipping
    pub fn scale_x(&self, now: Instant) -> f32 {
        self.transition.scale_x(now)
    }

    // ------------------------------------------------------------------
    // Redraw requests
    // ------------------------------------------------------------------

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Return and clear the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Checkmark geometry for the current size and style
    pub fn checkmark(&self) -> Checkmark {
        Checkmark::layout(
            self.center(),
            self.radius as f32,
            self.style.checkmark_stroke_width(self.density),
        )
    }

    /// Ordered draw operations for the current state
    pub fn render(&self) -> Vec<DrawOp> {
        if !self.is_sized() {
            return Vec::new();
        }

        let center = self.center();
        let radius = self.radius as f32;
        let border = self.border_width as f32;
        let inner_radius = (radius - border).max(0.0);

        if self.checked {
            return self.render_checked(center, radius);
        }

        let mut ops = Vec::with_capacity(3);

        match (&self.image, self.fit) {
            (Some(_), Some(fit)) => ops.push(DrawOp::FillImage {
                center,
                radius: inner_radius,
                fit,
                tint: self.color_filter,
            }),
            // Bitmap without a usable transform: nothing to sample
            (Some(_), None) => {}
            (None, _) => {
                ops.push(DrawOp::FillCircle {
                    center,
                    radius: inner_radius,
                    color: self.placeholder_background_color,
                });

                if let Some(text) = self
                    .placeholder_text
                    .as_ref()
                    .filter(|_| self.placeholder_text_enabled())
                {
                    let size = self.placeholder_text_size as f32;
                    let baseline = self
                        .metrics
                        .centered_baseline(self.height as f32 * 0.5, size)
                        .trunc();
                    ops.push(DrawOp::Text {
                        content: text.clone(),
                        position: Point::new(center.x, baseline),
                        size,
                        color: self.placeholder_text_color,
                    });
                }
            }
        }

        if self.border_width > 0 && self.style.should_draw_border(self.has_image()) {
            ops.push(DrawOp::StrokeCircle {
                center,
                radius: (radius - border * 0.5).max(0.0),
                width: border,
                color: self.border_color,
            });
        }

        ops
    }

    fn render_checked(&self, center: Point, radius: f32) -> Vec<DrawOp> {
        vec![
            DrawOp::FillCircle {
                center,
                radius,
                color: self.checked_background_color,
            },
            DrawOp::Save,
            DrawOp::Rotate {
                degrees: CHECKMARK_ROTATION_DEGREES,
                pivot: center,
            },
            DrawOp::StrokePath {
                segments: self.checkmark().segments(),
                width: self.style.checkmark_stroke_width(self.density),
                color: self.style.checkmark_color(),
            },
            DrawOp::Restore,
        ]
    }
}
