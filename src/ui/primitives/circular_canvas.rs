//! Canvas program replaying a [`CircularImage`] draw list
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program`. The
//! widget model decides what to draw; this program only maps each
//! [`DrawOp`] onto an iced frame and applies the flip animation's horizontal
//! squeeze around the widget center.

use std::time::Instant;

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Element, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse};

use super::masked_image::MaskedImage;
use crate::circular_image::{CircularImage, DrawOp};

/// Below this horizontal scale the widget is edge-on and nothing is drawn
const MIN_VISIBLE_SCALE: f32 = 0.001;

/// Borrowed view of a widget for one frame
pub struct CircularImageCanvas<'a> {
    widget: &'a CircularImage,
    masked: Option<&'a MaskedImage>,
    now: Instant,
}

impl<'a> CircularImageCanvas<'a> {
    pub fn new(widget: &'a CircularImage, masked: Option<&'a MaskedImage>, now: Instant) -> Self {
        Self {
            widget,
            masked,
            now,
        }
    }

    fn replay(&self, frame: &mut Frame, op: DrawOp) {
        match op {
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                frame.fill(&Path::circle(center, radius), color);
            }
            DrawOp::FillImage {
                center,
                radius,
                fit,
                ..
            } => {
                if let Some(masked) = self.masked {
                    if !masked.matches(center, radius, &fit) {
                        tracing::debug!(
                            radius,
                            "drawing circular image raster built for a different fill"
                        );
                    }
                    let side = masked.side as f32;
                    frame.draw_image(
                        Rectangle::new(masked.origin, Size::new(side, side)),
                        canvas::Image::new(masked.handle.clone()),
                    );
                }
            }
            DrawOp::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => {
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(width).with_color(color),
                );
            }
            DrawOp::Text {
                content,
                position,
                size,
                color,
            } => {
                // Canvas text is laid out from its top edge, the op carries a baseline
                let top = position.y + self.widget.text_metrics().ascent(size);
                frame.fill_text(Text {
                    content,
                    position: Point::new(position.x, top),
                    color,
                    size: iced::Pixels(size),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    align_y: iced::alignment::Vertical::Top,
                    ..Text::default()
                });
            }
            DrawOp::Save => frame.push_transform(),
            DrawOp::Rotate { degrees, pivot } => {
                let pivot = Vector::new(pivot.x, pivot.y);
                frame.translate(pivot);
                frame.rotate(Radians(degrees.to_radians()));
                frame.translate(-pivot);
            }
            DrawOp::StrokePath {
                segments,
                width,
                color,
            } => {
                let path = Path::new(|builder| {
                    for (from, to) in &segments {
                        builder.move_to(*from);
                        builder.line_to(*to);
                    }
                });
                frame.stroke(&path, Stroke::default().with_width(width).with_color(color));
            }
            DrawOp::Restore => frame.pop_transform(),
        }
    }
}

impl<'a, Message> Program<Message> for CircularImageCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let scale_x = self.widget.scale_x(self.now);
        if scale_x < MIN_VISIBLE_SCALE {
            return vec![frame.into_geometry()];
        }

        let squeezed = scale_x < 1.0;
        if squeezed {
            let (width, height) = self.widget.size();
            let center = Vector::new((width / 2) as f32, (height / 2) as f32);
            frame.push_transform();
            frame.translate(center);
            frame.scale_nonuniform(Vector::new(scale_x, 1.0));
            frame.translate(-center);
        }

        for op in self.widget.render() {
            self.replay(&mut frame, op);
        }

        if squeezed {
            frame.pop_transform();
        }

        vec![frame.into_geometry()]
    }
}

/// Create a canvas element sized to the widget
pub fn view<'a, Message: 'a>(
    widget: &'a CircularImage,
    masked: Option<&'a MaskedImage>,
    now: Instant,
) -> Element<'a, Message> {
    let (width, height) = widget.size();
    Canvas::new(CircularImageCanvas::new(widget, masked, now))
        .width(width as f32)
        .height(height as f32)
        .into()
}
