//! Primitive draw operations produced by [`CircularImage::render`]
//!
//! [`CircularImage::render`]: super::CircularImage::render

use iced::{Color, Point};

use super::FitTransform;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid disc
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// Disc filled with the widget's bitmap, sampled through `fit`
    FillImage {
        center: Point,
        radius: f32,
        fit: FitTransform,
        tint: Option<Color>,
    },
    /// Ring centered on `radius`
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Text horizontally centered on `position.x` with its baseline at `position.y`
    Text {
        content: String,
        position: Point,
        size: f32,
        color: Color,
    },
    Save,
    /// Rotate the surface clockwise about `pivot`
    Rotate { degrees: f32, pivot: Point },
    /// Open polyline segments stroked with the given pen
    StrokePath {
        segments: Vec<(Point, Point)>,
        width: f32,
        color: Color,
    },
    Restore,
}

impl DrawOp {
    /// Short name, handy for asserting on the shape of a draw list
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::FillCircle { .. } => "fill_circle",
            DrawOp::FillImage { .. } => "fill_image",
            DrawOp::StrokeCircle { .. } => "stroke_circle",
            DrawOp::Text { .. } => "text",
            DrawOp::Save => "save",
            DrawOp::Rotate { .. } => "rotate",
            DrawOp::StrokePath { .. } => "stroke_path",
            DrawOp::Restore => "restore",
        }
    }
}
