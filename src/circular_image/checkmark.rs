//! Checkmark glyph geometry
//!
//! The glyph is an upright "L" laid out around the center; the draw list
//! rotates the surface 45° about the center before stroking it, which turns
//! the "L" into a check.

use iced::Point;

/// Rotation applied before stroking the glyph, in degrees
pub const CHECKMARK_ROTATION_DEGREES: f32 = 45.0;

/// Line segments making up the checkmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkmark {
    /// Vertical stroke of the unrotated "L"
    pub long: (Point, Point),
    /// Horizontal foot of the unrotated "L"
    pub short: (Point, Point),
}

impl Checkmark {
    /// Lay out the glyph around `center`.
    ///
    /// `long_stroke_height` is the component radius, `stroke_width` the pen
    /// width; the foot starts half a pen width to the right so the corner is
    /// closed.
    pub fn layout(center: Point, long_stroke_height: f32, stroke_width: f32) -> Self {
        let short_stroke_height = 0.4 * long_stroke_height;
        let half_long = 0.5 * long_stroke_height;
        let offset = 0.3 * short_stroke_height;

        let sx = center.x + offset;
        let sy = center.y - offset;

        Self {
            long: (Point::new(sx, sy - half_long), Point::new(sx, sy + half_long)),
            short: (
                Point::new(sx + 0.5 * stroke_width, sy + half_long),
                Point::new(sx - short_stroke_height, sy + half_long),
            ),
        }
    }

    pub fn segments(&self) -> Vec<(Point, Point)> {
        vec![self.long, self.short]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn layout_for_radius_100() {
        let mark = Checkmark::layout(Point::new(100.0, 100.0), 100.0, 3.0);
        // short = 40, half = 50, offset = 12
        assert!(close(mark.long.0.x, 112.0));
        assert!(close(mark.long.0.y, 38.0));
        assert!(close(mark.long.1.y, 138.0));
        assert!(close(mark.short.0.x, 113.5));
        assert!(close(mark.short.0.y, 138.0));
        assert!(close(mark.short.1.x, 72.0));
        assert!(close(mark.short.1.y, 138.0));
    }

    #[test]
    fn segments_share_the_bottom_corner_row() {
        let mark = Checkmark::layout(Point::new(40.0, 25.0), 25.0, 5.0);
        assert_eq!(mark.long.1.y, mark.short.0.y);
        assert_eq!(mark.long.0.x, mark.long.1.x);
        assert_eq!(mark.segments().len(), 2);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let mark = Checkmark::layout(Point::new(0.0, 0.0), 0.0, 0.0);
        for (a, b) in mark.segments() {
            assert_eq!(a, Point::ORIGIN);
            assert_eq!(b, Point::ORIGIN);
        }
    }
}
