//! Center-crop transform mapping a bitmap into the circle

use iced::Point;

/// Uniform scale followed by a translation, in surface pixels.
///
/// A bitmap pixel `(u, v)` lands at `(u * scale + offset_x, v * scale + offset_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl FitTransform {
    /// Compute the center-crop transform for a bitmap drawn inside the circle.
    ///
    /// The shorter bitmap side is scaled to the circle's inner diameter
    /// (`2 * radius - border_width`) and the result is centered on the
    /// surface. Returns `None` for a bitmap with a zero side.
    pub fn center_crop(
        surface: (u32, u32),
        radius: u32,
        border_width: u32,
        bitmap: (u32, u32),
    ) -> Option<Self> {
        let (width, height) = surface;
        let (bitmap_width, bitmap_height) = bitmap;
        let shorter = bitmap_width.min(bitmap_height);
        if shorter == 0 {
            return None;
        }

        let diameter = 2 * radius as i64;
        let inner = (diameter - border_width as i64).max(0);
        let scale = inner as f32 / shorter as f32;

        Some(Self {
            scale,
            offset_x: (width as f32 - bitmap_width as f32 * scale) * 0.5,
            offset_y: (height as f32 - bitmap_height as f32 * scale) * 0.5,
        })
    }

    /// Map a surface point back into bitmap coordinates
    pub fn to_bitmap(&self, point: Point) -> Option<Point> {
        if self.scale <= 0.0 {
            return None;
        }
        Some(Point::new(
            (point.x - self.offset_x) / self.scale,
            (point.y - self.offset_y) / self.scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_bitmap_in_square_surface_fills_exactly() {
        for (side, bitmap) in [(200u32, 50u32), (120, 480), (64, 64), (101, 7)] {
            let fit = FitTransform::center_crop((side, side), side / 2, 0, (bitmap, bitmap)).unwrap();
            let diameter = (side / 2 * 2) as f32;
            assert_eq!(fit.scale, diameter / bitmap as f32);
            if side % 2 == 0 {
                assert_eq!(fit.offset_x, 0.0);
                assert_eq!(fit.offset_y, 0.0);
            }
        }
    }

    #[test]
    fn border_shrinks_scale() {
        let fit = FitTransform::center_crop((200, 200), 100, 10, (50, 50)).unwrap();
        assert!((fit.scale - 3.8).abs() < 1e-6);
        assert!((fit.offset_x - 5.0).abs() < 1e-4);
        assert!((fit.offset_y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn landscape_bitmap_crops_width() {
        let fit = FitTransform::center_crop((100, 100), 50, 0, (400, 200)).unwrap();
        assert_eq!(fit.scale, 0.5);
        assert_eq!(fit.offset_x, -50.0);
        assert_eq!(fit.offset_y, 0.0);
    }

    #[test]
    fn zero_sided_bitmap_has_no_transform() {
        assert_eq!(FitTransform::center_crop((100, 100), 50, 0, (0, 20)), None);
    }

    #[test]
    fn oversized_border_clamps_scale_to_zero() {
        let fit = FitTransform::center_crop((10, 10), 5, 40, (8, 8)).unwrap();
        assert_eq!(fit.scale, 0.0);
        assert_eq!(fit.to_bitmap(Point::ORIGIN), None);
    }

    #[test]
    fn inverse_maps_center_to_bitmap_center() {
        let fit = FitTransform::center_crop((100, 60), 30, 0, (30, 90)).unwrap();
        let p = fit.to_bitmap(Point::new(50.0, 30.0)).unwrap();
        assert!((p.x - 15.0).abs() < 1e-4);
        assert!((p.y - 45.0).abs() < 1e-4);
    }
}
