//! CPU raster of the circular image fill
//!
//! The canvas has no bitmap shader, so the disc is produced here: every output
//! pixel inside the circle is mapped back through the center-crop transform
//! and sampled from the source with edge clamping. The rim is anti-aliased by
//! pixel coverage and an optional tint is multiplied in.

use std::sync::Arc;

use iced::widget::image;
use iced::{Color, Point};
use rayon::prelude::*;

use crate::circular_image::{Bitmap, CircularImage, DrawOp, FitTransform};

/// Rasterized disc ready to hand to the canvas
#[derive(Debug, Clone)]
pub struct MaskedImage {
    /// Top-left corner in widget coordinates
    pub origin: Point,
    /// Side of the square raster, in pixels
    pub side: u32,
    pub handle: image::Handle,
    center: Point,
    radius: f32,
    fit: FitTransform,
}

impl MaskedImage {
    /// Whether this raster was built for the given image fill
    pub fn matches(&self, center: Point, radius: f32, fit: &FitTransform) -> bool {
        self.center == center && self.radius == radius && self.fit == *fit
    }
}

/// Render the disc of `radius` around `center` from `bitmap`
pub fn rasterize(
    bitmap: &image_rs::RgbaImage,
    fit: &FitTransform,
    center: Point,
    radius: f32,
    tint: Option<Color>,
) -> Option<(Point, image_rs::RgbaImage)> {
    let (src_w, src_h) = bitmap.dimensions();
    if radius <= 0.0 || src_w == 0 || src_h == 0 || fit.scale <= 0.0 {
        return None;
    }

    let side = (radius * 2.0).ceil() as u32;
    let origin = Point::new(center.x - radius, center.y - radius);
    let tint = tint.map(|c| c.into_rgba8());
    let row_len = side as usize * 4;

    let mut pixels = vec![0u8; row_len * side as usize];
    pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, out)| {
            let y = origin.y + row as f32 + 0.5;
            for col in 0..side as usize {
                let x = origin.x + col as f32 + 0.5;
                let distance = ((x - center.x).powi(2) + (y - center.y).powi(2)).sqrt();
                let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }

                let Some(src) = fit.to_bitmap(Point::new(x, y)) else {
                    continue;
                };
                let u = (src.x.floor() as i64).clamp(0, src_w as i64 - 1) as u32;
                let v = (src.y.floor() as i64).clamp(0, src_h as i64 - 1) as u32;
                let mut px = bitmap.get_pixel(u, v).0;

                if let Some(t) = tint {
                    for (channel, factor) in px.iter_mut().zip(t) {
                        *channel = ((*channel as u16 * factor as u16) / 255) as u8;
                    }
                }
                px[3] = (px[3] as f32 * coverage).round() as u8;

                out[col * 4..col * 4 + 4].copy_from_slice(&px);
            }
        });

    image_rs::RgbaImage::from_raw(side, side, pixels).map(|img| (origin, img))
}

/// Cache key: the raster only changes with these inputs
#[derive(Debug, Clone)]
struct CacheKey {
    /// Held so the allocation cannot be reused by another bitmap while cached
    bitmap: Bitmap,
    fit: FitTransform,
    center: Point,
    radius: f32,
    tint: Option<Color>,
}

impl PartialEq for CacheKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bitmap, &other.bitmap)
            && self.fit == other.fit
            && self.center == other.center
            && self.radius == other.radius
            && self.tint == other.tint
    }
}

/// Keeps the last raster and rebuilds it only when its inputs change
#[derive(Debug, Default)]
pub struct MaskedImageCache {
    key: Option<CacheKey>,
    masked: Option<MaskedImage>,
}

impl MaskedImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the raster in line with the widget's current image fill
    pub fn refresh(&mut self, widget: &CircularImage) -> Option<&MaskedImage> {
        let Some(key) = Self::key_for(widget) else {
            self.key = None;
            self.masked = None;
            return None;
        };

        if self.key.as_ref() != Some(&key) {
            self.masked = rasterize(&key.bitmap, &key.fit, key.center, key.radius, key.tint).map(
                |(origin, raster)| {
                    let side = raster.width();
                    tracing::debug!(side, "rebuilt circular image raster");
                    MaskedImage {
                        origin,
                        side,
                        handle: image::Handle::from_rgba(side, side, raster.into_raw()),
                        center: key.center,
                        radius: key.radius,
                        fit: key.fit,
                    }
                },
            );
            self.key = Some(key);
        }

        self.masked.as_ref()
    }

    pub fn get(&self) -> Option<&MaskedImage> {
        self.masked.as_ref()
    }

    fn key_for(widget: &CircularImage) -> Option<CacheKey> {
        let bitmap = widget.image()?;
        // Only needed when the unchecked image fill is part of the draw list
        widget.render().into_iter().find_map(|op| match op {
            DrawOp::FillImage {
                center,
                radius,
                fit,
                tint,
            } => Some(CacheKey {
                bitmap: bitmap.clone(),
                fit,
                center,
                radius,
                tint,
            }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, rgba: [u8; 4]) -> image_rs::RgbaImage {
        image_rs::RgbaImage::from_pixel(w, h, image_rs::Rgba(rgba))
    }

    #[test]
    fn disc_is_opaque_inside_and_clear_in_corners() {
        let bitmap = solid(10, 10, [200, 100, 50, 255]);
        let fit = FitTransform::center_crop((40, 40), 20, 0, (10, 10)).unwrap();
        let (origin, raster) =
            rasterize(&bitmap, &fit, Point::new(20.0, 20.0), 20.0, None).unwrap();

        assert_eq!(origin, Point::ORIGIN);
        assert_eq!(raster.dimensions(), (40, 40));
        assert_eq!(raster.get_pixel(20, 20).0, [200, 100, 50, 255]);
        assert_eq!(raster.get_pixel(0, 0).0[3], 0);
        assert_eq!(raster.get_pixel(39, 39).0[3], 0);
    }

    #[test]
    fn sampling_clamps_at_bitmap_edges() {
        let mut bitmap = solid(2, 1, [0, 0, 0, 255]);
        bitmap.put_pixel(1, 0, image_rs::Rgba([255, 255, 255, 255]));
        // Bitmap smaller than the disc: everything outside repeats the edge pixels
        let fit = FitTransform {
            scale: 1.0,
            offset_x: 5.0,
            offset_y: 5.0,
        };
        let (_, raster) = rasterize(&bitmap, &fit, Point::new(10.0, 10.0), 10.0, None).unwrap();
        assert_eq!(raster.get_pixel(3, 10).0, [0, 0, 0, 255]);
        assert_eq!(raster.get_pixel(16, 10).0, [255, 255, 255, 255]);
    }

    #[test]
    fn tint_multiplies_channels() {
        let bitmap = solid(4, 4, [255, 255, 255, 255]);
        let fit = FitTransform::center_crop((8, 8), 4, 0, (4, 4)).unwrap();
        let tint = crate::color::from_argb(0xFF00_FF00);
        let (_, raster) =
            rasterize(&bitmap, &fit, Point::new(4.0, 4.0), 4.0, Some(tint)).unwrap();
        assert_eq!(raster.get_pixel(4, 4).0, [0, 255, 0, 255]);
    }

    #[test]
    fn degenerate_inputs_produce_nothing() {
        let bitmap = solid(4, 4, [1, 2, 3, 4]);
        let fit = FitTransform::center_crop((8, 8), 4, 0, (4, 4)).unwrap();
        assert!(rasterize(&bitmap, &fit, Point::ORIGIN, 0.0, None).is_none());
        let flat = FitTransform {
            scale: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        assert!(rasterize(&bitmap, &flat, Point::ORIGIN, 3.0, None).is_none());
    }

    #[test]
    fn cache_rebuilds_only_on_change() {
        let mut widget = CircularImage::new();
        widget.resize(30, 30);
        let mut cache = MaskedImageCache::new();
        assert!(cache.refresh(&widget).is_none());

        widget.set_image(Some(Arc::new(solid(6, 6, [9, 9, 9, 255]))));
        let first = cache.refresh(&widget).unwrap().handle.id();
        let again = cache.refresh(&widget).unwrap().handle.id();
        assert_eq!(first, again);

        widget.resize(40, 40);
        let resized = cache.refresh(&widget).unwrap();
        assert_eq!(resized.side, 40);
        assert_ne!(resized.handle.id(), first);

        widget.set_checked(true);
        assert!(cache.refresh(&widget).is_none());
    }

    #[test]
    fn replaced_bitmap_of_same_size_is_rebuilt() {
        let mut widget = CircularImage::new();
        widget.resize(20, 20);
        let mut cache = MaskedImageCache::new();

        for _ in 0..50 {
            widget.set_image(Some(Arc::new(solid(4, 4, [255, 0, 0, 255]))));
            let red = cache.refresh(&widget).unwrap().handle.id();

            // Old bitmap is dropped before the new one is allocated
            widget.set_image(None);
            widget.set_image(Some(Arc::new(solid(4, 4, [0, 0, 255, 255]))));
            let blue = cache.refresh(&widget).unwrap().handle.id();

            assert_ne!(red, blue);
        }
    }

    #[test]
    fn raster_remembers_the_fill_it_was_built_for() {
        let mut widget = CircularImage::new();
        widget.resize(30, 30);
        widget.set_image(Some(Arc::new(solid(6, 6, [1, 1, 1, 255]))));
        let mut cache = MaskedImageCache::new();
        cache.refresh(&widget);

        let fit = widget.fit().unwrap();
        let masked = cache.get().unwrap();
        assert!(masked.matches(Point::new(15.0, 15.0), 15.0, &fit));

        // Resized without a refresh: the cached raster is out of date
        widget.resize(40, 40);
        let stale_fit = widget.fit().unwrap();
        assert!(!masked.matches(Point::new(20.0, 20.0), 20.0, &stale_fit));
    }
}
