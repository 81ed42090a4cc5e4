//! Image and font loading for the demo

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use circular_image::circular_image::{Bitmap, GlyphMetrics};

/// Gradient thumbnails shipped with the demo: label plus corner colors
pub const GRADIENTS: [(&str, [u8; 3], [u8; 3]); 3] = [
    ("Dusk", [0xF9, 0x73, 0x16], [0x6D, 0x28, 0xD9]),
    ("Sea", [0x22, 0xD3, 0xEE], [0x1E, 0x3A, 0x8A]),
    ("Moss", [0xBE, 0xF2, 0x64], [0x16, 0x65, 0x34]),
];

/// Diagonal gradient from the top-left to the bottom-right corner
pub fn gradient_bitmap(width: u32, height: u32, from: [u8; 3], to: [u8; 3]) -> Bitmap {
    let span = (width + height).saturating_sub(2).max(1) as f32;
    let image = image_rs::RgbaImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        image_rs::Rgba([mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2]), 255])
    });
    Arc::new(image)
}

/// Decode an image file off the UI thread
pub async fn load_image(path: PathBuf) -> anyhow::Result<Bitmap> {
    let decoded = tokio::task::spawn_blocking(move || {
        image_rs::open(&path)
            .with_context(|| format!("Failed to decode {}", path.display()))
            .map(|image| image.to_rgba8())
    })
    .await
    .context("Image decode task panicked")??;

    tracing::debug!(
        width = decoded.width(),
        height = decoded.height(),
        "decoded avatar image"
    );
    Ok(Arc::new(decoded))
}

/// Read a font file and wrap it as placeholder text metrics
pub async fn load_font(path: PathBuf) -> anyhow::Result<GlyphMetrics<ab_glyph::FontVec>> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    GlyphMetrics::from_bytes(bytes).map_err(|e| anyhow::anyhow!("Invalid font {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_corner_to_corner() {
        let bitmap = gradient_bitmap(8, 8, [0, 0, 0], [255, 255, 255]);
        assert_eq!(bitmap.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(bitmap.get_pixel(7, 7).0, [255, 255, 255, 255]);
        let mid = bitmap.get_pixel(7, 0).0[0];
        assert!(mid > 100 && mid < 155);
    }

    #[test]
    fn single_pixel_gradient_is_start_color() {
        let bitmap = gradient_bitmap(1, 1, [10, 20, 30], [200, 200, 200]);
        assert_eq!(bitmap.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn missing_image_is_an_error() {
        let result = load_image(PathBuf::from("/definitely/not/here.png")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn garbage_font_is_an_error() {
        let path = std::env::temp_dir().join(format!("not-a-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"nope").unwrap();
        assert!(load_font(path.clone()).await.is_err());
        let _ = std::fs::remove_file(path);
    }
}
