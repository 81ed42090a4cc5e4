//! Application messages

use std::sync::Arc;
use std::time::Instant;

use circular_image::circular_image::{Bitmap, GlyphMetrics, StyleVariant};

#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick while a flip or hover animation runs
    AnimationTick(Instant),

    // ============ Avatar ============
    /// The large avatar was clicked
    AvatarPressed,
    /// The optional image file finished decoding
    ImageLoaded(Result<Bitmap, String>),
    /// The optional placeholder font finished loading
    FontLoaded(Result<Arc<GlyphMetrics<ab_glyph::FontVec>>, String>),

    // ============ Thumbnails ============
    ThumbnailHovered(Option<usize>),
    ThumbnailSelected(usize),

    // ============ Controls ============
    BorderToggled(bool),
    AnimationToggled(bool),
    PlaceholderChanged(String),
    StyleSelected(StyleVariant),
    SaveSettings,
    SettingsSaved(Result<(), String>),
}
