//! Construction-time attributes
//!
//! Mirrors a style attribute set: every field has a documented default and
//! the whole set can be read from (and written to) JSON, with colors as
//! `#AARRGGBB` strings and sizes as `{"px": n}` or `{"dp": n}`.

use std::path::Path;

use iced::Color;
use serde::{Deserialize, Serialize};

use super::style::StyleVariant;
use crate::color;
use crate::error::{AttributesError, CircularImageError};

/// A size expressed in pixels or density-independent units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Px(i32),
    Dp(i32),
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Px(0)
    }
}

impl Dimension {
    /// Raw value as written, before density scaling
    pub fn raw(self) -> i32 {
        match self {
            Dimension::Px(v) | Dimension::Dp(v) => v,
        }
    }

    /// Convert to whole pixels, rejecting negative values before scaling
    pub fn to_px(self, name: &'static str, density: f32) -> Result<u32, CircularImageError> {
        let raw = self.raw();
        if raw < 0 {
            return Err(CircularImageError::negative(name, raw));
        }
        Ok(match self {
            Dimension::Px(v) => v as u32,
            Dimension::Dp(v) => (v as f32 * density) as u32,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub border_width: Dimension,
    #[serde(with = "color::hex")]
    pub border_color: Color,
    #[serde(with = "color::hex")]
    pub placeholder_background_color: Color,
    pub placeholder_text: Option<String>,
    #[serde(with = "color::hex")]
    pub placeholder_text_color: Color,
    pub placeholder_text_size: Dimension,
    pub checked: bool,
    #[serde(with = "color::hex")]
    pub checked_background_color: Color,
    #[serde(with = "color::hex::option")]
    pub color_filter: Option<Color>,
    /// Pixels per density-independent unit
    pub density: f32,
    pub style: StyleVariant,
    /// Animate checked-state changes; `None` uses the style's default
    pub animate_checked_state: Option<bool>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            border_width: Dimension::Px(0),
            border_color: color::from_argb(color::OPAQUE_WHITE),
            placeholder_background_color: color::from_argb(color::PLACEHOLDER_GRAY),
            placeholder_text: None,
            placeholder_text_color: color::from_argb(color::OPAQUE_BLACK),
            placeholder_text_size: Dimension::Px(0),
            checked: false,
            checked_background_color: color::from_argb(color::CHECKED_GRAY),
            color_filter: None,
            density: 1.0,
            style: StyleVariant::Default,
            animate_checked_state: None,
        }
    }
}

impl Attributes {
    pub fn animates_checked_state(&self) -> bool {
        self.animate_checked_state
            .unwrap_or_else(|| self.style.animates_by_default())
    }

    /// Parse attributes from a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, AttributesError> {
        serde_json::from_str(json).map_err(|e| AttributesError::Parse(e.to_string()))
    }

    /// Load attributes from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AttributesError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AttributesError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Save attributes to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), AttributesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AttributesError::Io(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AttributesError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| AttributesError::Io(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let attrs = Attributes::default();
        assert_eq!(attrs.border_width, Dimension::Px(0));
        assert_eq!(color::to_argb(attrs.border_color), 0xFFFF_FFFF);
        assert_eq!(color::to_argb(attrs.placeholder_background_color), 0xFFDD_DDDD);
        assert_eq!(color::to_argb(attrs.placeholder_text_color), 0xFF00_0000);
        assert_eq!(color::to_argb(attrs.checked_background_color), 0xFFBB_BBBB);
        assert!(!attrs.checked);
        assert!(attrs.animates_checked_state());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let attrs = Attributes::from_json(
            r##"{
                "border_width": { "dp": 4 },
                "border_color": "#FF336699",
                "placeholder_text": "jd",
                "style": "avatar_highlight"
            }"##,
        )
        .unwrap();
        assert_eq!(attrs.border_width, Dimension::Dp(4));
        assert_eq!(color::to_argb(attrs.border_color), 0xFF33_6699);
        assert_eq!(attrs.placeholder_text.as_deref(), Some("jd"));
        assert_eq!(attrs.style, StyleVariant::AvatarHighlight);
        assert!(!attrs.animates_checked_state());
        assert_eq!(attrs.placeholder_background_color, Attributes::default().placeholder_background_color);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Attributes::from_json(r#"{ "border_color": "white" }"#).unwrap_err();
        assert!(matches!(err, AttributesError::Parse(_)));
    }

    #[test]
    fn dimension_scales_dp_and_rejects_negative() {
        assert_eq!(Dimension::Dp(3).to_px("w", 2.5), Ok(7));
        assert_eq!(Dimension::Px(3).to_px("w", 2.5), Ok(3));
        assert_eq!(
            Dimension::Dp(-1).to_px("border_width", 2.0),
            Err(CircularImageError::negative("border_width", -1))
        );
    }

    #[test]
    fn saves_and_reloads_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("circular-image-attrs-{}", std::process::id()))
            .join("attributes.json");
        let mut attrs = Attributes::default();
        attrs.placeholder_text = Some("AB".to_string());
        attrs.color_filter = Some(color::from_argb(0x8000_FF00));
        attrs.save_to_file(&path).unwrap();

        let loaded = Attributes::load_from_file(&path).unwrap();
        assert_eq!(loaded, attrs);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Attributes::load_from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AttributesError::Io(_)));
    }
}
