//! Style hooks for widget variants
//!
//! Variants such as the avatar flavor only differ in how the checkmark is
//! painted and when the border ring is shown, so they are values implementing
//! [`StyleProvider`] instead of separate widget types.

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::color;

/// Default checkmark pen width, in density-independent units
pub const DEFAULT_CHECK_STROKE_WIDTH_DP: f32 = 3.0;

/// Capability supplying the overridable parts of the widget's look
pub trait StyleProvider: std::fmt::Debug + Send + Sync {
    /// Color of the checkmark stroke
    fn checkmark_color(&self) -> Color {
        color::from_argb(color::OPAQUE_WHITE)
    }

    /// Checkmark pen width in pixels for the given display density
    fn checkmark_stroke_width(&self, density: f32) -> f32 {
        DEFAULT_CHECK_STROKE_WIDTH_DP * density
    }

    /// Whether the border ring is drawn, given whether an image is set
    fn should_draw_border(&self, _has_image: bool) -> bool {
        true
    }
}

/// Plain widget look: white 3dp checkmark, border always shown
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyle;

impl StyleProvider for DefaultStyle {}

/// When the border ring is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    #[default]
    Always,
    /// Only when an image is set, never around the placeholder
    WithImage,
}

impl BorderPolicy {
    pub fn allows(self, has_image: bool) -> bool {
        match self {
            BorderPolicy::Always => true,
            BorderPolicy::WithImage => has_image,
        }
    }
}

/// Avatar flavor with a configurable checkmark pen and border policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarStyle {
    pub checkmark_color: Color,
    pub checkmark_width_dp: f32,
    pub border: BorderPolicy,
}

impl AvatarStyle {
    /// Thick white check, border around everything
    pub fn bold() -> Self {
        Self {
            checkmark_color: color::from_argb(color::OPAQUE_WHITE),
            checkmark_width_dp: 8.0,
            border: BorderPolicy::Always,
        }
    }

    /// Yellow check, border only around real images
    pub fn highlight() -> Self {
        Self {
            checkmark_color: color::from_argb(color::YELLOW),
            checkmark_width_dp: 5.0,
            border: BorderPolicy::WithImage,
        }
    }
}

impl StyleProvider for AvatarStyle {
    fn checkmark_color(&self) -> Color {
        self.checkmark_color
    }

    fn checkmark_stroke_width(&self, density: f32) -> f32 {
        self.checkmark_width_dp * density
    }

    fn should_draw_border(&self, has_image: bool) -> bool {
        self.border.allows(has_image)
    }
}

/// Serializable choice of style, used by attribute files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StyleVariant {
    #[default]
    Default,
    AvatarBold,
    AvatarHighlight,
}

impl StyleVariant {
    pub fn provider(self) -> std::sync::Arc<dyn StyleProvider> {
        match self {
            StyleVariant::Default => std::sync::Arc::new(DefaultStyle),
            StyleVariant::AvatarBold => std::sync::Arc::new(AvatarStyle::bold()),
            StyleVariant::AvatarHighlight => std::sync::Arc::new(AvatarStyle::highlight()),
        }
    }

    /// Whether this flavor animates checked-state changes by default
    pub fn animates_by_default(self) -> bool {
        !matches!(self, StyleVariant::AvatarHighlight)
    }
}
