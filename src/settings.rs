//! Demo settings persisted as JSON in the user's config directory

use std::path::{Path, PathBuf};

use circular_image::{Attributes, AttributesError, Dimension, color};
use serde::{Deserialize, Serialize};

/// Border width the border toggle switches on, in dp
pub const DEMO_BORDER_DP: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Attributes of the large avatar
    pub avatar: Attributes,
    /// Image file offered as an extra thumbnail
    pub image_path: Option<PathBuf>,
    /// Font used to measure the placeholder text
    pub font_path: Option<PathBuf>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            avatar: Attributes {
                border_width: Dimension::Dp(DEMO_BORDER_DP),
                border_color: color::from_argb(color::OPAQUE_WHITE),
                placeholder_text: Some("AB".to_string()),
                placeholder_text_size: Dimension::Dp(48),
                ..Attributes::default()
            },
            image_path: None,
            font_path: None,
        }
    }
}

impl DemoSettings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "circular-image", "CircularImageDemo")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, AttributesError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AttributesError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| AttributesError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), AttributesError> {
        match Self::file_path() {
            Some(path) => self.save_to_file(&path),
            None => Err(AttributesError::Io(
                "Could not determine config directory".to_string(),
            )),
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), AttributesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AttributesError::Io(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AttributesError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| AttributesError::Io(e.to_string()))
    }

    /// Apply the command line: an optional positional image path
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = args.nth(1) {
            self.image_path = Some(PathBuf::from(path));
        }
        self
    }
}
