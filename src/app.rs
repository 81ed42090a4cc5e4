//! Demo application: one large avatar above a strip of thumbnails

pub mod helpers;
mod hover;
mod message;
mod update;
mod view;

use std::sync::Arc;
use std::time::Instant;

use circular_image::circular_image::{Bitmap, Dimension};
use circular_image::ui::primitives::MaskedImageCache;
use circular_image::{CircularImage, color};
use iced::{Subscription, Task, Theme};

use crate::settings::DemoSettings;
use hover::ThumbnailHover;
pub use message::Message;

/// Side of the large avatar, in pixels
const AVATAR_SIZE: u32 = 200;
/// Side of each thumbnail, in pixels
const THUMBNAIL_SIZE: u32 = 56;

/// A circular image plus the raster cache the canvas draws its fill from
#[derive(Debug)]
pub struct Slot {
    pub widget: CircularImage,
    pub masked: MaskedImageCache,
}

impl Slot {
    fn new(widget: CircularImage) -> Self {
        let mut slot = Self {
            widget,
            masked: MaskedImageCache::new(),
        };
        slot.widget.take_redraw_request();
        slot.masked.refresh(&slot.widget);
        slot
    }

    /// Rebuild the raster if the widget asked for a redraw
    fn refresh(&mut self) {
        if self.widget.take_redraw_request() {
            self.masked.refresh(&self.widget);
        }
    }
}

/// Entry in the thumbnail strip
#[derive(Debug)]
pub struct Thumbnail {
    pub label: String,
    pub bitmap: Option<Bitmap>,
    pub slot: Slot,
}

impl Thumbnail {
    fn new(label: &str, bitmap: Option<Bitmap>) -> Self {
        let mut widget = CircularImage::new();
        widget.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
        widget.set_placeholder(
            label,
            color::from_argb(color::PLACEHOLDER_GRAY),
            color::from_argb(color::OPAQUE_BLACK),
        );
        if let Err(e) = widget.set_placeholder_text_size(Dimension::Px(18)) {
            tracing::warn!("Thumbnail text size rejected: {}", e);
        }
        widget.set_image(bitmap.clone());

        Self {
            label: label.to_string(),
            bitmap,
            slot: Slot::new(widget),
        }
    }
}

pub struct App {
    settings: DemoSettings,
    avatar: Slot,
    thumbnails: Vec<Thumbnail>,
    selected: usize,
    hover: ThumbnailHover,
    placeholder_input: String,
    /// Clock of the last frame, shared by the canvas programs
    now: Instant,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = DemoSettings::load().with_args(std::env::args());

        let mut avatar = CircularImage::from_attributes(&settings.avatar).unwrap_or_else(|e| {
            tracing::warn!("Invalid avatar attributes, using defaults: {}", e);
            CircularImage::new()
        });
        avatar.resize(AVATAR_SIZE, AVATAR_SIZE);

        let mut thumbnails: Vec<Thumbnail> = helpers::GRADIENTS
            .iter()
            .map(|(label, from, to)| {
                Thumbnail::new(label, Some(helpers::gradient_bitmap(96, 64, *from, *to)))
            })
            .collect();
        thumbnails.push(Thumbnail::new("None", None));

        let placeholder_input = settings.avatar.placeholder_text.clone().unwrap_or_default();

        let mut tasks = Vec::new();
        if let Some(path) = settings.image_path.clone() {
            tasks.push(Task::perform(helpers::load_image(path), |result| {
                Message::ImageLoaded(result.map_err(|e| e.to_string()))
            }));
        }
        if let Some(path) = settings.font_path.clone() {
            tasks.push(Task::perform(helpers::load_font(path), |result| {
                Message::FontLoaded(result.map(Arc::new).map_err(|e| e.to_string()))
            }));
        }

        // Start on the "None" thumbnail so the placeholder shows first
        let selected = thumbnails.len() - 1;

        let app = Self {
            settings,
            avatar: Slot::new(avatar),
            thumbnails,
            selected,
            hover: ThumbnailHover::new(),
            placeholder_input,
            now: Instant::now(),
        };

        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        if self.avatar.widget.is_checked() {
            "Circular Image - selected".to_string()
        } else {
            "Circular Image".to_string()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frame ticks only while something is moving
    pub fn subscription(&self) -> Subscription<Message> {
        if self.avatar.widget.is_animating() || self.hover.is_animating() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }
}
