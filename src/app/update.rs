//! Message handling

use std::time::Instant;

use circular_image::Dimension;
use iced::Task;

use super::{App, Message, Thumbnail};
use crate::settings::DEMO_BORDER_DP;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimationTick(now) => {
                self.now = now;
                self.avatar.widget.tick(now);
                self.hover.tick(now);
            }

            Message::AvatarPressed => {
                let now = Instant::now();
                self.now = now;
                self.avatar.widget.toggle_at(now);
            }

            Message::ImageLoaded(Ok(bitmap)) => {
                // File image goes just before the "None" entry and becomes the selection
                let index = self.thumbnails.len().saturating_sub(1);
                self.thumbnails
                    .insert(index, Thumbnail::new("File", Some(bitmap)));
                self.select(index);
            }
            Message::ImageLoaded(Err(e)) => {
                tracing::warn!("Failed to load avatar image: {}", e);
            }

            Message::FontLoaded(Ok(metrics)) => {
                tracing::debug!("Using font metrics for placeholder text");
                self.avatar.widget.set_text_metrics(metrics.clone());
                for thumbnail in &mut self.thumbnails {
                    thumbnail.slot.widget.set_text_metrics(metrics.clone());
                }
            }
            Message::FontLoaded(Err(e)) => {
                tracing::warn!("Failed to load placeholder font: {}", e);
            }

            Message::ThumbnailHovered(index) => {
                self.hover.set_hovered(index);
            }
            Message::ThumbnailSelected(index) => self.select(index),

            Message::BorderToggled(enabled) => {
                let width = Dimension::Dp(if enabled { DEMO_BORDER_DP } else { 0 });
                match self.avatar.widget.set_border_width(width) {
                    Ok(()) => self.settings.avatar.border_width = width,
                    Err(e) => tracing::warn!("Border width rejected: {}", e),
                }
            }

            Message::AnimationToggled(enabled) => {
                self.avatar.widget.set_check_animation(enabled);
                self.settings.avatar.animate_checked_state = Some(enabled);
            }

            Message::PlaceholderChanged(text) => {
                self.avatar.widget.set_placeholder_text(&text);
                self.settings.avatar.placeholder_text =
                    self.avatar.widget.placeholder_text().map(str::to_string);
                self.placeholder_input = text;
            }

            Message::StyleSelected(variant) => {
                self.avatar.widget.set_style(variant.provider());
                self.settings.avatar.style = variant;
            }

            Message::SaveSettings => {
                let settings = self.settings.clone();
                return Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || settings.save())
                            .await
                            .map_err(|e| e.to_string())?
                            .map_err(|e| e.to_string())
                    },
                    Message::SettingsSaved,
                );
            }
            Message::SettingsSaved(Ok(())) => tracing::debug!("Settings saved"),
            Message::SettingsSaved(Err(e)) => {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }

        self.avatar.refresh();
        for thumbnail in &mut self.thumbnails {
            thumbnail.slot.refresh();
        }

        Task::none()
    }

    /// Show a thumbnail's image on the avatar and clear the checked state
    fn select(&mut self, index: usize) {
        let Some(thumbnail) = self.thumbnails.get(index) else {
            return;
        };
        self.selected = index;
        self.avatar.widget.set_image(thumbnail.bitmap.clone());
        // Uncheck without playing the flip
        self.avatar.widget.set_checked(false);
        self.avatar.widget.cancel_transition();
        tracing::debug!(label = %thumbnail.label, "thumbnail selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::app::Slot;
    use circular_image::CircularImage;

    #[test]
    fn slot_refresh_tracks_image_fill() {
        let mut widget = CircularImage::new();
        widget.resize(40, 40);
        let mut slot = Slot::new(widget);
        assert!(slot.masked.get().is_none());

        slot.widget
            .set_image(Some(Arc::new(image_rs::RgbaImage::new(4, 4))));
        slot.refresh();
        assert_eq!(slot.masked.get().map(|m| m.side), Some(40));

        slot.widget.set_checked(true);
        slot.refresh();
        assert!(slot.masked.get().is_none());
    }
}
