//! Demo layout

use circular_image::circular_image::StyleVariant;
use circular_image::ui::primitives::circular_image as circular_view;
use iced::widget::{Space, button, checkbox, column, container, mouse_area, radio, row, text, text_input};
use iced::{Alignment, Background, Border, Color, Element, Length, color};

use super::{App, Message, Thumbnail};

const SURFACE: Color = color!(0x1a1a1a);
const HOVER_TINT: Color = color!(0x333333);
const SELECTED_RING: Color = color!(0xb3b3b3);
const TEXT_MUTED: Color = color!(0x888888);

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let avatar = mouse_area(circular_view(
            &self.avatar.widget,
            self.avatar.masked.get(),
            self.now,
        ))
        .on_press(Message::AvatarPressed);

        let hint = text(if self.avatar.widget.is_checked() {
            "Selected - click to clear"
        } else {
            "Click the avatar to select it"
        })
        .size(13)
        .color(TEXT_MUTED);

        let strip = row(self
            .thumbnails
            .iter()
            .enumerate()
            .map(|(index, thumbnail)| self.thumbnail(index, thumbnail)))
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            avatar,
            hint,
            strip,
            self.controls(),
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn thumbnail<'a>(&'a self, index: usize, thumbnail: &'a Thumbnail) -> Element<'a, Message> {
        let progress = self.hover.progress(index);
        let selected = index == self.selected;

        let tile = container(column![
            circular_view(&thumbnail.slot.widget, thumbnail.slot.masked.get(), self.now),
            text(&thumbnail.label).size(11).color(TEXT_MUTED),
        ]
        .spacing(4)
        .align_x(Alignment::Center))
        .padding(6)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(Color {
                a: progress,
                ..HOVER_TINT
            })),
            border: Border {
                radius: 12.0.into(),
                width: if selected { 1.5 } else { 0.0 },
                color: SELECTED_RING,
            },
            ..Default::default()
        });

        mouse_area(tile)
            .on_enter(Message::ThumbnailHovered(Some(index)))
            .on_exit(Message::ThumbnailHovered(None))
            .on_press(Message::ThumbnailSelected(index))
            .into()
    }

    fn controls(&self) -> Element<'_, Message> {
        let widget = &self.avatar.widget;

        let toggles = row![
            checkbox(widget.border_width() > 0)
                .label("Border")
                .on_toggle(Message::BorderToggled)
                .text_size(13),
            checkbox(widget.animates_checked_state())
                .label("Animate")
                .on_toggle(Message::AnimationToggled)
                .text_size(13),
        ]
        .spacing(16);

        let style = self.settings.avatar.style;
        let styles = row![
            radio("Default", StyleVariant::Default, Some(style), Message::StyleSelected).size(14),
            radio("Bold", StyleVariant::AvatarBold, Some(style), Message::StyleSelected).size(14),
            radio(
                "Highlight",
                StyleVariant::AvatarHighlight,
                Some(style),
                Message::StyleSelected
            )
            .size(14),
        ]
        .spacing(16);

        let placeholder = text_input("Initials", &self.placeholder_input)
            .on_input(Message::PlaceholderChanged)
            .size(13)
            .width(160);

        let panel = column![
            toggles,
            styles,
            row![text("Placeholder").size(13), placeholder]
                .spacing(12)
                .align_y(Alignment::Center),
            row![
                Space::new().width(Length::Fill),
                button(text("Save settings").size(13)).on_press(Message::SaveSettings),
            ],
        ]
        .spacing(14)
        .width(420);

        container(panel)
            .padding(16)
            .style(|_theme| container::Style {
                background: Some(Background::Color(SURFACE)),
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }
}
