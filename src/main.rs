//! circular-image demo - an avatar with placeholder initials, a border ring
//! and a checked state, plus a strip of thumbnails to pick its image from

mod app;
mod settings;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
