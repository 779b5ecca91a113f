//! Circular progress gallery
//! Shows every built-in progress style driven by a timer and the frame clock

mod app;

use circular_progress::settings::Settings;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = Settings::load();
    let window_size = iced::Size::new(settings.window.width, settings.window.height);

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(window_size)
    .antialiasing(true)
    .run()
}
