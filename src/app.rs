//! Gallery application module

mod message;
mod view;

use anyhow::Context;
use iced::{Task, Theme};

use circular_progress::clock::{FrameClock, Rotation, Timer};
use circular_progress::settings::Settings;
use circular_progress::state::{InteractiveState, ProgressState};
use circular_progress::ui::animation::StatusGlyph;
use circular_progress::ui::styles::StyleKind;

pub use message::Message;

/// Gallery state: one progress value per demo plus the clocks driving them
pub struct App {
    settings: Settings,
    clock: FrameClock,
    timer: Timer,
    rotation: Rotation,
    glyph: StatusGlyph,
    /// Progress of the simple style demo
    simple: f32,
    /// Progress of the rotating style demo
    rotating: f64,
    /// Progress shared by the interactive and featured demos
    interactive: InteractiveState,
    featured_style: StyleKind,
    /// Whether the next finished run succeeds
    succeed_next: bool,
}

impl App {
    /// Create new application instance
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let clock = FrameClock::new();
        let rotation = Rotation::with_step(&clock, settings.rotation_step);
        let app = Self {
            timer: Timer::repeating(settings.timer_interval()),
            glyph: StatusGlyph::new(settings.glyph_duration()),
            featured_style: settings.style,
            rotation,
            clock,
            settings,
            simple: 0.0,
            rotating: 0.0,
            interactive: InteractiveState::default(),
            succeed_next: true,
        };

        tracing::info!(
            "Gallery started (style: {}, stroke: {})",
            app.featured_style,
            app.settings.stroke_width
        );

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("Circular Progress - {}", self.featured_style)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if self.timer.fire() {
                    self.advance_progress();
                }
            }
            Message::Frame(now) => {
                self.clock.broadcast(now, &mut [&mut self.rotation]);
                self.glyph.tick(now);
            }
            Message::Restart => {
                tracing::debug!("Restarting progress demos");
                self.simple = 0.0;
                self.rotating = 0.0;
                self.interactive = InteractiveState::default();
                self.glyph.follow(&self.interactive);
                self.timer.rearm();
            }
            Message::ToggleTimer => {
                if self.timer.is_armed() {
                    self.timer.cancel();
                } else {
                    self.timer.rearm();
                }
            }
            Message::StyleSelected(style) => {
                self.featured_style = style;
                self.settings.style = style;
            }
            Message::SaveSettings => {
                if let Err(e) = self.save_settings() {
                    tracing::warn!("{:#}", e);
                }
            }
        }

        Task::none()
    }

    /// Timer ticks and display frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::Subscription::batch([
            self.timer.subscription(|_| Message::Tick),
            self.clock.subscription(Message::Frame),
        ])
    }

    fn advance_progress(&mut self) {
        let step = self.settings.progress_step;

        self.simple = wrap(self.simple + step);
        self.rotating = wrap(self.rotating.fraction() + step) as f64;

        if let InteractiveState::InProgress(fraction) = self.interactive {
            let next = fraction + step;
            if next >= 1.0 {
                if self.succeed_next {
                    self.interactive.succeed();
                } else {
                    self.interactive.fail();
                }
                self.succeed_next = !self.succeed_next;
            } else {
                self.interactive = InteractiveState::from_fraction(next);
            }
            self.glyph.follow(&self.interactive);
        }
    }

    fn save_settings(&self) -> anyhow::Result<()> {
        self.settings
            .save()
            .context("Failed to save gallery settings")?;
        tracing::info!("Gallery settings saved");
        Ok(())
    }
}

/// Restart a looping demo once it completes
fn wrap(fraction: f32) -> f32 {
    if fraction > 1.0 { 0.0 } else { fraction }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use circular_progress::ui::primitives::Glyph;

    fn app() -> App {
        let settings = Settings {
            progress_step: 0.25,
            ..Settings::default()
        };
        App::new(settings).0
    }

    fn ticks(app: &mut App, n: usize) {
        for _ in 0..n {
            let _ = app.update(Message::Tick);
        }
    }

    #[test]
    fn test_tick_advances_every_demo() {
        let mut app = app();
        ticks(&mut app, 2);
        assert_eq!(app.simple, 0.5);
        assert_eq!(app.rotating, 0.5);
        assert_eq!(app.interactive, InteractiveState::InProgress(0.5));
    }

    #[test]
    fn test_runs_alternate_success_and_failure() {
        let mut app = app();
        ticks(&mut app, 4);
        assert_eq!(app.interactive, InteractiveState::Succeeded);
        assert_eq!(app.glyph.glyph(), Some(Glyph::Checkmark));

        let _ = app.update(Message::Restart);
        assert_eq!(app.glyph.glyph(), None);
        ticks(&mut app, 4);
        assert_eq!(app.interactive, InteractiveState::Failed);
        assert_eq!(app.glyph.glyph(), Some(Glyph::Exclamation));
    }

    #[test]
    fn test_paused_timer_ignores_ticks() {
        let mut app = app();
        let _ = app.update(Message::ToggleTimer);
        ticks(&mut app, 3);
        assert_eq!(app.simple, 0.0);

        let _ = app.update(Message::ToggleTimer);
        ticks(&mut app, 1);
        assert_eq!(app.simple, 0.25);
    }

    #[test]
    fn test_frames_spin_rotation() {
        let mut app = app();
        let before = app.rotation.angle().0;
        let _ = app.update(Message::Frame(Instant::now()));
        assert!(app.rotation.angle().0 > before);
        assert!(app.clock.is_running());
    }

    #[test]
    fn test_style_selection() {
        let mut app = app();
        let _ = app.update(Message::StyleSelected(StyleKind::Rotating));
        assert_eq!(app.featured_style, StyleKind::Rotating);
        assert_eq!(app.settings.style, StyleKind::Rotating);
        assert_eq!(app.title(), "Circular Progress - rotating");
    }

    #[test]
    fn test_looping_demos_wrap() {
        assert_eq!(wrap(0.5), 0.5);
        assert_eq!(wrap(1.0), 1.0);
        assert_eq!(wrap(1.01), 0.0);
    }
}
