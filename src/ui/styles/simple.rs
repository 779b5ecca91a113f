//! Default style: one accent color, nothing inside the ring

use iced::Color;

use super::{Configuration, Style};
use crate::state::ProgressState;
use crate::ui::theme;
use crate::ui::widgets::CircularProgress;

/// Single-color ring for any progress state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleStyle {
    pub color: Color,
}

impl Default for SimpleStyle {
    fn default() -> Self {
        Self {
            color: theme::ACCENT,
        }
    }
}

impl SimpleStyle {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl<S: ProgressState> Style<S> for SimpleStyle {
    fn make<'a, Message: 'a>(&self, configuration: Configuration<S>) -> CircularProgress<'a, S, Message>
    where
        S: 'a,
    {
        let color = self.color;
        CircularProgress::new(configuration.stroke_width, configuration.state).color(move |_| color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InteractiveState;

    #[test]
    fn test_color_ignores_state() {
        for state in [
            InteractiveState::InProgress(0.2),
            InteractiveState::Succeeded,
            InteractiveState::Failed,
        ] {
            let view: CircularProgress<'_, _, ()> =
                CircularProgress::new(4.0, state).style(SimpleStyle::default());
            assert_eq!(view.ring_color(), theme::ACCENT);
            assert!(!view.has_content());
        }
    }

    #[test]
    fn test_range_tracks_fraction() {
        let view: CircularProgress<'_, f32, ()> =
            CircularProgress::new(4.0, 0.65).style(SimpleStyle::new(Color::WHITE));
        assert_eq!(view.trim_range(), 0.0..=0.65);
        assert_eq!(view.ring_color(), Color::WHITE);
        assert_eq!(view.stroke_width(), 4.0);
    }
}
