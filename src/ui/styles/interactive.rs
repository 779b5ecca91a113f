//! Interactive style: status colors plus success / failure glyphs

use iced::widget::Canvas;
use iced::{Color, Length};

use super::{Configuration, Style};
use crate::state::InteractiveState;
use crate::ui::animation::StatusGlyph;
use crate::ui::primitives::{Glyph, GlyphCanvas};
use crate::ui::theme;
use crate::ui::widgets::CircularProgress;

/// Colors and glyphs per [`InteractiveState`] variant
///
/// | state        | color | content     |
/// |--------------|-------|-------------|
/// | `InProgress` | blue  | none        |
/// | `Failed`     | red   | exclamation |
/// | `Succeeded`  | green | checkmark   |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractiveStyle {
    /// Drawn share of the glyph (0.0 - 1.0)
    pub glyph_progress: f32,
}

impl Default for InteractiveStyle {
    fn default() -> Self {
        Self {
            glyph_progress: 1.0,
        }
    }
}

impl From<&StatusGlyph> for InteractiveStyle {
    fn from(glyph: &StatusGlyph) -> Self {
        Self {
            glyph_progress: glyph.progress(),
        }
    }
}

impl InteractiveStyle {
    pub fn color_for(state: &InteractiveState) -> Color {
        match state {
            InteractiveState::InProgress(_) => theme::PROGRESS_BLUE,
            InteractiveState::Failed => theme::FAILURE_RED,
            InteractiveState::Succeeded => theme::SUCCESS_GREEN,
        }
    }

    pub fn glyph_for(state: &InteractiveState) -> Option<Glyph> {
        match state {
            InteractiveState::InProgress(_) => None,
            InteractiveState::Failed => Some(Glyph::Exclamation),
            InteractiveState::Succeeded => Some(Glyph::Checkmark),
        }
    }

    /// Glyph drawing for `state`, if the state shows one
    pub fn glyph_canvas(
        &self,
        state: &InteractiveState,
        stroke_width: f32,
    ) -> Option<GlyphCanvas> {
        Self::glyph_for(state).map(|glyph| GlyphCanvas {
            glyph,
            color: Self::color_for(state),
            stroke_width,
            trim: self.glyph_progress,
        })
    }
}

impl Style<InteractiveState> for InteractiveStyle {
    fn make<'a, Message: 'a>(
        &self,
        configuration: Configuration<InteractiveState>,
    ) -> CircularProgress<'a, InteractiveState, Message>
    where
        InteractiveState: 'a,
    {
        let Configuration {
            stroke_width,
            state,
        } = configuration;

        let progress = CircularProgress::new(stroke_width, state).color(Self::color_for);

        let Some(glyph) = self.glyph_canvas(&state, stroke_width) else {
            return progress;
        };

        progress.content(move |_: &InteractiveState| {
            Canvas::new(glyph).width(Length::Fill).height(Length::Fill)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(state: InteractiveState) -> CircularProgress<'static, InteractiveState, ()> {
        CircularProgress::new(10.0, state).style(InteractiveStyle::default())
    }

    #[test]
    fn test_in_progress_is_blue_and_empty() {
        let view = styled(InteractiveState::InProgress(0.5));
        assert_eq!(view.ring_color(), theme::PROGRESS_BLUE);
        assert!(!view.has_content());
        // Half of the circle is traced
        assert_eq!(view.trim_range(), 0.0..=0.5);
        assert_eq!(view.stroke_width(), 10.0);
    }

    #[test]
    fn test_failed_is_red_with_exclamation() {
        let view = styled(InteractiveState::Failed);
        assert_eq!(view.ring_color(), theme::FAILURE_RED);
        assert!(view.has_content());
        assert_eq!(
            InteractiveStyle::glyph_for(&InteractiveState::Failed),
            Some(Glyph::Exclamation)
        );
    }

    #[test]
    fn test_succeeded_is_green_with_checkmark() {
        let view = styled(InteractiveState::Succeeded);
        assert_eq!(view.ring_color(), theme::SUCCESS_GREEN);
        assert!(view.has_content());
        assert_eq!(view.trim_range(), 0.0..=1.0);
        assert_eq!(
            InteractiveStyle::glyph_for(&InteractiveState::Succeeded),
            Some(Glyph::Checkmark)
        );
    }

    #[test]
    fn test_glyph_canvas_matches_terminal_state() {
        let style = InteractiveStyle { glyph_progress: 0.4 };
        assert_eq!(
            style.glyph_canvas(&InteractiveState::InProgress(1.0), 10.0),
            None
        );
        assert_eq!(
            style.glyph_canvas(&InteractiveState::Failed, 10.0),
            Some(GlyphCanvas {
                glyph: Glyph::Exclamation,
                color: theme::FAILURE_RED,
                stroke_width: 10.0,
                trim: 0.4,
            })
        );
        assert_eq!(
            style
                .glyph_canvas(&InteractiveState::Succeeded, 6.0)
                .map(|canvas| canvas.glyph),
            Some(Glyph::Checkmark)
        );
    }

    #[test]
    fn test_glyph_progress_follows_animation() {
        let glyph = StatusGlyph::default();
        assert_eq!(InteractiveStyle::from(&glyph).glyph_progress, 0.0);
        assert_eq!(InteractiveStyle::default().glyph_progress, 1.0);
    }
}
