//! Rotating style: a spinner that turns into a progress arc
//!
//! The ring keeps spinning on every frame. Below a quarter of progress the
//! traced arc is pinned to a quarter of the ring, since a tiny growing arc is
//! indistinguishable from a spinner; from there on the arc follows progress.

use std::ops::RangeInclusive;

use iced::{Color, Radians};

use super::{Configuration, Style};
use crate::clock::Rotation;
use crate::state::ProgressState;
use crate::ui::theme;
use crate::ui::widgets::CircularProgress;

/// Fraction below which the traced arc stays pinned
pub const ROTATING_MIN_ARC: f32 = 0.25;

/// Spinning ring for scalar progress states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingStyle {
    pub rotation: Radians,
    pub color: Color,
}

impl Default for RotatingStyle {
    fn default() -> Self {
        Self {
            rotation: Radians(0.0),
            color: theme::ACCENT,
        }
    }
}

impl From<&Rotation> for RotatingStyle {
    fn from(rotation: &Rotation) -> Self {
        Self {
            rotation: rotation.angle(),
            ..Self::default()
        }
    }
}

impl RotatingStyle {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Traced range for a progress fraction
    pub fn range_for(fraction: f32) -> RangeInclusive<f32> {
        if fraction < ROTATING_MIN_ARC {
            0.0..=ROTATING_MIN_ARC
        } else {
            0.0..=fraction
        }
    }
}

impl<S: ProgressState> Style<S> for RotatingStyle {
    fn make<'a, Message: 'a>(&self, configuration: Configuration<S>) -> CircularProgress<'a, S, Message>
    where
        S: 'a,
    {
        let color = self.color;
        let range = Self::range_for(configuration.state.fraction());

        CircularProgress::new(configuration.stroke_width, configuration.state)
            .range(range)
            .color(move |_| color)
            .rotation(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{DEFAULT_ROTATION_STEP, FrameClock};
    use std::f32::consts::TAU;
    use std::time::{Duration, Instant};

    fn styled(fraction: f32, rotation: &Rotation) -> CircularProgress<'static, f32, ()> {
        CircularProgress::new(6.0, fraction).style(RotatingStyle::from(rotation))
    }

    #[test]
    fn test_range_pinned_below_threshold() {
        let clock = FrameClock::new();
        let mut rotation = Rotation::new(&clock);
        let start = Instant::now();

        let mut previous = rotation.angle().0;
        for i in 0..20 {
            clock.broadcast(start + Duration::from_millis(16 * i), &mut [&mut rotation]);
            let view = styled(0.1, &rotation);
            assert_eq!(view.trim_range(), 0.0..=ROTATING_MIN_ARC);
            assert!(view.rotation_angle().0 > previous);
            previous = view.rotation_angle().0;
        }
    }

    #[test]
    fn test_range_follows_fraction_past_threshold() {
        let clock = FrameClock::new();
        let mut rotation = Rotation::new(&clock);
        let now = Instant::now();

        for fraction in [0.25, 0.4, 0.8, 1.0] {
            clock.broadcast(now, &mut [&mut rotation]);
            let view = styled(fraction, &rotation);
            assert_eq!(view.trim_range(), 0.0..=fraction);
        }
    }

    #[test]
    fn test_angle_after_n_frames() {
        let clock = FrameClock::new();
        let mut rotation = Rotation::new(&clock);
        let now = Instant::now();

        let frames = 42;
        for _ in 0..frames {
            clock.broadcast(now, &mut [&mut rotation]);
        }

        let view = styled(0.1, &rotation);
        let expected = (frames as f32 * DEFAULT_ROTATION_STEP).rem_euclid(TAU);
        assert!((view.rotation_angle().0 - expected).abs() < 1e-4);
        assert_eq!(view.trim_range(), 0.0..=ROTATING_MIN_ARC);
    }

    #[test]
    fn test_color_is_fixed() {
        let style = RotatingStyle::default().color(Color::WHITE);
        let view: CircularProgress<'_, f32, ()> = CircularProgress::new(6.0, 0.5).style(style);
        assert_eq!(view.ring_color(), Color::WHITE);
        assert!(!view.has_content());
    }
}
