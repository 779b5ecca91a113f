//! One-shot draw-on animation for status glyphs
//!
//! A glyph draws itself from empty to complete the first time it appears.
//! The animation cannot be restarted; showing a different glyph mounts a
//! fresh one.

use std::time::{Duration, Instant};

use super::prelude::{Animated, presets};
use crate::state::InteractiveState;
use crate::ui::primitives::Glyph;
use crate::ui::styles::InteractiveStyle;

/// Glyph draw-on duration
pub const GLYPH_DURATION: Duration = Duration::from_millis(600);

/// Trim fraction of a glyph, animated 0 → 1 once
#[derive(Debug)]
pub struct GlyphAnimation {
    animation: Animated<f32>,
    started: bool,
}

impl Default for GlyphAnimation {
    fn default() -> Self {
        Self::new(GLYPH_DURATION)
    }
}

impl GlyphAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            animation: presets::draw_on(duration),
            started: false,
        }
    }

    /// Start drawing; later calls do nothing
    pub fn appear(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.animation.update(1.0.into());
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Drawn share of the glyph (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

/// Glyph mounted inside an interactive progress view
///
/// Follows an [`InteractiveState`]: whenever the glyph to show changes, a new
/// animation is mounted and started. Repeating the same state keeps the
/// running (or finished) animation.
#[derive(Debug)]
pub struct StatusGlyph {
    glyph: Option<Glyph>,
    animation: GlyphAnimation,
    duration: Duration,
}

impl Default for StatusGlyph {
    fn default() -> Self {
        Self::new(GLYPH_DURATION)
    }
}

impl StatusGlyph {
    pub fn new(duration: Duration) -> Self {
        Self {
            glyph: None,
            animation: GlyphAnimation::new(duration),
            duration,
        }
    }

    /// Sync with the current state, mounting a new glyph if needed
    pub fn follow(&mut self, state: &InteractiveState) {
        let next = InteractiveStyle::glyph_for(state);
        if next == self.glyph {
            return;
        }

        tracing::debug!("Status glyph changed: {:?} -> {:?}", self.glyph, next);
        self.glyph = next;
        self.animation = GlyphAnimation::new(self.duration);
        if self.glyph.is_some() {
            self.animation.appear();
        }
    }

    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph
    }

    pub fn progress(&self) -> f32 {
        self.animation.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
