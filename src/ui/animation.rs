//! Animation helpers for progress views
//!
//! Glyph draw-on animations are CSS-like transitions from `iced_anim`; the
//! continuous spin of the rotating style lives in [`crate::clock::Rotation`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use circular_progress::ui::animation::prelude::*;
//!
//! let trim: Animated<f32> = Animated::transition(0.0, Easing::EASE_OUT);
//! ```

mod glyph;
pub mod prelude;

pub use glyph::{GLYPH_DURATION, GlyphAnimation, StatusGlyph};
