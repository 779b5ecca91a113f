//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust,ignore
//! use circular_progress::ui::animation::prelude::*;
//! ```

// Re-export iced_anim types
pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;

/// Animation presets for common use cases
pub mod presets {
    use std::time::Duration;

    use super::*;

    /// Glyph draw-on (ease-out so strokes settle softly)
    pub fn draw_on(duration: Duration) -> Animated<f32> {
        Animated::transition(0.0, Easing::EASE_OUT.with_duration(duration))
    }
}
