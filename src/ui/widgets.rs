//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget / Program implementations
//! - **Widgets** (this module): Composable UI patterns
//! - **Styles** (`crate::ui::styles`): Strategies that rebuild widgets

pub mod circular_progress;

pub use circular_progress::CircularProgress;

/// Creates a progress view tracing `[0, state.fraction()]`
pub fn circular_progress<'a, S, Message>(
    stroke_width: f32,
    state: S,
) -> CircularProgress<'a, S, Message>
where
    S: crate::state::ProgressState + 'a,
    Message: 'a,
{
    CircularProgress::new(stroke_width, state)
}
