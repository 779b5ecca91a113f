//! UI module for circular progress indicators
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs and low-level widgets
//! - **Widgets** (`widgets`): The composable [`CircularProgress`] view
//! - **Styles** (`styles`): Pluggable rendering strategies
//! - **Animation** (`animation`): Glyph draw-on transitions

pub mod animation;
pub mod primitives;
pub mod styles;
pub mod theme;
pub mod widgets;

pub use widgets::CircularProgress;
