//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//! - **Reusable**: Can be composed by widgets and styles
//!
//! # Contents
//!
//! - [`ProgressRing`] - Background ring and trimmed arc using Canvas
//! - [`Inscribed`] - Lays out content inside a ring's inner square
//! - [`GlyphCanvas`] - Checkmark / exclamation glyphs that draw themselves

pub mod inscribed;
pub mod progress_ring;
pub mod shapes;

pub use inscribed::Inscribed;
pub use progress_ring::{ProgressRing, RingGeometry};
pub use shapes::{Glyph, GlyphCanvas};
