//! Circular progress indicators for iced
//!
//! A [`CircularProgress`] view draws a ring whose traced arc follows any
//! [`ProgressState`]. Styles swap the rendering without touching call sites:
//!
//! ```rust,ignore
//! use circular_progress::prelude::*;
//!
//! let view = CircularProgress::new(8.0, InteractiveState::InProgress(0.4))
//!     .style(InteractiveStyle::from(&status_glyph));
//! ```

pub mod clock;
pub mod settings;
pub mod state;
pub mod ui;

pub use state::{InteractiveState, ProgressState};
pub use ui::CircularProgress;

/// Commonly used types
pub mod prelude {
    pub use crate::clock::{Frame, FrameClock, FrameConsumer, Rotation, Timer};
    pub use crate::state::{InteractiveState, ProgressState};
    pub use crate::ui::animation::StatusGlyph;
    pub use crate::ui::styles::{
        BuiltinStyle, Configuration, InteractiveStyle, RotatingStyle, SimpleStyle, Style,
        StyleKind,
    };
    pub use crate::ui::widgets::{CircularProgress, circular_progress};
}
