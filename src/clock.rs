//! Cadence helpers for driving progress views
//!
//! - [`FrameClock`]: one shared per-frame subscription, handed to every
//!   component that animates continuously
//! - [`Timer`]: fixed-interval callbacks, one-shot or repeating
//! - [`Rotation`]: frame consumer spinning a ring at a fixed step per frame

mod frame;
mod rotation;
mod timer;

pub use frame::{Frame, FrameClock, FrameConsumer, FrameHandle};
pub use rotation::{DEFAULT_ROTATION_STEP, Rotation};
pub use timer::{Timer, TimerMode};
