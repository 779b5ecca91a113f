//! Shared per-frame clock
//!
//! Every consumer of frame ticks shares a single `window::frames()`
//! subscription. Consumers register with the clock and keep the returned
//! [`FrameHandle`] for as long as they want ticks; once the last handle is
//! dropped the subscription is released.

use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::Subscription;
use parking_lot::Mutex;

/// A single display frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Frames seen since the clock was created, starting at 1
    pub index: u64,
    pub now: Instant,
    /// Time since the previous frame (zero for the first one)
    pub delta: Duration,
}

/// Anything that reacts to frame ticks
///
/// Every consumer receives every frame; ignoring irrelevant ticks is up to
/// the consumer.
pub trait FrameConsumer {
    fn on_frame(&mut self, frame: &Frame);
}

#[derive(Debug, Default)]
struct ClockState {
    listeners: usize,
    index: u64,
    last: Option<Instant>,
}

/// Injectable frame clock service
///
/// Cloning is cheap; clones share the same listeners and frame counter.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    state: Arc<Mutex<ClockState>>,
}

/// Registration with a [`FrameClock`], released on drop
#[derive(Debug)]
pub struct FrameHandle {
    state: Arc<Mutex<ClockState>>,
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.listeners = state.listeners.saturating_sub(1);
        tracing::debug!("Frame clock listener released ({} left)", state.listeners);
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a consumer; ticks keep flowing while the handle is alive
    pub fn register(&self) -> FrameHandle {
        let mut state = self.state.lock();
        state.listeners += 1;
        tracing::debug!("Frame clock listener registered ({} total)", state.listeners);

        FrameHandle {
            state: Arc::clone(&self.state),
        }
    }

    pub fn listeners(&self) -> usize {
        self.state.lock().listeners
    }

    /// Whether anything is currently listening
    pub fn is_running(&self) -> bool {
        self.listeners() > 0
    }

    /// Frames observed so far
    pub fn frame_count(&self) -> u64 {
        self.state.lock().index
    }

    /// The single frame subscription shared by all listeners
    ///
    /// `on_frame` must not capture; pass a message constructor such as
    /// `Message::Frame`.
    pub fn subscription<F, Message>(&self, on_frame: F) -> Subscription<Message>
    where
        F: Fn(Instant) -> Message + Send + Clone + 'static,
        Message: Send + 'static,
    {
        if self.is_running() {
            iced::window::frames().map(on_frame)
        } else {
            Subscription::none()
        }
    }

    /// Record a frame tick
    pub fn advance(&self, now: Instant) -> Frame {
        let mut state = self.state.lock();
        state.index += 1;
        let delta = state
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        state.last = Some(now);

        Frame {
            index: state.index,
            now,
            delta,
        }
    }

    /// Record a frame tick and hand it to every consumer
    pub fn broadcast(&self, now: Instant, consumers: &mut [&mut dyn FrameConsumer]) -> Frame {
        let frame = self.advance(now);
        for consumer in consumers.iter_mut() {
            consumer.on_frame(&frame);
        }
        frame
    }
}
