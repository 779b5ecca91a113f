//! Fixed-interval timer helper

use std::time::{Duration, Instant};

use iced::Subscription;

/// Whether a timer keeps firing after its first tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Once,
    Repeating,
}

/// Runs a callback on a fixed cadence through `iced::time::every`
///
/// The timer itself only tracks whether it is armed; the application routes
/// the subscription's messages back through [`Timer::fire`].
#[derive(Debug, Clone)]
pub struct Timer {
    interval: Duration,
    mode: TimerMode,
    armed: bool,
    fired: u64,
}

impl Timer {
    pub fn new(interval: Duration, mode: TimerMode) -> Self {
        Self {
            interval,
            mode,
            armed: true,
            fired: 0,
        }
    }

    pub fn once(interval: Duration) -> Self {
        Self::new(interval, TimerMode::Once)
    }

    pub fn repeating(interval: Duration) -> Self {
        Self::new(interval, TimerMode::Repeating)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Times the timer has fired
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Handle a tick; returns `false` if the timer was not armed
    ///
    /// One-shot timers disarm themselves after their first tick.
    pub fn fire(&mut self) -> bool {
        if !self.armed {
            return false;
        }

        self.fired += 1;
        if self.mode == TimerMode::Once {
            self.armed = false;
        }
        true
    }

    /// Arm the timer again
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Tick subscription, active only while armed
    ///
    /// `on_tick` must not capture; pass a message constructor.
    pub fn subscription<F, Message>(&self, on_tick: F) -> Subscription<Message>
    where
        F: Fn(Instant) -> Message + Send + Clone + 'static,
        Message: Send + 'static,
    {
        if self.armed && !self.interval.is_zero() {
            iced::time::every(self.interval).map(on_tick)
        } else {
            Subscription::none()
        }
    }
}
