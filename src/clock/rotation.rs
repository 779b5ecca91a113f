//! Continuous rotation driven by frame ticks

use std::f32::consts::TAU;

use iced::Radians;

use super::{Frame, FrameClock, FrameConsumer, FrameHandle};

/// Default rotation per frame, in radians
pub const DEFAULT_ROTATION_STEP: f32 = 0.02;

/// Spinning angle advanced by a fixed step on every frame
///
/// Holds a [`FrameHandle`] so the shared frame subscription stays alive for
/// as long as the rotation exists.
#[derive(Debug)]
pub struct Rotation {
    angle: f32,
    step: f32,
    frames: u64,
    _handle: FrameHandle,
}

impl Rotation {
    pub fn new(clock: &FrameClock) -> Self {
        Self::with_step(clock, DEFAULT_ROTATION_STEP)
    }

    pub fn with_step(clock: &FrameClock, step: f32) -> Self {
        Self {
            angle: 0.0,
            step,
            frames: 0,
            _handle: clock.register(),
        }
    }

    /// Current angle in `[0, 2π)`
    pub fn angle(&self) -> Radians {
        Radians(self.angle)
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Frames applied so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameConsumer for Rotation {
    fn on_frame(&mut self, _frame: &Frame) {
        self.angle = (self.angle + self.step).rem_euclid(TAU);
        self.frames += 1;
    }
}
