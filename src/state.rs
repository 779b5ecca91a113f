//! Progress state abstraction
//!
//! Anything that can report how far along it is, as a normalized fraction in
//! `[0, 1]`, can drive a circular progress view.

/// A value that exposes a normalized progress fraction
///
/// `from_fraction` is only required to be lossless for plain numeric states.
/// Types with terminal variants (finished, failed, ...) only ever build their
/// in-progress branch from a fraction; terminal variants are reached by
/// assigning them directly.
pub trait ProgressState: Clone {
    /// Progress in `[0, 1]`
    fn fraction(&self) -> f32;

    /// Build an in-progress state from a fraction
    fn from_fraction(fraction: f32) -> Self;
}

impl ProgressState for f32 {
    fn fraction(&self) -> f32 {
        *self
    }

    fn from_fraction(fraction: f32) -> Self {
        fraction
    }
}

impl ProgressState for f64 {
    fn fraction(&self) -> f32 {
        *self as f32
    }

    fn from_fraction(fraction: f32) -> Self {
        fraction as f64
    }
}

/// Progress that ends in either success or failure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractiveState {
    /// Still running, with the completed fraction
    InProgress(f32),
    /// Finished successfully
    Succeeded,
    /// Finished with an error
    Failed,
}

impl Default for InteractiveState {
    fn default() -> Self {
        Self::InProgress(0.0)
    }
}

impl InteractiveState {
    /// Whether the state is `Succeeded` or `Failed`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress(_))
    }

    pub fn succeed(&mut self) {
        tracing::debug!("Interactive progress succeeded");
        *self = Self::Succeeded;
    }

    pub fn fail(&mut self) {
        tracing::debug!("Interactive progress failed");
        *self = Self::Failed;
    }
}

impl ProgressState for InteractiveState {
    fn fraction(&self) -> f32 {
        match self {
            Self::InProgress(fraction) => *fraction,
            Self::Succeeded | Self::Failed => 1.0,
        }
    }

    fn from_fraction(fraction: f32) -> Self {
        Self::InProgress(fraction)
    }
}
