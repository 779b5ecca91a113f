//! Gallery messages

use std::time::Instant;

use circular_progress::ui::styles::StyleKind;

/// Gallery messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Simulated progress timer fired
    Tick,
    /// Display frame from the shared frame clock
    Frame(Instant),
    /// Reset every demo to zero progress
    Restart,
    /// Pause or resume the progress timer
    ToggleTimer,
    /// Style picked for the featured view
    StyleSelected(StyleKind),
    /// Persist the current settings
    SaveSettings,
}
