//! Progress styles
//!
//! A style turns a [`Configuration`] (stroke width + state snapshot) into a new
//! [`CircularProgress`] with its own coloring, inner content and decoration.
//! Applying a style with [`CircularProgress::style`] keeps call sites unaware of
//! how each style renders.
//!
//! The state type a style accepts is part of its `Style<S>` implementation, so
//! pairing a style with an incompatible view is rejected at compile time.

mod interactive;
mod rotating;
mod simple;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::Rotation;
use crate::state::{InteractiveState, ProgressState};
use crate::ui::animation::StatusGlyph;
use crate::ui::widgets::CircularProgress;

pub use interactive::InteractiveStyle;
pub use rotating::{ROTATING_MIN_ARC, RotatingStyle};
pub use simple::SimpleStyle;

/// Inputs handed to a style, captured when the style is applied
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration<S> {
    pub stroke_width: f32,
    pub state: S,
}

/// Rendering strategy of a circular progress view
pub trait Style<S: ProgressState> {
    /// Build the styled view from the configuration
    fn make<'a, Message: 'a>(
        &self,
        configuration: Configuration<S>,
    ) -> CircularProgress<'a, S, Message>
    where
        S: 'a;
}

/// Built-in styles, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// Single accent color, no inner content
    #[default]
    #[serde(alias = "default")]
    Simple,
    /// Status colors and success/failure glyphs
    Interactive,
    /// Continuously spinning ring
    Rotating,
}

impl StyleKind {
    pub const ALL: [StyleKind; 3] = [Self::Simple, Self::Interactive, Self::Rotating];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Interactive => "interactive",
            Self::Rotating => "rotating",
        }
    }

    /// Resolve the named style against the live animation state it needs
    pub fn resolve(self, rotation: &Rotation, glyph: &StatusGlyph) -> BuiltinStyle {
        match self {
            Self::Simple => BuiltinStyle::Simple(SimpleStyle::default()),
            Self::Interactive => BuiltinStyle::Interactive(InteractiveStyle::from(glyph)),
            Self::Rotating => BuiltinStyle::Rotating(RotatingStyle::from(rotation)),
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown style name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown progress style: {}", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for StyleKind {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "default" => Ok(Self::Simple),
            "interactive" => Ok(Self::Interactive),
            "rotating" => Ok(Self::Rotating),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

/// One of the built-in styles, chosen at runtime
///
/// Only [`InteractiveState`] satisfies every built-in style, so that is the
/// state a runtime-selected style renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuiltinStyle {
    Simple(SimpleStyle),
    Interactive(InteractiveStyle),
    Rotating(RotatingStyle),
}

impl BuiltinStyle {
    pub fn kind(&self) -> StyleKind {
        match self {
            Self::Simple(_) => StyleKind::Simple,
            Self::Interactive(_) => StyleKind::Interactive,
            Self::Rotating(_) => StyleKind::Rotating,
        }
    }
}

impl Style<InteractiveState> for BuiltinStyle {
    fn make<'a, Message: 'a>(
        &self,
        configuration: Configuration<InteractiveState>,
    ) -> CircularProgress<'a, InteractiveState, Message>
    where
        InteractiveState: 'a,
    {
        match self {
            Self::Simple(style) => style.make(configuration),
            Self::Interactive(style) => style.make(configuration),
            Self::Rotating(style) => style.make(configuration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameClock;

    #[test]
    fn test_parse_style_names() {
        assert_eq!("simple".parse::<StyleKind>(), Ok(StyleKind::Simple));
        assert_eq!("Default".parse::<StyleKind>(), Ok(StyleKind::Simple));
        assert_eq!(" interactive ".parse::<StyleKind>(), Ok(StyleKind::Interactive));
        assert_eq!("ROTATING".parse::<StyleKind>(), Ok(StyleKind::Rotating));
        assert_eq!(
            "bouncy".parse::<StyleKind>(),
            Err(UnknownStyle("bouncy".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for kind in StyleKind::ALL {
            assert_eq!(kind.to_string().parse::<StyleKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&StyleKind::Rotating).unwrap();
        assert_eq!(json, "\"rotating\"");
        let kind: StyleKind = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(kind, StyleKind::Simple);
    }

    #[test]
    fn test_resolve_matches_kind() {
        let clock = FrameClock::new();
        let rotation = Rotation::new(&clock);
        let glyph = StatusGlyph::default();

        for kind in StyleKind::ALL {
            assert_eq!(kind.resolve(&rotation, &glyph).kind(), kind);
        }
    }

    #[test]
    fn test_builtin_style_renders_interactive_state() {
        let clock = FrameClock::new();
        let rotation = Rotation::new(&clock);
        let glyph = StatusGlyph::default();
        let state = InteractiveState::InProgress(0.1);

        let view: CircularProgress<'_, _, ()> = CircularProgress::new(6.0, state)
            .style(StyleKind::Rotating.resolve(&rotation, &glyph));
        assert_eq!(view.trim_range(), 0.0..=ROTATING_MIN_ARC);

        let view: CircularProgress<'_, _, ()> = CircularProgress::new(6.0, state)
            .style(StyleKind::Simple.resolve(&rotation, &glyph));
        assert_eq!(view.trim_range(), 0.0..=0.1);
    }
}
