//! Theme system for progress indicators
//! Supports both dark and light modes with a consistent status palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Primary accent color, used by the simple progress style
pub const ACCENT: Color = color!(0x1e90ff);

/// Hover state for primary accent
pub const ACCENT_HOVER: Color = color!(0x4169e1);

// Status colors (same for both modes)

/// Work in progress
pub const PROGRESS_BLUE: Color = color!(0x0a84ff);

/// Finished successfully
pub const SUCCESS_GREEN: Color = color!(0x30d158);

/// Finished with an error
pub const FAILURE_RED: Color = color!(0xff453a);

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card holding a single progress demo
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}
