//! Theme color resolution for ratatui.
//!
//! Every lookup takes the theme to read from; nothing here caches a color,
//! so a theme switch is visible on the very next render.

use dv_core::{Color, ColorRole, StyleVariable, Theme};
use ratatui::style::Color as TermColor;

/// How many darken steps the header background sits below the panel role
pub const HEADER_DARKEN_STEPS: u8 = 2;

/// Convert a theme color to a terminal color.
///
/// Terminals have no alpha; translucent colors should be blended first.
pub fn term(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

/// Terminal color for a semantic role
pub fn role(theme: &Theme, role: ColorRole) -> TermColor {
    term(theme.role(role))
}

pub fn header_bg(theme: &Theme) -> TermColor {
    term(theme.panel.darken_steps(HEADER_DARKEN_STEPS))
}

/// Selection tint composited over the background, or the surface role when
/// the theme sets no tint
pub fn selection_bg(theme: &Theme) -> TermColor {
    let tint = theme
        .variable(StyleVariable::InputSelectionBackground)
        .map(|c| c.blend_over(theme.background))
        .unwrap_or(theme.surface);
    term(tint)
}

/// Button text color, falling back to the background role
pub fn button_fg(theme: &Theme) -> TermColor {
    let fg = theme
        .variable(StyleVariable::ButtonColorForeground)
        .map(Color::opaque)
        .unwrap_or(theme.background);
    term(fg)
}
