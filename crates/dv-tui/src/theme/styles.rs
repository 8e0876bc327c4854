//! Semantic style builders for the chrome widgets.

use dv_core::{ColorRole, Theme};
use ratatui::style::{Modifier, Style};

use super::palette;
use crate::widgets::FooterClass;

// --- Header ---

/// Header bar: darkened panel background, bold foreground text
pub fn header(theme: &Theme) -> Style {
    Style::default()
        .bg(palette::header_bg(theme))
        .fg(palette::role(theme, ColorRole::Foreground))
        .add_modifier(Modifier::BOLD)
}

/// Heavy rule under the header
pub fn header_border(theme: &Theme) -> Style {
    Style::default()
        .fg(palette::role(theme, ColorRole::Primary))
        .bg(palette::header_bg(theme))
}

pub fn header_clock(theme: &Theme) -> Style {
    Style::default()
        .bg(palette::header_bg(theme))
        .fg(palette::role(theme, ColorRole::Secondary))
}

// --- Footer ---

/// Base style for a footer of the given class
pub fn footer(theme: &Theme, class: FooterClass) -> Style {
    let (bg, fg) = match class {
        FooterClass::Standard => (ColorRole::Panel, ColorRole::Foreground),
        FooterClass::Stream => (ColorRole::Surface, ColorRole::Foreground),
        FooterClass::Search => (ColorRole::Panel, ColorRole::Secondary),
    };
    Style::default()
        .bg(palette::role(theme, bg))
        .fg(palette::role(theme, fg))
}

/// Emphasized hotkey text inside hints
pub fn emphasis(theme: &Theme) -> Style {
    Style::default().fg(palette::role(theme, ColorRole::Warning))
}

// --- Shared ---

pub fn selection(theme: &Theme) -> Style {
    Style::default()
        .bg(palette::selection_bg(theme))
        .fg(palette::role(theme, ColorRole::Foreground))
}

pub fn button(theme: &Theme) -> Style {
    Style::default()
        .bg(palette::role(theme, ColorRole::Primary))
        .fg(palette::button_fg(theme))
        .add_modifier(Modifier::BOLD)
}

/// Search-match highlight with a readable text color
pub fn highlight(theme: &Theme) -> Style {
    let (fg, bg) = theme.highlight_colors();
    Style::default()
        .fg(palette::term(fg))
        .bg(palette::term(bg))
        .add_modifier(Modifier::BOLD)
}
