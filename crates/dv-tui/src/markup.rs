//! Console-style markup for hint text.
//!
//! Screens describe their hints as `" [orange1]K[/orange1] Keywords"`. Tags
//! name semantic roles (or the named aliases below), so emphasis follows the
//! active theme instead of a fixed terminal color.
//!
//! - `[tag]text[/tag]` styles `text`; `[/]` closes the innermost tag
//! - `\[` is a literal bracket
//! - a tag is space-separated tokens: role names (`warning`, `$primary`),
//!   aliases (`orange1`, `red`, ...), `#RRGGBB`, `bold`, `dim`, `italic`,
//!   `underline`, `reverse`, and `on <color>` for the background
//! - unknown tokens are ignored; anything that is not a tag is text,
//!   including bracketed words that start with a capital (`[Esc]`)

use std::sync::LazyLock;

use dv_core::{Color, ColorRole, Theme};
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

use crate::theme::palette;

/// A tag opens with a lowercase letter, `#`, `$`, `/` or `@`; anything else
/// in brackets (`[Esc]`, `[1]`) is plain text
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\*)\[([a-z#$/@][^\[\]]*)\]").expect("Invalid markup tag regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    /// Backslashes and escaped brackets, already unescaped
    Literal(String),
    Open(&'a str),
    Close,
}

fn segments(markup: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut pos = 0;

    for caps in TAG_REGEX.captures_iter(markup) {
        let (Some(whole), Some(slashes), Some(tag)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        if whole.start() > pos {
            out.push(Segment::Text(&markup[pos..whole.start()]));
        }
        pos = whole.end();

        let slash_count = slashes.as_str().len();
        if slash_count >= 2 {
            out.push(Segment::Literal("\\".repeat(slash_count / 2)));
        }
        if slash_count % 2 == 1 {
            out.push(Segment::Literal(format!("[{}]", tag.as_str())));
            continue;
        }

        let tag = tag.as_str().trim();
        if tag.starts_with('/') {
            out.push(Segment::Close);
        } else {
            out.push(Segment::Open(tag));
        }
    }

    if pos < markup.len() {
        out.push(Segment::Text(&markup[pos..]));
    }
    out
}

/// Color a markup name resolves to under `theme`
fn resolve_color(name: &str, theme: &Theme) -> Option<TermColor> {
    if name.starts_with('#') {
        return Color::parse(name).ok().map(|c| palette::term(c.opaque()));
    }
    ColorRole::from_name(name)
        .or_else(|| alias_role(name))
        .map(|role| palette::role(theme, role))
}

/// Named colors used in hint markup, mapped onto semantic roles
fn alias_role(name: &str) -> Option<ColorRole> {
    let role = match name.to_ascii_lowercase().as_str() {
        "orange1" | "orange" | "yellow" | "gold1" => ColorRole::Warning,
        "red" => ColorRole::Error,
        "green" => ColorRole::Success,
        "blue" => ColorRole::Primary,
        "cyan" => ColorRole::Secondary,
        "magenta" | "purple" => ColorRole::Accent,
        "white" => ColorRole::Foreground,
        _ => return None,
    };
    Some(role)
}

fn tag_style(tag: &str, theme: &Theme, current: Style) -> Style {
    let mut style = current;
    let mut tokens = tag.split_whitespace();
    while let Some(token) = tokens.next() {
        match token {
            "bold" | "b" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" | "i" => style = style.add_modifier(Modifier::ITALIC),
            "underline" | "u" => style = style.add_modifier(Modifier::UNDERLINED),
            "reverse" => style = style.add_modifier(Modifier::REVERSED),
            "on" => {
                if let Some(bg) = tokens.next().and_then(|n| resolve_color(n, theme)) {
                    style = style.bg(bg);
                }
            }
            name => {
                if let Some(fg) = resolve_color(name, theme) {
                    style = style.fg(fg);
                }
            }
        }
    }
    style
}

/// Parse markup into a styled line.
///
/// Plain runs use `base`; tagged runs patch `base` with the tag's style.
pub fn parse(markup: &str, theme: &Theme, base: Style) -> Line<'static> {
    let mut stack: Vec<Style> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for segment in segments(markup) {
        let current = stack.last().copied().unwrap_or(base);
        match segment {
            Segment::Text(text) => spans.push(Span::styled(text.to_string(), current)),
            Segment::Literal(text) => spans.push(Span::styled(text, current)),
            Segment::Open(tag) => stack.push(tag_style(tag, theme, current)),
            Segment::Close => {
                stack.pop();
            }
        }
    }

    Line::from(spans)
}

/// Remove markup, keeping only the visible text
pub fn strip(markup: &str) -> String {
    segments(markup)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text.to_string()),
            Segment::Literal(text) => Some(text),
            Segment::Open(_) | Segment::Close => None,
        })
        .collect()
}
