//! Footer hint bar
//!
//! Every screen ends in a one-line hint bar. The notes shortcut is appended
//! to whatever the screen asks for, unless the screen already mentions it.

use std::fmt;
use std::str::FromStr;

use dv_core::{Error, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::markup;
use crate::theme::styles;

/// Hint appended to every footer that does not already mention the notes key
pub const NOTES_HINT: &str = "    [orange1]Ctrl+N[/orange1] Notes";

/// Footer text used when a screen provides none
pub const DEFAULT_HINT: &str = " [orange1]K[/orange1] Keywords";

/// Substring that marks a footer as already carrying the notes hint.
///
/// Matched literally, so any occurrence counts, including one inside
/// unrelated text.
pub const NOTES_MARKER: &str = "Ctrl+N";

/// Style class of a footer bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FooterClass {
    #[default]
    Standard,
    Stream,
    Search,
}

impl FooterClass {
    pub fn tag(&self) -> &'static str {
        match self {
            FooterClass::Standard => "footer",
            FooterClass::Stream => "footer-stream",
            FooterClass::Search => "footer-search",
        }
    }
}

impl fmt::Display for FooterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FooterClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "footer" => Ok(FooterClass::Standard),
            "footer-stream" => Ok(FooterClass::Stream),
            "footer-search" => Ok(FooterClass::Search),
            other => Err(Error::config(format!("unknown footer class '{}'", other))),
        }
    }
}

/// Resolve the markup a footer shows for the text a screen asked for
pub fn resolve_footer_text(text: Option<&str>) -> String {
    let base = match text {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_HINT,
    };

    if base.contains(NOTES_MARKER) {
        base.to_string()
    } else {
        format!("{}{}", base, NOTES_HINT)
    }
}

/// Footer hint bar with the notes shortcut merged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    content: String,
    class: FooterClass,
}

impl Footer {
    pub fn new(text: Option<&str>) -> Self {
        Self {
            content: resolve_footer_text(text),
            class: FooterClass::default(),
        }
    }

    pub fn with_class(mut self, class: FooterClass) -> Self {
        self.class = class;
        self
    }

    /// Resolved markup, including the notes hint
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with markup removed
    pub fn plain_text(&self) -> String {
        markup::strip(&self.content)
    }

    pub fn class(&self) -> FooterClass {
        self.class
    }

    /// Styled hint line under `theme`
    pub fn render(&self, theme: &Theme) -> Line<'static> {
        markup::parse(&self.content, theme, styles::footer(theme, self.class))
    }

    /// Widget that paints the footer bar under `theme`
    pub fn view<'a>(&'a self, theme: &'a Theme) -> FooterView<'a> {
        FooterView {
            footer: self,
            theme,
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new(None)
    }
}

pub struct FooterView<'a> {
    footer: &'a Footer,
    theme: &'a Theme,
}

impl Widget for FooterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let style = styles::footer(self.theme, self.footer.class);
        Paragraph::new(self.footer.render(self.theme))
            .style(style)
            .render(area, buf);
    }
}
