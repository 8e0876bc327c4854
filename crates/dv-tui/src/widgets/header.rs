//! Header bar widget
//!
//! Shows the application name and the current page in a fixed, theme-driven
//! style that screens cannot override.

use chrono::Timelike;
use dv_core::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use crate::theme::styles;

pub const APP_NAME: &str = "Delta Vision";

/// Placed between the application name and the page name
pub const TITLE_SEPARATOR: &str = " — ";

/// Rows the header occupies: the title row and its bottom rule
pub const HEADER_HEIGHT: u16 = 2;

/// Build the header title for a page
pub fn header_title(page_name: Option<&str>) -> String {
    match page_name {
        Some(page) if !page.is_empty() => format!("{}{}{}", APP_NAME, TITLE_SEPARATOR, page),
        _ => APP_NAME.to_string(),
    }
}

/// Format a time of day the way the header clock shows it
pub fn clock_text<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Page header carrying the application title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    title: String,
    show_clock: bool,
}

impl Header {
    pub fn new(page_name: Option<&str>) -> Self {
        Self {
            title: header_title(page_name),
            show_clock: false,
        }
    }

    pub fn with_clock(mut self, show_clock: bool) -> Self {
        self.show_clock = show_clock;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show_clock(&self) -> bool {
        self.show_clock
    }

    /// Styled, centered title line under `theme`
    pub fn render(&self, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(self.title.clone(), styles::header(theme))).centered()
    }

    /// Widget that paints the header under `theme`
    pub fn view<'a>(&'a self, theme: &'a Theme) -> HeaderView<'a> {
        HeaderView {
            header: self,
            theme,
            clock: None,
        }
    }
}

/// A header bound to a theme, ready to render
pub struct HeaderView<'a> {
    header: &'a Header,
    theme: &'a Theme,
    clock: Option<String>,
}

impl HeaderView<'_> {
    /// Clock text for the title row. Ignored unless the header shows a clock.
    pub fn clock(mut self, text: impl Into<String>) -> Self {
        self.clock = Some(text.into());
        self
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Without room for the rule, the title row takes the whole area
        let borders = if area.height >= HEADER_HEIGHT {
            Borders::BOTTOM
        } else {
            Borders::NONE
        };
        let block = Block::default()
            .borders(borders)
            .border_type(BorderType::Thick)
            .border_style(styles::header_border(self.theme))
            .style(styles::header(self.theme))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_row = Rect { height: 1, ..inner };
        Paragraph::new(self.header.render(self.theme))
            .alignment(Alignment::Center)
            .render(title_row, buf);

        if let Some(clock) = self.clock.filter(|_| self.header.show_clock) {
            Paragraph::new(Span::styled(clock, styles::header_clock(self.theme)))
                .alignment(Alignment::Right)
                .render(title_row, buf);
        }
    }
}
