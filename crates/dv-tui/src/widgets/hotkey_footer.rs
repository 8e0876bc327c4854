//! Sectioned footer with one equal-width cell per hotkey

use dv_core::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use super::FooterClass;
use crate::markup;
use crate::theme::styles;

/// One footer section: markup to show and a stable id for updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub id: String,
    pub display: String,
}

impl Hotkey {
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyFooter {
    hotkeys: Vec<Hotkey>,
    class: FooterClass,
}

impl HotkeyFooter {
    pub fn new(hotkeys: Vec<Hotkey>) -> Self {
        Self {
            hotkeys,
            class: FooterClass::default(),
        }
    }

    pub fn with_class(mut self, class: FooterClass) -> Self {
        self.class = class;
        self
    }

    pub fn hotkeys(&self) -> &[Hotkey] {
        &self.hotkeys
    }

    /// Replace the markup of the section with `id`.
    ///
    /// Returns `false` and changes nothing when no section has that id.
    pub fn update_hotkey(&mut self, id: &str, display: impl Into<String>) -> bool {
        match self.hotkeys.iter_mut().find(|h| h.id == id) {
            Some(hotkey) => {
                hotkey.display = display.into();
                true
            }
            None => {
                debug!("No hotkey section with id '{}'", id);
                false
            }
        }
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> HotkeyFooterView<'a> {
        HotkeyFooterView {
            footer: self,
            theme,
        }
    }
}

pub struct HotkeyFooterView<'a> {
    footer: &'a HotkeyFooter,
    theme: &'a Theme,
}

impl Widget for HotkeyFooterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let base = styles::footer(self.theme, self.footer.class);
        buf.set_style(area, base);

        let count = self.footer.hotkeys.len() as u32;
        if count == 0 {
            return;
        }

        let constraints = self
            .footer
            .hotkeys
            .iter()
            .map(|_| Constraint::Ratio(1, count));
        let sections = Layout::horizontal(constraints).split(area);

        for (hotkey, section) in self.footer.hotkeys.iter().zip(sections.iter()) {
            Paragraph::new(markup::parse(&hotkey.display, self.theme, base))
                .alignment(Alignment::Center)
                .render(*section, buf);
        }
    }
}
