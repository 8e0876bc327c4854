//! Test utilities for widget rendering verification
//!
//! Wraps ratatui's TestBackend so widget tests can assert on text and on
//! the colors painted into individual cells.
//!
//! # Example
//!
//! ```ignore
//! let ctx = ThemeContext::builtin()?;
//! let mut term = TestTerminal::with_size(40, 2);
//! term.render_widget(Header::new(Some("Stream")).view(ctx.active()), term.area());
//! assert!(term.buffer_contains("Delta Vision — Stream"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use ratatui::Terminal;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        self.in_bounds(x, y).then(|| self.buffer()[(x, y)].symbol())
    }

    /// Foreground painted into a cell
    pub fn fg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.in_bounds(x, y).then(|| self.buffer()[(x, y)].fg)
    }

    /// Background painted into a cell
    pub fn bg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.in_bounds(x, y).then(|| self.buffer()[(x, y)].bg)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }

    fn in_bounds(&self, x: u16, y: u16) -> bool {
        let area = self.buffer().area;
        x < area.width && y < area.height
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
    }

    #[test]
    fn test_cell_colors() {
        let mut term = TestTerminal::with_size(4, 1);
        let style = Style::default().fg(Color::Red).bg(Color::Blue);
        term.render_widget(Paragraph::new("ab").style(style), term.area());

        assert_eq!(term.cell_at(0, 0), Some("a"));
        assert_eq!(term.fg_at(1, 0), Some(Color::Red));
        assert_eq!(term.bg_at(3, 0), Some(Color::Blue));
        assert_eq!(term.bg_at(4, 0), None);
    }
}
