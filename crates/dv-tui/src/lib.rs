//! dv-tui - Screen chrome for Delta Vision
//!
//! This crate renders the header, footer, and hotkey bar every screen
//! shares. Colors are always read from the theme passed to a render call,
//! so switching the active theme in [`dv_core::ThemeContext`] shows up on
//! the next frame.

pub mod markup;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use widgets::{Footer, FooterClass, Header, Hotkey, HotkeyFooter};
