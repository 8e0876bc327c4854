//! Chrome widgets shared by every Delta Vision screen

mod footer;
mod header;
mod hotkey_footer;

pub use footer::{
    resolve_footer_text, Footer, FooterClass, FooterView, DEFAULT_HINT, NOTES_HINT, NOTES_MARKER,
};
pub use header::{
    clock_text, header_title, Header, HeaderView, APP_NAME, HEADER_HEIGHT, TITLE_SEPARATOR,
};
pub use hotkey_footer::{Hotkey, HotkeyFooter, HotkeyFooterView};
