//! Theme adapters for ratatui.
//!
//! This module provides:
//! - `palette` - theme color to terminal color resolution
//! - `styles` - semantic style builder functions

pub mod palette;
pub mod styles;
