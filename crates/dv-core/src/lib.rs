//! # dv-core - Theme Registry and Shared Infrastructure
//!
//! Foundation crate for Delta Vision's chrome layer. Provides color tokens,
//! the theme model and built-in catalog, the active-theme context, theme
//! file loading, settings, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** and no terminal code; the
//! ratatui adapters live in `dv-tui`.
//!
//! ## Public API
//!
//! ### Colors (`color`)
//! - [`Color`] - Parsed `#RRGGBB` / `#RRGGBBAA` / `#RRGGBB NN%` token
//! - [`contrast_ratio()`] - WCAG contrast between two colors
//!
//! ### Themes (`theme`)
//! - [`Theme`] - Named palette of semantic roles plus style variables
//! - [`ColorRole`], [`StyleVariable`] - Keys into a theme
//! - [`register_builtin_themes()`] - The cached built-in catalog
//! - [`ThemeRegistry`] - Validated, read-only catalog with exact lookup
//! - [`ThemeContext`] - Shared active-theme handle
//!
//! ### Configuration (`config`)
//! - [`Settings`] - `.delta-vision/config.toml`
//! - [`load_settings()`] - Read settings, falling back to defaults
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dv_core::prelude::*;
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod theme;

pub use color::{contrast_ratio, Color};
pub use config::{load_settings, load_user_settings, Settings, UiSettings};
pub use error::{Error, Result, ResultExt};
pub use theme::{
    register_builtin_themes, ColorRole, CycleDirection, StyleVariable, Theme, ThemeContext,
    ThemeDefinition, ThemeRegistry, DEFAULT_THEME_NAME,
};
