//! Active-theme handle threaded through screen and widget construction.
//!
//! The registry is shared immutably; the only mutable state is the index of
//! the active theme, swapped atomically. Every clone of a context observes
//! the same active theme, and readers always load the current value so a
//! switch takes effect on the next render.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::loader::load_theme_dir;
use super::{Theme, ThemeRegistry, DEFAULT_THEME_NAME};
use crate::config::Settings;
use crate::prelude::*;

/// Direction for stepping through the registry on a user toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub struct ThemeContext {
    registry: Arc<ThemeRegistry>,
    active: Arc<AtomicUsize>,
}

impl ThemeContext {
    /// Create a context with `default_name` active.
    ///
    /// The default must be registered so [`active`](Self::active) can never
    /// fail afterwards.
    pub fn new(registry: impl Into<Arc<ThemeRegistry>>, default_name: &str) -> Result<Self> {
        let registry = registry.into();
        let index = registry
            .position(default_name)
            .ok_or_else(|| Error::theme_not_found(default_name))?;
        Ok(Self {
            registry,
            active: Arc::new(AtomicUsize::new(index)),
        })
    }

    /// Built-in registry with [`DEFAULT_THEME_NAME`] active
    pub fn builtin() -> Result<Self> {
        Self::new(ThemeRegistry::builtin()?, DEFAULT_THEME_NAME)
    }

    /// Build from user settings.
    ///
    /// Loads extra themes from the configured directory (a malformed file
    /// fails startup), then activates the configured theme. An unknown
    /// configured name falls back to [`DEFAULT_THEME_NAME`].
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let extra = match settings.themes_dir() {
            Some(dir) => load_theme_dir(&dir)?,
            None => Vec::new(),
        };
        let registry = Arc::new(ThemeRegistry::with_extra(extra)?);

        let wanted = settings.ui.theme.as_deref().unwrap_or(DEFAULT_THEME_NAME);
        match Self::new(Arc::clone(&registry), wanted) {
            Ok(ctx) => Ok(ctx),
            Err(Error::ThemeNotFound { name }) => {
                warn!(
                    "Configured theme '{}' is not registered, using '{}'",
                    name, DEFAULT_THEME_NAME
                );
                Self::new(registry, DEFAULT_THEME_NAME)
            }
            Err(e) => Err(e),
        }
    }

    /// The currently active theme
    pub fn active(&self) -> &Theme {
        let index = self.active.load(Ordering::Acquire);
        // The index only ever comes from `position()` on this registry.
        self.registry.at(index)
    }

    pub fn active_name(&self) -> &str {
        &self.active().name
    }

    /// Switch the active theme by name.
    ///
    /// Fails with [`Error::ThemeNotFound`] and leaves the active theme
    /// unchanged when the name is not registered.
    pub fn set_active(&self, name: &str) -> Result<()> {
        let index = self
            .registry
            .position(name)
            .ok_or_else(|| Error::theme_not_found(name))?;
        let previous = self.active.swap(index, Ordering::AcqRel);
        if previous != index {
            info!("Theme switched to '{}'", name);
        }
        Ok(())
    }

    /// Step to the neighbouring theme in registration order, wrapping at
    /// either end. Returns the name of the newly active theme.
    pub fn cycle(&self, direction: CycleDirection) -> &str {
        let len = self.registry.len();
        let current = self.active.load(Ordering::Acquire);
        let next = match direction {
            CycleDirection::Next => (current + 1) % len,
            CycleDirection::Previous => (current + len - 1) % len,
        };
        self.active.store(next, Ordering::Release);
        let name = self.active_name();
        info!("Theme switched to '{}'", name);
        name
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }
}
