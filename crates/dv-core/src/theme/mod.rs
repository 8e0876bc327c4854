//! Theme model, built-in catalog, registry, and active-theme context.
//!
//! - `builtin` - the palettes that ship with the application
//! - `registry` - validated, read-only catalog with name lookup
//! - `context` - the active theme handle threaded through screens
//! - `loader` - theme files (`.toml` / `.json`) from a directory

pub mod builtin;
pub mod context;
pub mod loader;
pub mod registry;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

pub use builtin::{register_builtin_themes, DEFAULT_THEME_NAME};
pub use context::{CycleDirection, ThemeContext};
pub use registry::ThemeRegistry;

/// A semantic color purpose resolved by the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Warning,
    Error,
    Success,
    Accent,
    Foreground,
    Background,
    Surface,
    Panel,
}

impl ColorRole {
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Success,
        ColorRole::Accent,
        ColorRole::Foreground,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Panel,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Success => "success",
            ColorRole::Accent => "accent",
            ColorRole::Foreground => "foreground",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::Panel => "panel",
        }
    }

    /// Look a role up by its name, with or without a leading `$`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix('$').unwrap_or(name);
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Style variable keys consumed by the chrome layer.
///
/// Themes may carry other keys; they are kept in [`Theme::variables`] and
/// ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariable {
    /// Tint painted behind selected text
    InputSelectionBackground,
    /// Text color on filled buttons
    ButtonColorForeground,
}

impl StyleVariable {
    pub const ALL: [StyleVariable; 2] = [
        StyleVariable::InputSelectionBackground,
        StyleVariable::ButtonColorForeground,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            StyleVariable::InputSelectionBackground => "input-selection-background",
            StyleVariable::ButtonColorForeground => "button-color-foreground",
        }
    }
}

/// A named, immutable palette
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
    pub accent: Color,
    pub foreground: Color,
    pub background: Color,
    pub surface: Color,
    pub panel: Color,
    pub dark: bool,
    pub variables: BTreeMap<String, String>,
}

impl Theme {
    /// Resolve a semantic role to its color
    pub fn role(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Warning => self.warning,
            ColorRole::Error => self.error,
            ColorRole::Success => self.success,
            ColorRole::Accent => self.accent,
            ColorRole::Foreground => self.foreground,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Panel => self.panel,
        }
    }

    /// Raw value of any style variable
    pub fn raw_variable(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Parsed value of a known style variable.
    ///
    /// Registered themes are validated, so `None` means the theme does not
    /// set the variable.
    pub fn variable(&self, var: StyleVariable) -> Option<Color> {
        self.raw_variable(var.key())
            .and_then(|v| Color::parse(v).ok())
    }

    /// Check the invariants a registry relies on.
    ///
    /// Roles are typed colors and always present; what can still be wrong is
    /// the name and the free-form variable values.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::malformed_theme(&self.name, "name is empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(Error::malformed_theme(
                &self.name,
                "name must not contain whitespace",
            ));
        }
        for (key, value) in &self.variables {
            if !Color::is_valid_token(value) {
                return Err(Error::malformed_theme(
                    &self.name,
                    format!("variable '{}' has invalid color token {:?}", key, value),
                ));
            }
        }
        Ok(())
    }

    /// Foreground/background pair for search highlights.
    ///
    /// Tries the softer roles first and keeps the first one whose readable
    /// text color gives an acceptable pairing.
    pub fn highlight_colors(&self) -> (Color, Color) {
        let candidates = [
            self.accent,
            self.secondary,
            self.primary,
            self.success,
            self.warning,
        ];
        for bg in candidates {
            let fg = bg.readable_text();
            if is_good_highlight(bg, fg) {
                return (fg, bg);
            }
        }
        let light = Color::from_hex(0xCCCAC2);
        let dark = Color::from_hex(0x1F2430);
        if self.dark {
            (dark, light)
        } else {
            (light, dark)
        }
    }

    /// Convert to the declarative file shape
    pub fn to_definition(&self) -> ThemeDefinition {
        let mut def = ThemeDefinition {
            name: self.name.clone(),
            dark: self.dark,
            variables: self.variables.clone(),
            ..ThemeDefinition::default()
        };
        for role in ColorRole::ALL {
            *def.slot_mut(role) = Some(self.role(role).to_string());
        }
        def
    }
}

fn is_good_highlight(bg: Color, fg: Color) -> bool {
    let lum = bg.luminance();
    !((fg == Color::WHITE && lum > 0.7) || (fg == Color::BLACK && lum < 0.3))
}

/// A theme as declared in a configuration file.
///
/// Every role is optional here so a missing role is reported as a
/// [`Error::MalformedTheme`] naming the role instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
    #[serde(default = "default_true")]
    pub dark: bool,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl ThemeDefinition {
    fn slot(&self, role: ColorRole) -> Option<&str> {
        let value = match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Success => &self.success,
            ColorRole::Accent => &self.accent,
            ColorRole::Foreground => &self.foreground,
            ColorRole::Background => &self.background,
            ColorRole::Surface => &self.surface,
            ColorRole::Panel => &self.panel,
        };
        value.as_deref()
    }

    fn slot_mut(&mut self, role: ColorRole) -> &mut Option<String> {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Error => &mut self.error,
            ColorRole::Success => &mut self.success,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Foreground => &mut self.foreground,
            ColorRole::Background => &mut self.background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::Panel => &mut self.panel,
        }
    }

    fn color(&self, role: ColorRole) -> Result<Color> {
        let token = self
            .slot(role)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::malformed_theme(&self.name, format!("missing color role '{}'", role))
            })?;
        Color::parse(token).map_err(|_| {
            Error::malformed_theme(
                &self.name,
                format!("role '{}' has invalid color token {:?}", role, token),
            )
        })
    }
}

impl TryFrom<ThemeDefinition> for Theme {
    type Error = Error;

    fn try_from(def: ThemeDefinition) -> Result<Self> {
        let theme = Theme {
            primary: def.color(ColorRole::Primary)?,
            secondary: def.color(ColorRole::Secondary)?,
            warning: def.color(ColorRole::Warning)?,
            error: def.color(ColorRole::Error)?,
            success: def.color(ColorRole::Success)?,
            accent: def.color(ColorRole::Accent)?,
            foreground: def.color(ColorRole::Foreground)?,
            background: def.color(ColorRole::Background)?,
            surface: def.color(ColorRole::Surface)?,
            panel: def.color(ColorRole::Panel)?,
            dark: def.dark,
            name: def.name,
            variables: def.variables,
        };
        theme.validate()?;
        Ok(theme)
    }
}
