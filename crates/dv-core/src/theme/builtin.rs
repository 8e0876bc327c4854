//! Palettes that ship with Delta Vision.
//!
//! Adding a theme is a data-only change: append a constructor to
//! [`BUILTIN_THEMES`]. Widgets never need to know about it.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{StyleVariable, Theme};
use crate::color::Color;

/// Theme activated at startup when nothing else is configured
pub const DEFAULT_THEME_NAME: &str = "ayu-mirage";

const BUILTIN_THEMES: &[fn() -> Theme] = &[
    ayu_mirage,
    cyberpunk_2077,
    dainty,
    hackthebox,
    houston,
    kanagawa,
    monaspace,
    one_dark,
    synthwave_84,
    tomorrow,
    tomorrow_night,
    witch_hazel,
    zenburn,
];

static CATALOG: OnceLock<Vec<Theme>> = OnceLock::new();

/// The built-in catalog, built on first use and cached for the process
/// lifetime.
///
/// The catalog is not validated here; [`ThemeRegistry::builtin`] does that
/// once at startup.
///
/// [`ThemeRegistry::builtin`]: super::ThemeRegistry::builtin
pub fn register_builtin_themes() -> &'static [Theme] {
    CATALOG.get_or_init(|| BUILTIN_THEMES.iter().map(|build| build()).collect())
}

fn variables(selection: &str, button_fg: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            StyleVariable::InputSelectionBackground.key().to_string(),
            selection.to_string(),
        ),
        (
            StyleVariable::ButtonColorForeground.key().to_string(),
            button_fg.to_string(),
        ),
    ])
}

fn ayu_mirage() -> Theme {
    Theme {
        name: "ayu-mirage".into(),
        primary: Color::from_hex(0xFFCC66),
        secondary: Color::from_hex(0x73D0FF),
        warning: Color::from_hex(0xFFAD66),
        error: Color::from_hex(0xFF6666),
        success: Color::from_hex(0x87D96C),
        accent: Color::from_hex(0x5CCFE6),
        foreground: Color::from_hex(0xCCCAC2),
        background: Color::from_hex(0x1F2430),
        surface: Color::from_hex(0x242936),
        panel: Color::from_hex(0x1C212B),
        dark: true,
        variables: variables("#409FFF 25%", "#1F2430"),
    }
}

fn cyberpunk_2077() -> Theme {
    Theme {
        name: "cyberpunk-2077".into(),
        primary: Color::from_hex(0x02D7F2),
        secondary: Color::from_hex(0x007AFF),
        warning: Color::from_hex(0xF2E900),
        error: Color::from_hex(0xFF1111),
        success: Color::from_hex(0x00FF88),
        accent: Color::from_hex(0xB942E6),
        foreground: Color::from_hex(0xE6E6FA),
        background: Color::from_hex(0x0D0D0D),
        surface: Color::from_hex(0x1A1A1A),
        panel: Color::from_hex(0x111111),
        dark: true,
        variables: variables("#02D7F2 35%", "#0D0D0D"),
    }
}

// Soft pastels on a warm off-white base
fn dainty() -> Theme {
    Theme {
        name: "dainty".into(),
        primary: Color::from_hex(0x8B5FBF),
        secondary: Color::from_hex(0x5FB3D4),
        warning: Color::from_hex(0xE6A85C),
        error: Color::from_hex(0xD47D7D),
        success: Color::from_hex(0x7FB069),
        accent: Color::from_hex(0xC67DBF),
        foreground: Color::from_hex(0x2D3748),
        background: Color::from_hex(0xFAF9F7),
        surface: Color::from_hex(0xF1EFF2),
        panel: Color::from_hex(0xE8E5EA),
        dark: false,
        variables: variables("#8B5FBF 25%", "#FAF9F7"),
    }
}

fn hackthebox() -> Theme {
    Theme {
        name: "hackthebox".into(),
        primary: Color::from_hex(0x9FEF00),
        secondary: Color::from_hex(0x2EE7B6),
        warning: Color::from_hex(0xFFAF00),
        error: Color::from_hex(0xFF3E3E),
        success: Color::from_hex(0x9FEF00),
        accent: Color::from_hex(0x004CFF),
        foreground: Color::from_hex(0xC5D1EB),
        background: Color::from_hex(0x111927),
        surface: Color::from_hex(0x2E3436),
        panel: Color::from_hex(0x0A0F1A),
        dark: true,
        variables: variables("#9FEF00 30%", "#111927"),
    }
}

fn houston() -> Theme {
    Theme {
        name: "houston".into(),
        primary: Color::from_hex(0x5DADE2),
        secondary: Color::from_hex(0x58D68D),
        warning: Color::from_hex(0xF39C12),
        error: Color::from_hex(0xE74C3C),
        success: Color::from_hex(0x58D68D),
        accent: Color::from_hex(0x9B59B6),
        foreground: Color::from_hex(0xECF0F1),
        background: Color::from_hex(0x1B2631),
        surface: Color::from_hex(0x212F3D),
        panel: Color::from_hex(0x17202A),
        dark: true,
        variables: variables("#5DADE2 35%", "#1B2631"),
    }
}

fn kanagawa() -> Theme {
    Theme {
        name: "kanagawa".into(),
        primary: Color::from_hex(0x7E9CD8),
        secondary: Color::from_hex(0x6A9589),
        warning: Color::from_hex(0xDCA561),
        error: Color::from_hex(0xC34043),
        success: Color::from_hex(0x76946A),
        accent: Color::from_hex(0x957FB8),
        foreground: Color::from_hex(0xDCD7BA),
        background: Color::from_hex(0x1F1F28),
        surface: Color::from_hex(0x2A2A37),
        panel: Color::from_hex(0x16161D),
        dark: true,
        variables: variables("#54546D 40%", "#1F1F28"),
    }
}

fn monaspace() -> Theme {
    Theme {
        name: "monaspace".into(),
        primary: Color::from_hex(0x0969DA),
        secondary: Color::from_hex(0x6F42C1),
        warning: Color::from_hex(0xBF8700),
        error: Color::from_hex(0xDA3633),
        success: Color::from_hex(0x1A7F37),
        accent: Color::from_hex(0x8250DF),
        foreground: Color::from_hex(0x24292F),
        background: Color::from_hex(0xFFFFFF),
        surface: Color::from_hex(0xF6F8FA),
        panel: Color::from_hex(0xF0F3F6),
        dark: false,
        variables: variables("#0969DA 20%", "#FFFFFF"),
    }
}

fn one_dark() -> Theme {
    Theme {
        name: "one-dark".into(),
        primary: Color::from_hex(0x61AFEF),
        secondary: Color::from_hex(0x56B6C2),
        warning: Color::from_hex(0xE5C07B),
        error: Color::from_hex(0xE06C75),
        success: Color::from_hex(0x98C379),
        accent: Color::from_hex(0xC678DD),
        foreground: Color::from_hex(0xABB2BF),
        background: Color::from_hex(0x282C34),
        surface: Color::from_hex(0x21252B),
        panel: Color::from_hex(0x1E222A),
        dark: true,
        variables: variables("#3E4451 40%", "#282C34"),
    }
}

fn synthwave_84() -> Theme {
    Theme {
        name: "synthwave-84".into(),
        primary: Color::from_hex(0xFF2E8A),
        secondary: Color::from_hex(0x2DE2E6),
        warning: Color::from_hex(0xFFAF00),
        error: Color::from_hex(0xFF073A),
        success: Color::from_hex(0x39FF14),
        accent: Color::from_hex(0x9D4EDD),
        foreground: Color::from_hex(0xF5F5F5),
        background: Color::from_hex(0x0B0C10),
        surface: Color::from_hex(0x1A1A2E),
        panel: Color::from_hex(0x16213E),
        dark: true,
        variables: variables("#FF2E8A 40%", "#0B0C10"),
    }
}

fn tomorrow() -> Theme {
    Theme {
        name: "tomorrow".into(),
        primary: Color::from_hex(0x4271AE),
        secondary: Color::from_hex(0x3E999F),
        warning: Color::from_hex(0xEAB700),
        error: Color::from_hex(0xC82829),
        success: Color::from_hex(0x718C00),
        accent: Color::from_hex(0x8959A8),
        foreground: Color::from_hex(0x4D4D4C),
        background: Color::from_hex(0xFFFFFF),
        surface: Color::from_hex(0xF5F5F5),
        panel: Color::from_hex(0xE9E9E9),
        dark: false,
        variables: variables("#D6D6D6 40%", "#FFFFFF"),
    }
}

fn tomorrow_night() -> Theme {
    Theme {
        name: "tomorrow-night".into(),
        primary: Color::from_hex(0x81A2BE),
        secondary: Color::from_hex(0x8ABEB7),
        warning: Color::from_hex(0xF0C674),
        error: Color::from_hex(0xCC6666),
        success: Color::from_hex(0xB5BD68),
        accent: Color::from_hex(0xB294BB),
        foreground: Color::from_hex(0xC5C8C6),
        background: Color::from_hex(0x1D1F21),
        surface: Color::from_hex(0x282A2E),
        panel: Color::from_hex(0x1A1C1E),
        dark: true,
        variables: variables("#373B41 40%", "#1D1F21"),
    }
}

fn witch_hazel() -> Theme {
    Theme {
        name: "witch-hazel".into(),
        primary: Color::from_hex(0x716799),
        secondary: Color::from_hex(0x31CAE3),
        warning: Color::from_hex(0xFFF781),
        error: Color::from_hex(0xFF81AD),
        success: Color::from_hex(0xC2FFDF),
        accent: Color::from_hex(0xC5A3FF),
        foreground: Color::from_hex(0xF8F8F2),
        background: Color::from_hex(0x433E56),
        surface: Color::from_hex(0x3C374D),
        panel: Color::from_hex(0x353144),
        dark: true,
        variables: variables("#8077A8", "#433E56"),
    }
}

// Low-contrast dark theme
fn zenburn() -> Theme {
    Theme {
        name: "zenburn".into(),
        primary: Color::from_hex(0x8CD0D3),
        secondary: Color::from_hex(0x94BFF3),
        warning: Color::from_hex(0xE3CEAB),
        error: Color::from_hex(0xCC9393),
        success: Color::from_hex(0x7F9F7F),
        accent: Color::from_hex(0xDC8CC3),
        foreground: Color::from_hex(0xDCDCCC),
        background: Color::from_hex(0x3F3F3F),
        surface: Color::from_hex(0x2B2B2B),
        panel: Color::from_hex(0x242424),
        dark: true,
        variables: variables("#5F5F5F 40%", "#3F3F3F"),
    }
}
