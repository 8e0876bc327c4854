//! Theme files on disk.
//!
//! A theme file declares one palette in TOML or JSON:
//!
//! ```toml
//! name = "solarized-dark"
//! primary = "#268BD2"
//! secondary = "#2AA198"
//! warning = "#B58900"
//! error = "#DC322F"
//! success = "#859900"
//! accent = "#6C71C4"
//! foreground = "#839496"
//! background = "#002B36"
//! surface = "#073642"
//! panel = "#00212B"
//! dark = true
//!
//! [variables]
//! input-selection-background = "#586E75 40%"
//! ```

use std::path::{Path, PathBuf};

use super::{Theme, ThemeDefinition};
use crate::prelude::*;

const TOML_EXTENSION: &str = "toml";
const JSON_EXTENSION: &str = "json";

/// Load and validate a single theme file
pub fn load_theme_file(path: &Path) -> Result<Theme> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let content = std::fs::read_to_string(path)?;
    let definition: ThemeDefinition = match extension.as_deref() {
        Some(TOML_EXTENSION) => toml::from_str(&content)?,
        Some(JSON_EXTENSION) => serde_json::from_str(&content)?,
        _ => {
            return Err(Error::config(format!(
                "Unsupported theme file type: {}",
                path.display()
            )))
        }
    };

    let theme = Theme::try_from(definition)?;
    debug!("Loaded theme '{}' from {:?}", theme.name, path);
    Ok(theme)
}

/// Load every theme file in a directory, ordered by file name.
///
/// A missing directory yields no themes. Files with other extensions are
/// skipped. The first file that fails to load fails the whole call, so a
/// broken theme is reported at startup instead of at render time.
pub fn load_theme_dir(dir: &Path) -> Result<Vec<Theme>> {
    if !dir.exists() {
        debug!("No theme directory at {:?}", dir);
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
        })
        .with_context(|| format!("Failed to read theme directory {:?}", dir))?;
    paths.retain(|p| p.is_file() && is_theme_file(p));
    paths.sort();

    paths
        .iter()
        .map(|p| load_theme_file(p).with_context(|| format!("Failed to load theme {:?}", p)))
        .collect()
}

fn is_theme_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(TOML_EXTENSION) || e.eq_ignore_ascii_case(JSON_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::theme::StyleVariable;
    use tempfile::tempdir;

    const SOLARIZED_TOML: &str = r##"
name = "solarized-dark"
primary = "#268BD2"
secondary = "#2AA198"
warning = "#B58900"
error = "#DC322F"
success = "#859900"
accent = "#6C71C4"
foreground = "#839496"
background = "#002B36"
surface = "#073642"
panel = "#00212B"
dark = true

[variables]
input-selection-background = "#586E75 40%"
"##;

    const PAPER_JSON: &str = r##"{
  "name": "paper",
  "primary": "#1E6FCC",
  "secondary": "#216609",
  "warning": "#B8860B",
  "error": "#CC3E28",
  "success": "#216609",
  "accent": "#5C21A5",
  "foreground": "#000000",
  "background": "#F2EEDE",
  "surface": "#EAE6D6",
  "panel": "#DFDBCB",
  "dark": false
}"##;

    #[test]
    fn test_load_toml_theme() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("solarized.toml");
        std::fs::write(&path, SOLARIZED_TOML).unwrap();

        let theme = load_theme_file(&path).unwrap();
        assert_eq!(theme.name, "solarized-dark");
        assert_eq!(theme.primary, Color::from_hex(0x268BD2));
        assert!(theme.dark);
        assert!(theme
            .variable(StyleVariable::InputSelectionBackground)
            .is_some());
    }

    #[test]
    fn test_load_json_theme() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("paper.json");
        std::fs::write(&path, PAPER_JSON).unwrap();

        let theme = load_theme_file(&path).unwrap();
        assert_eq!(theme.name, "paper");
        assert!(!theme.dark);
        assert!(theme.variables.is_empty());
    }

    #[test]
    fn test_missing_role_fails_fast() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, SOLARIZED_TOML.replace("panel = \"#00212B\"\n", "")).unwrap();

        let err = load_theme_file(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedTheme { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("garbage.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert!(matches!(load_theme_file(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("theme.yaml");
        std::fs::write(&path, "name: x").unwrap();

        assert!(matches!(load_theme_file(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_dir_sorted_and_filtered() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("b_solarized.toml"), SOLARIZED_TOML).unwrap();
        std::fs::write(temp.path().join("a_paper.json"), PAPER_JSON).unwrap();
        std::fs::write(temp.path().join("README.md"), "# themes").unwrap();

        let themes = load_theme_dir(temp.path()).unwrap();
        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["paper", "solarized-dark"]);
    }

    #[test]
    fn test_load_missing_dir_is_empty() {
        let temp = tempdir().unwrap();
        let themes = load_theme_dir(&temp.path().join("nope")).unwrap();
        assert!(themes.is_empty());
    }

    #[test]
    fn test_load_dir_unreadable_is_error() {
        let temp = tempdir().unwrap();
        let not_a_dir = temp.path().join("themes");
        std::fs::write(&not_a_dir, "").unwrap();

        let err = load_theme_dir(&not_a_dir).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "{err}");
    }

    #[test]
    fn test_load_dir_fails_on_any_malformed_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("good.toml"), SOLARIZED_TOML).unwrap();
        std::fs::write(
            temp.path().join("bad.toml"),
            SOLARIZED_TOML.replace("#DC322F", "reddish"),
        )
        .unwrap();

        assert!(load_theme_dir(temp.path()).is_err());
    }
}
