//! Startup path: settings file + user theme directory + active theme switching

use dv_core::config::{CONFIG_DIR, CONFIG_FILENAME};
use dv_core::{load_settings, ColorRole, Error, ThemeContext, DEFAULT_THEME_NAME};
use tempfile::tempdir;

const NORD_TOML: &str = r##"
name = "nord"
primary = "#88C0D0"
secondary = "#81A1C1"
warning = "#EBCB8B"
error = "#BF616A"
success = "#A3BE8C"
accent = "#B48EAD"
foreground = "#D8DEE9"
background = "#2E3440"
surface = "#3B4252"
panel = "#272C36"

[variables]
input-selection-background = "#4C566A 40%"
button-color-foreground = "#2E3440"
"##;

fn write_project(config: &str, themes: &[(&str, &str)]) -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    let config_dir = temp.path().join(CONFIG_DIR);
    std::fs::create_dir_all(config_dir.join("themes")).unwrap();
    std::fs::write(config_dir.join(CONFIG_FILENAME), config).unwrap();
    for (file, content) in themes {
        std::fs::write(config_dir.join("themes").join(file), content).unwrap();
    }
    temp
}

#[test]
fn user_theme_is_registered_and_activated() {
    let project = write_project(
        "[ui]\ntheme = \"nord\"\nthemes_dir = \"themes\"\n",
        &[("nord.toml", NORD_TOML)],
    );

    let settings = load_settings(project.path());
    let ctx = ThemeContext::from_settings(&settings).unwrap();

    assert_eq!(ctx.active_name(), "nord");
    assert_eq!(ctx.active().role(ColorRole::Panel).to_string(), "#272C36");
    assert!(ctx.registry().contains("zenburn"));
}

#[test]
fn switching_from_user_theme_to_builtin() {
    let project = write_project(
        "[ui]\ntheme = \"nord\"\nthemes_dir = \"themes\"\n",
        &[("nord.toml", NORD_TOML)],
    );
    let ctx = ThemeContext::from_settings(&load_settings(project.path())).unwrap();

    ctx.set_active("zenburn").unwrap();
    assert_eq!(ctx.active_name(), "zenburn");
    assert!(matches!(
        ctx.set_active("does-not-exist"),
        Err(Error::ThemeNotFound { .. })
    ));
    assert_eq!(ctx.active_name(), "zenburn");
}

#[test]
fn malformed_user_theme_aborts_startup() {
    let broken = NORD_TOML.replace("surface = \"#3B4252\"\n", "");
    let project = write_project(
        "[ui]\nthemes_dir = \"themes\"\n",
        &[("nord.toml", broken.as_str())],
    );

    let err = ThemeContext::from_settings(&load_settings(project.path())).unwrap_err();
    assert!(err.is_fatal(), "expected fatal error, got {err}");
}

#[test]
fn missing_config_uses_default_theme() {
    let temp = tempdir().unwrap();
    let ctx = ThemeContext::from_settings(&load_settings(temp.path())).unwrap();
    assert_eq!(ctx.active_name(), DEFAULT_THEME_NAME);
}
