//! Read-only theme catalog with exact-name lookup

use std::collections::HashMap;

use super::{register_builtin_themes, Theme};
use crate::prelude::*;

/// Ordered, validated collection of themes.
///
/// Built once at startup and never mutated afterwards. Order is
/// registration order, which is also the order theme cycling follows.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    index: HashMap<String, usize>,
}

impl ThemeRegistry {
    /// Build a registry, validating every theme.
    ///
    /// Fails with [`Error::MalformedTheme`] on an invalid theme and
    /// [`Error::DuplicateTheme`] when two themes share a name.
    pub fn new(themes: Vec<Theme>) -> Result<Self> {
        let mut index = HashMap::with_capacity(themes.len());
        for (i, theme) in themes.iter().enumerate() {
            theme.validate()?;
            if index.insert(theme.name.clone(), i).is_some() {
                return Err(Error::duplicate_theme(&theme.name));
            }
        }
        debug!("Theme registry built with {} themes", themes.len());
        Ok(Self { themes, index })
    }

    /// Registry over the built-in catalog.
    ///
    /// An error here is a packaging defect; callers should abort startup.
    pub fn builtin() -> Result<Self> {
        Self::new(register_builtin_themes().to_vec())
    }

    /// Built-in catalog followed by additional (user) themes
    pub fn with_extra(extra: Vec<Theme>) -> Result<Self> {
        let mut themes = register_builtin_themes().to_vec();
        themes.extend(extra);
        Self::new(themes)
    }

    /// Resolve a theme by exact name
    pub fn lookup(&self, name: &str) -> Result<&Theme> {
        self.position(name)
            .map(|i| &self.themes[i])
            .ok_or_else(|| Error::theme_not_found(name))
    }

    /// Registration index of a theme
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Theme at a registration index
    pub fn get(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// Infallible access for indices produced by [`position`](Self::position)
    pub(super) fn at(&self, index: usize) -> &Theme {
        &self.themes[index]
    }

    /// Theme names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str) -> Theme {
        let mut theme = register_builtin_themes()[0].clone();
        theme.name = name.to_string();
        theme
    }

    #[test]
    fn test_builtin_registry_builds() {
        let registry = ThemeRegistry::builtin().unwrap();
        assert_eq!(registry.len(), register_builtin_themes().len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_lookup_one_dark_is_dark() {
        let registry = ThemeRegistry::builtin().unwrap();
        assert!(registry.lookup("one-dark").unwrap().dark);
    }

    #[test]
    fn test_lookup_tomorrow_is_light() {
        let registry = ThemeRegistry::builtin().unwrap();
        assert!(!registry.lookup("tomorrow").unwrap().dark);
    }

    #[test]
    fn test_lookup_unknown_fails() {
        let registry = ThemeRegistry::builtin().unwrap();
        let err = registry.lookup("does-not-exist").unwrap_err();
        assert!(matches!(err, Error::ThemeNotFound { ref name } if name == "does-not-exist"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = ThemeRegistry::builtin().unwrap();
        assert!(registry.lookup("one").is_err());
        assert!(registry.lookup("One-Dark").is_err());
        assert!(registry.lookup("one_dark").is_err());
        assert!(registry.lookup(" one-dark").is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ThemeRegistry::new(vec![custom("twin"), custom("twin")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateTheme { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_user_theme_cannot_shadow_builtin() {
        let err = ThemeRegistry::with_extra(vec![custom("zenburn")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateTheme { ref name } if name == "zenburn"));
    }

    #[test]
    fn test_malformed_theme_rejected() {
        let mut bad = custom("bad");
        bad.variables
            .insert("input-selection-background".into(), "#12".into());
        let err = ThemeRegistry::new(vec![bad]).unwrap_err();
        assert!(matches!(err, Error::MalformedTheme { .. }));
    }

    #[test]
    fn test_with_extra_appends_after_builtins() {
        let registry = ThemeRegistry::with_extra(vec![custom("my-theme")]).unwrap();
        assert_eq!(registry.names().last(), Some("my-theme"));
        assert_eq!(
            registry.position("my-theme"),
            Some(register_builtin_themes().len())
        );
    }

    #[test]
    fn test_names_follow_registration_order() {
        let registry = ThemeRegistry::new(vec![custom("b"), custom("a")]).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(registry.get(1).map(|t| t.name.as_str()), Some("a"));
        assert!(registry.contains("a"));
        assert!(!registry.contains("c"));
    }
}
