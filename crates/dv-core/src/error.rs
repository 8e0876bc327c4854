//! Error types for theme loading, lookup, and settings

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Theme Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Theme not found: {name}")]
    ThemeNotFound { name: String },

    #[error("Malformed theme '{name}': {reason}")]
    MalformedTheme { name: String, reason: String },

    #[error("Theme registered more than once: {name}")]
    DuplicateTheme { name: String },

    #[error("Invalid color token: {token:?}")]
    InvalidColor { token: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn theme_not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    pub fn malformed_theme(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTheme {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_theme(name: impl Into<String>) -> Self {
        Self::DuplicateTheme { name: name.into() }
    }

    pub fn invalid_color(token: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// An unknown theme name is the caller's to handle, usually by falling
    /// back to the default theme or reporting it to the user.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ThemeNotFound { .. } | Error::Config { .. })
    }

    /// Check if this error should abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MalformedTheme { .. } | Error::DuplicateTheme { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::theme_not_found("does-not-exist");
        assert_eq!(err.to_string(), "Theme not found: does-not-exist");

        let err = Error::malformed_theme("broken", "missing role 'panel'");
        assert!(err.to_string().contains("broken"));
        assert!(err.to_string().contains("missing role 'panel'"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("not valid toml {{{{").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::malformed_theme("x", "bad").is_fatal());
        assert!(Error::duplicate_theme("x").is_fatal());
        assert!(!Error::theme_not_found("x").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::theme_not_found("x").is_recoverable());
        assert!(Error::config("bad").is_recoverable());
        assert!(!Error::malformed_theme("x", "bad").is_recoverable());
    }

    #[test]
    fn test_invalid_color_display_quotes_token() {
        let err = Error::invalid_color("#12");
        assert_eq!(err.to_string(), "Invalid color token: \"#12\"");
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), Error> = Err(Error::theme_not_found("nope"));
        let err = res.context("switching theme").unwrap_err();
        assert!(matches!(err, Error::ThemeNotFound { .. }));
    }
}
