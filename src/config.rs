//! Names shared between the controller, the page markup and the stylesheet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storage key, root marker class and trigger selector are fixed by the
//! page's CSS and HTML. Defaults match the stock markup; pages with different
//! names can pass a JSON override to the WASM entry point.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_MARKER_CLASS: &str = "dark";
pub const DEFAULT_TRIGGER_SELECTOR: &str = ".theme-toggle";

/// Error returned by [`ThemeConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme config field `{0}` must not be empty")]
    Empty(&'static str),
    /// The marker is a single class token; `classList.add` rejects whitespace.
    #[error("marker class {0:?} must not contain whitespace")]
    MarkerWhitespace(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Session storage key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Class toggled on the document root element.
    pub marker_class: String,
    /// CSS selector for elements whose click toggles the theme.
    pub trigger_selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            trigger_selector: DEFAULT_TRIGGER_SELECTOR.to_owned(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown fields,
    /// [`ConfigError::Empty`] when a field is given as an empty string and
    /// [`ConfigError::MarkerWhitespace`] when the marker class is not a single
    /// class token.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    #[must_use]
    pub fn with_trigger_selector(mut self, selector: impl Into<String>) -> Self {
        self.trigger_selector = selector.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Empty("storage_key"));
        }
        if self.marker_class.is_empty() {
            return Err(ConfigError::Empty("marker_class"));
        }
        if self.marker_class.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(ConfigError::MarkerWhitespace(self.marker_class.clone()));
        }
        if self.trigger_selector.is_empty() {
            return Err(ConfigError::Empty("trigger_selector"));
        }
        Ok(())
    }
}
