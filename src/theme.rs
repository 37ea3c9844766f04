//! Theme preference values.
//!
//! The preference is stored as a lowercase string and mirrored as a marker
//! class on the document root. Only the exact string `"dark"` selects the
//! dark theme; anything else read back from storage means light.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal string written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a raw stored value. Absent or unrecognized values are light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Theme implied by the presence of the marker on the document root.
    #[must_use]
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
