//! Theme controller: page-load initialization and the toggle handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns a [`PreferenceStore`] and a [`StyleTarget`] and keeps
//! them in agreement: after `initialize` (with a readable store) and after
//! every `toggle`, the marker is present exactly when the stored value is
//! `"dark"`.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are logged and otherwise ignored. The marker always
//! reflects the user's last click even when the preference could not be
//! persisted; the next page load then falls back to the light default.
//!
//! The controller is not thread-safe and does not try to be. All calls come
//! from the browser's event loop, one handler at a time.

use log::{debug, warn};

use crate::config::ThemeConfig;
use crate::store::PreferenceStore;
use crate::target::StyleTarget;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, T> {
    store: S,
    target: T,
    storage_key: String,
}

impl<S: PreferenceStore, T: StyleTarget> ThemeController<S, T> {
    #[must_use]
    pub fn new(store: S, target: T, config: &ThemeConfig) -> Self {
        Self {
            store,
            target,
            storage_key: config.storage_key.clone(),
        }
    }

    /// Apply the stored preference to the target. Runs once per page load.
    ///
    /// Only a stored `"dark"` adds the marker; any other value, a missing key
    /// or an unreadable store leaves the target untouched. Never writes.
    pub fn initialize(&mut self) -> Theme {
        match self.store.get(&self.storage_key) {
            Ok(raw) => {
                let stored = Theme::from_stored(raw.as_deref());
                debug!("theme: initialized from session storage ({stored})");
                if stored.is_dark() {
                    self.target.set_marker(true);
                }
            }
            Err(e) => {
                warn!("theme: keeping default, could not read preference: {e}");
            }
        }
        self.current()
    }

    /// Flip the theme and persist the result. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// Apply `theme` to the target and write it to the store.
    ///
    /// The marker is updated even if the write fails.
    pub fn set(&mut self, theme: Theme) {
        self.target.set_marker(theme.is_dark());
        debug!("theme: switched to {theme}");
        if let Err(e) = self.store.set(&self.storage_key, theme.as_str()) {
            warn!("theme: preference not persisted: {e}");
        }
    }

    /// Theme currently shown, as read from the target's marker.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_marker(self.target.has_marker())
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn into_parts(self) -> (S, T) {
        (self.store, self.target)
    }
}
