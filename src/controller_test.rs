use super::*;
use crate::store::{MemoryStore, StoreError};
use crate::target::MemoryTarget;

// =============================================================
// Helpers
// =============================================================

/// Store that can be told to fail, and counts writes attempted.
#[derive(Default)]
struct ScriptedStore {
    inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl ScriptedStore {
    fn with_theme(value: &str) -> Self {
        Self {
            inner: MemoryStore::with_entry("theme", value),
            ..Self::default()
        }
    }

    fn stored(&self) -> Option<String> {
        self.inner.get("theme").unwrap()
    }
}

impl PreferenceStore for ScriptedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Read("SecurityError".into()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(StoreError::Write("QuotaExceededError".into()));
        }
        self.inner.set(key, value)
    }
}

fn controller(store: ScriptedStore) -> ThemeController<ScriptedStore, MemoryTarget> {
    ThemeController::new(store, MemoryTarget::new(), &ThemeConfig::default())
}

/// Simulate a reload: same session storage, fresh document.
fn reload(
    ctl: ThemeController<ScriptedStore, MemoryTarget>,
) -> ThemeController<ScriptedStore, MemoryTarget> {
    let (store, _) = ctl.into_parts();
    let mut next = controller(store);
    next.initialize();
    next
}

fn assert_consistent(ctl: &ThemeController<ScriptedStore, MemoryTarget>) {
    let marked = ctl.target().has_marker();
    assert_eq!(marked, ctl.store().stored().as_deref() == Some("dark"));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_dark_applies_marker() {
    let mut ctl = controller(ScriptedStore::with_theme("dark"));
    assert_eq!(ctl.initialize(), Theme::Dark);
    assert!(ctl.target().has_marker());
}

#[test]
fn initialize_with_light_leaves_marker_absent() {
    let mut ctl = controller(ScriptedStore::with_theme("light"));
    assert_eq!(ctl.initialize(), Theme::Light);
    assert!(!ctl.target().has_marker());
}

#[test]
fn initialize_with_absent_key_is_default() {
    let mut ctl = controller(ScriptedStore::default());
    assert_eq!(ctl.initialize(), Theme::Light);
    assert!(!ctl.target().has_marker());
}

#[test]
fn initialize_with_unrecognized_value_is_default() {
    let mut ctl = controller(ScriptedStore::with_theme("DARK"));
    assert_eq!(ctl.initialize(), Theme::Light);
    assert_eq!(ctl.target().writes(), 0);
}

#[test]
fn initialize_never_writes_storage() {
    for value in ["dark", "light"] {
        let mut ctl = controller(ScriptedStore::with_theme(value));
        ctl.initialize();
        assert_eq!(ctl.store().writes, 0);
        assert_eq!(ctl.store().stored().as_deref(), Some(value));
    }
}

#[test]
fn initialize_with_unreadable_store_stays_default() {
    let store = ScriptedStore {
        fail_reads: true,
        ..ScriptedStore::with_theme("dark")
    };
    let mut ctl = controller(store);
    assert_eq!(ctl.initialize(), Theme::Light);
    assert!(!ctl.target().has_marker());
    assert_eq!(ctl.target().writes(), 0);
}

#[test]
fn initialize_uses_configured_key() {
    let config = ThemeConfig::new().with_storage_key("site_theme");
    let store = MemoryStore::with_entry("site_theme", "dark");
    let mut ctl = ThemeController::new(store, MemoryTarget::new(), &config);
    assert_eq!(ctl.storage_key(), "site_theme");
    assert_eq!(ctl.initialize(), Theme::Dark);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_marks_and_stores_dark() {
    let mut ctl = controller(ScriptedStore::default());
    ctl.initialize();
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert!(ctl.target().has_marker());
    assert_eq!(ctl.store().stored().as_deref(), Some("dark"));
}

#[test]
fn toggle_from_dark_unmarks_and_stores_light() {
    let mut ctl = controller(ScriptedStore::with_theme("dark"));
    ctl.initialize();
    assert_eq!(ctl.toggle(), Theme::Light);
    assert!(!ctl.target().has_marker());
    assert_eq!(ctl.store().stored().as_deref(), Some("light"));
}

#[test]
fn toggle_performs_one_write_and_one_mutation() {
    let mut ctl = controller(ScriptedStore::default());
    ctl.initialize();
    for n in 1..=5 {
        ctl.toggle();
        assert_eq!(ctl.store().writes, n);
        assert_eq!(ctl.target().writes(), n);
    }
}

#[test]
fn toggle_keeps_marker_and_storage_consistent() {
    let mut ctl = controller(ScriptedStore::default());
    ctl.initialize();
    for _ in 0..7 {
        ctl.toggle();
        assert_consistent(&ctl);
        assert_eq!(ctl.current().is_dark(), ctl.target().has_marker());
    }
}

#[test]
fn even_toggle_sequences_restore_initial_state() {
    for initial in ["dark", "light"] {
        for len in (0..=10).step_by(2) {
            let mut ctl = controller(ScriptedStore::with_theme(initial));
            let start = ctl.initialize();
            for _ in 0..len {
                ctl.toggle();
            }
            assert_eq!(ctl.current(), start);
            assert_eq!(ctl.store().stored().as_deref(), Some(initial));
        }
    }
}

#[test]
fn odd_toggle_sequences_negate_initial_state() {
    for initial in [Theme::Dark, Theme::Light] {
        for len in (1..=11).step_by(2) {
            let mut ctl = controller(ScriptedStore::with_theme(initial.as_str()));
            ctl.initialize();
            for _ in 0..len {
                ctl.toggle();
            }
            assert_eq!(ctl.current(), initial.toggled());
            assert_eq!(
                ctl.store().stored().as_deref(),
                Some(initial.toggled().as_str())
            );
        }
    }
}

#[test]
fn toggle_with_failing_write_still_flips_marker() {
    let store = ScriptedStore {
        fail_writes: true,
        ..ScriptedStore::default()
    };
    let mut ctl = controller(store);
    ctl.initialize();
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert!(ctl.target().has_marker());
    assert_eq!(ctl.store().writes, 1);
    assert_eq!(ctl.store().stored(), None);
}

#[test]
fn set_applies_theme_directly() {
    let mut ctl = controller(ScriptedStore::default());
    ctl.set(Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
    ctl.set(Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
    assert_consistent(&ctl);
}

// =============================================================
// Page-load scenarios
// =============================================================

#[test]
fn scenario_first_visit_click_then_reload() {
    let mut ctl = controller(ScriptedStore::default());
    ctl.initialize();
    assert!(!ctl.target().has_marker());

    ctl.toggle();
    assert!(ctl.target().has_marker());
    assert_eq!(ctl.store().stored().as_deref(), Some("dark"));

    let ctl = reload(ctl);
    assert!(ctl.target().has_marker());
}

#[test]
fn scenario_dark_at_load_double_click() {
    let mut ctl = controller(ScriptedStore::with_theme("dark"));
    ctl.initialize();
    assert!(ctl.target().has_marker());

    ctl.toggle();
    ctl.toggle();
    assert!(ctl.target().has_marker());
    assert_eq!(ctl.store().stored().as_deref(), Some("dark"));
}

#[test]
fn scenario_failed_write_is_lost_on_reload() {
    let store = ScriptedStore {
        fail_writes: true,
        ..ScriptedStore::default()
    };
    let mut ctl = controller(store);
    ctl.initialize();

    ctl.toggle();
    assert!(ctl.target().has_marker());

    let ctl = reload(ctl);
    assert!(!ctl.target().has_marker());
}

#[test]
fn scenario_session_end_resets_to_default() {
    let mut ctl = controller(ScriptedStore::default());
    ctl.initialize();
    ctl.toggle();

    let (mut store, _) = ctl.into_parts();
    store.inner.clear();
    let mut ctl = controller(store);
    assert_eq!(ctl.initialize(), Theme::Light);
}
