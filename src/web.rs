//! Browser bindings and WASM entry points. Requires the `hydrate` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page loads the WASM module from `<head>` and calls `mount()`
//! before the body is interactive. Mounting applies the stored theme right
//! away, so there is no flash of the light theme, and binds the click handler
//! to every trigger element once the document has been parsed.
//!
//! TRADE-OFFS
//! ==========
//! Triggers are collected once. Elements inserted after binding are not
//! wired up. The click closure is leaked with `Closure::forget`; it lives as
//! long as the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::store::{PreferenceStore, StoreError};
use crate::target::StyleTarget;

pub type WebController = ThemeController<SessionStore, RootElement>;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

// =============================================================================
// SESSION STORAGE
// =============================================================================

/// [`PreferenceStore`] backed by `window.sessionStorage`.
pub struct SessionStore {
    storage: Option<Storage>,
}

impl SessionStore {
    /// Open the current window's session storage.
    ///
    /// Never fails: when storage is disabled every later access reports
    /// [`StoreError::Unavailable`].
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.session_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Err(e)) => {
                warn!("theme: session storage blocked: {e:?}");
                None
            }
            _ => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

// =============================================================================
// DOCUMENT ROOT
// =============================================================================

/// [`StyleTarget`] that toggles a class on `document.documentElement`.
pub struct RootElement {
    element: Option<Element>,
    class: String,
}

impl RootElement {
    #[must_use]
    pub fn new(document: Option<&Document>, class: &str) -> Self {
        Self {
            element: document.and_then(Document::document_element),
            class: class.to_owned(),
        }
    }
}

impl StyleTarget for RootElement {
    fn has_marker(&self) -> bool {
        self.element
            .as_ref()
            .map_or(false, |el| el.class_list().contains(&self.class))
    }

    fn set_marker(&mut self, present: bool) {
        let Some(el) = self.element.as_ref() else {
            return;
        };
        let class_list = el.class_list();
        let result = if present {
            class_list.add_1(&self.class)
        } else {
            class_list.remove_1(&self.class)
        };
        if let Err(e) = result {
            warn!("theme: could not update root class: {e:?}");
        }
    }
}

// =============================================================================
// INSTALL
// =============================================================================

/// Initialize the theme from session storage and bind the trigger elements.
///
/// Binding happens immediately if the document is already parsed, otherwise
/// on `DOMContentLoaded`.
pub fn install(config: &ThemeConfig) -> Rc<RefCell<WebController>> {
    let document = web_sys::window().and_then(|w| w.document());
    let mut controller = ThemeController::new(
        SessionStore::open(),
        RootElement::new(document.as_ref(), &config.marker_class),
        config,
    );
    controller.initialize();
    let controller = Rc::new(RefCell::new(controller));

    let Some(document) = document else {
        debug!("theme: no document, triggers not bound");
        return controller;
    };

    if document.ready_state() == "loading" {
        let ctl = Rc::clone(&controller);
        let doc = document.clone();
        let selector = config.trigger_selector.clone();
        let on_ready = Closure::once(move |_: Event| bind_triggers(&doc, &selector, &ctl));
        if let Err(e) = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        ) {
            warn!("theme: could not wait for DOMContentLoaded: {e:?}");
            return controller;
        }
        on_ready.forget();
    } else {
        bind_triggers(&document, &config.trigger_selector, &controller);
    }
    controller
}

/// Attach one shared click handler to every element matching `selector`.
fn bind_triggers(document: &Document, selector: &str, controller: &Rc<RefCell<WebController>>) {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!("theme: invalid trigger selector {selector:?}: {e:?}");
            return;
        }
    };
    if nodes.length() == 0 {
        debug!("theme: no elements match {selector:?}");
        return;
    }

    let ctl = Rc::clone(controller);
    let on_click = Closure::wrap(Box::new(move |ev: Event| {
        ev.prevent_default();
        if let Ok(mut ctl) = ctl.try_borrow_mut() {
            ctl.toggle();
        }
    }) as Box<dyn FnMut(Event)>);

    let callback = on_click.as_ref().unchecked_ref();
    let mut bound = 0_u32;
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        match node.add_event_listener_with_callback("click", callback) {
            Ok(()) => bound += 1,
            Err(e) => warn!("theme: could not bind trigger: {e:?}"),
        }
    }
    on_click.forget();
    debug!("theme: bound {bound} trigger(s) for {selector:?}");
}

// =============================================================================
// WASM EXPORTS
// =============================================================================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        // A host that already installed a logger keeps it.
        debug!("theme: console logger not installed: {e}");
    }
}

/// Install the theme toggle with the default names.
#[wasm_bindgen]
pub fn mount() {
    mount_config(&ThemeConfig::default());
}

/// Install the theme toggle with names read from a JSON object.
///
/// # Errors
///
/// Returns the config error message when `json` is not a valid config.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount_config(&config);
    Ok(())
}

fn mount_config(config: &ThemeConfig) {
    if MOUNTED.with(|m| m.replace(true)) {
        debug!("theme: already mounted");
        return;
    }
    let controller = install(config);
    info!("theme: mounted ({})", controller.borrow().current());
}
