//! Browser bindings (hydrate build only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys` lives under this module. Each submodule
//! applies decisions made by the browser-free modules (`drafts`, `autosave`,
//! `search`, `attendance`) to the live document. Failures are logged and
//! contained per feature so one broken widget never disables the others.

pub mod attendance;
pub mod boot;
pub mod form;
pub mod search;
pub mod validation;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList};

use crate::config::UiConfig;
use crate::error::UiError;

/// The current window's document.
pub(crate) fn document() -> Result<Document, UiError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::Dom("no document".to_owned()))
}

/// Config from `data-ui-*` attributes on `<body>`.
pub(crate) fn read_config(document: &Document) -> Result<UiConfig, UiError> {
    let body = document.body();
    UiConfig::from_attributes(|name| body.as_ref().and_then(|b| b.get_attribute(name)))
}

/// [`read_config`], falling back to defaults when an override is invalid.
pub(crate) fn page_config(document: &Document) -> UiConfig {
    match read_config(document) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring page ui config: {e}");
            UiConfig::default()
        }
    }
}

/// All elements in `document` matching `selector`.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(UiError::dom)
}

/// All descendants of `root` matching `selector`.
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(UiError::dom)
}

fn elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::new();
    for node in (0..list.length()).filter_map(|i| list.item(i)) {
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        out.push(element);
    }
    out
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub(crate) fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(UiError::dom)?;
    cb.forget();
    Ok(())
}
