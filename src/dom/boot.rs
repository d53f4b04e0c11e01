//! Page start-up: logging, config, and feature wiring once the DOM is ready.

use web_sys::Document;

use crate::config::UiConfig;
use crate::error::UiError;

use super::{attendance, document, form, on, read_config, search, validation};

/// Run [`init`] now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready() -> Result<(), UiError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        let doc_for_cb = document.clone();
        on(&document, "DOMContentLoaded", move |_ev| init(&doc_for_cb))
    } else {
        init(&document);
        Ok(())
    }
}

/// Wire every page feature. Each one fails independently.
pub fn init(document: &Document) {
    let parsed = read_config(document);
    let level = parsed.as_ref().map_or(log::Level::Info, |config| config.log_level);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring page ui config: {e}");
            UiConfig::default()
        }
    };

    if let Err(e) = attendance::enhance(document, &config) {
        log::warn!("attendance form wiring failed: {e}");
    }
    match form::install_autosave(document, &config) {
        Ok(report) => log::info!(
            "autosave ready: tracked={} rejected={} skipped={}",
            report.tracked.len(),
            report.rejected.len(),
            report.skipped
        ),
        Err(e) => log::warn!("autosave wiring failed: {e}"),
    }
    if let Err(e) = search::install(document) {
        log::warn!("search wiring failed: {e}");
    }
    if let Err(e) = validation::install(document) {
        log::warn!("validation wiring failed: {e}");
    }
    if let Err(e) = attendance::limit_date_inputs(document) {
        log::warn!("date limit wiring failed: {e}");
    }
}
