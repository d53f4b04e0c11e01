//! `data-search` inputs that filter table rows as the user types.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::error::UiError;
use crate::search::{SEARCH_ATTRIBUTE, display_value, visible_rows};

use super::{on, query_all};

/// Wire every search input on the page. A broken target selector disables
/// only its own input.
pub fn install(document: &Document) -> Result<(), UiError> {
    for input in query_all(document, &format!("[{SEARCH_ATTRIBUTE}]"))? {
        let Some(selector) = input.get_attribute(SEARCH_ATTRIBUTE) else {
            continue;
        };
        let targets = match query_all(document, &selector) {
            Ok(targets) => targets,
            Err(e) => {
                log::warn!("search targets unavailable: selector={selector} error={e}");
                continue;
            }
        };

        let input_for_cb = input.clone();
        on(&input, "input", move |_ev| {
            let query = input_for_cb
                .dyn_ref::<HtmlInputElement>()
                .map(HtmlInputElement::value)
                .unwrap_or_default();
            let texts: Vec<String> = targets
                .iter()
                .map(|target| target.text_content().unwrap_or_default())
                .collect();
            let visible = visible_rows(texts.iter().map(String::as_str), &query);
            for (target, shown) in targets.iter().zip(visible) {
                if let Err(e) = apply_visibility(target, shown) {
                    log::warn!("search filter failed: {e}");
                }
            }
        })?;
    }
    Ok(())
}

/// Show or hide the target's row (or the target itself outside a table).
fn apply_visibility(target: &Element, shown: bool) -> Result<(), UiError> {
    let row = target
        .closest("tr")
        .map_err(UiError::dom)?
        .unwrap_or_else(|| target.clone());
    let Some(row) = row.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    row.style()
        .set_property("display", display_value(shown))
        .map_err(UiError::dom)
}
