//! Native constraint checking gate for `.needs-validation` forms.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::error::UiError;

use super::{on, query_all};

pub const NEEDS_VALIDATION_SELECTOR: &str = ".needs-validation";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

pub fn install(document: &Document) -> Result<(), UiError> {
    for el in query_all(document, NEEDS_VALIDATION_SELECTOR)? {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let form_for_cb = form.clone();
        on(&form, "submit", move |ev: Event| {
            if !form_for_cb.check_validity() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            if let Err(e) = form_for_cb.class_list().add_1(WAS_VALIDATED_CLASS) {
                log::warn!("validation class not applied: {e:?}");
            }
        })?;
    }
    Ok(())
}
