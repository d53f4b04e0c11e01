//! `HtmlFormElement` adapter for draft persistence and autosave install.
//!
//! Capture follows browser form-data rules: disabled controls, buttons and
//! file inputs are skipped, and radio/checkbox controls contribute only
//! while checked. Restoring a checkable control checks the member of its
//! group whose value matches the stored one.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::autosave::{self, AutosaveReport, Candidate};
use crate::config::UiConfig;
use crate::drafts::DraftStore;
use crate::error::UiError;
use crate::form::{ChangeSource, DraftForm, SharedForm};
use crate::storage::BrowserStore;

use super::{on, query_all};

/// Input types that never carry form data.
const SKIPPED_INPUT_TYPES: [&str; 5] = ["submit", "button", "reset", "image", "file"];

/// A page form, cheap to clone (JS handle).
#[derive(Debug, Clone)]
pub struct DomForm {
    element: HtmlFormElement,
}

impl DomForm {
    pub fn new(element: HtmlFormElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.element
    }

    fn controls(&self) -> Vec<FormControl> {
        let elements = self.element.elements();
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter_map(FormControl::from_element)
            .collect()
    }
}

enum FormControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl FormControl {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(other) => other,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(other) => other,
        };
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Some(Self::TextArea(area)),
            Err(_) => None,
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Input(el) => el.name(),
            Self::Select(el) => el.name(),
            Self::TextArea(el) => el.name(),
        }
    }

    /// Value this control submits, or `None` when it submits nothing.
    fn captured_value(&self) -> Option<String> {
        match self {
            Self::Input(el) => {
                if el.disabled() || SKIPPED_INPUT_TYPES.contains(&el.type_().as_str()) {
                    return None;
                }
                if is_checkable(el) && !el.checked() {
                    return None;
                }
                Some(el.value())
            }
            Self::Select(el) => (!el.disabled()).then(|| el.value()),
            Self::TextArea(el) => (!el.disabled()).then(|| el.value()),
        }
    }

    /// Apply `value`; `false` means this control did not take it and the
    /// next control with the same name should be tried.
    fn apply(&self, value: &str) -> bool {
        match self {
            Self::Input(el) if is_checkable(el) => {
                if el.value() != value {
                    return false;
                }
                el.set_checked(true);
                true
            }
            Self::Input(el) => {
                el.set_value(value);
                true
            }
            Self::Select(el) => {
                el.set_value(value);
                true
            }
            Self::TextArea(el) => {
                el.set_value(value);
                true
            }
        }
    }
}

fn is_checkable(input: &HtmlInputElement) -> bool {
    matches!(input.type_().as_str(), "radio" | "checkbox")
}

impl DraftForm for DomForm {
    fn form_id(&self) -> Option<String> {
        let id = self.element.id();
        if id.is_empty() { None } else { Some(id) }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.element.has_attribute(name)
    }

    fn control_values(&self) -> Vec<(String, String)> {
        self.controls()
            .into_iter()
            .filter_map(|control| {
                let name = control.name();
                if name.is_empty() {
                    return None;
                }
                control.captured_value().map(|value| (name, value))
            })
            .collect()
    }

    fn set_control_value(&mut self, name: &str, value: &str) -> bool {
        self.controls()
            .iter()
            .filter(|control| control.name() == name)
            .any(|control| control.apply(value))
    }
}

/// Clones wrap the same `HtmlFormElement`.
impl SharedForm for DomForm {}

impl ChangeSource for DomForm {
    /// `change` bubbles from every control up to the form element.
    fn subscribe(&self, mut handler: Box<dyn FnMut()>) -> Result<(), UiError> {
        on(&self.element, "change", move |_ev| handler())
    }
}

/// Install draft autosave on every form of the page carrying the marker.
pub fn install_autosave(document: &Document, config: &UiConfig) -> Result<AutosaveReport, UiError> {
    let mut candidates: Vec<Candidate<DomForm, DomForm>> = Vec::new();
    for el in query_all(document, "form")? {
        let Ok(element) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let form = DomForm::new(element);
        candidates.push(Candidate { form: form.clone(), events: form });
    }

    let drafts = Rc::new(DraftStore::new(BrowserStore, config));
    Ok(autosave::install(&drafts, config, candidates))
}
