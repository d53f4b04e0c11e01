//! Form and control abstraction consumed by draft persistence.
//!
//! DESIGN
//! ======
//! Draft logic never touches the DOM directly. It talks to a [`DraftForm`]
//! (identifier, named controls, value setter) and registers interest through
//! a [`ChangeSource`]. [`MemoryForm`] is the in-memory model used in native
//! builds; the hydrate build adapts `HtmlFormElement` in `dom::form`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::UiError;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// A form whose named controls can be captured and restored.
pub trait DraftForm {
    /// The form's identifier, or `None` when it has none.
    fn form_id(&self) -> Option<String>;

    /// Whether the form element carries the attribute `name`.
    fn has_attribute(&self, name: &str) -> bool;

    /// Current `(name, value)` of every named control, in document order.
    ///
    /// Names may repeat; callers decide the collision policy.
    fn control_values(&self) -> Vec<(String, String)>;

    /// Set the value of the first control named `name`.
    ///
    /// Returns `false` when no control has that name.
    fn set_control_value(&mut self, name: &str, value: &str) -> bool;
}

/// A [`DraftForm`] whose clones are handles to one underlying form.
///
/// Autosave restores through one handle and saves through another, so a
/// by-value copy would restore into a throwaway and save a stale snapshot.
/// Plain value types such as [`MemoryForm`] must be wrapped in
/// `Rc<RefCell<_>>` to qualify.
pub trait SharedForm: DraftForm + Clone {}

impl<F: DraftForm> SharedForm for Rc<RefCell<F>> {}

/// Registration point for "a control of this form changed" notifications.
pub trait ChangeSource {
    /// Invoke `handler` after every change event. Handlers are never removed.
    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Result<(), UiError>;
}

impl<F: DraftForm> DraftForm for Rc<RefCell<F>> {
    fn form_id(&self) -> Option<String> {
        self.borrow().form_id()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.borrow().has_attribute(name)
    }

    fn control_values(&self) -> Vec<(String, String)> {
        self.borrow().control_values()
    }

    fn set_control_value(&mut self, name: &str, value: &str) -> bool {
        self.borrow_mut().set_control_value(name, value)
    }
}

/// One named control and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub value: String,
}

/// In-memory form: an optional identifier, marker attributes, and an ordered
/// list of controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    id: Option<String>,
    attributes: Vec<String>,
    controls: Vec<Control>,
}

impl MemoryForm {
    /// Form with identifier `id`.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self { id: Some(id.to_owned()), ..Self::default() }
    }

    /// Form without an identifier.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str) -> Self {
        self.attributes.push(name.to_owned());
        self
    }

    /// Append a control. Unnamed controls (`""`) are kept but never captured.
    #[must_use]
    pub fn with_control(mut self, name: &str, value: &str) -> Self {
        self.controls.push(Control { name: name.to_owned(), value: value.to_owned() });
        self
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Value of the first control named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Simulate a user edit of the first control named `name`.
    pub fn edit(&mut self, name: &str, value: &str) -> bool {
        self.set_control_value(name, value)
    }
}

impl DraftForm for MemoryForm {
    fn form_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    fn control_values(&self) -> Vec<(String, String)> {
        self.controls
            .iter()
            .filter(|c| !c.name.is_empty())
            .map(|c| (c.name.clone(), c.value.clone()))
            .collect()
    }

    fn set_control_value(&mut self, name: &str, value: &str) -> bool {
        match self.controls.iter_mut().find(|c| c.name == name) {
            Some(control) => {
                control.value = value.to_owned();
                true
            }
            None => false,
        }
    }
}
