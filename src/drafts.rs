//! Form draft persistence: capture a form into durable storage, rehydrate it
//! on the next page load.
//!
//! DATA MODEL
//! ==========
//! One record per form identifier, stored under `prefix + id` (default
//! prefix `form_`). The record is a flat JSON object mapping control name to
//! control value. Records are always written whole; this module never
//! deletes them.
//!
//! ERROR POLICY
//! ============
//! [`DraftStore::save`] and [`DraftStore::load`] propagate [`UiError`].
//! [`DraftStore::restore`] is the page-boundary variant: it logs and reports
//! "no draft" instead of failing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::form::DraftForm;
use crate::storage::DurableStore;

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

/// Storage key of a form's draft record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftKey(String);

impl DraftKey {
    /// Derive the key for a form identifier.
    ///
    /// Blank or missing identifiers are rejected: they would all map onto
    /// one shared record.
    pub fn for_form(prefix: &str, form_id: Option<&str>) -> Result<Self, UiError> {
        match form_id {
            Some(id) if !id.trim().is_empty() => Ok(Self(format!("{prefix}{id}"))),
            _ => Err(UiError::MissingIdentifier),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Captured control values of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftPayload(BTreeMap<String, String>);

impl DraftPayload {
    /// Build a payload from `(name, value)` pairs in document order.
    /// A later pair overwrites an earlier one with the same name.
    pub fn capture<I>(controls: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(controls.into_iter().collect())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as a JSON object.
    pub fn to_text(&self) -> Result<String, UiError> {
        serde_json::to_string(self).map_err(UiError::Serialization)
    }

    /// Decode a JSON object of strings. Anything else is a
    /// [`UiError::Deserialization`].
    pub fn from_text(text: &str) -> Result<Self, UiError> {
        serde_json::from_str(text).map_err(UiError::Deserialization)
    }
}

/// Result of applying a stored draft to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing usable was stored; the form is unchanged.
    NoDraft,
    /// A draft was applied. `unmatched` counts payload entries with no
    /// control of that name in the form.
    Restored { applied: usize, unmatched: usize },
}

/// Draft persistence over an injected [`DurableStore`].
#[derive(Debug)]
pub struct DraftStore<S> {
    store: S,
    prefix: String,
}

impl<S: DurableStore> DraftStore<S> {
    #[must_use]
    pub fn new(store: S, config: &UiConfig) -> Self {
        Self::with_prefix(store, &config.draft_prefix)
    }

    #[must_use]
    pub fn with_prefix(store: S, prefix: &str) -> Self {
        Self { store, prefix: prefix.to_owned() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Storage key for `form`.
    pub fn key_for<F: DraftForm + ?Sized>(&self, form: &F) -> Result<DraftKey, UiError> {
        DraftKey::for_form(&self.prefix, form.form_id().as_deref())
    }

    /// Register `form` for draft tracking.
    ///
    /// Fails fast with [`UiError::MissingIdentifier`] so an unidentified form
    /// never shares a record with another one.
    pub fn track<F: DraftForm + ?Sized>(&self, form: &F) -> Result<DraftKey, UiError> {
        let key = self.key_for(form)?;
        log::debug!("tracking form draft: key={key}");
        Ok(key)
    }

    /// Persist the form's current control values, replacing any prior draft.
    pub fn save<F: DraftForm + ?Sized>(&self, form: &F) -> Result<DraftKey, UiError> {
        let key = self.key_for(form)?;
        let payload = DraftPayload::capture(form.control_values());
        let text = payload.to_text()?;
        self.store.set(key.as_str(), &text)?;
        log::debug!("draft saved: key={key} fields={}", payload.len());
        Ok(key)
    }

    /// Apply the stored draft to `form`.
    ///
    /// The whole payload is decoded before any control is touched, so a
    /// corrupted record leaves the form unchanged. Controls not named in the
    /// payload keep their current value.
    pub fn load<F: DraftForm + ?Sized>(&self, form: &mut F) -> Result<LoadOutcome, UiError> {
        let key = self.key_for(form)?;
        let Some(text) = self.store.get(key.as_str())? else {
            return Ok(LoadOutcome::NoDraft);
        };
        let payload = DraftPayload::from_text(&text)?;

        let mut applied = 0;
        let mut unmatched = 0;
        for (name, value) in payload.iter() {
            if form.set_control_value(name, value) {
                applied += 1;
            } else {
                unmatched += 1;
            }
        }
        log::debug!("draft restored: key={key} applied={applied} unmatched={unmatched}");
        Ok(LoadOutcome::Restored { applied, unmatched })
    }

    /// [`Self::load`] for page initialization: errors are logged and
    /// reported as [`LoadOutcome::NoDraft`].
    pub fn restore<F: DraftForm + ?Sized>(&self, form: &mut F) -> LoadOutcome {
        match self.load(form) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("draft restore skipped: {e}");
                LoadOutcome::NoDraft
            }
        }
    }
}
