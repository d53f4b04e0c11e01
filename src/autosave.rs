//! Autosave wiring: opt-in discovery, one restore per form, save on change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once at page initialization. Each candidate form is paired with the
//! [`ChangeSource`] that reports its control edits; in the browser both are
//! the same `HtmlFormElement`, in tests the event source is a fake.

use std::rc::Rc;

use crate::config::UiConfig;
use crate::drafts::{DraftKey, DraftStore, LoadOutcome};
use crate::error::UiError;
use crate::form::{ChangeSource, SharedForm};
use crate::storage::DurableStore;

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

/// A form found on the page together with its change notifications.
///
/// `form` is a [`SharedForm`] handle: the restore applied during [`install`]
/// must be visible to whoever else holds the form.
pub struct Candidate<F, E> {
    pub form: F,
    pub events: E,
}

/// What [`install`] did with each candidate.
#[derive(Debug, Default)]
pub struct AutosaveReport {
    /// Forms now persisting drafts, with the outcome of their initial restore.
    pub tracked: Vec<(DraftKey, LoadOutcome)>,
    /// Forms carrying the marker that could not be tracked.
    pub rejected: Vec<UiError>,
    /// Forms without the marker attribute.
    pub skipped: usize,
}

/// Install draft autosave on every candidate carrying the marker attribute.
///
/// For each opted-in form: register it (rejecting forms without an
/// identifier), restore its stored draft, then save on every change. Restore
/// happens before the handler is attached so it cannot trigger a save.
pub fn install<S, F, E>(
    drafts: &Rc<DraftStore<S>>,
    config: &UiConfig,
    candidates: Vec<Candidate<F, E>>,
) -> AutosaveReport
where
    S: DurableStore + 'static,
    F: SharedForm + 'static,
    E: ChangeSource,
{
    let mut report = AutosaveReport::default();

    for Candidate { mut form, events } in candidates {
        if !form.has_attribute(&config.autosave_attribute) {
            report.skipped += 1;
            continue;
        }

        let key = match drafts.track(&form) {
            Ok(key) => key,
            Err(e) => {
                log::warn!("autosave form rejected: {e}");
                report.rejected.push(e);
                continue;
            }
        };

        let outcome = drafts.restore(&mut form);

        let drafts_for_cb = Rc::clone(drafts);
        let form_for_cb = form.clone();
        let handler = Box::new(move || {
            if let Err(e) = drafts_for_cb.save(&form_for_cb) {
                log::warn!("draft save failed: {e}");
            }
        });
        if let Err(e) = events.subscribe(handler) {
            log::warn!("autosave listener not attached: key={key} error={e}");
            report.rejected.push(e);
            continue;
        }

        log::info!("autosave enabled: key={key}");
        report.tracked.push((key, outcome));
    }

    report
}
