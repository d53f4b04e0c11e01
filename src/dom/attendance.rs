//! Attendance marking form wiring: row highlight, save reminder, bulk
//! marking, submission gate, and date limits.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::attendance::{
    ATTENDANCE_DATE_CLASS, BULK_MARK_GLOBALS, AttendanceStatus, MARKING_FORM_SELECTOR, Notification, ROW_STATUS_CLASSES,
    SAVE_REMINDER_HTML, SAVE_REMINDER_ID, SUBMIT_BUSY_LABEL, SubmitGate, is_attendance_date_input, iso_date,
    row_class_for,
};
use crate::config::{UiConfig, UiTimeouts};
use crate::error::UiError;

use super::{document, on, query_all, query_all_in};

/// Wire the marking form, if this page has one.
pub fn enhance(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let Some(form) = document
        .query_selector(MARKING_FORM_SELECTOR)
        .map_err(UiError::dom)?
    else {
        return Ok(());
    };

    let reminder_ms = config.timeouts.reminder_ms;
    for radio in query_all_in(&form, "input[type=\"radio\"]")? {
        let radio_for_cb = radio.clone();
        on(&radio, "change", move |_ev| {
            if let Err(e) = highlight_row(&radio_for_cb) {
                log::warn!("attendance row highlight failed: {e}");
            }
            if let Err(e) = super::document().and_then(|doc| show_save_reminder(&doc, reminder_ms)) {
                log::warn!("save reminder failed: {e}");
            }
        })?;
    }

    let form_for_cb = form.clone();
    let timeouts = config.timeouts;
    on(&form, "submit", move |ev: Event| {
        if let Err(e) = gate_submission(&form_for_cb, &ev, timeouts) {
            log::warn!("attendance submit gate failed: {e}");
        }
    })?;

    install_bulk_globals(config.timeouts.notification_ms)?;

    log::debug!("attendance marking form enhanced");
    Ok(())
}

fn highlight_row(radio: &Element) -> Result<(), UiError> {
    let Some(row) = radio.closest("tr").map_err(UiError::dom)? else {
        return Ok(());
    };
    let value = radio
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .unwrap_or_default();

    let classes = row.class_list();
    for class in ROW_STATUS_CLASSES {
        classes.remove_1(class).map_err(UiError::dom)?;
    }
    if let Some(class) = row_class_for(&value) {
        classes.add_1(class).map_err(UiError::dom)?;
    }
    Ok(())
}

fn gate_submission(form: &Element, ev: &Event, timeouts: UiTimeouts) -> Result<(), UiError> {
    let marked = query_all_in(form, "input[type=\"radio\"]:checked")?.len();
    let total = query_all_in(form, &AttendanceStatus::Present.radio_selector())?.len();

    match SubmitGate::evaluate(marked, total) {
        SubmitGate::Reject(note) => {
            ev.prevent_default();
            return show_notification(&document()?, &note, timeouts.notification_ms);
        }
        SubmitGate::Confirm { prompt } => {
            let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".to_owned()))?;
            if !window.confirm_with_message(&prompt).map_err(UiError::dom)? {
                ev.prevent_default();
                return Ok(());
            }
        }
        SubmitGate::Proceed => {}
    }

    mark_submit_busy(form, timeouts.submit_reenable_ms)
}

/// Disable the submit button and restore it after `reenable_ms` in case the
/// submission bounces back with errors.
fn mark_submit_busy(form: &Element, reenable_ms: u32) -> Result<(), UiError> {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")
        .map_err(UiError::dom)?
    else {
        return Ok(());
    };
    let Ok(button) = button.dyn_into::<HtmlButtonElement>() else {
        return Ok(());
    };

    let original = button.inner_html();
    button.set_inner_html(SUBMIT_BUSY_LABEL);
    button.set_disabled(true);
    Timeout::new(reenable_ms, move || {
        button.set_inner_html(&original);
        button.set_disabled(false);
    })
    .forget();
    Ok(())
}

/// Show the floating "save your changes" reminder, creating it on first use.
pub fn show_save_reminder(document: &Document, remove_after_ms: u32) -> Result<(), UiError> {
    if let Some(existing) = document.get_element_by_id(SAVE_REMINDER_ID) {
        if let Some(el) = existing.dyn_ref::<HtmlElement>() {
            el.style()
                .set_property("display", "block")
                .map_err(UiError::dom)?;
        }
        return Ok(());
    }

    let body = document
        .body()
        .ok_or_else(|| UiError::Dom("no body".to_owned()))?;
    let reminder = document.create_element("div").map_err(UiError::dom)?;
    reminder.set_id(SAVE_REMINDER_ID);
    reminder.set_class_name("alert alert-warning position-fixed top-0 end-0 m-3");
    reminder.set_inner_html(SAVE_REMINDER_HTML);
    if let Some(el) = reminder.dyn_ref::<HtmlElement>() {
        el.style()
            .set_property("z-index", "9999")
            .map_err(UiError::dom)?;
    }
    body.append_child(&reminder).map_err(UiError::dom)?;

    Timeout::new(remove_after_ms, move || {
        if reminder.parent_element().is_some() {
            reminder.remove();
        }
    })
    .forget();
    Ok(())
}

/// Prepend a dismissible alert to the page container and remove it after
/// `remove_after_ms`.
pub fn show_notification(document: &Document, note: &Notification, remove_after_ms: u32) -> Result<(), UiError> {
    let Some(container) = document.query_selector(".container").map_err(UiError::dom)? else {
        return Ok(());
    };
    let alert = document.create_element("div").map_err(UiError::dom)?;
    alert.set_class_name(&note.alert_class());
    alert.set_inner_html(&note.inner_html());
    container
        .insert_before(&alert, container.first_child().as_ref())
        .map_err(UiError::dom)?;

    Timeout::new(remove_after_ms, move || alert.remove()).forget();
    Ok(())
}

/// Expose the bulk marking functions as `window` globals for the page's
/// inline `onclick` handlers. Only called once the marking form exists.
fn install_bulk_globals(notification_ms: u32) -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Dom("no window".to_owned()))?;
    for (name, status) in BULK_MARK_GLOBALS {
        let closure = Closure::wrap(Box::new(move || mark_all(status, notification_ms)) as Box<dyn FnMut()>);
        js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref()).map_err(UiError::dom)?;
        closure.forget();
    }
    Ok(())
}

fn mark_all(status: AttendanceStatus, notification_ms: u32) {
    if let Err(e) = try_mark_all(status, notification_ms) {
        log::warn!("bulk mark {status} failed: {e}");
    }
}

fn try_mark_all(status: AttendanceStatus, notification_ms: u32) -> Result<(), UiError> {
    let document = document()?;
    let Some(form) = document
        .query_selector(MARKING_FORM_SELECTOR)
        .map_err(UiError::dom)?
    else {
        return Ok(());
    };

    for radio in query_all_in(&form, &status.radio_selector())? {
        if let Some(input) = radio.dyn_ref::<HtmlInputElement>() {
            input.set_checked(true);
        }
        let change = Event::new("change").map_err(UiError::dom)?;
        radio.dispatch_event(&change).map_err(UiError::dom)?;
    }

    show_notification(&document, &status.bulk_notification(), notification_ms)
}

/// Cap attendance date pickers at today.
pub fn limit_date_inputs(document: &Document) -> Result<(), UiError> {
    let now = String::from(js_sys::Date::new_0().to_iso_string());
    let today = iso_date(&now);

    for el in query_all(document, "input[type=\"date\"]")? {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        if is_attendance_date_input(&input.name(), input.class_list().contains(ATTENDANCE_DATE_CLASS)) {
            input.set_max(today);
        }
    }
    Ok(())
}
