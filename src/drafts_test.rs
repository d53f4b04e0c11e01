use super::*;
use crate::form::MemoryForm;
use crate::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn drafts() -> DraftStore<MemoryStore> {
    DraftStore::new(MemoryStore::new(), &UiConfig::default())
}

fn attendance_form() -> MemoryForm {
    MemoryForm::new("att")
        .with_control("date", "")
        .with_control("note", "")
}

// =============================================================
// Keys and payloads
// =============================================================

#[test]
fn draft_key_prefixes_form_identifier() {
    let key = DraftKey::for_form("form_", Some("att")).unwrap();
    assert_eq!(key.as_str(), "form_att");
    assert_eq!(key.to_string(), "form_att");
}

#[test]
fn draft_key_rejects_missing_or_blank_identifier() {
    assert!(matches!(DraftKey::for_form("form_", None), Err(UiError::MissingIdentifier)));
    assert!(matches!(DraftKey::for_form("form_", Some("")), Err(UiError::MissingIdentifier)));
    assert!(matches!(DraftKey::for_form("form_", Some("  ")), Err(UiError::MissingIdentifier)));
}

#[test]
fn payload_capture_keeps_last_duplicate() {
    let payload = DraftPayload::capture(vec![
        ("status".to_owned(), "Present".to_owned()),
        ("status".to_owned(), "Late".to_owned()),
    ]);
    assert_eq!(payload.len(), 1);
    assert_eq!(payload.get("status"), Some("Late"));
}

#[test]
fn payload_encodes_as_flat_json_object() {
    let payload = DraftPayload::capture(vec![("note".to_owned(), "sick".to_owned())]);
    let text = payload.to_text().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!({"note": "sick"}));
}

#[test]
fn payload_rejects_nested_or_non_string_values() {
    assert!(matches!(DraftPayload::from_text(r#"{"a": 1}"#), Err(UiError::Deserialization(_))));
    assert!(matches!(DraftPayload::from_text(r#"{"a": {"b": "c"}}"#), Err(UiError::Deserialization(_))));
    assert!(matches!(DraftPayload::from_text(r#"["a"]"#), Err(UiError::Deserialization(_))));
    assert!(matches!(DraftPayload::from_text("not json"), Err(UiError::Deserialization(_))));
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_on_fresh_form_round_trips_values() {
    let drafts = drafts();
    let mut original = attendance_form();
    original.edit("date", "2024-01-05");
    original.edit("note", "sick");
    drafts.save(&original).unwrap();

    let mut reloaded = attendance_form();
    let outcome = drafts.load(&mut reloaded).unwrap();

    assert_eq!(outcome, LoadOutcome::Restored { applied: 2, unmatched: 0 });
    assert_eq!(reloaded, original);
}

#[test]
fn save_writes_single_record_under_prefixed_key() {
    let drafts = drafts();
    let form = attendance_form().with_control("class_id", "7");
    let key = drafts.save(&form).unwrap();

    assert_eq!(key.as_str(), "form_att");
    assert_eq!(drafts.store().len(), 1);
    let stored = drafts.store().get("form_att").unwrap().unwrap();
    let payload = DraftPayload::from_text(&stored).unwrap();
    assert_eq!(payload.get("class_id"), Some("7"));
    assert_eq!(payload.get("date"), Some(""));
}

#[test]
fn save_overwrites_whole_record() {
    let drafts = drafts();
    drafts
        .save(&MemoryForm::new("att").with_control("a", "1").with_control("b", "2"))
        .unwrap();
    drafts.save(&MemoryForm::new("att").with_control("a", "3")).unwrap();

    let stored = drafts.store().get("form_att").unwrap().unwrap();
    let payload = DraftPayload::from_text(&stored).unwrap();
    assert_eq!(payload.get("a"), Some("3"));
    assert_eq!(payload.get("b"), None);
}

#[test]
fn save_rejects_form_without_identifier() {
    let drafts = drafts();
    let err = drafts
        .save(&MemoryForm::anonymous().with_control("a", "1"))
        .unwrap_err();
    assert!(matches!(err, UiError::MissingIdentifier));
    assert!(drafts.store().is_empty());
}

#[test]
fn load_without_record_is_a_no_op() {
    let drafts = drafts();
    let mut form = MemoryForm::new("att").with_control("note", "typed");
    let before = form.clone();

    assert_eq!(drafts.load(&mut form).unwrap(), LoadOutcome::NoDraft);
    assert_eq!(form, before);
}

#[test]
fn load_is_idempotent() {
    let drafts = drafts();
    drafts
        .save(&MemoryForm::new("att").with_control("note", "sick"))
        .unwrap();

    let mut once = attendance_form();
    drafts.load(&mut once).unwrap();
    let mut twice = attendance_form();
    drafts.load(&mut twice).unwrap();
    drafts.load(&mut twice).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn load_leaves_controls_missing_from_payload_untouched() {
    let drafts = drafts();
    drafts
        .save(&MemoryForm::new("att").with_control("note", "sick"))
        .unwrap();

    let mut form = MemoryForm::new("att")
        .with_control("note", "")
        .with_control("date", "2024-02-01");
    let outcome = drafts.load(&mut form).unwrap();

    assert_eq!(outcome, LoadOutcome::Restored { applied: 1, unmatched: 0 });
    assert_eq!(form.value("note"), Some("sick"));
    assert_eq!(form.value("date"), Some("2024-02-01"));
}

#[test]
fn load_counts_payload_entries_without_matching_control() {
    let drafts = drafts();
    drafts
        .save(&MemoryForm::new("att").with_control("note", "x").with_control("gone", "y"))
        .unwrap();

    let mut form = MemoryForm::new("att").with_control("note", "");
    assert_eq!(drafts.load(&mut form).unwrap(), LoadOutcome::Restored { applied: 1, unmatched: 1 });
}

#[test]
fn duplicate_names_save_last_and_restore_first_match() {
    let drafts = drafts();
    let form = MemoryForm::new("att")
        .with_control("note", "first")
        .with_control("note", "second");
    drafts.save(&form).unwrap();

    let mut fresh = MemoryForm::new("att")
        .with_control("note", "")
        .with_control("note", "");
    drafts.load(&mut fresh).unwrap();

    assert_eq!(fresh.controls()[0].value, "second");
    assert_eq!(fresh.controls()[1].value, "");
}

#[test]
fn corrupted_record_fails_load_and_leaves_form_unchanged() {
    let drafts = drafts();
    drafts.store().set("form_att", "{\"note\": \"sick\"").unwrap();
    let mut form = attendance_form();
    let before = form.clone();

    assert!(matches!(drafts.load(&mut form), Err(UiError::Deserialization(_))));
    assert_eq!(form, before);
}

#[test]
fn restore_swallows_corruption_as_no_draft() {
    let drafts = drafts();
    drafts.store().set("form_att", "garbage").unwrap();
    let mut form = attendance_form();
    let before = form.clone();

    assert_eq!(drafts.restore(&mut form), LoadOutcome::NoDraft);
    assert_eq!(form, before);
}

#[test]
fn restore_swallows_missing_identifier() {
    let drafts = drafts();
    let mut form = MemoryForm::anonymous().with_control("note", "");
    assert_eq!(drafts.restore(&mut form), LoadOutcome::NoDraft);
}

#[test]
fn custom_prefix_changes_storage_key() {
    let drafts = DraftStore::with_prefix(MemoryStore::new(), "draft:");
    drafts
        .save(&MemoryForm::new("att").with_control("note", "x"))
        .unwrap();
    assert!(drafts.store().get("draft:att").unwrap().is_some());
    assert!(drafts.store().get("form_att").unwrap().is_none());
    assert_eq!(drafts.prefix(), "draft:");
}

#[test]
fn track_returns_key_or_rejects_anonymous_form() {
    let drafts = drafts();
    assert_eq!(drafts.track(&MemoryForm::new("att")).unwrap().as_str(), "form_att");
    assert!(matches!(drafts.track(&MemoryForm::anonymous()), Err(UiError::MissingIdentifier)));
}
