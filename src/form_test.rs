use super::*;

#[test]
fn control_values_keep_document_order_and_skip_unnamed() {
    let form = MemoryForm::new("att")
        .with_control("date", "2024-01-05")
        .with_control("", "ignored")
        .with_control("note", "sick")
        .with_control("date", "2024-01-06");

    assert_eq!(
        form.control_values(),
        vec![
            ("date".to_owned(), "2024-01-05".to_owned()),
            ("note".to_owned(), "sick".to_owned()),
            ("date".to_owned(), "2024-01-06".to_owned()),
        ]
    );
}

#[test]
fn set_control_value_targets_first_match_only() {
    let mut form = MemoryForm::new("att")
        .with_control("note", "a")
        .with_control("note", "b");

    assert!(form.set_control_value("note", "z"));
    assert_eq!(form.controls()[0].value, "z");
    assert_eq!(form.controls()[1].value, "b");
}

#[test]
fn set_control_value_reports_missing_name() {
    let mut form = MemoryForm::new("att").with_control("date", "");
    assert!(!form.set_control_value("note", "x"));
    assert_eq!(form.value("date"), Some(""));
}

#[test]
fn attributes_and_identifier_are_exposed() {
    let form = MemoryForm::new("att").with_attribute("data-autosave");
    assert!(form.has_attribute("data-autosave"));
    assert!(!form.has_attribute("data-other"));
    assert_eq!(form.form_id().as_deref(), Some("att"));
    assert_eq!(MemoryForm::anonymous().form_id(), None);
}

#[test]
fn shared_form_delegates_through_refcell() {
    let shared = Rc::new(RefCell::new(MemoryForm::new("att").with_control("note", "")));
    let mut handle = Rc::clone(&shared);

    assert!(handle.set_control_value("note", "late bus"));
    assert_eq!(shared.borrow().value("note"), Some("late bus"));
    assert_eq!(handle.form_id().as_deref(), Some("att"));
}
