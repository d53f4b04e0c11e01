use super::*;

#[test]
fn memory_store_returns_none_for_missing_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("form_att").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_overwrites_whole_value() {
    let store = MemoryStore::new();
    store.set("form_att", r#"{"a":"1","b":"2"}"#).unwrap();
    store.set("form_att", r#"{"a":"3"}"#).unwrap();
    assert_eq!(store.get("form_att").unwrap().as_deref(), Some(r#"{"a":"3"}"#));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_records_reads_in_order() {
    let store = MemoryStore::new();
    store.get("form_a").unwrap();
    store.get("theme").unwrap();
    assert_eq!(store.read_log(), vec!["form_a".to_owned(), "theme".to_owned()]);
}

#[test]
fn memory_store_records_writes_even_when_value_is_unchanged() {
    let store = MemoryStore::new();
    store.set("form_b", "{}").unwrap();
    store.set("form_b", "{}").unwrap();
    store.get("form_b").unwrap();
    assert_eq!(store.write_log(), vec!["form_b".to_owned(), "form_b".to_owned()]);
}
