use super::*;

#[test]
fn matches_query_ignores_case() {
    assert!(matches_query("Jane DOE", "doe"));
    assert!(matches_query("jane doe", "JANE"));
    assert!(!matches_query("Jane Doe", "smith"));
}

#[test]
fn empty_query_matches_everything() {
    assert!(matches_query("", ""));
    assert!(matches_query("anything", ""));
}

#[test]
fn visible_rows_preserves_order() {
    let rows = ["Alice Present", "Bob Absent", "Carol Late"];
    assert_eq!(visible_rows(rows, "ABSENT"), vec![false, true, false]);
    assert_eq!(visible_rows(rows, ""), vec![true, true, true]);
}

#[test]
fn display_value_hides_non_matches() {
    assert_eq!(display_value(true), "");
    assert_eq!(display_value(false), "none");
}

#[test]
fn visible_rows_accepts_borrowed_owned_texts() {
    let texts = vec!["Jane Doe".to_owned(), "John Smith".to_owned()];
    let shown: Vec<&str> = visible_rows(texts.iter().map(String::as_str), "smith")
        .into_iter()
        .map(display_value)
        .collect();
    assert_eq!(shown, ["none", ""]);
}
