//! Live filtering of table rows from a search box.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Attribute on a search input naming the CSS selector of its targets.
pub const SEARCH_ATTRIBUTE: &str = "data-search";

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility of each target text for `query`, in input order.
pub fn visible_rows<'a, I>(texts: I, query: &str) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .map(|text| matches_query(text, query))
        .collect()
}

/// CSS `display` value for a row with the given visibility.
pub fn display_value(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}
