//! Match highlighting for rendered directory cards.

use regex::Regex;

/// Escape text for safe embedding in markup.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape `text` for markup, then wrap every case-insensitive occurrence of
/// the literal `query` in `<mark>…</mark>`.
///
/// The query is regex-escaped first, so arbitrary user input can neither
/// change the match semantics nor produce an invalid pattern. An empty query
/// returns the escaped text with no markers.
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    let escaped = escape_html(text);
    if query.is_empty() {
        return escaped;
    }

    let pattern = format!("(?i)({})", regex::escape(query));
    let re = Regex::new(&pattern).expect("escaped query is a valid pattern");
    re.replace_all(&escaped, "<mark>$1</mark>").into_owned()
}
