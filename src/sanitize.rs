//! Title unescaping.
//!
//! The search API returns titles with a handful of HTML escapes. Only a fixed
//! table is handled; anything else is passed through untouched.

/// Ordered `(escape, replacement)` pairs.
pub type EntityTable = [(&'static str, &'static str)];

/// Escapes seen in `search.list` titles.
pub const DEFAULT_ENTITIES: &EntityTable = &[
    ("&#39;", "'"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("\u{a0}", " "),
];

/// Replace every escape from `table` with its literal text.
///
/// # Arguments
/// * `raw` - Title as returned by the API
/// * `table` - Escapes to replace, tried in order at each position
///
/// # Returns
/// * `String` - Unescaped title
///
/// # Details
/// Single left-to-right pass; output of a replacement is never rescanned, so
/// `&amp;#39;` becomes `&#39;` rather than `'`.
pub fn unescape_title(raw: &str, table: &EntityTable) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    'scan: while let Some(ch) = rest.chars().next() {
        for (escape, replacement) in table {
            if !escape.is_empty() && rest.starts_with(escape) {
                out.push_str(replacement);
                rest = &rest[escape.len()..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
