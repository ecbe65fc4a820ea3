//! Raw `<meta>` tag extraction and the noindex meta classifier

use once_cell::sync::Lazy;
use regex::Regex;

static RE_META: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<meta[^>]+>").expect("invalid meta regex"));

/// Extract every `<meta ...>` element as literal source text, in document order.
///
/// Each match runs from `<meta` to the next `>`. Attributes are not validated
/// and no DOM is built, so this is only suitable for keyword checks.
pub fn extract_meta_tags(html: &str) -> Vec<String> {
    RE_META
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True if any meta tag mentions `noindex`, case-insensitively.
///
/// Any occurrence counts, whatever attribute it sits in; the tag does not
/// need to be `name="robots"`.
pub fn has_noindex_meta<S: AsRef<str>>(meta_tags: &[S]) -> bool {
    meta_tags
        .iter()
        .any(|tag| tag.as_ref().to_lowercase().contains("noindex"))
}
