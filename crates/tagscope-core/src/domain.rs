//! Domain input normalization

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::ScanError;

static RE_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("invalid scheme regex"));

/// Normalize user input to a bare domain.
///
/// Trims whitespace, strips a leading `http://` / `https://` (any case) and a
/// single trailing `/`. Empty input, or input that cannot form a valid
/// `https://` URL, is rejected.
pub fn normalize_domain(input: &str) -> Result<String, ScanError> {
    let trimmed = input.trim();
    let without_scheme = RE_SCHEME.replace(trimmed, "");
    let domain = without_scheme
        .strip_suffix('/')
        .unwrap_or(&without_scheme)
        .to_string();

    if domain.is_empty() {
        return Err(ScanError::InvalidInput("domain is empty".to_string()));
    }

    page_url(&domain)?;
    Ok(domain)
}

/// The page URL fetched for a normalized domain (`https://{domain}`)
pub fn page_url(domain: &str) -> Result<Url, ScanError> {
    origin_url("https", domain, "")
}

/// The robots.txt URL for a normalized domain (`https://{domain}/robots.txt`)
///
/// A domain that keeps a path gets its robots.txt under that path.
pub fn robots_txt_url(domain: &str) -> Result<Url, ScanError> {
    origin_url("https", domain, "/robots.txt")
}

pub(crate) fn origin_url(scheme: &str, domain: &str, path: &str) -> Result<Url, ScanError> {
    Url::parse(&format!("{scheme}://{domain}{path}"))
        .map_err(|e| ScanError::InvalidInput(format!("{domain}: {e}")))
}
