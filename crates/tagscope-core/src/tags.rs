//! Google Tag Manager and Google Analytics id extraction

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_GTM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GTM-([A-Z0-9]+)").expect("invalid GTM regex"));
static RE_GA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(UA-[0-9]{4,}-[0-9]+|G-[A-Z0-9]+)").expect("invalid GA regex"));

/// GTM container ids and GA ids found in a page, first occurrence first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedTags {
    pub gtm: Vec<String>,
    pub ga: Vec<String>,
}

/// Extract GTM and GA ids from raw HTML.
///
/// Matching is case-sensitive: only uppercase ids are recognised, and every
/// id is returned with its canonical prefix. Duplicates are dropped, keeping
/// the first occurrence.
pub fn extract_tags(html: &str) -> ExtractedTags {
    let gtm = dedupe(
        RE_GTM
            .captures_iter(html)
            .map(|caps| format!("GTM-{}", &caps[1])),
    );
    let ga = dedupe(RE_GA.find_iter(html).map(|m| normalize_ga_id(m.as_str())));

    ExtractedTags { gtm, ga }
}

/// Normalize a raw GA match.
///
/// Classic `UA-` property ids are kept verbatim. Measurement ids are rebuilt
/// from the segment after the first `-`, so `G-ABC123` stays `G-ABC123` and
/// `G-ABC-DEF` becomes `G-ABC`.
pub fn normalize_ga_id(raw: &str) -> String {
    if raw.starts_with("UA-") {
        return raw.to_string();
    }

    let suffix = raw.split('-').nth(1).unwrap_or_default();
    format!("G-{suffix}")
}

fn dedupe(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(id.clone())).collect()
}
