//! Result records shared across the analyzers

use serde::Serialize;

use crate::meta::{extract_meta_tags, has_noindex_meta};
use crate::robots_txt::has_noindex_directive;

/// A fetched page. Produced once per fetch and handed to every analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub html: String,
    pub source_url: String,
}

impl RawPage {
    pub fn new(html: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            source_url: source_url.into(),
        }
    }
}

/// A third-party vendor matched by the tag catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherTag {
    pub key: &'static str,
    pub label: &'static str,
}

/// All tags found on a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagScanResult {
    /// Google Tag Manager container ids (`GTM-...`)
    pub gtm: Vec<String>,
    /// Google Analytics ids (`UA-...` or `G-...`)
    pub ga: Vec<String>,
    /// Catalog vendors, in catalog order
    pub other: Vec<OtherTag>,
}

/// Indexability of a page, from its meta tags and robots.txt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoindexResult {
    pub has_noindex_meta: bool,
    pub has_noindex_robots: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots_txt_content: Option<String>,
    pub meta_tags: Vec<String>,
    pub url: String,
}

impl NoindexResult {
    /// Classify `html` and the optional robots.txt body fetched alongside it.
    ///
    /// An empty robots.txt body is treated the same as a missing one.
    pub fn new(url: &str, html: &str, robots_txt: Option<String>) -> Self {
        let meta_tags = extract_meta_tags(html);
        let robots_txt_content = robots_txt.filter(|content| !content.is_empty());

        Self {
            has_noindex_meta: has_noindex_meta(&meta_tags),
            has_noindex_robots: has_noindex_directive(robots_txt_content.as_deref()),
            robots_txt_content,
            meta_tags,
            url: url.to_string(),
        }
    }
}
