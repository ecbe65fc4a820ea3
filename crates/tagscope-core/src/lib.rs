//! # tagscope-core
//!
//! Core engine for inspecting the static source of a single web page.
//!
//! This library provides:
//! - Google Tag Manager / Google Analytics id extraction
//! - Detection of a fixed catalog of third-party tracking pixels
//! - Noindex classification from `<meta>` tags and robots.txt
//! - On-page SEO metadata heuristics (title, description, H1, Open Graph,
//!   Twitter Card, canonical URL)
//!
//! Every analyzer is a pure function over strings: no network access, no
//! JavaScript execution. Tags injected at runtime by other scripts are not
//! visible to a static-source scan.
//!
//! ## Features
//!
//! - `default`: The analysis engine only (no I/O)
//! - `fetch`: HTTP fetcher and the `tags` / `noindex` / `seo` scan workflows
//!
//! ## Example
//!
//! ```
//! use tagscope_core::{analyze_seo_meta, extract_tags};
//!
//! let html = r#"
//!     <html><head><title>Short</title></head>
//!     <body><script>gtag('config', 'G-XYZ789');</script></body></html>
//! "#;
//!
//! let tags = extract_tags(html);
//! assert_eq!(tags.ga, vec!["G-XYZ789"]);
//!
//! let seo = analyze_seo_meta(html);
//! assert!(!seo.title.is_optimal());
//! ```

pub mod catalog;
pub mod domain;
pub mod error;
pub mod meta;
pub mod robots_txt;
pub mod seo;
pub mod tags;
pub mod types;

#[cfg(feature = "fetch")]
pub mod fetch;

// Re-export commonly used types
pub use error::ScanError;
pub use types::{NoindexResult, OtherTag, RawPage, TagScanResult};

pub use catalog::{TAG_CATALOG, TagDetector, detect_other_tags};
pub use domain::normalize_domain;
pub use meta::{extract_meta_tags, has_noindex_meta};
pub use robots_txt::has_noindex_directive;
pub use seo::{
    CanonicalAnalysis, FieldAnalysis, H1Analysis, OgTagsAnalysis, OpenGraphTags, PageDocument,
    SeoMetaAnalysis, TwitterCardTags, TwitterTagsAnalysis, analyze_document, analyze_seo_meta,
};
pub use tags::{ExtractedTags, extract_tags, normalize_ga_id};

#[cfg(feature = "fetch")]
pub use fetch::{ScanConfig, Scanner};

/// Run every tag detector over a page: GTM / GA ids plus catalog vendors.
pub fn scan_tags(html: &str) -> TagScanResult {
    let ExtractedTags { gtm, ga } = extract_tags(html);
    TagScanResult {
        gtm,
        ga,
        other: detect_other_tags(html),
    }
}

/// Classify a page's indexability from its HTML and optional robots.txt body.
pub fn check_noindex(url: &str, html: &str, robots_txt: Option<String>) -> NoindexResult {
    NoindexResult::new(url, html, robots_txt)
}
