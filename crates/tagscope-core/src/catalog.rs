//! Third-party tracking tag catalog
//!
//! A closed list of known ad/analytics vendors, each identified by a set of
//! case-sensitive substrings that appear in its standard embed snippet.
//! Supporting a new vendor means adding an entry to [`TAG_CATALOG`].
//!
//! This is a static-source scan: vendors loaded indirectly (for example from
//! inside a tag manager container) are not detected.

use crate::types::OtherTag;

/// A catalog entry: stable key, display label and the probes that identify it
#[derive(Debug, Clone, Copy)]
pub struct TagDetector {
    pub key: &'static str,
    pub label: &'static str,
    pub patterns: &'static [&'static str],
}

impl TagDetector {
    /// True if any probe occurs in `html`
    pub fn matches(&self, html: &str) -> bool {
        self.patterns.iter().any(|pattern| html.contains(pattern))
    }
}

/// Known vendors, in reporting order
pub const TAG_CATALOG: &[TagDetector] = &[
    TagDetector {
        key: "facebook_pixel",
        label: "Facebook Pixel",
        patterns: &["fbq(", "connect.facebook.net/en_US/fbevents.js"],
    },
    TagDetector {
        key: "hotjar",
        label: "Hotjar",
        patterns: &["static.hotjar.com", "_hjSettings"],
    },
    TagDetector {
        key: "linkedin_insight",
        label: "LinkedIn Insight",
        patterns: &["snap.licdn.com/li.lms-analytics", "_linkedin_partner_id"],
    },
    TagDetector {
        key: "microsoft_clarity",
        label: "Microsoft Clarity",
        patterns: &["clarity.ms/tag"],
    },
    TagDetector {
        key: "twitter_pixel",
        label: "Twitter Pixel",
        patterns: &["static.ads-twitter.com/uwt.js", "twq("],
    },
    TagDetector {
        key: "pinterest_tag",
        label: "Pinterest Tag",
        patterns: &["s.pinimg.com/ct/core.js", "pintrk("],
    },
    TagDetector {
        key: "tiktok_pixel",
        label: "TikTok Pixel",
        patterns: &["analytics.tiktok.com/i18n/pixel", "ttq.load("],
    },
];

/// Detect catalog vendors in raw HTML.
///
/// Output follows catalog order; each vendor is reported at most once.
pub fn detect_other_tags(html: &str) -> Vec<OtherTag> {
    TAG_CATALOG
        .iter()
        .filter(|detector| detector.matches(html))
        .map(|detector| OtherTag {
            key: detector.key,
            label: detector.label,
        })
        .collect()
}
