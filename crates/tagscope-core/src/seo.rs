//! On-page SEO metadata analysis
//!
//! Parses a page into a [`PageDocument`] (title, meta description, H1
//! headings, Open Graph, Twitter Card and canonical link) and checks each
//! field against simple length and presence heuristics. Every sub-analysis
//! carries human-readable recommendations; a field that passes all of its
//! checks has none.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Title length considered optimal, in characters
pub const TITLE_OPTIMAL_LENGTH: std::ops::RangeInclusive<usize> = 30..=60;

/// Meta description length considered optimal, in characters
pub const DESCRIPTION_OPTIMAL_LENGTH: std::ops::RangeInclusive<usize> = 120..=160;

static SEL_TITLE: Lazy<Selector> = Lazy::new(|| selector("title"));
static SEL_DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="description"]"#));
static SEL_H1: Lazy<Selector> = Lazy::new(|| selector("h1"));
static SEL_CANONICAL: Lazy<Selector> = Lazy::new(|| selector(r#"link[rel="canonical"]"#));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid static selector")
}

/// Open Graph values read from `<meta property="og:*">`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraphTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub kind: Option<String>,
}

/// Twitter Card values read from `<meta name="twitter:*">`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitterCardTags {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// The parts of a page the SEO analyzer looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Text of every `<h1>`, in document order
    pub h1: Vec<String>,
    pub open_graph: OpenGraphTags,
    pub twitter: TwitterCardTags,
    pub canonical: Option<String>,
}

impl PageDocument {
    /// Parse HTML into a document view. Never fails; missing elements are `None`.
    ///
    /// When an element occurs more than once, the first one wins.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title = document
            .select(&SEL_TITLE)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty());
        let description = first_attr(&document, &SEL_DESCRIPTION, "content")
            .filter(|content| !content.is_empty());
        let h1 = document.select(&SEL_H1).map(element_text).collect();

        let open_graph = OpenGraphTags {
            title: meta_content(&document, "property", "og:title"),
            description: meta_content(&document, "property", "og:description"),
            image: meta_content(&document, "property", "og:image"),
            url: meta_content(&document, "property", "og:url"),
            kind: meta_content(&document, "property", "og:type"),
        };

        let twitter = TwitterCardTags {
            card: meta_content(&document, "name", "twitter:card"),
            title: meta_content(&document, "name", "twitter:title"),
            description: meta_content(&document, "name", "twitter:description"),
            image: meta_content(&document, "name", "twitter:image"),
        };

        let canonical = first_attr(&document, &SEL_CANONICAL, "href");

        Self {
            title,
            description,
            h1,
            open_graph,
            twitter,
            canonical,
        }
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// `content` of the first `<meta {attr}="{value}">`
fn meta_content(document: &Html, attr: &str, value: &str) -> Option<String> {
    let css = format!(r#"meta[{attr}="{value}"]"#);
    match Selector::parse(&css) {
        Ok(selector) => first_attr(document, &selector, "content"),
        Err(_) => None,
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Length heuristics for a text field (title or meta description)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnalysis {
    content: String,
    length: usize,
    is_optimal: bool,
    recommendations: Vec<String>,
}

impl FieldAnalysis {
    fn new(
        content: String,
        length: usize,
        optimal: &std::ops::RangeInclusive<usize>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            is_optimal: optimal.contains(&length),
            content,
            length,
            recommendations,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// H1 heading count check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct H1Analysis {
    /// Text of the first H1, empty when there is none
    content: String,
    count: usize,
    is_optimal: bool,
    recommendations: Vec<String>,
}

impl H1Analysis {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// Open Graph completeness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgTagsAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    recommendations: Vec<String>,
}

impl OgTagsAnalysis {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// `og:type`
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// Twitter Card completeness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterTagsAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    recommendations: Vec<String>,
}

impl TwitterTagsAnalysis {
    pub fn card(&self) -> Option<&str> {
        self.card.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// Canonical link check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    is_present: bool,
    recommendations: Vec<String>,
}

impl CanonicalAnalysis {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.is_present
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

/// Full SEO metadata report for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetaAnalysis {
    pub title: FieldAnalysis,
    pub description: FieldAnalysis,
    pub h1: H1Analysis,
    pub og_tags: OgTagsAnalysis,
    pub twitter_tags: TwitterTagsAnalysis,
    pub canonical: CanonicalAnalysis,
}

impl SeoMetaAnalysis {
    /// Every recommendation across all fields, in field order
    pub fn all_recommendations(&self) -> impl Iterator<Item = &str> {
        self.title
            .recommendations()
            .iter()
            .chain(self.description.recommendations())
            .chain(self.h1.recommendations())
            .chain(self.og_tags.recommendations())
            .chain(self.twitter_tags.recommendations())
            .chain(self.canonical.recommendations())
            .map(String::as_str)
    }
}

/// Parse `html` and analyze its SEO metadata
pub fn analyze_seo_meta(html: &str) -> SeoMetaAnalysis {
    analyze_document(&PageDocument::parse(html))
}

/// Analyze an already parsed document
pub fn analyze_document(doc: &PageDocument) -> SeoMetaAnalysis {
    SeoMetaAnalysis {
        title: analyze_title(doc.title.as_deref()),
        description: analyze_description(doc.description.as_deref()),
        h1: analyze_h1(&doc.h1),
        og_tags: analyze_og_tags(&doc.open_graph),
        twitter_tags: analyze_twitter_tags(&doc.twitter),
        canonical: analyze_canonical(doc.canonical.as_deref()),
    }
}

pub fn analyze_title(title: Option<&str>) -> FieldAnalysis {
    let content = title.unwrap_or_default().to_string();
    let length = content.chars().count();
    let mut recommendations = Vec::new();

    if content.is_empty() {
        recommendations.push("Add a title tag to your page".to_string());
    } else {
        if length < *TITLE_OPTIMAL_LENGTH.start() {
            recommendations.push("Title is too short. Aim for 50-60 characters".to_string());
        } else if length > *TITLE_OPTIMAL_LENGTH.end() {
            recommendations.push("Title is too long. Keep it under 60 characters".to_string());
        }
        if !content.contains('|') && !content.contains('-') {
            recommendations
                .push("Consider using a separator (| or -) to improve readability".to_string());
        }
    }

    FieldAnalysis::new(content, length, &TITLE_OPTIMAL_LENGTH, recommendations)
}

pub fn analyze_description(description: Option<&str>) -> FieldAnalysis {
    let content = description.unwrap_or_default().to_string();
    let length = content.chars().count();
    let mut recommendations = Vec::new();

    if content.is_empty() {
        recommendations.push("Add a meta description to your page".to_string());
    } else {
        if length < *DESCRIPTION_OPTIMAL_LENGTH.start() {
            recommendations
                .push("Description is too short. Aim for 150-160 characters".to_string());
        } else if length > *DESCRIPTION_OPTIMAL_LENGTH.end() {
            recommendations
                .push("Description is too long. Keep it under 160 characters".to_string());
        }
        if content.ends_with("...") {
            recommendations.push("Avoid ending description with ellipsis".to_string());
        }
    }

    FieldAnalysis::new(content, length, &DESCRIPTION_OPTIMAL_LENGTH, recommendations)
}

pub fn analyze_h1<S: AsRef<str>>(headings: &[S]) -> H1Analysis {
    let count = headings.len();
    let mut recommendations = Vec::new();

    if count == 0 {
        recommendations.push("Add an H1 tag to your page".to_string());
    } else if count > 1 {
        recommendations.push("Multiple H1 tags found. Use only one H1 tag per page".to_string());
    }

    H1Analysis {
        content: headings
            .first()
            .map(|h| h.as_ref().to_string())
            .unwrap_or_default(),
        count,
        is_optimal: count == 1,
        recommendations,
    }
}

/// One "Add {prefix}:{field} meta tag" recommendation per unset field, in the given order
fn missing_tag_recommendations(prefix: &str, fields: &[(&str, &Option<String>)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| !is_set(value))
        .map(|(name, _)| format!("Add {prefix}:{name} meta tag"))
        .collect()
}

pub fn analyze_og_tags(tags: &OpenGraphTags) -> OgTagsAnalysis {
    let recommendations = missing_tag_recommendations(
        "og",
        &[
            ("title", &tags.title),
            ("description", &tags.description),
            ("image", &tags.image),
            ("url", &tags.url),
            ("type", &tags.kind),
        ],
    );

    OgTagsAnalysis {
        title: tags.title.clone(),
        description: tags.description.clone(),
        image: tags.image.clone(),
        url: tags.url.clone(),
        kind: tags.kind.clone(),
        recommendations,
    }
}

pub fn analyze_twitter_tags(tags: &TwitterCardTags) -> TwitterTagsAnalysis {
    let recommendations = missing_tag_recommendations(
        "twitter",
        &[
            ("card", &tags.card),
            ("title", &tags.title),
            ("description", &tags.description),
            ("image", &tags.image),
        ],
    );

    TwitterTagsAnalysis {
        card: tags.card.clone(),
        title: tags.title.clone(),
        description: tags.description.clone(),
        image: tags.image.clone(),
        recommendations,
    }
}

/// An empty `href` is recorded but does not count as present.
pub fn analyze_canonical(href: Option<&str>) -> CanonicalAnalysis {
    let url = href.map(str::to_string);
    let is_present = is_set(&url);
    let mut recommendations = Vec::new();

    if !is_present {
        recommendations
            .push("Add a canonical URL to prevent duplicate content issues".to_string());
    }

    CanonicalAnalysis {
        url,
        is_present,
        recommendations,
    }
}
