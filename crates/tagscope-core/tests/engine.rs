//! Integration tests for the analysis engine's public API

use tagscope_core::{
    NoindexResult, analyze_seo_meta, check_noindex, detect_other_tags, extract_meta_tags,
    has_noindex_directive, has_noindex_meta, scan_tags,
};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Acme Widgets - Durable Tools for Every Project</title>
    <meta name="description" content="Acme builds durable widgets, clamps and fasteners for workshops of every size. Browse the full catalog, compare specs and order online today.">
    <meta property="og:title" content="Acme Widgets">
    <meta property="og:description" content="Durable tools for every project">
    <meta property="og:image" content="https://acme.example/og.png">
    <meta property="og:url" content="https://acme.example/">
    <meta property="og:type" content="website">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="Acme Widgets">
    <meta name="twitter:description" content="Durable tools for every project">
    <meta name="twitter:image" content="https://acme.example/og.png">
    <link rel="canonical" href="https://acme.example/">
    <script>(function(w,d,s,l,i){w[l]=w[l]||[];})(window,document,'script','dataLayer','GTM-W7K2P9');</script>
    <script async src="https://www.googletagmanager.com/gtag/js?id=G-4XQ8ZT1M"></script>
    <script>gtag('config', 'G-4XQ8ZT1M');</script>
    <script>(function(c,l,a,r,i,t,y){})(window, document, "clarity", "script", "abc");</script>
    <script src="https://www.clarity.ms/tag/abc"></script>
</head>
<body>
    <noscript><iframe src="https://www.googletagmanager.com/ns.html?id=GTM-W7K2P9"></iframe></noscript>
    <h1>Durable tools for every project</h1>
</body>
</html>"#;

#[test]
fn short_page_end_to_end() {
    let html = "<html><head><title>Short</title></head><body></body></html>";
    let analysis = analyze_seo_meta(html);

    assert!(!analysis.title.is_optimal());
    assert_eq!(analysis.title.length(), 5);
    assert!(!analysis.description.is_optimal());
    assert_eq!(analysis.description.content(), "");
    assert!(!analysis.h1.is_optimal());
    assert_eq!(analysis.h1.count(), 0);
    assert!(!analysis.canonical.is_present());
}

#[test]
fn well_formed_page_passes_every_check() {
    let analysis = analyze_seo_meta(LANDING_PAGE);

    assert!(analysis.title.is_optimal());
    assert!(analysis.description.is_optimal());
    assert!(analysis.h1.is_optimal());
    assert!(analysis.canonical.is_present());
    assert_eq!(analysis.all_recommendations().count(), 0);
}

#[test]
fn landing_page_tags() {
    let tags = scan_tags(LANDING_PAGE);

    assert_eq!(tags.gtm, vec!["GTM-W7K2P9"]);
    assert_eq!(tags.ga, vec!["G-4XQ8ZT1M"]);
    assert_eq!(detect_other_tags(LANDING_PAGE), tags.other);
    assert_eq!(tags.other.len(), 1);
    assert_eq!(tags.other[0].label, "Microsoft Clarity");
}

#[test]
fn landing_page_is_indexable() {
    let robots = "User-agent: *\nDisallow: /cart/\nSitemap: https://acme.example/sitemap.xml";
    let result = check_noindex("https://acme.example", LANDING_PAGE, Some(robots.to_string()));

    assert!(!result.has_noindex_meta);
    assert!(!result.has_noindex_robots);
    assert_eq!(result.meta_tags.len(), 11);
    assert_eq!(result.robots_txt_content.as_deref(), Some(robots));
}

#[test]
fn meta_and_robots_classified_independently() {
    let html = r#"<meta name="robots" content="noindex">"#;
    let tags = extract_meta_tags(html);

    assert!(has_noindex_meta(&tags));
    assert!(!has_noindex_directive(None));
    assert!(has_noindex_directive(Some("Noindex: /")));
}

#[test]
fn analyzers_are_idempotent() {
    assert_eq!(analyze_seo_meta(LANDING_PAGE), analyze_seo_meta(LANDING_PAGE));
    assert_eq!(scan_tags(LANDING_PAGE), scan_tags(LANDING_PAGE));
    assert_eq!(
        check_noindex("https://acme.example", LANDING_PAGE, None),
        check_noindex("https://acme.example", LANDING_PAGE, None)
    );
}

#[test]
fn malformed_html_degrades_gracefully() {
    let html = "<html><head><title>Broken<meta name=\"description\" <h1>unclosed";

    let analysis = analyze_seo_meta(html);
    assert_eq!(analysis.og_tags.recommendations().len(), 5);
    assert_eq!(analysis.twitter_tags.recommendations().len(), 4);

    let tags = scan_tags(html);
    assert!(tags.gtm.is_empty() && tags.ga.is_empty() && tags.other.is_empty());
}

#[test]
fn seo_json_shape() {
    let html = r#"<title>Short</title><meta property="og:title" content="Acme">"#;
    let json = serde_json::to_value(analyze_seo_meta(html)).unwrap();

    assert_eq!(json["title"]["content"], "Short");
    assert_eq!(json["title"]["length"], 5);
    assert_eq!(json["title"]["isOptimal"], false);
    assert_eq!(json["h1"]["count"], 0);
    assert_eq!(json["ogTags"]["title"], "Acme");
    assert!(json["ogTags"].get("type").is_none());
    assert_eq!(json["ogTags"]["recommendations"][3], "Add og:type meta tag");
    assert_eq!(json["twitterTags"]["recommendations"].as_array().unwrap().len(), 4);
    assert_eq!(json["canonical"]["isPresent"], false);
    assert!(json["canonical"].get("url").is_none());
}

#[test]
fn noindex_json_shape() {
    let result = NoindexResult::new(
        "https://example.com",
        r#"<meta name="robots" content="noindex">"#,
        None,
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["hasNoindexMeta"], true);
    assert_eq!(json["hasNoindexRobots"], false);
    assert!(json.get("robotsTxtContent").is_none());
    assert_eq!(json["metaTags"][0], r#"<meta name="robots" content="noindex">"#);
    assert_eq!(json["url"], "https://example.com");
}

#[test]
fn tag_scan_json_shape() {
    let json = serde_json::to_value(scan_tags("GTM-ABC123 pintrk('load')")).unwrap();

    assert_eq!(json["gtm"][0], "GTM-ABC123");
    assert!(json["ga"].as_array().unwrap().is_empty());
    assert_eq!(json["other"][0]["key"], "pinterest_tag");
    assert_eq!(json["other"][0]["label"], "Pinterest Tag");
}
