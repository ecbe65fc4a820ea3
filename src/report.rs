//! Human-readable rendering of scan results

use std::fmt::Write as FmtWrite;

use tagscope_core::{NoindexResult, SeoMetaAnalysis, TagScanResult};

const RULE: &str = "─────────────────────────────────────────────────────────────";

fn section(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{RULE}\n{heading}\n{RULE}");
}

fn list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "• {label:<17}: none found");
    } else {
        let _ = writeln!(out, "• {label:<17}: {}", items.join(", "));
    }
}

fn status(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

fn recommendations(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "    → {item}");
    }
}

pub fn render_tags(result: &TagScanResult) -> String {
    let mut out = String::new();
    section(&mut out, "🏷️  Tags");
    list(&mut out, "Tag Manager", &result.gtm);
    list(&mut out, "Google Analytics", &result.ga);

    let other: Vec<String> = result.other.iter().map(|t| t.label.to_string()).collect();
    list(&mut out, "Other tags", &other);
    out.push_str("  (static source only; tags loaded by other scripts are not visible)\n");
    out
}

pub fn render_noindex(result: &NoindexResult) -> String {
    let mut out = String::new();
    section(&mut out, &format!("🔎 Indexability: {}", result.url));

    let _ = writeln!(
        out,
        "• Meta noindex      : {} {}",
        status(!result.has_noindex_meta),
        if result.has_noindex_meta { "found" } else { "not found" }
    );
    let robots = match (&result.robots_txt_content, result.has_noindex_robots) {
        (None, _) => "robots.txt not available",
        (Some(_), true) => "noindex directive found",
        (Some(_), false) => "no noindex directive",
    };
    let _ = writeln!(
        out,
        "• robots.txt        : {} {robots}",
        status(!result.has_noindex_robots)
    );

    if !result.meta_tags.is_empty() {
        let _ = writeln!(out, "• Meta tags ({})", result.meta_tags.len());
        for tag in &result.meta_tags {
            let _ = writeln!(out, "    {tag}");
        }
    }
    out
}

pub fn render_seo(analysis: &SeoMetaAnalysis) -> String {
    let mut out = String::new();
    section(&mut out, "📈 SEO Meta");

    let title = &analysis.title;
    let _ = writeln!(
        out,
        "• Title             : {} {:?} ({} chars)",
        status(title.is_optimal()),
        title.content(),
        title.length()
    );
    recommendations(&mut out, title.recommendations());

    let description = &analysis.description;
    let _ = writeln!(
        out,
        "• Description       : {} ({} chars)",
        status(description.is_optimal()),
        description.length()
    );
    recommendations(&mut out, description.recommendations());

    let h1 = &analysis.h1;
    let _ = writeln!(
        out,
        "• H1                : {} {} found",
        status(h1.is_optimal()),
        h1.count()
    );
    recommendations(&mut out, h1.recommendations());

    let og = &analysis.og_tags;
    let _ = writeln!(
        out,
        "• Open Graph        : {}",
        status(og.recommendations().is_empty())
    );
    recommendations(&mut out, og.recommendations());

    let twitter = &analysis.twitter_tags;
    let _ = writeln!(
        out,
        "• Twitter Card      : {}",
        status(twitter.recommendations().is_empty())
    );
    recommendations(&mut out, twitter.recommendations());

    let canonical = &analysis.canonical;
    let _ = writeln!(
        out,
        "• Canonical         : {} {}",
        status(canonical.is_present()),
        canonical.url().unwrap_or("-")
    );
    recommendations(&mut out, canonical.recommendations());

    out
}
