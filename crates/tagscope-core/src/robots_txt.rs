//! Robots.txt noindex classifier
//!
//! Line-oriented keyword check: a robots.txt counts as noindexing when any
//! line is a `Noindex:` directive, or a `Disallow:` rule mentioning
//! `noindex`. Matching is case-insensitive and ignores surrounding
//! whitespace.

/// Check robots.txt content for a noindex-equivalent directive.
///
/// A missing robots.txt never noindexes.
pub fn has_noindex_directive(content: Option<&str>) -> bool {
    let Some(content) = content else {
        return false;
    };

    content
        .to_lowercase()
        .split('\n')
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .any(is_noindex_line)
}

fn is_noindex_line(line: &str) -> bool {
    line.starts_with("noindex:") || (line.starts_with("disallow:") && line.contains("noindex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_robots() {
        assert!(!has_noindex_directive(None));
    }

    #[test]
    fn test_empty_robots() {
        assert!(!has_noindex_directive(Some("")));
    }

    #[test]
    fn test_disallow_noindex_path() {
        assert!(has_noindex_directive(Some("Disallow: /noindex/")));
    }

    #[test]
    fn test_user_agent_only() {
        assert!(!has_noindex_directive(Some("User-agent: *")));
    }

    #[test]
    fn test_noindex_directive() {
        let content = r#"
User-agent: *
Noindex: /private/
"#;
        assert!(has_noindex_directive(Some(content)));
    }

    #[test]
    fn test_indented_and_crlf_lines() {
        let content = "User-agent: *\r\n   DISALLOW: /tmp/NoIndex\r\n";
        assert!(has_noindex_directive(Some(content)));
    }

    #[test]
    fn test_leading_byte_order_mark() {
        assert!(has_noindex_directive(Some("\u{feff}Noindex: /")));
        assert!(has_noindex_directive(Some("\u{feff}Disallow: /noindex/\n")));
    }

    #[test]
    fn test_regular_disallow_rules() {
        let content = r#"
User-agent: *
Disallow: /admin/
Disallow: /private/
Allow: /noindex-is-fine-here/

Sitemap: https://example.com/sitemap.xml
"#;
        assert!(!has_noindex_directive(Some(content)));
    }

    #[test]
    fn test_comment_mentioning_noindex() {
        let content = "# noindex: not a directive\nUser-agent: *";
        assert!(!has_noindex_directive(Some(content)));
    }

    #[test]
    fn test_order_invariant() {
        let a = "Disallow: /noindex\nUser-agent: *";
        let b = "User-agent: *\nDisallow: /noindex";
        assert_eq!(has_noindex_directive(Some(a)), has_noindex_directive(Some(b)));
    }
}
