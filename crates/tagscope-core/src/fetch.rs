//! Page and robots.txt fetching, and the scan workflows built on it
//!
//! Requires the `fetch` feature (needs reqwest)

use std::time::Duration;

use log::{debug, warn};

use crate::domain::{normalize_domain, origin_url};
use crate::error::ScanError;
use crate::seo::{SeoMetaAnalysis, analyze_seo_meta};
use crate::types::{NoindexResult, RawPage, TagScanResult};

/// Default timeout for a single HTTP request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client settings for a [`Scanner`]
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Sent as the `User-Agent` header on every request
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            user_agent: format!(
                "Mozilla/5.0 (compatible; tagscope/{})",
                env!("CARGO_PKG_VERSION")
            ),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Fetches pages over HTTPS and runs the analyzers on them.
///
/// Failed fetches are returned immediately; nothing is retried.
#[derive(Debug, Clone)]
pub struct Scanner {
    client: reqwest::Client,
    scheme: &'static str,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScanError::Client(e.to_string()))?;

        Ok(Self {
            client,
            scheme: "https",
        })
    }

    /// Point the scanner at a plain-HTTP origin (local mock servers)
    #[cfg(test)]
    pub(crate) fn with_scheme(mut self, scheme: &'static str) -> Self {
        self.scheme = scheme;
        self
    }

    /// Fetch `https://{domain}`. Any non-success status is a [`ScanError::FetchFailure`].
    pub async fn fetch_page(&self, domain: &str) -> Result<RawPage, ScanError> {
        let url = origin_url(self.scheme, domain, "")?;
        let source_url = format!("{}://{domain}", self.scheme);
        debug!("Fetching {}", source_url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::FetchFailure {
                url: source_url,
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), source_url);
        Ok(RawPage { html, source_url })
    }

    /// Fetch `https://{domain}/robots.txt`.
    ///
    /// Returns `None` when the file is unreachable, answers with a non-success
    /// status, or is empty.
    pub async fn fetch_robots_txt(&self, domain: &str) -> Option<String> {
        let url = origin_url(self.scheme, domain, "/robots.txt").ok()?;

        let response = match self.client.get(url.clone()).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("robots.txt request failed for {}: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            debug!("No robots.txt at {} (HTTP {})", url, response.status());
            return None;
        }

        match response.text().await {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read robots.txt from {}: {}", url, e);
                None
            }
        }
    }

    /// GTM / GA ids and catalog vendors on the domain's home page
    pub async fn scan_tags(&self, domain: &str) -> Result<TagScanResult, ScanError> {
        let domain = normalize_domain(domain)?;
        let page = self.fetch_page(&domain).await?;

        let result = crate::scan_tags(&page.html);
        debug!(
            "{}: {} GTM, {} GA, {} other tags",
            page.source_url,
            result.gtm.len(),
            result.ga.len(),
            result.other.len()
        );
        Ok(result)
    }

    /// Noindex status from meta tags and robots.txt.
    ///
    /// The page and robots.txt are fetched concurrently. Only the page fetch
    /// can fail the scan.
    pub async fn check_noindex(&self, domain: &str) -> Result<NoindexResult, ScanError> {
        let domain = normalize_domain(domain)?;
        let (page, robots_txt) =
            tokio::join!(self.fetch_page(&domain), self.fetch_robots_txt(&domain));
        let page = page?;

        Ok(NoindexResult::new(&page.source_url, &page.html, robots_txt))
    }

    /// SEO metadata heuristics for the domain's home page
    pub async fn analyze_seo(&self, domain: &str) -> Result<SeoMetaAnalysis, ScanError> {
        let domain = normalize_domain(domain)?;
        let page = self.fetch_page(&domain).await?;

        Ok(analyze_seo_meta(&page.html))
    }
}
