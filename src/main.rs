use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tagscope_core::{
    NoindexResult, Scanner, SeoMetaAnalysis, TagScanResult, analyze_seo_meta, check_noindex,
    normalize_domain, scan_tags,
};

mod args;
mod report;

use args::{Args, Command};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FullReport {
    tags: TagScanResult,
    noindex: NoindexResult,
    seo: SeoMetaAnalysis,
}

fn emit<T: Serialize>(value: &T, json: bool, render: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scanner = Scanner::new(args.scan_config()).context("failed to build HTTP client")?;
    let domain = args.command.domain();
    log::info!("Scanning {}", domain);

    match &args.command {
        Command::Tags { .. } => {
            let result = scanner.scan_tags(domain).await.context("tag scan failed")?;
            emit(&result, args.json, report::render_tags)?;
        }
        Command::Noindex { .. } => {
            let result = scanner
                .check_noindex(domain)
                .await
                .context("noindex check failed")?;
            emit(&result, args.json, report::render_noindex)?;
        }
        Command::Seo { .. } => {
            let result = scanner
                .analyze_seo(domain)
                .await
                .context("SEO analysis failed")?;
            emit(&result, args.json, report::render_seo)?;
        }
        Command::All { .. } => {
            let domain = normalize_domain(domain)?;
            let (page, robots_txt) = tokio::join!(
                scanner.fetch_page(&domain),
                scanner.fetch_robots_txt(&domain)
            );
            let page = page.context("scan failed")?;

            let full = FullReport {
                tags: scan_tags(&page.html),
                noindex: check_noindex(&page.source_url, &page.html, robots_txt),
                seo: analyze_seo_meta(&page.html),
            };
            emit(&full, args.json, |full| {
                [
                    report::render_tags(&full.tags),
                    report::render_noindex(&full.noindex),
                    report::render_seo(&full.seo),
                ]
                .concat()
            })?;
        }
    }

    Ok(())
}
