use std::time::Duration;

use clap::{Parser, Subcommand};
use tagscope_core::ScanConfig;

#[derive(Parser, Debug)]
#[command(name = "tagscope")]
#[command(author = "Pon Datalab")]
#[command(about = "Scan a page for marketing tags, noindex directives and SEO metadata")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 15)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Print the result as JSON instead of a report
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Detect GTM containers, GA ids and third-party pixels
    Tags { domain: String },
    /// Check meta tags and robots.txt for noindex directives
    Noindex { domain: String },
    /// Analyze title, description, H1, Open Graph, Twitter Card and canonical
    Seo { domain: String },
    /// Run every check
    All { domain: String },
}

impl Command {
    pub fn domain(&self) -> &str {
        match self {
            Command::Tags { domain }
            | Command::Noindex { domain }
            | Command::Seo { domain }
            | Command::All { domain } => domain,
        }
    }
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig {
            timeout: Duration::from_secs(self.timeout),
            ..ScanConfig::default()
        };
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommand_and_global_flags() {
        let args = Args::try_parse_from([
            "tagscope",
            "seo",
            "example.com",
            "--json",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::Seo { .. }));
        assert_eq!(args.command.domain(), "example.com");
        assert!(args.json);
        assert_eq!(args.scan_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn default_user_agent_kept_unless_overridden() {
        let args = Args::try_parse_from(["tagscope", "tags", "example.com"]).unwrap();
        assert_eq!(args.scan_config().user_agent, ScanConfig::default().user_agent);

        let args =
            Args::try_parse_from(["tagscope", "tags", "example.com", "--user-agent", "probe/1.0"])
                .unwrap();
        assert_eq!(args.scan_config().user_agent, "probe/1.0");
    }

    #[test]
    fn domain_required() {
        assert!(Args::try_parse_from(["tagscope", "noindex"]).is_err());
    }
}
