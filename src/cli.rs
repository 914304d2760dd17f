// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "webscout",
    version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("GIT_HASH"),
        ", built ",
        env!("BUILD_TIME"),
        ")"
    ),
    about = "Lightweight website reconnaissance scanner",
    long_about = "WebScout crawls a target website and probes it for common misconfigurations:\nexposed .env files, reachable admin panels and software version disclosures."
)]
pub struct Args {
    /// Target website URL to scan
    #[arg(value_name = "TARGET_URL")]
    pub target_url: String,

    /// Maximum crawl depth
    #[arg(
        short = 'd',
        long = "crawl-depth",
        alias = "crawl_depth",
        value_name = "DEPTH",
        default_value_t = 3
    )]
    pub crawl_depth: usize,

    /// Output file
    #[arg(
        short = 'o',
        long = "output-file",
        alias = "output_file",
        value_name = "FILE"
    )]
    pub output_file: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = 5)]
    pub timeout: u64,

    /// Silent mode (suppress the banner)
    #[arg(long = "silent")]
    pub silent: bool,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
