// src/main.rs
use anyhow::Result;
use clap::Parser;
use log::info;
use webscout::cli::Args;
use webscout::engine::ScanEngine;

const BANNER: &str = r#"
 _    _      _     _____                 _
| |  | |    | |   /  ___|               | |
| |  | | ___| |__ \ `--.  ___ ___  _   _| |_
| |/\| |/ _ \ '_ \ `--. \/ __/ _ \| | | | __|
\  /\  /  __/ |_) /\__/ / (_| (_) | |_| | |_
 \/  \/ \___|_.__/\____/ \___\___/ \__,_|\__|

        Lightweight Website Reconnaissance
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if !args.silent {
        println!("{}", BANNER);
        println!(
            "        {} v{} ({}, built {})\n",
            webscout::NAME,
            webscout::VERSION,
            env!("GIT_HASH"),
            env!("BUILD_TIME")
        );
    }

    let engine = ScanEngine::new(&args)?;

    let stats = engine
        .run(&args.target_url)
        .await
        .map_err(|e| anyhow::anyhow!("Scan failed: {}", e))?;

    if !args.silent {
        info!(
            "Scan completed: {} pages fetched, {} findings in {:.2}s",
            stats.pages_fetched,
            stats.total_findings,
            stats.duration.as_secs_f64()
        );
    }

    Ok(())
}
