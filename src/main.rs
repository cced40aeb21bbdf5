use anyhow::Result;
use arch_news::{fetch_news, format_output, ArchNewsFetcher, Config, WaybarOutput};
use chrono::Utc;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const VERSION_STRING: &str = "Arch News Waybar Module 1.0";
const LOG_ENV: &str = "ARCH_NEWS_LOG";

const EXAMPLES: &str = "\
Examples:
  arch-news                              # Show news from last 7 days
  arch-news 14                           # Show news from last 14 days
  arch-news 7 --active-color red         # Use red color for active state
  arch-news 14 --active-color ff6b6b --inactive-color 4ecdc4";

#[derive(Parser, Debug)]
#[command(
    name = "arch-news",
    about = "Waybar module for Arch Linux news",
    disable_version_flag = true,
    after_help = EXAMPLES
)]
struct Cli {
    /// Number of days to look back for news (default: 7)
    #[arg(allow_negative_numbers = true)]
    days: Option<i64>,

    /// Color to use when there are recent news items (hex color or color name)
    #[arg(long, value_name = "COLOR")]
    active_color: Option<String>,

    /// Color to use when there are no recent news items (hex color or color name)
    #[arg(long, value_name = "COLOR")]
    inactive_color: Option<String>,

    /// HTTP timeout in seconds (default: 10)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print version
    #[arg(long)]
    version: bool,
}

impl Cli {
    fn overrides(&self) -> Config {
        Config {
            days: self.days,
            active_color: self.active_color.clone(),
            inactive_color: self.inactive_color.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    // Polled first so the handler is installed before any work starts.
    tokio::select! {
        biased;
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupted");
            ExitCode::SUCCESS
        }
        code = start() => code,
    }
}

async fn start() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            emit(&WaybarOutput::error(clap_message(&e)));
            return ExitCode::FAILURE;
        }
    };

    if cli.version {
        println!("{}", VERSION_STRING);
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = ?e, "arch-news failed");
            emit(&WaybarOutput::error(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let file_config = Config::load(cli.config.as_deref())?;
    let settings = cli.overrides().layered_over(file_config).into_settings();

    let days = match settings.validated_days() {
        Ok(days) => days,
        Err(e) => {
            emit(&WaybarOutput::error(e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let fetcher = ArchNewsFetcher::new(settings.timeout)?;
    let summary = fetch_news(&fetcher, days, Utc::now()).await;

    let output = format_output(&summary, days, &settings.colors);
    println!("{}", output.to_json()?);

    Ok(ExitCode::SUCCESS)
}

fn emit(output: &WaybarOutput) {
    match output.to_json() {
        Ok(line) => println!("{}", line),
        Err(e) => tracing::error!(error = %e, "failed to serialize output"),
    }
}

/// First line of a clap error, without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

/// Logs go to stderr; stdout carries only the JSON line.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
