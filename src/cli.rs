use clap::{ArgGroup, Parser};
use snakecage_report::analysis_report::domain::RiskLevel;
use snakecage_report::application::dto::OutputFormat;
use std::path::PathBuf;

/// Render SnakeCage sandbox analysis reports
#[derive(Parser, Debug)]
#[command(name = "snakecage-report")]
#[command(version)]
#[command(
    about = "Render SnakeCage sandbox analysis reports as HTML dashboards, Markdown, or JSON",
    long_about = None
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["report", "history", "sample"])
))]
pub struct Args {
    /// Analysis report JSON file to render
    pub report: Option<PathBuf>,

    /// Render the history index of every *.json report in DIR
    #[arg(long, value_name = "DIR")]
    pub history: Option<PathBuf>,

    /// Print a sample program: harmless, suspicious or malicious
    #[arg(long, value_name = "KIND")]
    pub sample: Option<String>,

    /// Output format: html, markdown or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (auto-discovers snakecage-report.config.yml if not specified)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the report's risk level is at or above LEVEL
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<RiskLevel>,

    /// Maximum samples plotted per metric series [default: 50]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_points: Option<u32>,

    /// Label chart timestamps in UTC instead of local time
    #[arg(long)]
    pub utc: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
