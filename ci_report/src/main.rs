//! ci-status — prints the traffic-light status of CI projects.
//!
//! Reads a JSON snapshot of projects and their recorded build statuses and
//! reports, per project, its color, the build that broke it, and how long
//! and for how many builds it has been red.

mod config;
mod metrics;
mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use ci_status::ProjectReport;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ci-status", about = "Traffic-light status of CI projects")]
struct Cli {
    /// JSON snapshot of projects and their statuses
    #[arg(short, long, env = "CI_STATUS_SNAPSHOT")]
    snapshot: PathBuf,

    /// Output format
    #[arg(short, long, env = "CI_STATUS_FORMAT", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Exit with status 1 when any project is red
    #[arg(long)]
    fail_on_red: bool,

    /// Write Prometheus metrics in text format to this file
    #[arg(long, env = "CI_STATUS_METRICS_FILE")]
    metrics_file: Option<PathBuf>,
}

fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = config::ReportConfig::from_env();
    let prometheus = cli.metrics_file.as_ref().and_then(|_| metrics::init_metrics());

    let projects = snapshot::load(&cli.snapshot)?;
    let reports: Vec<ProjectReport> = projects.iter().map(ProjectReport::build).collect();

    for report in reports.iter().filter(|r| r.is_red()) {
        if report.red_build_count >= config.red_alert_builds {
            tracing::warn!(
                project = %report.name,
                red_build_count = report.red_build_count,
                "Project has been red for too many builds"
            );
        }
    }

    match cli.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.summary());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    if let (Some(path), Some(handle)) = (&cli.metrics_file, &prometheus) {
        std::fs::write(path, handle.render())
            .with_context(|| format!("writing metrics {}", path.display()))?;
    }

    let red = reports.iter().filter(|r| r.is_red()).count();
    tracing::info!(projects = reports.len(), red, "Report complete");

    if cli.fail_on_red && red > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
