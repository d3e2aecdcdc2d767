// # -----------------------------
// # crates/cli/src/main.rs
// # -----------------------------
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

use optbench_cli::core;
use optbench_common::{ReportConfig, DEFAULT_DIR_IN, DEFAULT_DIR_OUT};

#[derive(Parser, Debug)]
#[command(
    name = "optbench",
    version,
    about = "Aggregate solver journal logs into a benchmark YAML report",
    long_about = None
)]
struct Cli {
    /// Root directory searched recursively for journal.log files
    #[arg(short = 'i', long = "dir-in", value_name = "PATH", default_value = DEFAULT_DIR_IN)]
    dir_in: PathBuf,
    /// Directory the benchmark.yml report is written into
    #[arg(short = 'o', long = "dir-out", value_name = "PATH", default_value = DEFAULT_DIR_OUT)]
    dir_out: PathBuf,
    /// Generate the benchmark report (pass false to only collect logs)
    #[arg(
        long = "benchmark",
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    benchmark: bool,
    /// Log level (trace, debug, info, warn, error, off). Overrides RUST_LOG if set.
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Initialize logging based on CLI arguments and environment
fn init_logging(log_level: Option<&str>) {
    // Log level: CLI arg overrides RUST_LOG env var
    let filter = if let Some(level) = log_level {
        match level.to_lowercase().as_str() {
            "off" => EnvFilter::new("off"),
            "error" => EnvFilter::new("error"),
            "warn" | "warning" => EnvFilter::new("warn"),
            "info" => EnvFilter::new("info"),
            "debug" => EnvFilter::new("debug"),
            "trace" => EnvFilter::new("trace"),
            _ => {
                eprintln!("Warning: Invalid log level '{}', using 'info'", level);
                EnvFilter::new("info")
            }
        }
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref());

    tracing::debug!("optbench starting, arguments: {:?}", cli);

    let config = ReportConfig {
        dir_in: cli.dir_in,
        dir_out: cli.dir_out,
        benchmark: cli.benchmark,
    };

    let records = core::run(&config).context("benchmark aggregation failed")?;
    tracing::info!("aggregated {} benchmark records", records.len());
    Ok(())
}
