//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use tracing::debug;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: Options,
}

#[derive(Args, Debug, Clone)]
pub struct Options {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Hide the spinner and use compact logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results and also append them to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print results and also append them to a dated report file in the home directory
    #[arg(long, global = true, conflicts_with = "output")]
    pub save: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the day with the smallest temperature spread
    Weather { file: String },
    /// Find the team with the smallest points differential
    Football { file: String },
    /// Check a file without aggregating it
    Validate {
        file: String,
        #[arg(short, long, value_enum)]
        format: Format,
    },
    /// Run the weather and football pipelines together
    All {
        #[arg(long)]
        weather: String,
        #[arg(long)]
        football: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Weather,
    Football,
}

/// Creates a spinner, hidden in quiet mode.
pub fn create_spinner(message: String, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Set up structured logging on stderr. `RUST_LOG` takes precedence over `--log-level`.
pub fn setup_logging(options: &Options) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("munge={}", options.log_level)));

    if options.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    debug!("Logging initialized at level: {}", options.log_level);
    Ok(())
}
