use anyhow::{Context, Result};
use munge::{FootballAggregator, Notifier};
use tracing::info;

use super::{load_lines, ReportTarget};
use crate::cli::Options;

/// Finds the team with the smallest points differential in `file`.
pub async fn football(file: &str, options: &Options) -> Result<String> {
    let lines = load_lines(file, options).await?;
    let notifier = Notifier::new(FootballAggregator, ReportTarget::from_options(options)?);

    let result = notifier
        .run(&lines)
        .await
        .with_context(|| format!("Failed to process football file `{}`", file))?;
    info!("Football file `{}` processed", file);

    Ok(result.into_inner())
}
