use anyhow::{Context, Result};
use munge::{Notifier, WeatherAggregator};
use tracing::info;

use super::{load_lines, ReportTarget};
use crate::cli::Options;

/// Finds the day with the smallest temperature spread in `file`.
pub async fn weather(file: &str, options: &Options) -> Result<i32> {
    let lines = load_lines(file, options).await?;
    let notifier = Notifier::new(WeatherAggregator, ReportTarget::from_options(options)?);

    let result = notifier
        .run(&lines)
        .await
        .with_context(|| format!("Failed to process weather file `{}`", file))?;
    info!("Weather file `{}` processed", file);

    Ok(result.into_inner())
}
