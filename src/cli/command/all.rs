use anyhow::Result;

use super::{football, weather};
use crate::cli::Options;

/// Runs both pipelines concurrently; the first failure aborts both.
pub async fn all(weather_file: &str, football_file: &str, options: &Options) -> Result<()> {
    futures::try_join!(
        weather(weather_file, options),
        football(football_file, options)
    )?;

    Ok(())
}
