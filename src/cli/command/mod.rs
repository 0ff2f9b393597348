pub mod all;
pub mod football;
pub mod validate;
pub mod weather;

use std::{fmt::Display, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, Local};
use munge::{ConsoleReporter, FileReporter, ProcessResult, Reporter};

use super::{create_spinner, Options};

pub use all::all;
pub use football::football;
pub use validate::validate;
pub use weather::weather;

/// Where results are delivered, chosen from the command line.
pub enum ReportTarget {
    Console(ConsoleReporter),
    File(FileReporter),
}

impl ReportTarget {
    pub fn from_options(options: &Options) -> Result<Self> {
        if let Some(path) = &options.output {
            return Ok(ReportTarget::File(FileReporter::new(path)));
        }
        if options.save {
            return Ok(ReportTarget::File(FileReporter::new(make_report_file_name()?)));
        }

        Ok(ReportTarget::Console(ConsoleReporter))
    }
}

#[async_trait]
impl<T: Display + Sync> Reporter<T> for ReportTarget {
    async fn deliver(&self, label: &str, result: &ProcessResult<T>) -> munge::Result<()> {
        match self {
            ReportTarget::Console(reporter) => reporter.deliver(label, result).await,
            ReportTarget::File(reporter) => {
                reporter.deliver(label, result).await?;
                println!("{}: {}", label, result.value);
                println!("Report appended to `{}`", reporter.path().display());
                Ok(())
            }
        }
    }
}

pub fn make_report_file_name() -> Result<PathBuf> {
    let today = Local::now();
    let file_name = format!(
        "munge-report-{}-{:02}-{:02}.txt",
        today.year(),
        today.month(),
        today.day()
    );

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not locate the home directory"))?;
    Ok(home.join(file_name))
}

/// Reads an input file behind a spinner.
pub async fn load_lines(file: &str, options: &Options) -> Result<Vec<String>> {
    let bar = create_spinner(format!("Reading {}...", file), options.quiet);
    let lines = munge::source::read_lines(file).await;
    bar.finish_and_clear();

    lines.with_context(|| format!("Failed to read `{}`", file))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn options(output: Option<PathBuf>, save: bool) -> Options {
        Options {
            log_level: "warn".to_string(),
            quiet: true,
            output,
            save,
        }
    }

    #[test]
    fn should_make_dated_report_file_name() {
        if let Ok(path) = make_report_file_name() {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            assert!(name.starts_with("munge-report-"));
            assert!(name.ends_with(".txt"));
        }
    }

    #[tokio::test]
    async fn should_report_unreadable_input_after_clearing_spinner() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.dat");
        let missing = missing.to_string_lossy();

        let err = load_lines(&missing, &options(None, false)).await.unwrap_err();

        assert!(format!("{err:#}").starts_with(&format!("Failed to read `{missing}`")));
    }

    #[tokio::test]
    async fn should_load_lines_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.dat");
        std::fs::write(&path, "  Dy MxT   MnT\n   1  12.6   8.1\n").unwrap();

        let lines = load_lines(&path.to_string_lossy(), &options(None, false)).await.unwrap();

        assert_eq!(lines, vec!["  Dy MxT   MnT", "   1  12.6   8.1"]);
    }

    #[test]
    fn should_pick_report_target() {
        let console = ReportTarget::from_options(&options(None, false)).unwrap();
        assert!(matches!(console, ReportTarget::Console(_)));

        let file = ReportTarget::from_options(&options(Some("out.txt".into()), false)).unwrap();
        match file {
            ReportTarget::File(reporter) => assert_eq!(reporter.path(), &PathBuf::from("out.txt")),
            ReportTarget::Console(_) => panic!("expected file target"),
        }
    }
}
