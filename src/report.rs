//! Delivery of aggregate results to a reporting collaborator.

use std::{fmt::Display, path::PathBuf};

use async_trait::async_trait;
use chrono::Local;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::{debug, info};

use crate::error::Result;

/// The single aggregate value produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult<T> {
    pub value: T,
}

impl<T> ProcessResult<T> {
    pub fn new(value: T) -> Self {
        ProcessResult { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[async_trait]
pub trait Reporter<T: Sync>: Send + Sync {
    /// Hands a result over, completing once it has been delivered.
    async fn deliver(&self, label: &str, result: &ProcessResult<T>) -> Result<()>;
}

/// Prints results to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

#[async_trait]
impl<T: Display + Sync> Reporter<T> for ConsoleReporter {
    async fn deliver(&self, label: &str, result: &ProcessResult<T>) -> Result<()> {
        info!("{}: {}", label, result.value);
        println!("{}: {}", label, result.value);

        Ok(())
    }
}

/// Appends timestamped results to a report file, creating it if needed.
#[derive(Debug, Clone)]
pub struct FileReporter {
    path: PathBuf,
}

impl FileReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileReporter { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl<T: Display + Sync> Reporter<T> for FileReporter {
    async fn deliver(&self, label: &str, result: &ProcessResult<T>) -> Result<()> {
        let line = format!(
            "{} {}: {}\n",
            Local::now().format("%Y-%m-%dT%H:%M:%S"),
            label,
            result.value
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!("Report appended to {}", self.path.display());
        Ok(())
    }
}

// -- Tests ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn should_append_results_to_file() {
        let tmp_dir = TempDir::new().unwrap();
        let reporter = FileReporter::new(tmp_dir.path().join("report.txt"));

        reporter
            .deliver("Smallest spread", &ProcessResult::new(14))
            .await
            .unwrap();
        reporter
            .deliver("Smallest differential", &ProcessResult::new("Aston_Villa"))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" Smallest spread: 14"));
        assert!(lines[1].ends_with(" Smallest differential: Aston_Villa"));
    }

    #[tokio::test]
    async fn should_propagate_write_failures() {
        let tmp_dir = TempDir::new().unwrap();
        let reporter = FileReporter::new(tmp_dir.path().join("missing").join("report.txt"));

        let err = reporter
            .deliver("Smallest spread", &ProcessResult::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::error::MungeError::Io(_)));
    }

    #[tokio::test]
    async fn should_print_to_console() {
        let result = ProcessResult::new(2);

        assert!(ConsoleReporter.deliver("Day", &result).await.is_ok());
        assert_eq!(result.into_inner(), 2);
    }
}
