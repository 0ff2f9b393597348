//! Reads the raw lines of an input file.

use tracing::debug;

use crate::error::{MungeError, Result};

/// Loads a text file as lines. Read failures are returned unchanged.
pub async fn read_lines(path: &str) -> Result<Vec<String>> {
    if path.trim().is_empty() {
        return Err(MungeError::invalid_argument("file path must not be blank"));
    }

    let contents = tokio::fs::read_to_string(path).await?;
    let lines: Vec<String> = contents.lines().map(String::from).collect();
    debug!("Read {} lines from {}", lines.len(), path);

    Ok(lines)
}

// -- Tests ----------------------------------------------------------------------------
