//! Extracts typed records from a collection of raw lines.
//!
//! Extraction is all or nothing: a structurally invalid file, or the first
//! data row that cannot be parsed, rejects the whole input.

use tracing::debug;

use crate::error::{MungeError, Result};
use crate::reading::{Reading, Record};
use crate::validate::{LineValidator, Validator};

/// Parses every data row of `lines` into a reading, in source order.
pub fn extract_readings<R: Reading, L: AsRef<str>>(lines: &[L]) -> Result<Vec<R>> {
    if lines.iter().all(|line| line.as_ref().trim().is_empty()) {
        return Err(MungeError::invalid_argument(format!(
            "no {} lines to extract",
            R::SCHEMA.name
        )));
    }

    let structure = LineValidator::for_reading::<R>().validate(lines);
    if !structure.is_valid() {
        return Err(MungeError::malformed(structure.into_messages().join("; ")));
    }

    let mut readings = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(reading) = R::from_line(line.as_ref()).map_err(|e| at_line(e, index + 1))? {
            readings.push(reading);
        }
    }

    debug!(
        "Extracted {} {} records from {} lines",
        readings.len(),
        R::SCHEMA.name,
        lines.len()
    );

    Ok(readings)
}

/// As [`extract_readings`], wrapping each reading as a [`Record`].
pub fn extract<R: Reading, L: AsRef<str>>(lines: &[L]) -> Result<Vec<Record>> {
    let readings = extract_readings::<R, L>(lines)?;

    Ok(readings.into_iter().map(Into::into).collect())
}

fn at_line(error: MungeError, line_number: usize) -> MungeError {
    match error {
        MungeError::MalformedRow { reason } => {
            MungeError::malformed(format!("line {line_number}: {reason}"))
        }
        other => other,
    }
}

// -- Tests ----------------------------------------------------------------------------
