//! Splits a raw line into whitespace-delimited tokens and parses individual columns.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{MungeError, Result};

use super::Reading;

/// A raw line after tokenising.
#[derive(Debug, PartialEq)]
pub enum Row<'a> {
    /// Empty, whitespace only, or an HTML wrapper line such as `<pre>`.
    Blank,
    /// Header, summary or divider: the first token is not numeric.
    NonData(Vec<&'a str>),
    Data(Vec<&'a str>),
}

pub fn classify(line: &str) -> Row<'_> {
    let trimmed = line.trim();
    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        return Row::Blank;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens.first() {
        None => Row::Blank,
        Some(first) if is_ordinal(first) => Row::Data(tokens),
        Some(_) => Row::NonData(tokens),
    }
}

/// Parses one line into a reading, or `None` when the line carries no data.
pub fn parse_line<R: Reading>(line: &str) -> Result<Option<R>> {
    match classify(line) {
        Row::Data(tokens) => R::from_tokens(&tokens).map(Some),
        Row::Blank | Row::NonData(_) => Ok(None),
    }
}

/// True for an integer optionally followed by one `.`, e.g. `14` or `3.`.
pub fn is_ordinal(token: &str) -> bool {
    let token = token.strip_suffix('.').unwrap_or(token);
    let digits = strip_sign(token);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Fails unless the row carries at least `min` tokens.
pub fn require_columns(tokens: &[&str], min: usize) -> Result<()> {
    if tokens.len() < min {
        return Err(MungeError::malformed(format!(
            "expected at least {} columns, found {}",
            min,
            tokens.len()
        )));
    }

    Ok(())
}

pub fn parse_integer<T: FromStr>(token: &str, column: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| MungeError::malformed(format!("{column}: '{token}' is not an integer")))
}

/// Locale-invariant decimal: ASCII digits, optional sign, `.` as the separator.
///
/// Parsed to an exact [`Decimal`] so that equal spreads in the file compare equal.
pub fn parse_decimal(token: &str, column: &str) -> Result<Decimal> {
    let malformed =
        || MungeError::malformed(format!("{column}: '{token}' is not a decimal number"));

    let unsigned = strip_sign(token);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let well_formed = !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());

    if !well_formed {
        return Err(malformed());
    }

    // Canonical form: `-` for negatives, a leading zero, no dangling point
    let sign = if token.starts_with('-') { "-" } else { "" };
    let whole = if whole.is_empty() { "0" } else { whole };
    let canonical = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };

    Decimal::from_str(&canonical).map_err(|_| malformed())
}

fn strip_sign(token: &str) -> &str {
    token
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(token)
}

// -- Tests ----------------------------------------------------------------------------
