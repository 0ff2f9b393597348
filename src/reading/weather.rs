//! Daily weather observation and parsing logic.
//!
//! Data rows start with the day number followed by the maximum and minimum
//! temperature. The monthly summary row starts with `mo` and is skipped.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::validate::ValidationResult;

use super::row::{parse_decimal, parse_integer, require_columns};
use super::{Reading, Schema};

/// Temperatures are exact decimals as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherObservation {
    pub day: i32,
    pub max_temperature: Decimal,
    pub min_temperature: Decimal,
}

impl WeatherObservation {
    pub fn new(day: i32, max_temperature: Decimal, min_temperature: Decimal) -> Self {
        WeatherObservation {
            day,
            max_temperature,
            min_temperature,
        }
    }

    pub fn spread(&self) -> Decimal {
        self.max_temperature - self.min_temperature
    }
}

impl Reading for WeatherObservation {
    const SCHEMA: Schema = Schema {
        name: "weather",
        header: &["Dy", "MxT", "MnT"],
        min_columns: 3,
    };

    fn from_tokens(tokens: &[&str]) -> Result<Self> {
        require_columns(tokens, Self::SCHEMA.min_columns)?;

        let day = parse_integer(tokens[0], "day")?;
        let max_temperature = parse_temperature(tokens[1], "maximum temperature")?;
        let min_temperature = parse_temperature(tokens[2], "minimum temperature")?;

        Ok(WeatherObservation {
            day,
            max_temperature,
            min_temperature,
        })
    }

    fn validate(&self) -> ValidationResult {
        let mut messages = Vec::new();

        if self.day <= 0 {
            messages.push(format!("day must be greater than zero, found {}", self.day));
        }
        if self.min_temperature > self.max_temperature {
            messages.push(format!(
                "minimum temperature {} exceeds maximum temperature {}",
                self.min_temperature, self.max_temperature
            ));
        }

        ValidationResult::from_messages(messages)
    }
}

// Monthly extremes are flagged with a trailing `*`
fn parse_temperature(token: &str, column: &str) -> Result<Decimal> {
    parse_decimal(token.strip_suffix('*').unwrap_or(token), column)
}

// -- Tests ----------------------------------------------------------------------------
