pub mod football;
pub mod row;
pub mod weather;

use crate::error::Result;
use crate::validate::ValidationResult;

pub use football::FootballResult;
pub use weather::WeatherObservation;

/// Column layout of a fixed-column text table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    /// Leading header columns a file must start with.
    pub header: &'static [&'static str],
    /// Fewest tokens a data row may carry.
    pub min_columns: usize,
}

// Define a trait for deserializing a line into a reading
pub trait Reading: Sized + Into<Record> {
    const SCHEMA: Schema;

    /// Builds a reading from the tokens of a data row.
    fn from_tokens(tokens: &[&str]) -> Result<Self>;

    /// Checks the domain rules, reporting every violation.
    fn validate(&self) -> ValidationResult;

    /// `Ok(None)` for blank, header and summary lines.
    fn from_line(line: &str) -> Result<Option<Self>> {
        row::parse_line(line)
    }

    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

/// A parsed record of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Weather(WeatherObservation),
    Football(FootballResult),
}

impl Record {
    pub fn validate(&self) -> ValidationResult {
        match self {
            Record::Weather(w) => w.validate(),
            Record::Football(f) => f.validate(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::Weather(_) => WeatherObservation::SCHEMA.name,
            Record::Football(_) => FootballResult::SCHEMA.name,
        }
    }

    /// Short identification used to prefix validation messages.
    pub fn describe(&self) -> String {
        match self {
            Record::Weather(w) => format!("day {}", w.day),
            Record::Football(f) => format!("team '{}'", f.team_name),
        }
    }

    pub fn as_weather(&self) -> Option<&WeatherObservation> {
        match self {
            Record::Weather(w) => Some(w),
            Record::Football(_) => None,
        }
    }

    pub fn as_football(&self) -> Option<&FootballResult> {
        match self {
            Record::Football(f) => Some(f),
            Record::Weather(_) => None,
        }
    }
}

impl From<WeatherObservation> for Record {
    fn from(w: WeatherObservation) -> Self {
        Record::Weather(w)
    }
}

impl From<FootballResult> for Record {
    fn from(f: FootballResult) -> Self {
        Record::Football(f)
    }
}
