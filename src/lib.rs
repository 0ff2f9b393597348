//! Munging of fixed-column text tables.
//!
//! Raw lines are extracted into typed records, validated, and aggregated into
//! a single answer which is then handed to a [`report::Reporter`]:
//!
//! - weather observations: the day with the smallest temperature spread;
//! - football league tables: the team with the smallest points differential.

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod reading;
pub mod report;
pub mod source;
pub mod validate;

pub use aggregate::{Aggregator, FootballAggregator, Notifier, WeatherAggregator};
pub use error::{MungeError, Result};
pub use extract::{extract, extract_readings};
pub use reading::{FootballResult, Reading, Record, WeatherObservation};
pub use report::{ConsoleReporter, FileReporter, ProcessResult, Reporter};
pub use validate::{LineValidator, RecordValidator, ValidationResult, Validator};
