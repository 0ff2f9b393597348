//! Aggregation of a validated record set into a single answer.
//!
//! Both aggregations are a single linear scan keeping the first record with the
//! smallest score, so ties resolve to the earliest record in input order.

use std::fmt::Display;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{MungeError, Result};
use crate::extract::extract;
use crate::reading::{FootballResult, Reading, Record, WeatherObservation};
use crate::report::{ProcessResult, Reporter};
use crate::validate::{RecordValidator, Validator};

pub trait Aggregator {
    /// The record kind this aggregator accepts.
    type Item: Reading;
    type Score: PartialOrd;
    type Output;

    /// Human readable name of the answer, e.g. for reports.
    fn label(&self) -> &'static str;

    fn select<'a>(&self, record: &'a Record) -> Option<&'a Self::Item>;

    fn score(&self, item: &Self::Item) -> Self::Score;

    fn answer(&self, item: &Self::Item) -> Self::Output;

    /// Validates every record, then returns the answer for the lowest score.
    fn aggregate(&self, records: &[Record]) -> Result<ProcessResult<Self::Output>> {
        if records.is_empty() {
            return Err(MungeError::EmptyInput);
        }
        check_records(self, records)?;

        let candidates = records.iter().filter_map(|record| self.select(record));
        let best =
            first_minimum(candidates, |item| self.score(item)).ok_or(MungeError::EmptyInput)?;

        Ok(ProcessResult::new(self.answer(best)))
    }
}

/// Day with the smallest temperature spread.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherAggregator;

impl Aggregator for WeatherAggregator {
    type Item = WeatherObservation;
    type Score = Decimal;
    type Output = i32;

    fn label(&self) -> &'static str {
        "Day with the smallest temperature spread"
    }

    fn select<'a>(&self, record: &'a Record) -> Option<&'a WeatherObservation> {
        record.as_weather()
    }

    fn score(&self, item: &WeatherObservation) -> Decimal {
        item.spread()
    }

    fn answer(&self, item: &WeatherObservation) -> i32 {
        item.day
    }
}

/// Team with the smallest points differential.
#[derive(Debug, Clone, Copy, Default)]
pub struct FootballAggregator;

impl Aggregator for FootballAggregator {
    type Item = FootballResult;
    type Score = i64;
    type Output = String;

    fn label(&self) -> &'static str {
        "Team with the smallest points differential"
    }

    fn select<'a>(&self, record: &'a Record) -> Option<&'a FootballResult> {
        record.as_football()
    }

    fn score(&self, item: &FootballResult) -> i64 {
        item.differential()
    }

    fn answer(&self, item: &FootballResult) -> String {
        item.team_name.clone()
    }
}

/// Couples an aggregator with the collaborator its results are delivered to.
pub struct Notifier<A, P> {
    aggregator: A,
    reporter: P,
}

impl<A, P> Notifier<A, P>
where
    A: Aggregator,
    A::Output: Display + Sync,
    P: Reporter<A::Output>,
{
    pub fn new(aggregator: A, reporter: P) -> Self {
        Notifier {
            aggregator,
            reporter,
        }
    }

    /// Aggregates `records` and waits for the result to be delivered.
    pub async fn notify(&self, records: &[Record]) -> Result<ProcessResult<A::Output>> {
        let result = self.aggregator.aggregate(records)?;
        debug!("{}: {}", self.aggregator.label(), result.value);

        self.reporter
            .deliver(self.aggregator.label(), &result)
            .await?;

        Ok(result)
    }

    /// Extracts, aggregates and delivers in one run.
    pub async fn run<L: AsRef<str>>(&self, lines: &[L]) -> Result<ProcessResult<A::Output>> {
        let records = extract::<A::Item, L>(lines)?;
        self.notify(&records).await
    }
}

fn check_records<A: Aggregator + ?Sized>(aggregator: &A, records: &[Record]) -> Result<()> {
    let expected = <A::Item as Reading>::SCHEMA.name;
    let mut messages = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let prefix = format!("record {} ({})", index + 1, record.describe());

        if aggregator.select(record).is_none() {
            messages.push(format!(
                "{prefix}: expected a {expected} record, found a {} record",
                record.kind()
            ));
            continue;
        }

        let result = RecordValidator.validate(record);
        messages.extend(
            result
                .into_messages()
                .into_iter()
                .map(|message| format!("{prefix}: {message}")),
        );
    }

    if messages.is_empty() {
        Ok(())
    } else {
        warn!("Rejected {} record set with {} problems", expected, messages.len());
        Err(MungeError::InvalidRecord { messages })
    }
}

// Strict `<` keeps the earliest of equal scores.
fn first_minimum<'a, T, K, F>(items: impl Iterator<Item = &'a T>, score: F) -> Option<&'a T>
where
    T: 'a,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(&'a T, K)> = None;

    for item in items {
        let candidate = score(item);
        let replace = match &best {
            None => true,
            Some((_, lowest)) => candidate < *lowest,
        };
        if replace {
            best = Some((item, candidate));
        }
    }

    best.map(|(item, _)| item)
}

// -- Tests ----------------------------------------------------------------------------
