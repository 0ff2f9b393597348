//! Structural validation of raw line collections and semantic validation of records.

use crate::reading::row::{classify, Row};
use crate::reading::{Reading, Record, Schema};

/// Outcome of a validation check.
///
/// Valid exactly when no messages were collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    is_valid: bool,
    messages: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            messages: Vec::new(),
        }
    }

    pub fn from_messages(messages: Vec<String>) -> Self {
        ValidationResult {
            is_valid: messages.is_empty(),
            messages,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Produces a [`ValidationResult`] for a subject.
pub trait Validator<S: ?Sized> {
    fn validate(&self, subject: &S) -> ValidationResult;
}

/// Semantic checks over a single record.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl Validator<Record> for RecordValidator {
    fn validate(&self, record: &Record) -> ValidationResult {
        record.validate()
    }
}

/// Cheap structural check of a whole file before any record is parsed.
#[derive(Debug, Clone, Copy)]
pub struct LineValidator {
    schema: Schema,
}

impl LineValidator {
    pub fn new(schema: Schema) -> Self {
        LineValidator { schema }
    }

    pub fn for_reading<R: Reading>() -> Self {
        LineValidator::new(R::SCHEMA)
    }
}

impl<L: AsRef<str>> Validator<[L]> for LineValidator {
    fn validate(&self, lines: &[L]) -> ValidationResult {
        let name = self.schema.name;
        let mut rows = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, classify(line.as_ref())))
            .filter(|(_, row)| *row != Row::Blank);

        let Some((header_number, header)) = rows.next() else {
            return ValidationResult::from_messages(vec![format!("no {name} lines to validate")]);
        };

        let mut messages = Vec::new();
        match header {
            Row::NonData(tokens) if tokens.starts_with(self.schema.header) => {}
            Row::NonData(_) => messages.push(format!(
                "line {header_number}: expected a {name} header starting with '{}'",
                self.schema.header.join(" ")
            )),
            _ => messages.push(format!(
                "line {header_number}: expected a {name} header, found a data row"
            )),
        }

        let mut data_rows = 0;
        for (number, row) in rows {
            if let Row::Data(tokens) = row {
                data_rows += 1;
                if tokens.len() < self.schema.min_columns {
                    messages.push(format!(
                        "line {number}: expected at least {} columns, found {}",
                        self.schema.min_columns,
                        tokens.len()
                    ));
                }
            }
        }

        if data_rows == 0 {
            messages.push(format!("no {name} data rows found"));
        }

        ValidationResult::from_messages(messages)
    }
}

// -- Tests ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use rust_decimal::Decimal;

    use super::*;
    use crate::reading::{FootballResult, WeatherObservation};

    const HEADER: &str =
        "  Dy MxT   MnT   AvT   HDDay  AvDP 1HrP TPcpn WxType PDir AvSp Dir MxS SkyC MxR MnR AvSLP";
    const SUMMARY: &str = "  mo  82.9  60.5  71.7    16  58.8       0.00              6.9          5.3";

    fn weather() -> LineValidator {
        LineValidator::for_reading::<WeatherObservation>()
    }

    #[test]
    fn should_accept_well_formed_weather_lines() {
        let one_day = [
            HEADER,
            "  ",
            "   1  88    59    74          53.8       0.00 F       280  9.6 270  17  1.6  93 23 1004.5",
            SUMMARY,
        ];
        let two_days = [
            HEADER,
            "  ",
            "   1  88    59    74          53.8       0.00 F       280  9.6 270  17  1.6  93 23 1004.5",
            "   2  79    63    71          46.5       0.00         330  8.7 340  23  3.3  70 28 1004.5",
            SUMMARY,
        ];

        assert!(weather().validate(&one_day[..]).is_valid());
        assert!(weather().validate(&two_days[..]).is_valid());
    }

    #[test]
    fn should_reject_empty_collections() {
        let empty: [&str; 0] = [];

        assert!(!weather().validate(&empty[..]).is_valid());
        assert!(!weather().validate(&[""][..]).is_valid());
    }

    #[test]
    fn should_reject_unknown_header() {
        let lines = [
            "  Oh no, not this one!",
            "  ",
            "   47834 2 1.22 424345 yep 12312    43",
            ":)",
        ];
        let result = weather().validate(&lines[..]);

        assert!(!result.is_valid());
        assert_eq!(
            result.messages(),
            &["line 1: expected a weather header starting with 'Dy MxT MnT'".to_string()]
        );
    }

    #[test]
    fn should_reject_file_without_data_rows() {
        let lines = [
            HEADER,
            "  ",
            "mo  82.9  60.5  71.7    16  58.8       0.00              6.9          5.3",
        ];
        let result = weather().validate(&lines[..]);

        assert!(!result.is_valid());
        assert_eq!(result.messages(), &["no weather data rows found".to_string()]);
    }

    #[test]
    fn should_report_every_short_row() {
        let lines = vec![
            HEADER.to_string(),
            "   1  88".to_string(),
            "   2  79    63".to_string(),
            "   3".to_string(),
        ];
        let result = weather().validate(lines.as_slice());

        assert_eq!(result.messages().len(), 2);
        assert!(result.messages()[0].starts_with("line 2:"));
        assert!(result.messages()[1].starts_with("line 4:"));
    }

    #[test]
    fn should_reject_data_row_in_header_position() {
        let lines = ["   1  88    59    74", "   2  79    63    71"];
        let result = weather().validate(&lines[..]);

        assert_eq!(
            result.messages(),
            &["line 1: expected a weather header, found a data row".to_string()]
        );
    }

    #[test]
    fn should_accept_football_table() {
        let lines = [
            "<pre>",
            "       Team            P     W    L   D    F      A     Pts",
            "    1. Arsenal         38    26   9   3    79  -  36    87",
            "    2. Liverpool       38    24   8   6    67  -  30    80",
            "   -------------------------------------------------------",
            "   18. Ipswich         38     9   9  20    41  -  64    36",
            "</pre>",
        ];
        let validator = LineValidator::for_reading::<FootballResult>();

        assert!(validator.validate(&lines[..]).is_valid());
    }

    #[test]
    fn should_delegate_record_validation() {
        let good = Record::from(WeatherObservation::new(
            1,
            Decimal::new(126, 1),
            Decimal::new(81, 1),
        ));
        let bad = Record::from(FootballResult::new("hello", 25, -1));

        assert_eq!(RecordValidator.validate(&good), ValidationResult::valid());
        assert_eq!(
            RecordValidator.validate(&bad).into_messages(),
            vec!["points against must not be negative, found -1".to_string()]
        );
    }
}
