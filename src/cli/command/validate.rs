use anyhow::{bail, Result};
use munge::{
    extract, FootballResult, LineValidator, Reading, Record, RecordValidator, Validator,
    WeatherObservation,
};
use tracing::info;

use super::load_lines;
use crate::cli::{Format, Options};

/// Checks a file's structure and every record in it, printing each problem.
pub async fn validate(file: &str, format: Format, options: &Options) -> Result<()> {
    let lines = load_lines(file, options).await?;

    let problems = match format {
        Format::Weather => check::<WeatherObservation>(&lines),
        Format::Football => check::<FootballResult>(&lines),
    };

    if problems.is_empty() {
        info!("`{}` passed validation", file);
        println!("`{}` is valid", file);
        return Ok(());
    }

    for problem in &problems {
        println!("{}", problem);
    }
    bail!("`{}` has {} problem(s)", file, problems.len())
}

// Structural problems first; records are only checked once the file parses.
fn check<R: Reading>(lines: &[String]) -> Vec<String> {
    let structure = LineValidator::for_reading::<R>().validate(lines);
    if !structure.is_valid() {
        return structure.into_messages();
    }

    let records: Vec<Record> = match extract::<R, String>(lines) {
        Ok(records) => records,
        Err(e) => return vec![e.to_string()],
    };

    records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            let prefix = format!("record {} ({})", index + 1, record.describe());
            RecordValidator
                .validate(record)
                .into_messages()
                .into_iter()
                .map(move |message| format!("{}: {}", prefix, message))
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn should_pass_clean_weather_file() {
        let lines = lines(&[
            "  Dy MxT   MnT   AvT",
            "   1  88    59    74",
            "   2  79    63    71",
            "  mo  82.9  60.5  71.7",
        ]);

        assert!(check::<WeatherObservation>(&lines).is_empty());
    }

    #[test]
    fn should_report_structural_problems_only() {
        let lines = lines(&["  Oh no, not this one!", "   47834 2", ":)"]);
        let problems = check::<WeatherObservation>(&lines);

        assert_eq!(problems.len(), 2);
        assert!(problems[0].starts_with("line 1:"));
    }

    #[test]
    fn should_report_every_invalid_record() {
        let lines = lines(&[
            "       Team            P     W    L   D    F      A     Pts",
            "    1. Arsenal         38    26   9   3    79  -  36    87",
            "    2. Hello           38    12  14  12   -25  -  -31    50",
        ]);
        let problems = check::<FootballResult>(&lines);

        assert_eq!(
            problems,
            vec![
                "record 2 (team 'Hello'): points for must not be negative, found -25",
                "record 2 (team 'Hello'): points against must not be negative, found -31",
            ]
        );
    }
}
