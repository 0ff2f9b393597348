//! League table row and parsing logic.
//!
//! Layout: `pos. Team P W L D F - A Pts`. Columns are addressed from the right
//! so that team names spanning several tokens are kept whole.

use crate::error::{MungeError, Result};
use crate::validate::ValidationResult;

use super::row::{parse_integer, require_columns};
use super::{Reading, Schema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootballResult {
    pub team_name: String,
    pub points_for: i32,
    pub points_against: i32,
}

impl FootballResult {
    pub fn new(team_name: impl Into<String>, points_for: i32, points_against: i32) -> Self {
        FootballResult {
            team_name: team_name.into(),
            points_for,
            points_against,
        }
    }

    pub fn differential(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}

impl Reading for FootballResult {
    const SCHEMA: Schema = Schema {
        name: "football",
        header: &["Team", "P", "W", "L", "D", "F", "A", "Pts"],
        min_columns: 10,
    };

    fn from_tokens(tokens: &[&str]) -> Result<Self> {
        require_columns(tokens, Self::SCHEMA.min_columns)?;

        let n = tokens.len();
        let points_against = parse_integer(tokens[n - 2], "points against")?;
        if tokens[n - 3] != "-" {
            return Err(MungeError::malformed(format!(
                "expected '-' between points for and against, found '{}'",
                tokens[n - 3]
            )));
        }
        let points_for = parse_integer(tokens[n - 4], "points for")?;
        let team_name = tokens[1..n - 8].join(" ");

        Ok(FootballResult {
            team_name,
            points_for,
            points_against,
        })
    }

    fn validate(&self) -> ValidationResult {
        let mut messages = Vec::new();

        if self.team_name.trim().is_empty() {
            messages.push("team name must not be empty".to_string());
        }
        if self.points_for < 0 {
            messages.push(format!(
                "points for must not be negative, found {}",
                self.points_for
            ));
        }
        if self.points_against < 0 {
            messages.push(format!(
                "points against must not be negative, found {}",
                self.points_against
            ));
        }

        ValidationResult::from_messages(messages)
    }
}

// -- Tests ----------------------------------------------------------------------------
