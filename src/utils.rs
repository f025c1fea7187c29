//! Utility functions for the ranking engine

use crate::error::{RankingError, Result};
use chrono::Local;

/// Today's date in the local timezone, formatted as `yyyy-mm-dd`
pub fn session_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Calculate the absolute difference between two game scores
pub fn score_margin(home_score: u32, away_score: u32) -> i64 {
    (i64::from(home_score) - i64::from(away_score)).abs()
}

/// Parse a score typed by the user
///
/// Anything that is not a whole number is an [`RankingError::InvalidScore`].
/// Range checks are left to the caller.
pub fn parse_score(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RankingError::InvalidScore {
            reason: format!("'{}' is not a whole number", input),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_margin() {
        assert_eq!(score_margin(11, 9), 2);
        assert_eq!(score_margin(9, 11), 2);
        assert_eq!(score_margin(0, 0), 0);
        assert_eq!(score_margin(u32::MAX, 0), i64::from(u32::MAX));
    }

    #[test]
    fn test_session_date_format() {
        let date = session_date();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("11"), Ok(11));
        assert_eq!(parse_score(" 7 "), Ok(7));
        assert_eq!(parse_score("-3"), Ok(-3));
    }

    #[test]
    fn test_parse_score_rejects_non_numbers() {
        for input in ["", "abc", "11.5", "99999999999999999999"] {
            assert!(
                matches!(parse_score(input), Err(RankingError::InvalidScore { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }
}
