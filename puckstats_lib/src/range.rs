//! Cross-argument checks: range ordering and inclusive bounds.

use std::fmt::Display;

use chrono::NaiveDate;
use puckstats_api::types::Season;

use crate::error::PuckError;

pub const PICK_NUMBER_BOUNDS: (u32, u32) = (1, 37);
pub const ROUND_NUMBER_BOUNDS: (u32, u32) = (1, 24);
pub const DRAFT_YEAR_BOUNDS: (i32, i32) = (1963, 2018);
pub const ATTENDANCE_START_BOUNDS: (i32, i32) = (1975, 2018);
pub const ATTENDANCE_END_BOUNDS: (i32, i32) = (1976, 2019);

/// Fails when `end` falls before `start`. Equal dates are a valid one-day window.
pub fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), PuckError> {
    if start > end {
        return Err(PuckError::Range(
            "Invalid date range - end_date earlier than start_date".to_string(),
        ));
    }
    Ok(())
}

/// Fails when the first year of `start` is after the first year of `end`.
///
/// Only the starting years are compared, so `20192020` → `20192019` passes.
pub fn check_season_order(start: &Season, end: &Season) -> Result<(), PuckError> {
    if start.start_year() > end.start_year() {
        return Err(PuckError::Range(
            "Invalid season range - end_season earlier than start_season".to_string(),
        ));
    }
    Ok(())
}

/// Fails unless `lo <= value <= hi`.
pub fn check_bounded_range<T>(value: T, lo: T, hi: T, name: &str) -> Result<(), PuckError>
where
    T: PartialOrd + Display,
{
    if value < lo || value > hi {
        return Err(PuckError::Range(format!(
            "{} {} is out of range [{}, {}]",
            name, value, lo, hi
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn season(start: i32, end: i32) -> Season {
        Season::new(start, end).unwrap()
    }

    #[test]
    fn date_order_property() {
        let dates = [
            date(1917, 12, 19),
            date(2019, 10, 2),
            date(2019, 10, 3),
            date(2020, 2, 28),
            date(2020, 4, 11),
        ];
        for start in dates {
            for end in dates {
                let result = check_date_order(start, end);
                if start > end {
                    assert!(matches!(result, Err(PuckError::Range(_))));
                } else {
                    assert!(result.is_ok());
                }
            }
        }
    }

    #[test]
    fn date_order_message() {
        let err = check_date_order(date(2020, 2, 28), date(2019, 10, 2)).unwrap_err();
        assert!(err.to_string().contains("end_date earlier than start_date"));
    }

    #[test]
    fn season_order_ok() {
        assert!(check_season_order(&season(1953, 1954), &season(1958, 1959)).is_ok());
        assert!(check_season_order(&season(2019, 2020), &season(2019, 2020)).is_ok());
    }

    #[test]
    fn season_order_compares_start_years_only() {
        assert!(check_season_order(&season(2019, 2020), &season(2019, 2019)).is_ok());
        assert!(check_season_order(&season(2019, 2019), &season(2018, 2019)).is_err());
    }

    #[test]
    fn season_order_reversed() {
        let err = check_season_order(&season(1958, 1959), &season(1953, 1954)).unwrap_err();
        assert!(matches!(err, PuckError::Range(_)));
    }

    #[test]
    fn bounded_range_inclusive() {
        let (lo, hi) = PICK_NUMBER_BOUNDS;
        assert!(check_bounded_range(1, lo, hi, "pick_number").is_ok());
        assert!(check_bounded_range(37, lo, hi, "pick_number").is_ok());
        assert!(check_bounded_range(0, lo, hi, "pick_number").is_err());
        assert!(check_bounded_range(38, lo, hi, "pick_number").is_err());
    }

    #[test]
    fn bounded_range_message() {
        let (lo, hi) = DRAFT_YEAR_BOUNDS;
        let err = check_bounded_range(2019, lo, hi, "year").unwrap_err();
        assert_eq!(err.to_string(), "year 2019 is out of range [1963, 2018]");
    }

    #[test]
    fn attendance_bounds() {
        let (lo, hi) = ATTENDANCE_START_BOUNDS;
        assert!(check_bounded_range(1975, lo, hi, "start_season").is_ok());
        assert!(check_bounded_range(2019, lo, hi, "start_season").is_err());
        let (lo, hi) = ATTENDANCE_END_BOUNDS;
        assert!(check_bounded_range(1975, lo, hi, "end_season").is_err());
        assert!(check_bounded_range(2019, lo, hi, "end_season").is_ok());
    }
}
