// Date utility functions
// Calendar arithmetic for the schedule grid, Sunday-based weeks throughout

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Sunday-based weekday index (Sunday = 0 .. Saturday = 6)
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    let next_month_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };

    match next_month_first {
        Some(next) => next.pred_opt().unwrap_or(first),
        None => first,
    }
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// The Sunday on or before `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(weekday_index(date) as u64)
}

/// Shift `date` by whole calendar months with overflowing day-of-month.
///
/// The day-of-month is preserved against the target month; when it exceeds
/// that month's length the excess rolls into the following month, so
/// `2024-01-31 + 1` lands on `2024-03-02` (Feb 2024 has 29 days). This is
/// the normalization native `Date` arithmetic performs, kept deliberately
/// instead of clamping to the month's end.
pub fn add_months_overflowing(date: NaiveDate, delta: i32) -> NaiveDate {
    let months0 = date.year() as i64 * 12 + (date.month0() as i64) + delta as i64;
    let year = months0.div_euclid(12) as i32;
    let month = months0.rem_euclid(12) as u32 + 1;

    // Anchor at day 1 of the target month, then re-apply the day offset so
    // any overflow walks forward into the next month.
    let anchor = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date);
    anchor + Days::new((date.day() - 1) as u64)
}

/// True when the weekday of `date` falls on Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_index_sunday_is_zero() {
        // 2024-01-07 was a Sunday
        assert_eq!(weekday_index(date(2024, 1, 7)), 0);
        assert_eq!(weekday_index(date(2024, 1, 13)), 6);
    }

    #[test_case(2024, 1, 31; "january")]
    #[test_case(2024, 2, 29; "leap february")]
    #[test_case(2023, 2, 28; "common february")]
    #[test_case(2024, 4, 30; "april")]
    #[test_case(2024, 12, 31; "december")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(date(year, month, 15)), expected);
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(first_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2024, 12, 5)), date(2024, 12, 31));
    }

    #[test]
    fn test_start_of_week() {
        // Week of 2024-01-07 (Sun) through 2024-01-13 (Sat)
        assert_eq!(start_of_week(date(2024, 1, 7)), date(2024, 1, 7));
        assert_eq!(start_of_week(date(2024, 1, 10)), date(2024, 1, 7));
        assert_eq!(start_of_week(date(2024, 1, 13)), date(2024, 1, 7));
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months_overflowing(date(2024, 3, 15), 1), date(2024, 4, 15));
        assert_eq!(add_months_overflowing(date(2024, 3, 15), -1), date(2024, 2, 15));
    }

    #[test]
    fn test_add_months_overflow_rolls_forward() {
        // Jan 31 + 1 month: Feb 2024 has 29 days, overflow lands on Mar 2
        assert_eq!(add_months_overflowing(date(2024, 1, 31), 1), date(2024, 3, 2));
        // Jan 31 + 1 month in a common year lands on Mar 3
        assert_eq!(add_months_overflowing(date(2023, 1, 31), 1), date(2023, 3, 3));
        // May 31 - 1 month: April has 30 days, overflow lands on May 1
        assert_eq!(add_months_overflowing(date(2024, 5, 31), -1), date(2024, 5, 1));
    }

    #[test]
    fn test_add_months_crosses_year_boundary() {
        assert_eq!(add_months_overflowing(date(2024, 12, 10), 1), date(2025, 1, 10));
        assert_eq!(add_months_overflowing(date(2024, 1, 10), -1), date(2023, 12, 10));
        assert_eq!(add_months_overflowing(date(2024, 6, 10), 18), date(2025, 12, 10));
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2024, 1, 7)));
        assert!(is_weekend(date(2024, 1, 13)));
        assert!(!is_weekend(date(2024, 1, 10)));
    }
}
