// Schedule service
// Recurrence decoding, the occurrence predicate, and grid construction

mod grid;
mod navigation;
mod recurrence;

pub use grid::{days_in_month, days_in_week};
pub use navigation::advance;
pub use recurrence::{parse_schedule, MalformedRecurrenceRule};

use chrono::{Datelike, NaiveDate};

use crate::models::class::ClassEvent;
use crate::models::schedule::{DaySchedule, ViewMode, ViewWindow};

/// True iff `date`'s weekday is in the decoded recurrence set of `class`.
///
/// Pure; the only failure is a malformed recurrence rule, which propagates
/// rather than being read as "occurs on no day".
pub fn class_occurs_on(
    class: &ClassEvent,
    date: NaiveDate,
) -> Result<bool, MalformedRecurrenceRule> {
    let days = parse_schedule(&class.schedule)?;
    Ok(days.contains(&date.weekday()))
}

/// Build the cell sequence for `window`, month or week per its mode.
pub fn build_window(
    window: ViewWindow,
    classes: &[ClassEvent],
) -> Result<Vec<DaySchedule>, MalformedRecurrenceRule> {
    match window.mode {
        ViewMode::Month => days_in_month(window.reference_date, classes),
        ViewMode::Week => days_in_week(window.reference_date, classes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Direction;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_occurs_on_matches_decoded_set() {
        let class = ClassEvent::new("1", "Yoga", "{M, W, F}").unwrap();

        // 2024-01-08 was a Monday, 2024-01-09 a Tuesday
        assert!(class_occurs_on(&class, date(2024, 1, 8)).unwrap());
        assert!(!class_occurs_on(&class, date(2024, 1, 9)).unwrap());
    }

    #[test]
    fn test_occurs_on_malformed_rule_is_an_error() {
        let class = ClassEvent::new("1", "Yoga", "{Xx}").unwrap();
        assert!(class_occurs_on(&class, date(2024, 1, 8)).is_err());
    }

    #[test]
    fn test_build_window_follows_mode() {
        let reference = date(2024, 2, 15);

        let month = build_window(ViewWindow::new(reference, ViewMode::Month), &[]).unwrap();
        let week = build_window(ViewWindow::new(reference, ViewMode::Week), &[]).unwrap();

        assert_eq!(month.len(), 35);
        assert_eq!(week.len(), 7);
    }

    #[test]
    fn test_advance_then_build_round_trip() {
        let start = ViewWindow::new(date(2024, 1, 7), ViewMode::Week);

        let forward = advance(start, Direction::Forward);
        let cells = build_window(forward, &[]).unwrap();
        assert_eq!(cells[0].date, date(2024, 1, 14));
    }
}
