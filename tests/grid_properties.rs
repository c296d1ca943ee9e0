// Property-based tests for the schedule grid builders

mod fixtures;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use class_scheduler::services::schedule::{
    class_occurs_on, days_in_month, days_in_week, parse_schedule,
};

use fixtures::classes;

fn arbitrary_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: month grids always form whole weeks
    #[test]
    fn prop_month_grid_is_whole_weeks(date in arbitrary_date()) {
        let cells = days_in_month(date, &classes::all()).unwrap();
        prop_assert_eq!(cells.len() % 7, 0);
    }

    /// Property: week grids are exactly 7 cells starting on Sunday
    #[test]
    fn prop_week_grid_starts_sunday(date in arbitrary_date()) {
        let cells = days_in_week(date, &classes::all()).unwrap();
        prop_assert_eq!(cells.len(), 7);
        prop_assert_eq!(cells[0].date.weekday().num_days_from_sunday(), 0);
        prop_assert!(cells.iter().any(|c| c.date == date));
    }

    /// Property: grid dates are strictly ascending with no gaps
    #[test]
    fn prop_month_grid_dates_are_contiguous(date in arbitrary_date()) {
        let cells = days_in_month(date, &[]).unwrap();
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    /// Property: every day of the reference month appears exactly once
    #[test]
    fn prop_month_grid_covers_the_month(date in arbitrary_date()) {
        let cells = days_in_month(date, &[]).unwrap();
        let in_month = cells
            .iter()
            .filter(|c| c.date.year() == date.year() && c.date.month() == date.month())
            .count() as u32;

        let last_day = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .unwrap()
            .checked_add_months(chrono::Months::new(1))
            .unwrap()
            .pred_opt()
            .unwrap()
            .day();
        prop_assert_eq!(in_month, last_day);
    }

    /// Property: building twice from the same inputs is structurally identical
    #[test]
    fn prop_grid_build_is_idempotent(date in arbitrary_date()) {
        let all = classes::all();
        let first = days_in_month(date, &all).unwrap();
        let second = days_in_month(date, &all).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a cell contains a class iff the occurrence predicate holds,
    /// and the predicate agrees with the decoded weekday set
    #[test]
    fn prop_cells_agree_with_occurrence_predicate(date in arbitrary_date()) {
        let all = classes::all();
        let cells = days_in_week(date, &all).unwrap();

        for cell in &cells {
            for class in &all {
                let expected = parse_schedule(&class.schedule)
                    .unwrap()
                    .contains(&cell.date.weekday());
                prop_assert_eq!(class_occurs_on(class, cell.date).unwrap(), expected);
                prop_assert_eq!(cell.classes.contains(class), expected);
            }
        }
    }
}
