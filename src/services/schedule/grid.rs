// Calendar grid construction
// Builds the ordered cell sequences behind the month and week views.

use chrono::{Datelike, Days, NaiveDate};

use super::class_occurs_on;
use super::recurrence::MalformedRecurrenceRule;
use crate::models::class::ClassEvent;
use crate::models::schedule::DaySchedule;
use crate::utils::date::{first_of_month, last_of_month, start_of_week, weekday_index};

/// Build the month grid around `reference_date`.
///
/// The sequence covers the trailing days of the previous month needed to fill
/// the first display week, every day of the reference month, and the leading
/// days of the next month completing the final week. The result is always a
/// whole number of Sunday-to-Saturday weeks of strictly ascending dates.
pub fn days_in_month(
    reference_date: NaiveDate,
    classes: &[ClassEvent],
) -> Result<Vec<DaySchedule>, MalformedRecurrenceRule> {
    let first_day = first_of_month(reference_date);
    let last_day = last_of_month(reference_date);

    let days_from_prev_month = weekday_index(first_day) as u64;
    let days_from_next_month = (6 - weekday_index(last_day)) as u64;

    let grid_start = first_day - Days::new(days_from_prev_month);
    let total_days = days_from_prev_month + last_day.day() as u64 + days_from_next_month;

    build_cells(grid_start, total_days as usize, classes)
}

/// Build the 7-cell Sunday-to-Saturday week containing `reference_date`.
pub fn days_in_week(
    reference_date: NaiveDate,
    classes: &[ClassEvent],
) -> Result<Vec<DaySchedule>, MalformedRecurrenceRule> {
    build_cells(start_of_week(reference_date), 7, classes)
}

fn build_cells(
    start: NaiveDate,
    count: usize,
    classes: &[ClassEvent],
) -> Result<Vec<DaySchedule>, MalformedRecurrenceRule> {
    let mut cells = Vec::with_capacity(count);

    for offset in 0..count {
        let date = start + Days::new(offset as u64);
        cells.push(DaySchedule {
            date,
            classes: classes_on_date(classes, date)?,
        });
    }

    Ok(cells)
}

/// Filter `classes` to those recurring on `date`, preserving input order
fn classes_on_date(
    classes: &[ClassEvent],
    date: NaiveDate,
) -> Result<Vec<ClassEvent>, MalformedRecurrenceRule> {
    let mut matching = Vec::new();
    for class in classes {
        if class_occurs_on(class, date)? {
            matching.push(class.clone());
        }
    }
    Ok(matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn class(id: &str, title: &str, schedule: &str) -> ClassEvent {
        ClassEvent::new(id, title, schedule).unwrap()
    }

    #[test]
    fn test_february_2024_layout() {
        // Feb 2024: leap year, 29 days, starts Thursday -> 3 trailing January
        // cells, 2 leading March cells, 35 cells total
        let cells = days_in_month(date(2024, 2, 15), &[]).unwrap();

        assert_eq!(cells.len(), 35);
        assert_eq!(cells[0].date, date(2024, 1, 28));
        assert_eq!(cells[2].date, date(2024, 1, 30));
        assert_eq!(cells[3].date, date(2024, 2, 1));
        assert_eq!(cells[31].date, date(2024, 2, 29));
        assert_eq!(cells[34].date, date(2024, 3, 2));
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_cells() {
        // September 2024 starts on a Sunday and ends on a Monday
        let cells = days_in_month(date(2024, 9, 10), &[]).unwrap();

        assert_eq!(cells[0].date, date(2024, 9, 1));
        assert_eq!(cells.len(), 35);
        assert_eq!(cells.last().unwrap().date, date(2024, 10, 5));
    }

    #[test]
    fn test_month_cells_form_whole_ascending_weeks() {
        let cells = days_in_month(date(2025, 6, 1), &[]).unwrap();

        assert_eq!(cells.len() % 7, 0);
        assert_eq!(weekday_index(cells[0].date), 0);
        for pair in cells.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    #[test]
    fn test_week_window_spans_sunday_to_saturday() {
        let cells = days_in_week(date(2024, 1, 10), &[]).unwrap();

        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0].date, date(2024, 1, 7));
        assert_eq!(cells[6].date, date(2024, 1, 13));
    }

    #[test]
    fn test_week_cells_carry_matching_classes() {
        // {M, W, F} across the week starting Sunday 2024-01-07
        let classes = vec![class("1", "Yoga", "{M, W, F}")];
        let cells = days_in_week(date(2024, 1, 7), &classes).unwrap();

        let occupied: Vec<NaiveDate> = cells
            .iter()
            .filter(|c| !c.classes.is_empty())
            .map(|c| c.date)
            .collect();
        assert_eq!(
            occupied,
            vec![date(2024, 1, 8), date(2024, 1, 10), date(2024, 1, 12)]
        );
    }

    #[test]
    fn test_cell_classes_preserve_input_order() {
        let classes = vec![
            class("2", "Spin", "{M}"),
            class("1", "Yoga", "{M, W}"),
            class("3", "Boxing", "{M}"),
        ];
        let cells = days_in_week(date(2024, 1, 7), &classes).unwrap();

        let monday = &cells[1];
        let ids: Vec<&str> = monday.classes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_malformed_rule_propagates() {
        let classes = vec![class("1", "Yoga", "{Xx}")];
        assert!(days_in_month(date(2024, 2, 15), &classes).is_err());
        assert!(days_in_week(date(2024, 2, 15), &classes).is_err());
    }

    #[test]
    fn test_builders_do_not_mutate_input() {
        let classes = vec![class("1", "Yoga", "{M, W, F}")];
        let before = classes.clone();

        let first = days_in_month(date(2024, 2, 15), &classes).unwrap();
        let second = days_in_month(date(2024, 2, 15), &classes).unwrap();

        assert_eq!(classes, before);
        assert_eq!(first, second);
    }
}
