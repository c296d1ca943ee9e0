// View window navigation
// Month mode moves by one calendar month, week mode by exactly 7 days.

use chrono::Days;

use crate::models::schedule::{Direction, ViewMode, ViewWindow};
use crate::utils::date::add_months_overflowing;

/// Shift `window` one step in `direction`.
///
/// Month steps preserve the day-of-month with overflow rolling into the next
/// month (see `utils::date::add_months_overflowing`); week steps are a plain
/// 7-day shift. Any reference date, however far past or future, is valid.
pub fn advance(window: ViewWindow, direction: Direction) -> ViewWindow {
    let reference_date = match (window.mode, direction) {
        (ViewMode::Month, Direction::Forward) => add_months_overflowing(window.reference_date, 1),
        (ViewMode::Month, Direction::Backward) => add_months_overflowing(window.reference_date, -1),
        (ViewMode::Week, Direction::Forward) => window.reference_date + Days::new(7),
        (ViewMode::Week, Direction::Backward) => window.reference_date - Days::new(7),
    };

    ViewWindow {
        reference_date,
        ..window
    }
}
