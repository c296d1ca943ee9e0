// Schedule module
// Derived calendar cells and the view window driving grid construction

use chrono::NaiveDate;

use crate::models::class::ClassEvent;

/// One displayed day plus the classes occurring on it.
///
/// Produced fresh on every grid build; never cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// Classes recurring on this date, in data-source order
    pub classes: Vec<ClassEvent>,
}

/// Calendar display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Month => "Month",
            ViewMode::Week => "Week",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Month => ViewMode::Week,
            ViewMode::Week => ViewMode::Month,
        }
    }

    /// Parse a persisted view name, falling back to Month
    pub fn parse(name: &str) -> Self {
        match name {
            "Week" => ViewMode::Week,
            _ => ViewMode::Month,
        }
    }
}

/// Navigation direction for the calendar chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The (reference date, mode) pair determining which cells are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub reference_date: NaiveDate,
    pub mode: ViewMode,
}

impl ViewWindow {
    pub fn new(reference_date: NaiveDate, mode: ViewMode) -> Self {
        Self {
            reference_date,
            mode,
        }
    }

    /// Switch between month and week display without moving the reference date
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }
}
