// Calendar view rendering

mod calendar_grid;
mod palette;

pub use calendar_grid::CalendarGrid;
