mod app;
mod booking_dialog;
pub mod theme;
mod views;

pub use app::SchedulerApp;
