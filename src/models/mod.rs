// Module exports for models

pub mod class;
pub mod schedule;
pub mod settings;
pub mod user;
