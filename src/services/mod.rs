// Service module exports

pub mod auth;
pub mod booking;
pub mod classes;
pub mod schedule;
pub mod settings;
