// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use class_scheduler::models::class::ClassEvent;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Sunday, Jan 7 2024 (start of the canonical test week)
    pub fn sunday_jan_7_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    /// Returns Jan 31 2024 (month-end overflow case)
    pub fn jan_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// Returns Feb 15 2024 (mid leap-year February)
    pub fn mid_feb_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }
}

/// Sample classes for testing
pub mod classes {
    use super::*;

    /// Monday/Wednesday/Friday morning yoga
    pub fn yoga() -> ClassEvent {
        ClassEvent::builder()
            .id("1")
            .title("Morning Yoga")
            .instructor("Ana Silva")
            .start_time("9:00 AM")
            .end_time("10:00 AM")
            .capacity(20)
            .enrolled(12)
            .price(10.0)
            .schedule("{M, W, F}")
            .build()
            .unwrap()
    }

    /// Tuesday/Thursday evening spin
    pub fn spin() -> ClassEvent {
        ClassEvent::builder()
            .id("2")
            .title("Evening Spin")
            .instructor("Ben Okafor")
            .start_time("6:00 PM")
            .end_time("7:00 PM")
            .capacity(15)
            .enrolled(15)
            .price(12.5)
            .schedule("{Tu, Th}")
            .build()
            .unwrap()
    }

    /// Weekend-only boxing
    pub fn boxing() -> ClassEvent {
        ClassEvent::builder()
            .id("3")
            .title("Boxing Basics")
            .instructor("Cara Lee")
            .start_time("11:00 AM")
            .end_time("12:30 PM")
            .capacity(10)
            .enrolled(4)
            .price(18.0)
            .schedule("{Sa, Su}")
            .build()
            .unwrap()
    }

    /// Class with a rule no decoder should accept
    pub fn malformed() -> ClassEvent {
        ClassEvent::builder()
            .id("99")
            .title("Ghost Class")
            .schedule("{Xx}")
            .build()
            .unwrap()
    }

    pub fn all() -> Vec<ClassEvent> {
        vec![yoga(), spin(), boxing()]
    }
}
