//! Shorthand constructors for tests.

use crate::{CalendarEvent, ImageShape, NaiveDate, YearMonth};

pub fn ym(year: i32, month: u8) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn event(year: i32, month: u32, day: u32, image_url: &str) -> CalendarEvent {
    CalendarEvent::new(date(year, month, day), image_url, ImageShape::Circle)
}
