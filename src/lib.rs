//! Calendar layout math for month grids and day strips.
//!
//! Everything here is a pure function of its inputs: a [`YearMonth`] is an
//! immutable value, navigation returns a new value, and the grid/strip
//! builders recompute their rows on every call.

mod config;
mod consts;
mod event;
mod format;
mod layout;
mod prelude;
mod state;
#[cfg(test)]
mod test_utils;
mod types;
mod week;

pub use chrono::{Datelike, Days, NaiveDate, Weekday};
pub use config::CalendarConfig;
pub use consts::*;
pub use event::{CalendarEvent, ImageShape, find_event};
pub use format::{format_month_label, weekday_label, weekday_labels};
pub use layout::{DayCell, DayStrip, MonthGrid, StripDay, Week};
pub use state::CalendarState;
pub use types::{Language, Month, WeekStart, is_leap_year};
pub use week::{
    GridDay, day_grid_for_week, number_of_week_rows, previous_or_same_week_start,
    week_index_within_month, weekday_offset, weekday_order,
};

use crate::prelude::*;
use chrono::Local;
use std::str::FromStr;

/// Error type for constructing and parsing calendar values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Year outside the supported span.
    #[error("Year out of range: {0} (must be {min}..={max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),

    /// Text that is not a `YYYY-MM` year-month.
    #[error("Invalid year-month format: {0}")]
    InvalidFormat(String),
}

/// A calendar month identified by year and month, independent of any day.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year", "month.get()")]
pub struct YearMonth {
    year:  i32,
    month: Month,
}

/// Today's date in the host's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Builds a date the caller already knows is valid.
///
/// Every call site derives its arguments from a `YearMonth`, whose year span
/// sits well inside chrono's representable range.
#[allow(clippy::expect_used)]
pub(crate) fn civil(year: i32, month: u8, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, u32::from(month), day)
        .expect("YearMonth keeps dates inside chrono's range")
}

impl YearMonth {
    /// January of `MIN_YEAR`.
    pub const MIN: Self = Self {
        year:  MIN_YEAR,
        month: Month::JANUARY,
    };

    /// December of `MAX_YEAR`.
    pub const MAX: Self = Self {
        year:  MAX_YEAR,
        month: Month::DECEMBER,
    };

    /// Creates a new year-month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is outside `1..=12`,
    /// or `CalendarError::YearOutOfRange` if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    ///
    /// Dates beyond the supported span clamp to [`YearMonth::MIN`] or
    /// [`YearMonth::MAX`].
    pub fn from_date(date: NaiveDate) -> Self {
        let index = i64::from(date.year()) * i64::from(MONTHS_PER_YEAR) + i64::from(date.month0());
        Self::saturating_from_index(index)
    }

    /// The month containing [`today`].
    pub fn current() -> Self {
        Self::from_date(today())
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Month type
    #[inline]
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    // --- navigation ---

    /// Flattened month count since January of year 0.
    const fn index(self) -> i64 {
        self.year as i64 * MONTHS_PER_YEAR as i64 + (self.month.get() as i64 - 1)
    }

    fn from_index(index: i64) -> Option<Self> {
        let months = i64::from(MONTHS_PER_YEAR);
        let year = i32::try_from(index.div_euclid(months)).ok()?;
        let month = u8::try_from(index.rem_euclid(months) + 1).ok()?;
        Self::new(year, month).ok()
    }

    fn saturating_from_index(index: i64) -> Self {
        Self::from_index(index).unwrap_or(if index < Self::MIN.index() {
            Self::MIN
        } else {
            Self::MAX
        })
    }

    /// Moves by `delta` whole months; negative deltas move backwards and roll
    /// the year back (January 2024 minus one month is December 2023).
    ///
    /// Results beyond the supported span saturate at [`YearMonth::MIN`] or
    /// [`YearMonth::MAX`].
    pub fn add_months(self, delta: i32) -> Self {
        Self::saturating_from_index(self.index() + i64::from(delta))
    }

    /// Like [`add_months`](Self::add_months), but returns `None` instead of
    /// saturating.
    pub fn checked_add_months(self, delta: i32) -> Option<Self> {
        Self::from_index(self.index() + i64::from(delta))
    }

    /// Equivalent to `add_months(-delta)`.
    pub fn subtract_months(self, delta: i32) -> Self {
        Self::saturating_from_index(self.index() - i64::from(delta))
    }

    /// The following month
    pub fn next(self) -> Self {
        self.add_months(1)
    }

    /// The preceding month
    pub fn previous(self) -> Self {
        self.subtract_months(1)
    }

    /// Signed number of months from `self` to `other`.
    pub const fn months_until(self, other: Self) -> i64 {
        other.index() - self.index()
    }

    // --- boundaries ---

    /// Day 1 of this month
    pub fn first_day(self) -> NaiveDate {
        civil(self.year, self.month.get(), MIN_DAY)
    }

    /// Last day of this month: the day before the first of the next month.
    pub fn last_day(self) -> NaiveDate {
        let (year, month) = if self.month.get() == DECEMBER {
            (self.year + 1, JANUARY)
        } else {
            (self.year, self.month.get() + 1)
        };
        civil(year, month, MIN_DAY) - Days::new(1)
    }

    /// Number of days in this month, leap Februaries included.
    pub fn days_in_month(self) -> u32 {
        self.last_day().day()
    }

    /// Day `day` of this month, if it exists.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.get()), day)
    }

    /// Every day of this month in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first_day();
        (0..u64::from(self.days_in_month())).map(move |offset| first + Days::new(offset))
    }

    /// Whether `date` falls inside this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == u32::from(self.month.get())
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // rsplit so a leading minus on the year is kept with the year
        let (year_part, month_part) = trimmed
            .rsplit_once(YEAR_MONTH_SEPARATOR)
            .ok_or_else(|| CalendarError::InvalidFormat(trimmed.to_owned()))?;

        if month_part.is_empty() || month_part.len() > 2 {
            return Err(CalendarError::InvalidFormat(trimmed.to_owned()));
        }

        let year = year_part
            .parse::<i32>()
            .map_err(|_| CalendarError::InvalidFormat(trimmed.to_owned()))?;
        let month = month_part
            .parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month)
    }
}

impl TryFrom<(i32, u8)> for YearMonth {
    type Error = CalendarError;

    fn try_from(value: (i32, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ym};

    #[test]
    fn test_new_validates_month() {
        assert!(matches!(
            YearMonth::new(2024, 0),
            Err(CalendarError::InvalidMonth(0))
        ));
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(YearMonth::new(2024, 12).is_ok());
    }

    #[test]
    fn test_new_validates_year() {
        assert!(YearMonth::new(MIN_YEAR, 1).is_ok());
        assert!(YearMonth::new(MAX_YEAR, 12).is_ok());
        assert!(matches!(
            YearMonth::new(MAX_YEAR + 1, 1),
            Err(CalendarError::YearOutOfRange(_))
        ));
        assert!(matches!(
            YearMonth::new(MIN_YEAR - 1, 1),
            Err(CalendarError::YearOutOfRange(_))
        ));
        assert!(YearMonth::new(0, 1).is_ok());
        assert!(YearMonth::new(-44, 3).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalendarError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            CalendarError::InvalidFormat("x".into()).to_string(),
            "Invalid year-month format: x"
        );
        assert!(
            CalendarError::YearOutOfRange(300_000)
                .to_string()
                .contains("300000")
        );
    }

    #[test]
    fn test_add_months_cases() {
        struct TestCase {
            start:       (i32, u8),
            delta:       i32,
            expected:    (i32, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2024, 1),
                delta:       -1,
                expected:    (2023, 12),
                description: "negative delta rolls the year back",
            },
            TestCase {
                start:       (2023, 12),
                delta:       1,
                expected:    (2024, 1),
                description: "December rolls into January",
            },
            TestCase {
                start:       (2024, 5),
                delta:       0,
                expected:    (2024, 5),
                description: "zero delta",
            },
            TestCase {
                start:       (2024, 3),
                delta:       -27,
                expected:    (2021, 12),
                description: "several years back",
            },
            TestCase {
                start:       (2024, 11),
                delta:       26,
                expected:    (2027, 1),
                description: "several years forward",
            },
            TestCase {
                start:       (0, 1),
                delta:       -1,
                expected:    (-1, 12),
                description: "crossing year zero",
            },
            TestCase {
                start:       (-1, 12),
                delta:       -12,
                expected:    (-2, 12),
                description: "negative years",
            },
        ];

        for case in &cases {
            let start = ym(case.start.0, case.start.1);
            let result = start.add_months(case.delta);
            assert_eq!(
                result,
                ym(case.expected.0, case.expected.1),
                "{}: {start} + {}",
                case.description,
                case.delta
            );
        }
    }

    #[test]
    fn test_subtract_months() {
        assert_eq!(ym(2024, 1).subtract_months(1), ym(2023, 12));
        assert_eq!(ym(2024, 1).subtract_months(-1), ym(2024, 2));
        assert_eq!(ym(2024, 6).subtract_months(i32::MIN), YearMonth::MAX);
        assert_eq!(ym(2024, 6).previous(), ym(2024, 5));
        assert_eq!(ym(2024, 12).next(), ym(2025, 1));
    }

    #[test]
    fn test_add_months_saturates() {
        assert_eq!(YearMonth::MAX.add_months(1), YearMonth::MAX);
        assert_eq!(YearMonth::MIN.add_months(-1), YearMonth::MIN);
        assert_eq!(ym(2024, 1).add_months(i32::MAX), YearMonth::MAX);
        assert_eq!(ym(2024, 1).add_months(i32::MIN), YearMonth::MIN);
    }

    #[test]
    fn test_checked_add_months() {
        assert_eq!(ym(2024, 1).checked_add_months(-1), Some(ym(2023, 12)));
        assert_eq!(YearMonth::MAX.checked_add_months(1), None);
        assert_eq!(YearMonth::MIN.checked_add_months(-1), None);
    }

    #[test]
    fn test_months_until() {
        assert_eq!(ym(2023, 12).months_until(ym(2024, 2)), 2);
        assert_eq!(ym(2024, 2).months_until(ym(2023, 12)), -2);
        assert_eq!(ym(2024, 2).months_until(ym(2024, 2)), 0);
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        assert_eq!(ym(2023, 2).days_in_month(), 28);
        assert_eq!(ym(1900, 2).days_in_month(), 28);
        assert_eq!(ym(2000, 2).days_in_month(), 29);
    }

    #[test]
    fn test_days_in_month_matches_leap_rule() {
        for year in [1600, 1700, 1800, 1900, 1999, 2000, 2023, 2024, 2100, -400, -1] {
            let expected = if is_leap_year(year) { 29 } else { 28 };
            assert_eq!(ym(year, 2).days_in_month(), expected, "February {year}");
        }
    }

    #[test]
    fn test_days_in_month_all_months() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (index, days) in expected.iter().enumerate() {
            let month = u8::try_from(index + 1).unwrap();
            assert_eq!(ym(2023, month).days_in_month(), *days, "Month {month}");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(ym(2024, 2).first_day(), date(2024, 2, 1));
        assert_eq!(ym(2024, 2).last_day(), date(2024, 2, 29));
        assert_eq!(ym(2023, 12).last_day(), date(2023, 12, 31));
        assert_eq!(YearMonth::MAX.last_day().day(), 31);
        assert_eq!(YearMonth::MIN.first_day().year(), MIN_YEAR);
        assert_eq!(ym(2024, 4).day(30), Some(date(2024, 4, 30)));
        assert_eq!(ym(2024, 4).day(31), None);
        assert_eq!(ym(2024, 4).day(0), None);
    }

    #[test]
    fn test_days_iterator() {
        let days: Vec<_> = ym(2024, 2).days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date(2024, 2, 1)));
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));
        assert!(days.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
    }

    #[test]
    fn test_contains() {
        assert!(ym(2024, 2).contains(date(2024, 2, 29)));
        assert!(!ym(2024, 2).contains(date(2024, 3, 1)));
        assert!(!ym(2024, 2).contains(date(2023, 2, 1)));
    }

    #[test]
    fn test_from_date() {
        assert_eq!(YearMonth::from_date(date(2024, 2, 15)), ym(2024, 2));
        assert_eq!(YearMonth::from(date(1999, 12, 31)), ym(1999, 12));
        assert_eq!(YearMonth::from_date(NaiveDate::MAX), YearMonth::MAX);
        assert_eq!(YearMonth::from_date(NaiveDate::MIN), YearMonth::MIN);
    }

    #[test]
    fn test_current_contains_today() {
        assert!(YearMonth::current().contains(today()));
    }

    #[test]
    fn test_ordering() {
        assert!(ym(2023, 12) < ym(2024, 1));
        assert!(ym(2024, 1) < ym(2024, 2));
        assert!(ym(-1, 12) < ym(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2024, 2).to_string(), "2024-02");
        assert_eq!(ym(2024, 12).to_string(), "2024-12");
        assert_eq!(ym(987, 7).to_string(), "0987-07");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-02".parse::<YearMonth>().unwrap(), ym(2024, 2));
        assert_eq!(" 2024-2 ".parse::<YearMonth>().unwrap(), ym(2024, 2));
        assert_eq!("-5-03".parse::<YearMonth>().unwrap(), ym(-5, 3));
        assert_eq!(
            ym(-5, 3).to_string().parse::<YearMonth>().unwrap(),
            ym(-5, 3)
        );

        assert!(matches!(
            "2024".parse::<YearMonth>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-".parse::<YearMonth>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-123".parse::<YearMonth>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "20X4-01".parse::<YearMonth>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-13".parse::<YearMonth>(),
            Err(CalendarError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_try_from_tuple() {
        let value: YearMonth = (2024, 2).try_into().unwrap();
        assert_eq!(value, ym(2024, 2));
        assert!(YearMonth::try_from((2024, 0)).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let json = serde_json::to_string(&ym(2024, 2)).unwrap();
        assert_eq!(json, r#""2024-02""#);
        let parsed: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ym(2024, 2));

        let result: Result<YearMonth, _> = serde_json::from_str(r#""2024-13""#);
        assert!(result.is_err());
    }
}
