//! Week alignment and week-row segmentation.
//!
//! Weekdays are compared by their Sunday-based position (Sunday = 0 ..
//! Saturday = 6); the week start shifts that position so the first column of
//! a row has offset 0.

use crate::consts::{DAYS_PER_WEEK, MAX_WEEK_ROWS, MIN_WEEK_ROWS};
use crate::{WeekStart, YearMonth};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One cell of a week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDay {
    /// Calendar date shown in the cell.
    pub date:             NaiveDate,
    /// `false` for leading/trailing cells that belong to an adjacent month.
    pub in_current_month: bool,
}

/// Column of `date` in a row that starts on `week_start` (0..=6).
pub fn weekday_offset(date: NaiveDate, week_start: WeekStart) -> u32 {
    (DAYS_PER_WEEK + date.weekday().num_days_from_sunday()
        - week_start.weekday().num_days_from_sunday())
        % DAYS_PER_WEEK
}

/// `date` itself if it falls on `week_start`, otherwise the most recent
/// earlier date that does.
pub fn previous_or_same_week_start(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date - Days::new(u64::from(weekday_offset(date, week_start)))
}

/// 1-based week row of `date` within its own month.
///
/// Row 1 holds day 1 preceded by as many blank cells as day 1's column.
pub fn week_index_within_month(date: NaiveDate, week_start: WeekStart) -> u32 {
    let first_of_month = date - Days::new(u64::from(date.day0()));
    let leading = weekday_offset(first_of_month, week_start);
    (date.day() - 1 + leading) / DAYS_PER_WEEK + 1
}

/// Week rows needed to draw `year_month`; always within 4..=6.
pub fn number_of_week_rows(year_month: YearMonth, week_start: WeekStart) -> u32 {
    let rows = week_index_within_month(year_month.last_day(), week_start)
        - week_index_within_month(year_month.first_day(), week_start)
        + 1;
    debug_assert!((MIN_WEEK_ROWS..=MAX_WEEK_ROWS).contains(&rows));
    rows
}

/// The seven cells of 0-based row `week_number`.
///
/// Rows past the end of the month are still seven cells long; every cell is
/// then flagged as outside the month. Rows beyond `MAX_WEEK_ROWS` all repeat
/// the row at `MAX_WEEK_ROWS`, the first one that lies wholly after the month.
pub fn day_grid_for_week(
    year_month: YearMonth,
    week_start: WeekStart,
    week_number: u32,
) -> [GridDay; 7] {
    let week_number = week_number.min(MAX_WEEK_ROWS);
    let anchor =
        year_month.first_day() + Days::new(u64::from(week_number) * u64::from(DAYS_PER_WEEK));
    let row_start = previous_or_same_week_start(anchor, week_start);

    let mut offset = 0;
    std::array::from_fn(|_| {
        let date = row_start + Days::new(offset);
        offset += 1;
        GridDay {
            date,
            in_current_month: year_month.contains(date),
        }
    })
}

/// Weekdays in column order for rows starting on `week_start`.
pub fn weekday_order(week_start: WeekStart) -> [Weekday; 7] {
    let mut day = week_start.weekday();
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}
