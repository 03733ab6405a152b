//! Render-ready views of one month.
//!
//! `MonthGrid` is the week-row layout; `DayStrip` is the horizontally
//! scrolling single row of every day in the month. Both borrow the host's
//! event list so cells can point at their background image without cloning.

use crate::consts::SCROLL_LEAD_IN;
use crate::event::find_event;
use crate::format::{format_month_label, weekday_label, weekday_labels};
use crate::week::{day_grid_for_week, number_of_week_rows};
use crate::{CalendarConfig, CalendarEvent, YearMonth};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell<'a> {
    /// Calendar date shown in the cell.
    pub date:             NaiveDate,
    /// Cells outside the month are drawn blank and never carry a selection
    /// or an event.
    pub in_current_month: bool,
    /// Whether this is the selected day.
    pub selected:         bool,
    /// Background image event for this day.
    pub event:            Option<&'a CalendarEvent>,
}

/// A week row of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week<'a> {
    /// 0-based row number
    pub number: u32,
    /// Cells in column order.
    pub days:   [DayCell<'a>; 7],
}

/// Week-row layout of one month with its header labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid<'a> {
    /// Month being drawn.
    pub year_month:     YearMonth,
    /// Month header, e.g. `"February 2024"`.
    pub label:          String,
    /// Weekday header row in column order.
    pub weekday_labels: [&'static str; 7],
    /// Between 4 and 6 rows.
    pub weeks:          Vec<Week<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Lays out `year_month`, marking `selected` and attaching the first
    /// matching event to each in-month cell.
    pub fn build(
        year_month: YearMonth,
        config: &CalendarConfig,
        selected: Option<NaiveDate>,
        events: &'a [CalendarEvent],
    ) -> Self {
        let rows = number_of_week_rows(year_month, config.week_start);
        let weeks = (0..rows)
            .map(|number| Week {
                number,
                days: day_grid_for_week(year_month, config.week_start, number).map(|cell| {
                    if cell.in_current_month {
                        DayCell {
                            date:             cell.date,
                            in_current_month: true,
                            selected:         selected == Some(cell.date),
                            event:            find_event(events, cell.date),
                        }
                    } else {
                        DayCell {
                            date:             cell.date,
                            in_current_month: false,
                            selected:         false,
                            event:            None,
                        }
                    }
                }),
            })
            .collect();

        debug!(
            %year_month,
            rows,
            week_start = %config.week_start,
            events = events.len(),
            "built month grid"
        );

        Self {
            year_month,
            label: format_month_label(year_month, config.language),
            weekday_labels: weekday_labels(config.language, config.week_start),
            weeks,
        }
    }

    /// Number of week rows
    pub fn rows(&self) -> usize {
        self.weeks.len()
    }

    /// The in-month cell for `date`.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .find(|cell| cell.in_current_month && cell.date == date)
    }
}

/// One day of the horizontal strip, labelled with its own weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StripDay<'a> {
    /// Calendar date of this entry.
    pub date:          NaiveDate,
    /// Short name of the date's own weekday.
    pub weekday_label: &'static str,
    /// Whether this is the selected day.
    pub selected:      bool,
    /// Background image event for this day.
    pub event:         Option<&'a CalendarEvent>,
}

/// Horizontal single-row layout of every day in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStrip<'a> {
    /// Month being drawn.
    pub year_month: YearMonth,
    /// Month header, e.g. `"2024년 12월"`.
    pub label:      String,
    /// One entry per day of the month, in order.
    pub days:       Vec<StripDay<'a>>,
}

impl<'a> DayStrip<'a> {
    /// Lays out every day of `year_month`, marking `selected` and attaching
    /// the first matching event to each day.
    pub fn build(
        year_month: YearMonth,
        config: &CalendarConfig,
        selected: Option<NaiveDate>,
        events: &'a [CalendarEvent],
    ) -> Self {
        let days: Vec<_> = year_month
            .days()
            .map(|date| StripDay {
                date,
                weekday_label: weekday_label(date.weekday(), config.language),
                selected: selected == Some(date),
                event: find_event(events, date),
            })
            .collect();

        debug!(%year_month, days = days.len(), events = events.len(), "built day strip");

        Self {
            year_month,
            label: format_month_label(year_month, config.language),
            days,
        }
    }

    /// Position of the selected day, for scrolling it into view.
    pub fn selected_index(&self) -> Option<usize> {
        self.days.iter().position(|day| day.selected)
    }

    /// First day to scroll to so the selected day shows with up to
    /// `SCROLL_LEAD_IN` days before it.
    pub fn scroll_position(&self) -> Option<usize> {
        self.selected_index()
            .map(|index| index.saturating_sub(SCROLL_LEAD_IN))
    }
}
