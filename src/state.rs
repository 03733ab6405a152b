//! The host-owned "displayed month / selected day" cell.

use crate::{YearMonth, today};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Navigation and selection state for one calendar on screen.
///
/// Every transition replaces the held values with ones computed by the pure
/// navigation functions; the renderer redraws from the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarState {
    displayed: YearMonth,
    selected:  NaiveDate,
}

impl CalendarState {
    pub const fn new(displayed: YearMonth, selected: NaiveDate) -> Self {
        Self {
            displayed,
            selected,
        }
    }

    /// Shows the current month with today selected.
    pub fn today() -> Self {
        let today = today();
        Self::new(YearMonth::from_date(today), today)
    }

    pub const fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == date
    }

    /// Moves the displayed month back by one.
    pub fn show_previous(&mut self) -> YearMonth {
        self.show(self.displayed.previous())
    }

    /// Moves the displayed month forward by one.
    pub fn show_next(&mut self) -> YearMonth {
        self.show(self.displayed.next())
    }

    /// Displays `year_month`; the selection is left alone.
    pub fn show(&mut self, year_month: YearMonth) -> YearMonth {
        trace!(from = %self.displayed, to = %year_month, "show month");
        self.displayed = year_month;
        self.displayed
    }

    /// Selects `date` without changing the displayed month, even if `date`
    /// lies in another month.
    pub fn select(&mut self, date: NaiveDate) {
        trace!(%date, displayed = %self.displayed, "select day");
        self.selected = date;
    }
}
