use crate::{Language, WeekStart};
use serde::{Deserialize, Serialize};

/// Host-selected options for every calendar computation.
///
/// Missing fields fall back to the defaults, so `{"language": "ko"}` is a
/// complete document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub week_start: WeekStart,
    pub language:   Language,
}

impl CalendarConfig {
    pub const fn new(week_start: WeekStart, language: Language) -> Self {
        Self {
            week_start,
            language,
        }
    }

    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
