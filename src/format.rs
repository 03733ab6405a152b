use crate::consts::{
    ENGLISH_MONTH_NAMES, ENGLISH_WEEKDAYS, KOREAN_MONTH_SUFFIX, KOREAN_WEEKDAYS,
    KOREAN_YEAR_SUFFIX,
};
use crate::week::weekday_order;
use crate::{Language, WeekStart, YearMonth};
use chrono::Weekday;

/// Header label for a displayed month.
///
/// English uses the full month name and a 4-digit year (`"February 2024"`);
/// Korean uses numbers only (`"2024년 12월"`). Proleptic negative years keep
/// their sign inside the 4-character padding, so the English label for May of
/// year -5 is `"May -005"`.
pub fn format_month_label(year_month: YearMonth, language: Language) -> String {
    match language {
        Language::En => format!(
            "{} {:04}",
            ENGLISH_MONTH_NAMES[year_month.month_typed().index0()],
            year_month.year()
        ),
        Language::Ko => format!(
            "{}{KOREAN_YEAR_SUFFIX} {}{KOREAN_MONTH_SUFFIX}",
            year_month.year(),
            year_month.month()
        ),
    }
}

/// Short weekday name, e.g. `"Thu"` / `"목"`.
pub fn weekday_label(weekday: Weekday, language: Language) -> &'static str {
    let index = weekday.num_days_from_sunday() as usize;
    match language {
        Language::En => ENGLISH_WEEKDAYS[index],
        Language::Ko => KOREAN_WEEKDAYS[index],
    }
}

/// Week header row, in the same column order as the grid rows.
pub fn weekday_labels(language: Language, week_start: WeekStart) -> [&'static str; 7] {
    weekday_order(week_start).map(|weekday| weekday_label(weekday, language))
}
