/// Earliest supported year (inclusive)
pub const MIN_YEAR: i32 = -262_000;

/// Latest supported year (inclusive)
pub const MAX_YEAR: i32 = 262_000;

/// Months in a year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Cells in a week row
pub const DAYS_PER_WEEK: u32 = 7;

/// Fewest week rows any month needs (28-day February aligned to the week start)
pub const MIN_WEEK_ROWS: u32 = 4;
/// Most week rows any month needs
pub const MAX_WEEK_ROWS: u32 = 6;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Separator between year and month in `YYYY-MM`
pub const YEAR_MONTH_SEPARATOR: char = '-';

/// English month names (index 0 is January)
pub const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday labels, Sunday first
pub const ENGLISH_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Korean weekday labels, Sunday first
pub const KOREAN_WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Days kept visible before the selected day when scrolling the strip
pub const SCROLL_LEAD_IN: usize = 3;

/// Corner radius of the default event image shape (dp)
pub const DEFAULT_CORNER_RADIUS: u16 = 8;

/// Korean year suffix
pub const KOREAN_YEAR_SUFFIX: char = '년';
/// Korean month suffix
pub const KOREAN_MONTH_SUFFIX: char = '월';
