/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u32 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u32 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Last hour of a day
pub const END_OF_DAY_HOUR: u32 = 23;
/// Last minute of an hour
pub const END_OF_DAY_MINUTE: u32 = 59;
/// Last second of a minute
pub const END_OF_DAY_SECOND: u32 = 59;
/// Last representable nanosecond of a second
pub const END_OF_DAY_NANOSECOND: u32 = 999_999_999;

/// Nanoseconds in one second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Digits of a nanosecond fraction
pub const MAX_FRACTION_DIGITS: i32 = 9;
/// Digits of a nanosecond-scale unix timestamp
pub const MAX_TIMESTAMP_DIGITS: i32 = 19;
/// Digits of a second-scale unix timestamp
pub const SECONDS_TIMESTAMP_DIGITS: i32 = 10;

/// Largest value `Clock::unix` still reads as whole seconds (10 digits)
pub const MAX_SECONDS_TIMESTAMP: i64 = 9_999_999_999;

/// Unix timestamp of 0001-01-01 00:00:00 UTC, the zero time
pub const ZERO_TIME_UNIX: i64 = -62_135_596_800;

/// Date and time layout, also used for JSON
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Date-only layout
pub const DATE_FORMAT: &str = "%Y-%m-%d";
