use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, END_OF_DAY_HOUR,
    END_OF_DAY_MINUTE, END_OF_DAY_NANOSECOND, END_OF_DAY_SECOND, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `year` (365 or 366).
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Number of days in `month` of `year`. The month must already be in `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Bounds `value` to `[min, max]` inclusive.
///
/// Unlike [`Ord::clamp`] this never panics; `min` wins when the bounds are inverted.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Saturates a widened year back into `i32`.
pub(crate) fn year_i32(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

/// An unnormalized (year, month, day) triple.
///
/// Month may be outside `1..=12` and day may exceed the month length
/// until [`Ymd::normalized`] is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ymd {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

impl Ymd {
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Carries an out-of-range month into the year. Day is left alone.
    pub const fn carry_month(self) -> Self {
        let months = MAX_MONTH as i64;
        let mut year = self.year + (self.month - 1) / months;
        let mut month = (self.month - 1) % months + 1;
        if month <= 0 {
            month += months;
            year -= 1;
        }
        Self {
            year,
            month,
            day: self.day,
        }
    }

    /// Carries the month, then saturates the day at the end of the resulting month.
    ///
    /// The day is never rolled into the following month. Days below 1 pass
    /// through untouched and are carried backwards by [`civil`].
    pub fn normalized(self) -> Self {
        let carried = self.carry_month();
        let max_day = i64::from(days_in_month(year_i32(carried.year), carried.month_u32()));
        Self {
            day: carried.day.min(max_day),
            ..carried
        }
    }

    fn month_u32(self) -> u32 {
        u32::try_from(self.month).unwrap_or(JANUARY)
    }
}

/// Time of day fields used when building an instant from components.
///
/// Fields are not range checked; overflow rolls into the following day the
/// same way an out-of-range day rolls into the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallClock {
    pub hour:       u32,
    pub minute:     u32,
    pub second:     u32,
    pub nanosecond: u32,
}

impl WallClock {
    /// 00:00:00.000000000
    pub const MIDNIGHT: Self = Self::new(0, 0, 0, 0);

    /// 23:59:59.999999999
    pub const END_OF_DAY: Self = Self::new(
        END_OF_DAY_HOUR,
        END_OF_DAY_MINUTE,
        END_OF_DAY_SECOND,
        END_OF_DAY_NANOSECOND,
    );

    pub const fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    fn since_midnight(self) -> TimeDelta {
        let seconds =
            i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second);
        TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(i64::from(self.nanosecond))
    }
}

/// Builds a naive date-time from components, carrying every overflow.
///
/// Month overflow carries into the year, day overflow in either direction
/// rolls across months, and the wall clock rolls across days. Results beyond
/// the representable range saturate at [`NaiveDateTime::MIN`] / [`NaiveDateTime::MAX`].
pub(crate) fn civil(date: Ymd, clock: WallClock) -> NaiveDateTime {
    let saturated = |forward: bool| {
        if forward {
            NaiveDateTime::MAX
        } else {
            NaiveDateTime::MIN
        }
    };

    let carried = date.carry_month();
    let first = i32::try_from(carried.year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, carried.month_u32(), MIN_DAY));
    let Some(first) = first else {
        return saturated(carried.year > 0);
    };

    TimeDelta::try_days(carried.day - 1)
        .and_then(|days| days.checked_add(&clock.since_midnight()))
        .and_then(|offset| first.and_time(NaiveTime::MIN).checked_add_signed(offset))
        .unwrap_or_else(|| saturated(carried.day > 0))
}
