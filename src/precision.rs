use crate::calendar::clamp;
use crate::consts::{
    MAX_FRACTION_DIGITS, MAX_TIMESTAMP_DIGITS, NANOS_PER_SECOND, SECONDS_TIMESTAMP_DIGITS,
};
use crate::prelude::*;
use crate::Time;

impl<Tz: TimeZone> Time<Tz> {
    /// Whole seconds when `digits` is 0, otherwise the first `digits`
    /// fractional digits of the second (clamped to `1..=9`), truncated.
    ///
    /// `second_with_precision(3)` of `12:00:29.650` is `650`.
    pub fn second_with_precision(&self, digits: i32) -> u32 {
        if digits == 0 {
            return self.second();
        }
        let digits = clamp(digits, 1, MAX_FRACTION_DIGITS);
        self.nanosecond() / 10u32.pow((MAX_FRACTION_DIGITS - digits).unsigned_abs())
    }

    /// Unix timestamp in whole seconds.
    pub fn unix(&self) -> i64 {
        self.as_datetime().timestamp()
    }

    /// Unix timestamp with `digits` extra fractional digits.
    ///
    /// 0 gives seconds, 3 milliseconds, 6 microseconds and 9 nanoseconds.
    /// The total digit count is clamped to `1..=19` and the value is truncated
    /// toward zero.
    pub fn unix_with_precision(&self, digits: i32) -> i64 {
        if digits == 0 {
            return self.unix();
        }
        let total = clamp(
            digits.saturating_add(SECONDS_TIMESTAMP_DIGITS),
            1,
            MAX_TIMESTAMP_DIGITS,
        );
        let divisor = 10i128.pow((MAX_TIMESTAMP_DIGITS - total).unsigned_abs());
        let stamp = self.unix_nanos() / divisor;
        i64::try_from(stamp).unwrap_or(if stamp < 0 { i64::MIN } else { i64::MAX })
    }

    /// Nanoseconds since the epoch, widened so it never overflows.
    pub(crate) fn unix_nanos(&self) -> i128 {
        let datetime = self.as_datetime();
        i128::from(datetime.timestamp()) * i128::from(NANOS_PER_SECOND)
            + i128::from(datetime.timestamp_subsec_nanos())
    }
}
