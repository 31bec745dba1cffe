use crate::calendar::{Ymd, civil};
use crate::consts::{DATE_FORMAT, DATE_TIME_FORMAT, MAX_SECONDS_TIMESTAMP, NANOS_PER_SECOND};
use crate::prelude::*;
use crate::{EpochUnit, ParseError, Time, WallClock};
use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc,
};
use tracing::trace;

/// Error type for constructing instants from raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Timestamp cannot be represented.
    #[error("Timestamp {value} ({unit}) is out of range")]
    OutOfRange { value: i64, unit: EpochUnit },

    /// Error parsing a date-time string.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// The timezone every constructed [`Time`] is placed in.
///
/// There is no process-wide default zone: callers pick one here and every
/// constructor goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock<Tz: TimeZone = Utc> {
    tz: Tz,
}

impl Clock<Utc> {
    pub const fn utc() -> Self {
        Self { tz: Utc }
    }
}

impl Clock<Local> {
    pub const fn local() -> Self {
        Self { tz: Local }
    }
}

impl<Tz: TimeZone> Clock<Tz> {
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the configured timezone
    pub const fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Current instant in the configured timezone.
    pub fn now(&self) -> Time<Tz> {
        Time::new(Utc::now().with_timezone(&self.tz))
    }

    /// Midnight of the given date. See [`Clock::date_time`] for overflow rules.
    pub fn date(&self, year: i32, month: i32, day: i32) -> Time<Tz> {
        self.date_time(year, month, day, WallClock::MIDNIGHT)
    }

    /// Builds an instant from raw components.
    ///
    /// Nothing is rejected: month 13 is January of the next year, day 32 of
    /// January is February 1st, day 0 is the last day of the previous month,
    /// and an hour of 24 is midnight of the next day.
    pub fn date_time(&self, year: i32, month: i32, day: i32, clock: WallClock) -> Time<Tz> {
        let date = Ymd::new(i64::from(year), i64::from(month), i64::from(day));
        Time::new(localize(&self.tz, &civil(date, clock)))
    }

    /// Re-zones an existing chrono value into the configured timezone.
    pub fn wrap<Other: TimeZone>(&self, datetime: &DateTime<Other>) -> Time<Tz> {
        Time::new(datetime.with_timezone(&self.tz))
    }

    /// Builds an instant from a unix timestamp of a known scale.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the instant cannot be represented.
    pub fn from_epoch(&self, value: i64, unit: EpochUnit) -> Result<Time<Tz>, Error> {
        let per_second = unit.per_second();
        let nanos = value.rem_euclid(per_second) * (NANOS_PER_SECOND / per_second);
        let subsec = u32::try_from(nanos).map_err(|_| Error::OutOfRange { value, unit })?;
        let utc = DateTime::from_timestamp(value.div_euclid(per_second), subsec)
            .ok_or(Error::OutOfRange { value, unit })?;
        Ok(Time::new(utc.with_timezone(&self.tz)))
    }

    /// Builds an instant from a timestamp whose scale is guessed from its size.
    ///
    /// Values up to ten digits (`<= 9_999_999_999`) are whole seconds, anything
    /// larger is nanoseconds. `10_000_000_000` therefore means ten seconds
    /// after the epoch, not year 2286; use [`Clock::from_epoch`] when the scale
    /// is known.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if the instant cannot be represented.
    pub fn unix(&self, value: i64) -> Result<Time<Tz>, Error> {
        let unit = if value <= MAX_SECONDS_TIMESTAMP {
            EpochUnit::Seconds
        } else {
            EpochUnit::Nanos
        };
        trace!(value, %unit, "guessed timestamp scale");
        self.from_epoch(value, unit)
    }

    /// Parses `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` or RFC 3339.
    ///
    /// The first two layouts are read as wall-clock time in the configured
    /// timezone. RFC 3339 input keeps its instant and is converted into it.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input and
    /// `ParseError::InvalidFormat` when no layout matches.
    pub fn parse(&self, s: &str) -> Result<Time<Tz>, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT) {
            return Ok(Time::new(localize(&self.tz, &naive)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Time::new(localize(&self.tz, &date.and_time(NaiveTime::MIN))));
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|datetime| self.wrap(&datetime))
            .map_err(|err| ParseError::InvalidFormat(format!("{trimmed}: {err}")))
    }
}

impl Default for Clock<Utc> {
    fn default() -> Self {
        Self::utc()
    }
}

/// Places a wall-clock reading in `tz`.
///
/// Ambiguous readings (clocks turned back) resolve to the earlier instant.
/// Readings inside a gap (clocks turned forward) are shifted by the offset in
/// force before the gap, landing the same distance past it.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(datetime) | LocalResult::Ambiguous(datetime, _) => datetime,
        LocalResult::None => {
            let before = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(*naive);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
                .unwrap_or(*naive);
            trace!(%naive, %utc, "local time falls in a gap");
            tz.from_utc_datetime(&utc)
        },
    }
}
