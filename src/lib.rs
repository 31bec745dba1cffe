mod calendar;
mod clock;
mod consts;
mod diff;
mod navigate;
mod precision;
mod prelude;
mod types;
mod window;

pub use calendar::{WallClock, clamp, days_in_month, days_in_year, is_leap_year};
pub use clock::{Clock, Error};
pub use consts::*;
pub use types::{EpochUnit, Select, Shift, Unit};

use crate::calendar::{Ymd, civil};
use crate::clock::localize;
use crate::prelude::*;
use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Utc, Weekday};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use tracing::debug;

/// An immutable, timezone-aware instant with nanosecond resolution.
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Debug, Clone)]
pub struct Time<Tz: TimeZone = Utc> {
    inner: DateTime<Tz>,
}

impl<Tz: TimeZone> Copy for Time<Tz> where <Tz as TimeZone>::Offset: Copy {}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid time format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid unit: {_0} (expected one of y, M, d, h, m, s)")]
    InvalidUnit(String),
    #[display(fmt = "Empty time string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl<Tz: TimeZone> Time<Tz> {
    pub const fn new(inner: DateTime<Tz>) -> Self {
        Self { inner }
    }

    /// Borrows the underlying chrono value
    pub const fn as_datetime(&self) -> &DateTime<Tz> {
        &self.inner
    }

    /// Unwraps into the underlying chrono value
    pub fn into_datetime(self) -> DateTime<Tz> {
        self.inner
    }

    pub fn timezone(&self) -> Tz {
        self.inner.timezone()
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Month in `1..=12`
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    /// Day of month in `1..=31`
    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Hour in `0..=23`
    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    /// Minute in `0..=59`
    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Whole seconds in `0..=59`
    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.inner.nanosecond()
    }

    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// Day of the year, `1..=365` or `1..=366` in leap years
    pub fn year_day(&self) -> u32 {
        self.inner.ordinal()
    }

    /// Number of days in this instant's year
    pub fn days(&self) -> u32 {
        days_in_year(self.year())
    }

    /// Number of days in this instant's month
    pub fn month_days(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Hour, minute and second of the day
    pub fn clock(&self) -> (u32, u32, u32) {
        (self.hour(), self.minute(), self.second())
    }

    pub fn utc(&self) -> Time<Utc> {
        Time::new(self.inner.with_timezone(&Utc))
    }

    pub fn local(&self) -> Time<Local> {
        Time::new(self.inner.with_timezone(&Local))
    }

    pub fn with_timezone<Other: TimeZone>(&self, tz: &Other) -> Time<Other> {
        Time::new(self.inner.with_timezone(tz))
    }

    /// Returns `self - other`.
    pub fn duration_since(&self, other: &Self) -> TimeDelta {
        self.inner
            .naive_utc()
            .signed_duration_since(other.inner.naive_utc())
    }

    /// Time elapsed since `self`.
    pub fn since(&self) -> TimeDelta {
        Utc::now()
            .naive_utc()
            .signed_duration_since(self.inner.naive_utc())
    }

    /// Time remaining until `self`.
    pub fn until(&self) -> TimeDelta {
        self.inner
            .naive_utc()
            .signed_duration_since(Utc::now().naive_utc())
    }

    pub fn before(&self, other: &Self) -> bool {
        self.inner < other.inner
    }

    pub fn after(&self, other: &Self) -> bool {
        self.inner > other.inner
    }

    /// Same instant, regardless of timezone.
    pub fn equal<Other: TimeZone>(&self, other: &Time<Other>) -> bool {
        self.inner == other.inner
    }

    /// -1 if `self` is before `other`, 1 if after, 0 if equal.
    pub fn compare(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Rounds to the nearest multiple of `step`; halfway values round up.
    ///
    /// Multiples are counted on absolute time from the zero time
    /// (0001-01-01 00:00:00 UTC), not on the wall clock: in a `+05:30` zone
    /// 13:10 rounds to 13:30 for a one hour step. A step that is not positive
    /// returns `self` unchanged.
    pub fn round(&self, step: TimeDelta) -> Self {
        let Some(step) = positive_nanos(step) else {
            debug!(%step, "round skipped");
            return self.clone();
        };
        let rem = self.nanos_since_zero().rem_euclid(step);
        if rem * 2 < step {
            self.shift_nanos(-rem)
        } else {
            self.shift_nanos(step - rem)
        }
    }

    /// Rounds down to a multiple of `step`, never returning a later instant.
    ///
    /// Uses the same absolute grid as [`Time::round`]. A step that is not
    /// positive returns `self` unchanged.
    pub fn truncate(&self, step: TimeDelta) -> Self {
        let Some(step) = positive_nanos(step) else {
            debug!(%step, "truncate skipped");
            return self.clone();
        };
        let rem = self.nanos_since_zero().rem_euclid(step);
        self.shift_nanos(-rem)
    }

    /// Whether this is 0001-01-01 00:00:00 UTC.
    pub fn is_zero(&self) -> bool {
        self.inner.timestamp() == ZERO_TIME_UNIX && self.inner.timestamp_subsec_nanos() == 0
    }

    /// `other` if `self` is the zero time, otherwise `self`.
    pub fn zero_or(&self, other: &Self) -> Self {
        if self.is_zero() {
            other.clone()
        } else {
            self.clone()
        }
    }

    fn nanos_since_zero(&self) -> i128 {
        self.unix_nanos() - i128::from(ZERO_TIME_UNIX) * i128::from(NANOS_PER_SECOND)
    }

    /// Moves by a signed nanosecond count, saturating at the range limits.
    fn shift_nanos(&self, nanos: i128) -> Self {
        let per_second = i128::from(NANOS_PER_SECOND);
        let saturated = if nanos < 0 { TimeDelta::MIN } else { TimeDelta::MAX };
        let delta = i64::try_from(nanos.div_euclid(per_second))
            .ok()
            .zip(u32::try_from(nanos.rem_euclid(per_second)).ok())
            .and_then(|(secs, subsec)| TimeDelta::new(secs, subsec))
            .unwrap_or(saturated);
        self.clone() + delta
    }

    /// Current (year, month, day) widened for offset arithmetic.
    pub(crate) fn ymd(&self) -> Ymd {
        Ymd::new(
            i64::from(self.year()),
            i64::from(self.month()),
            i64::from(self.day()),
        )
    }

    pub(crate) fn wall_clock(&self) -> WallClock {
        WallClock::new(self.hour(), self.minute(), self.second(), self.nanosecond())
    }

    /// A new instant in the same timezone built from components.
    pub(crate) fn rebuild(&self, date: Ymd, clock: WallClock) -> Self {
        Self::new(localize(&self.inner.timezone(), &civil(date, clock)))
    }
}

/// Length of `step` in nanoseconds, if positive.
fn positive_nanos(step: TimeDelta) -> Option<i128> {
    let nanos = i128::from(step.num_seconds()) * i128::from(NANOS_PER_SECOND)
        + i128::from(step.subsec_nanos());
    (nanos > 0).then_some(nanos)
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Time<Tz> {
    fn from(inner: DateTime<Tz>) -> Self {
        Self { inner }
    }
}

impl<Tz: TimeZone> From<Time<Tz>> for DateTime<Tz> {
    fn from(time: Time<Tz>) -> Self {
        time.inner
    }
}

impl<Tz: TimeZone> PartialEq for Time<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Tz: TimeZone> Eq for Time<Tz> {}

impl<Tz: TimeZone> PartialOrd for Time<Tz> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tz: TimeZone> Ord for Time<Tz> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<Tz: TimeZone> Hash for Time<Tz> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

/// Linear addition. Results past the representable range saturate.
impl<Tz: TimeZone> Add<TimeDelta> for Time<Tz> {
    type Output = Self;

    fn add(self, delta: TimeDelta) -> Self {
        let tz = self.inner.timezone();
        let inner = self.inner.checked_add_signed(delta).unwrap_or_else(|| {
            let bound = if delta > TimeDelta::zero() {
                NaiveDateTime::MAX
            } else {
                NaiveDateTime::MIN
            };
            tz.from_utc_datetime(&bound)
        });
        Self { inner }
    }
}

impl<Tz: TimeZone> Sub for Time<Tz> {
    type Output = TimeDelta;

    fn sub(self, other: Self) -> TimeDelta {
        self.duration_since(&other)
    }
}

impl<Tz: TimeZone> fmt::Display for Time<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format(DATE_TIME_FORMAT))
    }
}

impl<Tz: TimeZone> serde::Serialize for Time<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Time<Utc> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Clock::utc().parse(&s).map_err(serde::de::Error::custom)
    }
}

impl<'de> serde::Deserialize<'de> for Time<Local> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Clock::local().parse(&s).map_err(serde::de::Error::custom)
    }
}
