use crate::consts::NANOS_PER_SECOND;
use crate::prelude::*;
use crate::{Time, Unit};
use chrono::TimeDelta;
use tracing::debug;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const HOURS_PER_DAY: f64 = 24.0;

#[allow(clippy::cast_precision_loss)]
fn seconds_f64(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / NANOS_PER_SECOND as f64
}

impl<Tz: TimeZone> Time<Tz> {
    /// Signed difference `self - other` measured in `unit`.
    ///
    /// Day, hour, minute and second differences are exact elapsed time.
    /// Months count calendar months and add the leftover days as a fraction
    /// of `other`'s month length; a month is only complete once the day of
    /// month has been reached again. Years add each operand's position
    /// within its own year to the difference of the year numbers.
    #[allow(clippy::cast_precision_loss)]
    pub fn diff_in(&self, other: &Self, unit: Unit) -> f64 {
        match unit {
            Unit::Year => {
                let own = f64::from(self.year_day()) / f64::from(self.days());
                let theirs = f64::from(other.year_day()) / f64::from(other.days());
                f64::from(self.year() - other.year()) + own - theirs
            },
            Unit::Month => {
                let years = i64::from(self.year()) - i64::from(other.year());
                let mut months = years * 12 + i64::from(self.month()) - i64::from(other.month());
                let days = i64::from(self.day()) - i64::from(other.day());
                if days < 0 {
                    months -= 1;
                }
                months as f64 + days as f64 / f64::from(other.month_days())
            },
            Unit::Day => seconds_f64(self.duration_since(other)) / SECONDS_PER_HOUR / HOURS_PER_DAY,
            Unit::Hour => seconds_f64(self.duration_since(other)) / SECONDS_PER_HOUR,
            Unit::Minute => seconds_f64(self.duration_since(other)) / SECONDS_PER_MINUTE,
            Unit::Second => seconds_f64(self.duration_since(other)),
        }
    }

    /// Absolute value of [`Time::diff_in`].
    pub fn diff_abs_in(&self, other: &Self, unit: Unit) -> f64 {
        self.diff_in(other, unit).abs()
    }

    /// [`Time::diff_in`] keyed by a unit tag (`y`, `M`, `d`, `h`, `m`, `s`).
    ///
    /// An unknown tag yields `0.0`; parse a [`Unit`] first to tell the two apart.
    pub fn diff_in_tag(&self, other: &Self, tag: &str) -> f64 {
        Unit::from_tag(tag).map_or_else(
            || {
                debug!(tag, "unknown difference unit");
                0.0
            },
            |unit| self.diff_in(other, unit),
        )
    }
}
