use crate::calendar::Ymd;
use crate::consts::{DAYS_PER_WEEK, JANUARY, MIN_DAY};
use crate::prelude::*;
use crate::{Shift, Time, WallClock};

impl<Tz: TimeZone> Time<Tz> {
    /// First instant (00:00:00) of a calendar period.
    ///
    /// - `()`: January 1st of the current year
    /// - `y`: January 1st, `y` years away
    /// - `(y, m)`: first of the month, `y` years and `m` months away
    /// - `(y, m, d)`: the day `y` years, `m` months and `d` days away
    ///
    /// Month offsets carry into the year. A day past the end of the
    /// resulting month is clamped to its last day.
    pub fn start(&self, shift: impl Into<Shift>) -> Self {
        let Ymd { year, month, day } = self.ymd();
        let date = match shift.into() {
            Shift::None => Ymd::new(year, i64::from(JANUARY), i64::from(MIN_DAY)),
            Shift::Years(y) => Ymd::new(year + i64::from(y), i64::from(JANUARY), i64::from(MIN_DAY)),
            Shift::YearsMonths(y, m) => {
                Ymd::new(year + i64::from(y), month + i64::from(m), i64::from(MIN_DAY))
            },
            Shift::YearsMonthsDays(y, m, d) => {
                Ymd::new(year + i64::from(y), month + i64::from(m), day + i64::from(d))
            },
        };
        self.rebuild(date.normalized(), WallClock::MIDNIGHT)
    }

    /// Last instant (23:59:59.999999999) of a shifted day.
    ///
    /// Fields not covered by the shift keep their current value, so `end(1)`
    /// is the end of the same calendar day one year later, not the end of
    /// next year. `end(())` is the end of today.
    pub fn end(&self, shift: impl Into<Shift>) -> Self {
        let Ymd { year, month, day } = self.ymd();
        let date = match shift.into() {
            Shift::None => Ymd::new(year, month, day),
            Shift::Years(y) => Ymd::new(year + i64::from(y), month, day),
            Shift::YearsMonths(y, m) => Ymd::new(year + i64::from(y), month + i64::from(m), day),
            Shift::YearsMonthsDays(y, m, d) => {
                Ymd::new(year + i64::from(y), month + i64::from(m), day + i64::from(d))
            },
        };
        self.rebuild(date.normalized(), WallClock::END_OF_DAY)
    }

    /// Same as `start((0, months, days))`.
    pub fn start_month(&self, months: i32, days: i32) -> Self {
        self.start((0, months, days))
    }

    /// Same as `start((0, 0, days))`.
    pub fn start_day(&self, days: i32) -> Self {
        self.start((0, 0, days))
    }

    /// Same as `end((0, months, days))`.
    pub fn end_month(&self, months: i32, days: i32) -> Self {
        self.end((0, months, days))
    }

    /// Same as `end((0, 0, days))`.
    pub fn end_day(&self, days: i32) -> Self {
        self.end((0, 0, days))
    }

    /// Monday 00:00:00 of the week `weeks` away from this one.
    pub fn start_week(&self, weeks: i32) -> Self {
        let Ymd { year, month, day } = self.ymd();
        let day = day - self.iso_weekday() + 1 + i64::from(weeks) * DAYS_PER_WEEK;
        self.rebuild(Ymd::new(year, month, day), WallClock::MIDNIGHT)
    }

    /// Sunday 23:59:59.999999999 of the week `weeks` away from this one.
    pub fn end_week(&self, weeks: i32) -> Self {
        let Ymd { year, month, day } = self.ymd();
        let day = day + (DAYS_PER_WEEK - self.iso_weekday()) + i64::from(weeks) * DAYS_PER_WEEK;
        self.rebuild(Ymd::new(year, month, day), WallClock::END_OF_DAY)
    }

    /// Monday is 1, Sunday is 7.
    fn iso_weekday(&self) -> i64 {
        i64::from(self.weekday().number_from_monday())
    }
}
