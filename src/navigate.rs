use crate::calendar::{Ymd, days_in_month, year_i32};
use crate::consts::{MAX_MONTH, MIN_DAY};
use crate::prelude::*;
use crate::{Select, Time};
use std::cmp::Ordering;

/// Resolves a signed month selector.
///
/// Positive values pick that month (capped at December), negative values
/// count back from December (`-1` is December), zero keeps `current`.
fn resolve_month(current: u32, selector: i32) -> u32 {
    let months = i64::from(MAX_MONTH);
    let selector = i64::from(selector);
    let month = match selector.cmp(&0) {
        Ordering::Greater => selector.min(months),
        Ordering::Less => (months + 1 + selector).max(1),
        Ordering::Equal => return current,
    };
    u32::try_from(month).unwrap_or(current)
}

/// Resolves a signed day selector against a month of `max_day` days.
///
/// Positive values pick that day (capped at the month end), zero picks the
/// last day and negative values count back from it (`-1` is the second to last).
fn resolve_day(max_day: u32, selector: i64) -> i64 {
    let max_day = i64::from(max_day);
    if selector > 0 {
        selector.min(max_day)
    } else {
        (max_day + selector).max(i64::from(MIN_DAY))
    }
}

impl<Tz: TimeZone> Time<Tz> {
    /// Shifts by whole years, keeping month, day and time of day.
    ///
    /// February 29th becomes February 28th in a common year.
    pub fn add_years(&self, years: i32) -> Self {
        self.add_years_months(years, 0)
    }

    /// Shifts by years and months, clamping the day to the end of the
    /// resulting month: January 31st plus one month is the last day of February.
    pub fn add_years_months(&self, years: i32, months: i32) -> Self {
        let Ymd { year, month, day } = self.ymd();
        let date = Ymd::new(year + i64::from(years), month + i64::from(months), day);
        self.rebuild(date.normalized(), self.wall_clock())
    }

    /// Shifts by years, months and days with plain carry arithmetic.
    ///
    /// Unlike [`Time::add_years_months`] the day is not clamped:
    /// January 31st plus one month and zero days is March 2nd or 3rd.
    pub fn add_date(&self, years: i32, months: i32, days: i32) -> Self {
        let Ymd { year, month, day } = self.ymd();
        let date = Ymd::new(
            year + i64::from(years),
            month + i64::from(months),
            day + i64::from(days),
        );
        self.rebuild(date, self.wall_clock())
    }

    /// Shifts by months, clamping the day to the end of the resulting month.
    pub fn add_months(&self, months: i32) -> Self {
        self.add_years_months(0, months)
    }

    /// Same as `add_date(0, months, days)`.
    pub fn add_months_days(&self, months: i32, days: i32) -> Self {
        self.add_date(0, months, days)
    }

    pub fn add_days(&self, days: i32) -> Self {
        self.add_date(0, 0, days)
    }

    /// Moves `years` away and selects a month and day in that year.
    ///
    /// Selectors count forward when positive and backward from the end
    /// of the period otherwise:
    ///
    /// - `()`: keep month and day (day clamped to the month end)
    /// - `m`: select month `m`, keep the day
    /// - `(m, d)`: select month `m` and day `d`; `d == 0` is the last day
    ///
    /// `go(0, (-1, -1))` is December 30th of the current year.
    /// Time of day is preserved.
    pub fn go(&self, years: i32, select: impl Into<Select>) -> Self {
        self.go_by(i64::from(years), select.into())
    }

    /// Like [`Time::go`] with an absolute target year.
    pub fn go_year(&self, year: i32, select: impl Into<Select>) -> Self {
        self.go_by(i64::from(year) - i64::from(self.year()), select.into())
    }

    /// Same as `go(0, (month, day))`.
    pub fn go_month(&self, month: i32, day: i32) -> Self {
        self.go(0, (month, day))
    }

    /// Same as `go(0, (0, day))`.
    pub fn go_day(&self, day: i32) -> Self {
        self.go(0, (0, day))
    }

    fn go_by(&self, years: i64, select: Select) -> Self {
        let year = i64::from(self.year()) + years;
        let (month, day) = match select {
            Select::Keep => (self.month(), i64::from(self.day())),
            Select::Month(m) => (resolve_month(self.month(), m), i64::from(self.day())),
            Select::MonthDay(m, d) => (resolve_month(self.month(), m), i64::from(d)),
        };
        let day = resolve_day(days_in_month(year_i32(year), month), day);
        let date = Ymd::new(year, i64::from(month), day).normalized();
        self.rebuild(date, self.wall_clock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clock, WallClock};

    fn at(year: i32, month: i32, day: i32) -> Time {
        Clock::utc().date_time(year, month, day, WallClock::new(14, 35, 29, 650_000_000))
    }

    fn ymd(t: &Time) -> (i32, u32, u32) {
        (t.year(), t.month(), t.day())
    }

    #[test]
    fn test_resolve_month() {
        assert_eq!(resolve_month(8, 0), 8);
        assert_eq!(resolve_month(8, 3), 3);
        assert_eq!(resolve_month(8, 12), 12);
        assert_eq!(resolve_month(8, 99), 12);
        assert_eq!(resolve_month(8, -1), 12);
        assert_eq!(resolve_month(8, -2), 11);
        assert_eq!(resolve_month(8, -12), 1);
        assert_eq!(resolve_month(8, -99), 1);
        assert_eq!(resolve_month(8, i32::MIN), 1);
    }

    #[test]
    fn test_resolve_day() {
        assert_eq!(resolve_day(31, 15), 15);
        assert_eq!(resolve_day(30, 31), 30);
        assert_eq!(resolve_day(31, 0), 31);
        assert_eq!(resolve_day(31, -1), 30);
        assert_eq!(resolve_day(28, -27), 1);
        assert_eq!(resolve_day(28, -99), 1);
    }

    #[test]
    fn test_add_month_clamps_to_february_end() {
        assert_eq!(ymd(&at(2024, 1, 31).add_months(1)), (2024, 2, 29));
        assert_eq!(ymd(&at(2023, 1, 31).add_months(1)), (2023, 2, 28));
        assert_eq!(ymd(&at(2024, 3, 31).add_months(-1)), (2024, 2, 29));
    }

    #[test]
    fn test_add_months_carries_years() {
        assert_eq!(ymd(&at(2024, 11, 15).add_months(3)), (2025, 2, 15));
        assert_eq!(ymd(&at(2024, 2, 15).add_months(-14)), (2022, 12, 15));
        assert_eq!(ymd(&at(2024, 5, 31).add_years_months(1, 13)), (2026, 6, 30));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        assert_eq!(ymd(&at(2024, 2, 29).add_years(1)), (2025, 2, 28));
        assert_eq!(ymd(&at(2024, 2, 29).add_years(4)), (2028, 2, 29));
        assert_eq!(ymd(&at(2024, 8, 15).add_years(-24)), (2000, 8, 15));
    }

    #[test]
    fn test_add_date_rolls_over() {
        assert_eq!(ymd(&at(2024, 1, 31).add_date(0, 1, 0)), (2024, 3, 2));
        assert_eq!(ymd(&at(2023, 1, 31).add_months_days(1, 0)), (2023, 3, 3));
        assert_eq!(ymd(&at(2024, 12, 31).add_days(1)), (2025, 1, 1));
        assert_eq!(ymd(&at(2024, 3, 1).add_days(-1)), (2024, 2, 29));
        assert_eq!(ymd(&at(2024, 1, 1).add_days(366)), (2025, 1, 1));
    }

    #[test]
    fn test_add_preserves_time_of_day() {
        let t = at(2024, 1, 31).add_months(1);
        assert_eq!(t.clock(), (14, 35, 29));
        assert_eq!(t.nanosecond(), 650_000_000);

        let t = at(2024, 1, 31).add_days(10);
        assert_eq!(t.nanosecond(), 650_000_000);
    }

    #[test]
    fn test_go_keeps_month_and_day() {
        assert_eq!(ymd(&at(2024, 8, 15).go(1, ())), (2025, 8, 15));
        assert_eq!(ymd(&at(2024, 2, 29).go(1, ())), (2025, 2, 28));
    }

    #[test]
    fn test_go_negative_month_counts_from_december() {
        let t = at(2024, 8, 15);
        assert_eq!(ymd(&t.go(0, -1)), (2024, 12, 15));
        assert_eq!(ymd(&t.go(0, -2)), (2024, 11, 15));
        assert_eq!(ymd(&t.go(0, (-1, -1))), (2024, 12, 30));
        assert_eq!(ymd(&t.go(0, (-1, 0))), (2024, 12, 31));
    }

    #[test]
    fn test_go_positive_selectors_are_capped() {
        let t = at(2024, 1, 31);
        assert_eq!(ymd(&t.go(0, 2)), (2024, 2, 29));
        assert_eq!(ymd(&t.go(0, (4, 31))), (2024, 4, 30));
        assert_eq!(ymd(&t.go(0, (20, 1))), (2024, 12, 1));
        assert_eq!(ymd(&t.go(-1, (2, 29))), (2023, 2, 28));
    }

    #[test]
    fn test_go_year_is_absolute() {
        let t = at(2024, 8, 15);
        assert_eq!(ymd(&t.go_year(2000, ())), (2000, 8, 15));
        assert_eq!(ymd(&t.go_year(1900, (2, 0))), (1900, 2, 28));
        assert_eq!(ymd(&t.go_year(2000, (2, 0))), (2000, 2, 29));
    }

    #[test]
    fn test_go_month_defaults_to_last_day() {
        let t = at(2024, 8, 15);
        assert_eq!(ymd(&t.go_month(2, 0)), (2024, 2, 29));
        assert_eq!(ymd(&t.go_month(0, 1)), (2024, 8, 1));
        assert_eq!(ymd(&t.go_month(-12, -1)), (2024, 1, 30));
    }

    #[test]
    fn test_go_day() {
        let t = at(2024, 9, 15);
        assert_eq!(ymd(&t.go_day(1)), (2024, 9, 1));
        assert_eq!(ymd(&t.go_day(0)), (2024, 9, 30));
        assert_eq!(ymd(&t.go_day(-1)), (2024, 9, 29));
        assert_eq!(ymd(&t.go_day(40)), (2024, 9, 30));
    }

    #[test]
    fn test_go_selected_day_stays_in_month() {
        let t = at(2024, 8, 15);
        for month in 1..=12 {
            for day in -40..=40 {
                let selected = t.go(0, (month, day));
                assert_eq!(selected.month(), u32::try_from(month).unwrap(), "day {day}");
            }
        }
        assert_eq!(ymd(&t.go(0, (-1, 0))), (2024, 12, 31));
        assert_eq!(ymd(&t.go_month(2, 0)), (2024, 2, 29));
        assert_eq!(ymd(&t.go(1, (2, 0))), (2025, 2, 28));
    }

    #[test]
    fn test_go_preserves_time_of_day() {
        let t = at(2024, 8, 15).go(0, (-1, -1));
        assert_eq!(t.clock(), (14, 35, 29));
        assert_eq!(t.nanosecond(), 650_000_000);
    }
}
