use crate::ParseError;
use crate::consts::NANOS_PER_SECOND;
use crate::prelude::*;
use std::str::FromStr;

/// Granularity of a difference between two instants.
///
/// Each unit has a one letter tag: `y`, `M`, `d`, `h`, `m`, `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "y")]
    Year,
    #[display(fmt = "M")]
    Month,
    #[display(fmt = "d")]
    Day,
    #[display(fmt = "h")]
    Hour,
    #[display(fmt = "m")]
    Minute,
    #[display(fmt = "s")]
    Second,
}

impl Unit {
    /// Looks a unit up by its tag, `None` when the tag is unknown.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "y" => Some(Self::Year),
            "M" => Some(Self::Month),
            "d" => Some(Self::Day),
            "h" => Some(Self::Hour),
            "m" => Some(Self::Minute),
            "s" => Some(Self::Second),
            _ => None,
        }
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.trim()).ok_or_else(|| ParseError::InvalidUnit(s.to_owned()))
    }
}

/// Scale of a raw unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EpochUnit {
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "milliseconds")]
    Millis,
    #[display(fmt = "microseconds")]
    Micros,
    #[display(fmt = "nanoseconds")]
    Nanos,
}

impl EpochUnit {
    /// How many of this unit make up one second.
    pub const fn per_second(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Millis => 1_000,
            Self::Micros => 1_000_000,
            Self::Nanos => NANOS_PER_SECOND,
        }
    }
}

/// Calendar offsets for [`Time::start`](crate::Time::start) and [`Time::end`](crate::Time::end).
///
/// Each variant is a distinct call shape, not a default-filled triple: the
/// number of offsets supplied decides which lower fields are reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shift {
    #[default]
    None,
    Years(i32),
    YearsMonths(i32, i32),
    YearsMonthsDays(i32, i32, i32),
}

impl From<()> for Shift {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl From<i32> for Shift {
    fn from(years: i32) -> Self {
        Self::Years(years)
    }
}

impl From<(i32, i32)> for Shift {
    fn from((years, months): (i32, i32)) -> Self {
        Self::YearsMonths(years, months)
    }
}

impl From<(i32, i32, i32)> for Shift {
    fn from((years, months, days): (i32, i32, i32)) -> Self {
        Self::YearsMonthsDays(years, months, days)
    }
}

/// Month/day selectors for [`Time::go`](crate::Time::go).
///
/// Positive selectors count forward from the start of the period,
/// negative ones backward from its end. A day selector of 0 picks the
/// last day of the month; a month selector of 0 keeps the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Select {
    #[default]
    Keep,
    Month(i32),
    MonthDay(i32, i32),
}

impl From<()> for Select {
    fn from((): ()) -> Self {
        Self::Keep
    }
}

impl From<i32> for Select {
    fn from(month: i32) -> Self {
        Self::Month(month)
    }
}

impl From<(i32, i32)> for Select {
    fn from((month, day): (i32, i32)) -> Self {
        Self::MonthDay(month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tags_round_trip() {
        for unit in [
            Unit::Year,
            Unit::Month,
            Unit::Day,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
        ] {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_unit_tags_are_case_sensitive() {
        assert_eq!("M".parse::<Unit>().unwrap(), Unit::Month);
        assert_eq!("m".parse::<Unit>().unwrap(), Unit::Minute);
    }

    #[test]
    fn test_unit_invalid_tag() {
        let result = "w".parse::<Unit>();
        assert!(matches!(result, Err(ParseError::InvalidUnit(ref tag)) if tag == "w"));
        assert_eq!(Unit::from_tag("year"), None);
    }

    #[test]
    fn test_epoch_unit_scale() {
        assert_eq!(EpochUnit::Seconds.per_second(), 1);
        assert_eq!(EpochUnit::Millis.per_second(), 1_000);
        assert_eq!(EpochUnit::Micros.per_second(), 1_000_000);
        assert_eq!(EpochUnit::Nanos.per_second(), 1_000_000_000);
        assert_eq!(EpochUnit::Millis.to_string(), "milliseconds");
    }

    #[test]
    fn test_shift_from_call_shapes() {
        assert_eq!(Shift::from(()), Shift::None);
        assert_eq!(Shift::from(2), Shift::Years(2));
        assert_eq!(Shift::from((0, -1)), Shift::YearsMonths(0, -1));
        assert_eq!(Shift::from((1, 2, 3)), Shift::YearsMonthsDays(1, 2, 3));
    }

    #[test]
    fn test_select_from_call_shapes() {
        assert_eq!(Select::from(()), Select::Keep);
        assert_eq!(Select::from(-1), Select::Month(-1));
        assert_eq!(Select::from((-1, -1)), Select::MonthDay(-1, -1));
    }
}
