use crate::day_of_week::DayOfWeek;
use crate::day_time::{DayTime, MINUTES_IN_DAY};
use crate::{BizError, BizResult};
use chrono::NaiveDateTime;
use std::fmt::{self, Display, Formatter};

pub const MINUTES_IN_WEEK: i64 = 7 * MINUTES_IN_DAY;

/// Minutes elapsed since the start of the week, Sunday `00:00`.
///
/// Valid values run from `0` to `10080` inclusive; the last one is the end of Saturday.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekTime(i64);

impl WeekTime {
    pub const START: Self = Self(0);
    pub const END: Self = Self(MINUTES_IN_WEEK);

    pub fn new(minute: i64) -> BizResult<Self> {
        if (0..=MINUTES_IN_WEEK).contains(&minute) {
            Ok(Self(minute))
        } else {
            Err(BizError::out_of_range(
                "week minute",
                minute,
                0,
                MINUTES_IN_WEEK,
            ))
        }
    }

    /// Wraps any minute offset into `0..10080`, so `-1` is Saturday `23:59` and `10080` is
    /// Sunday `00:00`.
    pub fn normalized(minute: i64) -> Self {
        Self(minute.rem_euclid(MINUTES_IN_WEEK))
    }

    pub(crate) fn from_raw(minute: i64) -> Self {
        debug_assert!((0..=MINUTES_IN_WEEK).contains(&minute));
        Self(minute)
    }

    /// Folds the date out of an instant, keeping its weekday and minute of the day.
    pub fn from_instant(time: &NaiveDateTime) -> Self {
        Self::build(DayOfWeek::from_time(time), DayTime::from_instant(time))
    }

    pub fn build(day: DayOfWeek, day_time: DayTime) -> Self {
        day.week_minute(day_time)
    }

    pub fn week_minute(self) -> i64 {
        self.0
    }

    /// The day this minute falls on. The end of the week belongs to Saturday.
    pub fn day_of_week(self) -> DayOfWeek {
        DayOfWeek::ALL[(self.0 / MINUTES_IN_DAY).min(6) as usize]
    }

    pub fn day_time(self) -> DayTime {
        self.day_of_week().day_minute(self)
    }
}

impl Display for WeekTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day_of_week(), self.day_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn range_checks_construction() {
        assert!(WeekTime::new(0).is_ok());
        assert!(WeekTime::new(MINUTES_IN_WEEK).is_ok());
        assert!(matches!(
            WeekTime::new(MINUTES_IN_WEEK + 1),
            Err(BizError::OutOfRange { .. })
        ));
        assert!(matches!(WeekTime::new(-1), Err(BizError::OutOfRange { .. })));
    }

    #[test]
    fn normalizes_around_the_week_boundary() {
        assert_eq!(WeekTime::normalized(-1).week_minute(), MINUTES_IN_WEEK - 1);
        assert_eq!(WeekTime::normalized(MINUTES_IN_WEEK), WeekTime::START);
        assert_eq!(WeekTime::normalized(MINUTES_IN_WEEK + 90).week_minute(), 90);
    }

    #[test]
    fn folds_the_date_out_of_an_instant() {
        // 2006-01-03 is a tuesday
        let time = NaiveDate::from_ymd_opt(2006, 1, 3)
            .unwrap()
            .and_hms_opt(9, 30, 45)
            .unwrap();
        let week_time = WeekTime::from_instant(&time);
        assert_eq!(week_time.week_minute(), 2 * 1440 + 9 * 60 + 30);
        assert_eq!(week_time.day_of_week(), DayOfWeek::TUESDAY);
        assert_eq!(week_time.to_string(), "Tue 09:30");

        let a_week_later = time + chrono::Duration::days(7);
        assert_eq!(WeekTime::from_instant(&a_week_later), week_time);
    }

    #[test]
    fn end_of_week_belongs_to_saturday() {
        assert_eq!(WeekTime::END.day_of_week(), DayOfWeek::SATURDAY);
        assert_eq!(WeekTime::END.day_time(), DayTime::ENDNIGHT);
        assert_eq!(WeekTime::START.day_time(), DayTime::MIDNIGHT);
    }
}
