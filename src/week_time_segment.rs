use crate::day_of_week::DayOfWeek;
use crate::day_time_segment::DayTimeSegment;
use crate::time_segment::TimeSegment;
use crate::week_time::WeekTime;
use crate::{BizError, BizResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::{max, min};
use std::fmt::{self, Display, Formatter};

/// A weekly-recurring interval, `[start, end)` in minutes of the week.
///
/// Tested against an instant by folding the instant's date away (see [`WeekTime::from_instant`]),
/// so the same segment matches every week.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekTimeSegment {
    start: WeekTime,
    end: WeekTime,
}

impl WeekTimeSegment {
    pub fn new(start: WeekTime, end: WeekTime) -> BizResult<Self> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(BizError::inverted_interval(start, end))
        }
    }

    /// A day's hours placed on that day of the week.
    pub fn from_day(day: DayOfWeek, hours: &DayTimeSegment) -> Self {
        Self {
            start: day.week_minute(hours.start()),
            end: day.week_minute(hours.end()),
        }
    }

    pub fn start(&self) -> WeekTime {
        self.start
    }

    pub fn end(&self) -> WeekTime {
        self.end
    }

    pub fn contains(&self, time: &NaiveDateTime) -> bool {
        self.contains_week_time(WeekTime::from_instant(time))
    }

    pub fn contains_week_time(&self, week_time: WeekTime) -> bool {
        self.start <= week_time && week_time < self.end
    }

    pub fn minutes(&self) -> i64 {
        self.end.week_minute() - self.start.week_minute()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &WeekTimeSegment) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn intersection(&self, other: &WeekTimeSegment) -> WeekTimeSegment {
        let start = max(self.start, other.start);
        let end = max(start, min(self.end, other.end));
        Self { start, end }
    }

    /// What's left once `other` is cut out, in order, without empty pieces.
    pub fn difference(&self, other: &WeekTimeSegment) -> Vec<WeekTimeSegment> {
        if !self.overlaps(other) {
            return if self.is_empty() { vec![] } else { vec![*self] };
        }

        let mut pieces = Vec::with_capacity(2);
        if self.start < other.start {
            pieces.push(Self {
                start: self.start,
                end: other.start,
            });
        }
        if other.end < self.end {
            pieces.push(Self {
                start: other.end,
                end: self.end,
            });
        }
        pieces
    }

    /// This segment in the concrete week starting on `sunday`.
    pub fn on_week(&self, sunday: NaiveDate) -> TimeSegment {
        let week_start = sunday.and_time(NaiveTime::MIN);
        TimeSegment::new_unchecked(offset(week_start, self.start), offset(week_start, self.end))
    }
}

fn offset(week_start: NaiveDateTime, week_time: WeekTime) -> NaiveDateTime {
    week_start
        .checked_add_signed(Duration::minutes(week_time.week_minute()))
        .unwrap_or(NaiveDateTime::MAX)
}

impl Display for WeekTimeSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_time::DayTime;

    fn monday(from: &str, to: &str) -> WeekTimeSegment {
        WeekTimeSegment::from_day(
            DayOfWeek::MONDAY,
            &DayTimeSegment::new(from.parse().unwrap(), to.parse().unwrap()).unwrap(),
        )
    }

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 1, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn places_day_hours_in_the_week() {
        let lunch = monday("12:00", "13:00");
        assert_eq!(lunch.start().week_minute(), 1440 + 720);
        assert_eq!(lunch.minutes(), 60);
        assert_eq!(lunch.to_string(), "Mon 12:00 - Mon 13:00");
    }

    #[test]
    fn matches_every_week() {
        let lunch = monday("12:00", "13:00");
        assert!(lunch.contains(&at(2, 12, 30)));
        assert!(lunch.contains(&at(9, 12, 0)));
        assert!(!lunch.contains(&at(9, 13, 0)));
        assert!(!lunch.contains(&at(3, 12, 30)));
    }

    #[test]
    fn cuts_out_differences() {
        let day = monday("09:00", "17:00");
        let lunch = monday("12:00", "13:00");
        assert_eq!(
            day.difference(&lunch),
            vec![monday("09:00", "12:00"), monday("13:00", "17:00")]
        );
        assert_eq!(day.intersection(&lunch), lunch);
        assert!(lunch.difference(&day).is_empty());
    }

    #[test]
    fn lands_on_a_concrete_week() {
        let sunday = NaiveDate::from_ymd_opt(2006, 1, 8).unwrap();
        let segment = monday("12:00", "13:00").on_week(sunday);
        assert_eq!(segment.start(), at(9, 12, 0));
        assert_eq!(segment.end(), at(9, 13, 0));

        let whole_saturday = WeekTimeSegment::from_day(
            DayOfWeek::SATURDAY,
            &DayTimeSegment::new(DayTime::MIDNIGHT, DayTime::ENDNIGHT).unwrap(),
        );
        assert_eq!(whole_saturday.end(), WeekTime::END);
        assert_eq!(whole_saturday.on_week(sunday).end(), at(15, 0, 0));
    }
}
