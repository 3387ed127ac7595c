use crate::day_time::DayTime;
use crate::time_segment::TimeSegment;
use crate::{BizError, BizResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::{self, Display, Formatter};

/// A stretch of hours within a single day, `[start, end)`. Ending at `24:00` runs up to the
/// following midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayTimeSegment {
    start: DayTime,
    end: DayTime,
}

impl DayTimeSegment {
    pub fn new(start: DayTime, end: DayTime) -> BizResult<Self> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(BizError::inverted_interval(start, end))
        }
    }

    pub fn whole_day() -> Self {
        Self {
            start: DayTime::MIDNIGHT,
            end: DayTime::ENDNIGHT,
        }
    }

    pub fn start(&self) -> DayTime {
        self.start
    }

    pub fn end(&self) -> DayTime {
        self.end
    }

    pub fn contains(&self, day_time: DayTime) -> bool {
        self.start <= day_time && day_time < self.end
    }

    pub fn minutes(&self) -> i64 {
        self.end.day_minute() - self.start.day_minute()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &DayTimeSegment) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// These hours as an absolute segment on `date`.
    pub fn on(&self, date: NaiveDate) -> TimeSegment {
        let midnight = date.and_time(NaiveTime::MIN);
        TimeSegment::new_unchecked(
            offset(midnight, self.start),
            offset(midnight, self.end),
        )
    }
}

fn offset(midnight: NaiveDateTime, day_time: DayTime) -> NaiveDateTime {
    midnight
        .checked_add_signed(Duration::minutes(day_time.day_minute()))
        .unwrap_or(NaiveDateTime::MAX)
}

impl Display for DayTimeSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
