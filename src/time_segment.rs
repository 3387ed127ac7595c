use crate::{BizError, BizResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cmp::{max, min};
use std::fmt::{self, Display, Formatter};

/// Drops the seconds (and anything finer) from an instant. Business time is counted in whole
/// minutes, so every query starts here.
pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// A single contiguous block of time, `[start, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeSegment {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeSegment {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> BizResult<Self> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(BizError::InvertedSegment { start, end })
        }
    }

    /// Callers guarantee `start <= end`.
    pub(crate) fn new_unchecked(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Everything up to (but not including) `time`.
    pub fn before(time: NaiveDateTime) -> Self {
        Self::new_unchecked(NaiveDateTime::MIN, time)
    }

    /// Everything from `time` on.
    pub fn after(time: NaiveDateTime) -> Self {
        Self::new_unchecked(time, NaiveDateTime::MAX)
    }

    /// The whole of a calendar date, midnight to midnight.
    pub fn day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        let end = date
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);
        Self::new_unchecked(start, end)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, time: NaiveDateTime) -> bool {
        self.start <= time && time < self.end
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    pub fn minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The time both segments share. Disjoint segments intersect in an empty segment.
    pub fn intersection(&self, other: &TimeSegment) -> TimeSegment {
        let start = max(self.start, other.start);
        let end = max(start, min(self.end, other.end));
        Self::new_unchecked(start, end)
    }

    /// What's left of this segment once `other` is cut out of it, in chronological order.
    /// Empty pieces are dropped.
    pub fn difference(&self, other: &TimeSegment) -> Vec<TimeSegment> {
        if !self.overlaps(other) {
            return if self.is_empty() { vec![] } else { vec![*self] };
        }

        let mut pieces = Vec::with_capacity(2);
        if self.start < other.start {
            pieces.push(Self::new_unchecked(self.start, other.start));
        }
        if other.end < self.end {
            pieces.push(Self::new_unchecked(other.end, self.end));
        }
        pieces
    }

    /// Returns true if the segments share some time, but *not* if the end of one and the start
    /// of the other are the same.
    pub fn overlaps(&self, other: &TimeSegment) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if the segments either overlap *or* the end of one *is* the start of the
    /// other.
    pub fn touches(&self, other: &TimeSegment) -> bool {
        self.overlaps(other) || self.start == other.end || self.end == other.start
    }
}

impl Display for TimeSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}
