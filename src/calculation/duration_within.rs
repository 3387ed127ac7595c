use crate::calculation::Periods;
use crate::{BusinessDuration, Schedule, TimeSegment};

/// Total business time inside a segment.
///
/// Segments can't run backwards, so asking for the time between two instants in the wrong
/// order fails when the segment is built, never here.
pub struct DurationWithin<'a> {
    schedule: &'a Schedule,
    segment: TimeSegment,
}

impl<'a> DurationWithin<'a> {
    pub fn new(schedule: &'a Schedule, segment: TimeSegment) -> Self {
        Self { schedule, segment }
    }

    pub fn result(&self) -> BusinessDuration {
        Periods::new(self.schedule)
            .within(self.segment)
            .map(|period| BusinessDuration::minutes(period.minutes()))
            .sum()
    }
}
