use crate::{truncate_to_minute, Schedule, TimeSegment, WeekTime};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// The stretches of business time a schedule is open for, produced lazily.
///
/// Every call hands back a fresh iterator, so the same query can be walked as many times as
/// needed. Iterators only look as far ahead as they're pulled; dropping one early is how an
/// open-ended walk is cut short.
#[derive(Copy, Clone)]
pub struct Periods<'a> {
    schedule: &'a Schedule,
}

impl<'a> Periods<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    /// Periods from `origin` on, in chronological order. A period already under way at `origin`
    /// is cut to start there.
    pub fn after(&self, origin: NaiveDateTime) -> PeriodIter<'a> {
        PeriodIter::new(
            self.schedule,
            TimeSegment::after(truncate_to_minute(origin)),
            Direction::Forward,
        )
    }

    /// Periods before `origin`, latest first. A period under way at `origin` is cut to end there.
    pub fn before(&self, origin: NaiveDateTime) -> PeriodIter<'a> {
        PeriodIter::new(
            self.schedule,
            TimeSegment::before(truncate_to_minute(origin)),
            Direction::Backward,
        )
    }

    /// Periods inside `segment`, in chronological order, cut to fit it.
    pub fn within(&self, segment: TimeSegment) -> PeriodIter<'a> {
        let bounds = TimeSegment::new_unchecked(
            truncate_to_minute(segment.start()),
            truncate_to_minute(segment.end()),
        );
        PeriodIter::new(self.schedule, bounds, Direction::Forward)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Walks a schedule one date at a time, cutting each date's open segments to the bounds and
/// joining segments that meet at midnight.
///
/// A period is never joined across the start of a week (Sunday `00:00`), which keeps the
/// lookahead to at most a week even when a schedule never closes.
pub struct PeriodIter<'a> {
    schedule: &'a Schedule,
    bounds: TimeSegment,
    direction: Direction,

    /// The next date to load, or `None` once there's nothing more to load.
    day: Option<NaiveDate>,

    /// Segments loaded but not handed out yet, in walking order.
    queue: VecDeque<TimeSegment>,

    /// The period being grown; handed out once the next segment doesn't join onto it.
    pending: Option<TimeSegment>,
}

impl<'a> PeriodIter<'a> {
    fn new(schedule: &'a Schedule, bounds: TimeSegment, direction: Direction) -> Self {
        let day = match direction {
            Direction::Forward => bounds.start().date(),
            Direction::Backward => bounds.end().date(),
        };

        Self {
            schedule,
            bounds,
            direction,
            day: Some(day),
            queue: VecDeque::new(),
            pending: None,
        }
    }

    /// Loads the next date's segments into the queue. Returns false once the walk has left the
    /// bounds or the schedule can't open any more in the walking direction.
    fn load_next_day(&mut self) -> bool {
        let day = match self.day {
            Some(day) => day,
            None => return false,
        };

        let whole_day = TimeSegment::day(day);
        let in_range = match self.direction {
            Direction::Forward => {
                whole_day.start() < self.bounds.end()
                    && self.schedule.may_open_on_or_after(day)
            }
            Direction::Backward => {
                whole_day.end() > self.bounds.start()
                    && self.schedule.may_open_on_or_before(day)
            }
        };

        if !in_range {
            self.day = None;
            return false;
        }

        let bounds = self.bounds;
        let segments = self
            .schedule
            .open_segments_on(day)
            .into_iter()
            .map(|s| s.intersection(&bounds))
            .filter(|s| !s.is_empty());

        match self.direction {
            Direction::Forward => {
                self.queue.extend(segments);
                self.day = day.succ_opt();
            }
            Direction::Backward => {
                self.queue.extend(segments.rev());
                self.day = day.pred_opt();
            }
        }

        true
    }

    /// Joins `next` onto `pending` if they meet, unless they meet at the start of a week.
    fn join(&self, pending: &TimeSegment, next: &TimeSegment) -> Option<TimeSegment> {
        let (earlier, later) = match self.direction {
            Direction::Forward => (pending, next),
            Direction::Backward => (next, pending),
        };

        let week_starts_between = WeekTime::from_instant(&later.start()) == WeekTime::START;
        if earlier.end() == later.start() && !week_starts_between {
            Some(TimeSegment::new_unchecked(earlier.start(), later.end()))
        } else {
            None
        }
    }
}

impl Iterator for PeriodIter<'_> {
    type Item = TimeSegment;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.queue.is_empty() {
                if !self.load_next_day() {
                    return self.pending.take();
                }
            }

            let next = self.queue.pop_front()?;

            match self.pending.take() {
                None => self.pending = Some(next),
                Some(pending) => match self.join(&pending, &next) {
                    Some(joined) => self.pending = Some(joined),
                    None => {
                        self.pending = Some(next);
                        return Some(pending);
                    }
                },
            }
        }
    }
}

impl FusedIterator for PeriodIter<'_> {}
