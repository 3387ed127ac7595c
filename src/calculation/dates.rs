use crate::{BizError, BizResult, Schedule};
use chrono::{NaiveDate, NaiveTime};
use std::iter::successors;

/// Business dates: dates with at least some open time once breaks and holidays are accounted
/// for.
#[derive(Copy, Clone)]
pub struct Dates<'a> {
    schedule: &'a Schedule,
}

impl<'a> Dates<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    pub fn active(&self, date: NaiveDate) -> bool {
        !self.schedule.open_segments_on(date).is_empty()
    }

    /// Business dates from `date` on, `date` included if it is one.
    pub fn after(&self, date: NaiveDate) -> impl Iterator<Item = NaiveDate> + 'a {
        let schedule = self.schedule;
        let dates = *self;
        successors(Some(date), NaiveDate::succ_opt)
            .take_while(move |d| schedule.may_open_on_or_after(*d))
            .filter(move |d| dates.active(*d))
    }

    /// Business dates from `date` back, latest first, `date` included if it is one.
    pub fn before(&self, date: NaiveDate) -> impl Iterator<Item = NaiveDate> + 'a {
        let schedule = self.schedule;
        let dates = *self;
        successors(Some(date), NaiveDate::pred_opt)
            .take_while(move |d| schedule.may_open_on_or_before(*d))
            .filter(move |d| dates.active(*d))
    }

    /// How many business dates fall in `[from, to)`.
    pub fn days_within(&self, from: NaiveDate, to: NaiveDate) -> BizResult<usize> {
        if from > to {
            return Err(BizError::InvertedSegment {
                start: from.and_time(NaiveTime::MIN),
                end: to.and_time(NaiveTime::MIN),
            });
        }
        Ok(self.after(from).take_while(|d| *d < to).count())
    }
}
