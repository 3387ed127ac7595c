use crate::calculation::{
    Active, Dates, DurationWithin, InHours, OnBreak, OnHoliday, Periods, TimeShift,
};
use crate::{
    truncate_to_minute, BizResult, BusinessDuration, DayOfWeek, DayTimeSegment, TimeSegment,
    WeekTimeSegment,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// How a holiday changes a date's business hours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Holiday {
    /// Closed all day.
    Closed,

    /// Open only during these hours, in place of the usual weekly ones.
    Hours(Vec<DayTimeSegment>),
}

impl Holiday {
    pub fn hours(&self) -> &[DayTimeSegment] {
        match self {
            Self::Closed => &[],
            Self::Hours(hours) => hours,
        }
    }
}

/// Weekly business hours, weekly breaks and dated holidays.
///
/// A schedule is built once and only ever read afterwards; every query on it is a pure
/// function of the schedule and the instants passed in, so one schedule can be shared freely
/// between threads.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    hours: BTreeMap<DayOfWeek, Vec<DayTimeSegment>>,
    breaks: Vec<WeekTimeSegment>,
    holidays: BTreeMap<NaiveDate, Holiday>,

    /// The weekly hours with the breaks already cut out.
    weekly_open: Vec<WeekTimeSegment>,

    /// First and last holidays with any hours of their own.
    holiday_span: Option<(NaiveDate, NaiveDate)>,
}

impl Schedule {
    /// Assembles a schedule. Segments are put in order, but overlaps aren't checked here; the
    /// configuration layer does that before it gets this far.
    pub fn new(
        hours: BTreeMap<DayOfWeek, Vec<DayTimeSegment>>,
        mut breaks: Vec<WeekTimeSegment>,
        holidays: BTreeMap<NaiveDate, Holiday>,
    ) -> Self {
        let hours: BTreeMap<_, _> = hours
            .into_iter()
            .map(|(day, mut segments)| {
                segments.retain(|s| !s.is_empty());
                segments.sort();
                (day, segments)
            })
            .filter(|(_, segments)| !segments.is_empty())
            .collect();

        breaks.retain(|b| !b.is_empty());
        breaks.sort();

        let holidays: BTreeMap<_, _> = holidays
            .into_iter()
            .map(|(date, holiday)| match holiday {
                Holiday::Hours(mut segments) => {
                    segments.retain(|s| !s.is_empty());
                    segments.sort();
                    (date, Holiday::Hours(segments))
                }
                Holiday::Closed => (date, Holiday::Closed),
            })
            .collect();

        let weekly_open = hours
            .iter()
            .flat_map(|(day, segments)| {
                segments
                    .iter()
                    .map(move |s| WeekTimeSegment::from_day(*day, s))
            })
            .flat_map(|segment| {
                breaks.iter().fold(vec![segment], |pieces, b| {
                    pieces.iter().flat_map(|p| p.difference(b)).collect()
                })
            })
            .collect();

        let mut open_holidays = holidays
            .iter()
            .filter(|(_, h)| !h.hours().is_empty())
            .map(|(date, _)| *date);
        let holiday_span = open_holidays.next().map(|first| {
            let last = open_holidays.last().unwrap_or(first);
            (first, last)
        });

        Self {
            hours,
            breaks,
            holidays,
            weekly_open,
            holiday_span,
        }
    }

    pub fn hours(&self) -> &BTreeMap<DayOfWeek, Vec<DayTimeSegment>> {
        &self.hours
    }

    pub fn hours_on(&self, day: DayOfWeek) -> &[DayTimeSegment] {
        self.hours.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn breaks(&self) -> &[WeekTimeSegment] {
        &self.breaks
    }

    pub fn holidays(&self) -> &BTreeMap<NaiveDate, Holiday> {
        &self.holidays
    }

    pub fn holiday(&self, date: &NaiveDate) -> Option<&Holiday> {
        self.holidays.get(date)
    }

    /// The hours that apply on `date`: a holiday's hours when there is one, the weekly hours for
    /// that weekday otherwise. Breaks are not cut out.
    pub fn effective_hours(&self, date: &NaiveDate) -> &[DayTimeSegment] {
        match self.holiday(date) {
            Some(holiday) => holiday.hours(),
            None => self.hours_on(DayOfWeek::from_date(date)),
        }
    }

    /// The weekly breaks falling on `day`, as hours of that day.
    pub fn breaks_on(&self, day: DayOfWeek) -> Vec<DayTimeSegment> {
        let whole_day = WeekTimeSegment::from_day(day, &DayTimeSegment::whole_day());
        self.breaks
            .iter()
            .map(|b| b.intersection(&whole_day))
            .filter(|b| !b.is_empty())
            .filter_map(|b| {
                DayTimeSegment::new(day.day_minute(b.start()), day.day_minute(b.end())).ok()
            })
            .collect()
    }

    /// Every stretch of business time on `date`, in order, with breaks cut out.
    pub fn open_segments_on(&self, date: NaiveDate) -> Vec<TimeSegment> {
        let breaks: Vec<TimeSegment> = self
            .breaks_on(DayOfWeek::from_date(&date))
            .iter()
            .map(|b| b.on(date))
            .collect();

        self.effective_hours(&date)
            .iter()
            .map(|hours| hours.on(date))
            .flat_map(|segment| {
                breaks.iter().fold(vec![segment], |pieces, b| {
                    pieces.iter().flat_map(|p| p.difference(b)).collect()
                })
            })
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// True if there's business time in an ordinary week, holidays aside.
    pub fn has_weekly_hours(&self) -> bool {
        !self.weekly_open.is_empty()
    }

    /// False once `date` is past the last day the schedule could possibly be open.
    pub(crate) fn may_open_on_or_after(&self, date: NaiveDate) -> bool {
        self.has_weekly_hours()
            || self.holiday_span.map_or(false, |(_, last)| last >= date)
    }

    /// False once `date` is before the first day the schedule could possibly be open.
    pub(crate) fn may_open_on_or_before(&self, date: NaiveDate) -> bool {
        self.has_weekly_hours()
            || self.holiday_span.map_or(false, |(first, _)| first <= date)
    }

    pub fn is_active(&self, time: NaiveDateTime) -> bool {
        Active::new(self, time).result()
    }

    pub fn in_hours(&self, time: NaiveDateTime) -> bool {
        InHours::new(self, time).result()
    }

    pub fn on_break(&self, time: NaiveDateTime) -> bool {
        OnBreak::new(self, time).result()
    }

    pub fn on_holiday(&self, time: NaiveDateTime) -> bool {
        OnHoliday::new(self, time).result()
    }

    pub fn periods(&self) -> Periods<'_> {
        Periods::new(self)
    }

    pub fn dates(&self) -> Dates<'_> {
        Dates::new(self)
    }

    /// Moves `time` by `duration` of business time; backwards for negative durations.
    pub fn shift(&self, time: NaiveDateTime, duration: BusinessDuration) -> BizResult<NaiveDateTime> {
        TimeShift::new(self, time, duration).result()
    }

    /// Business time in `[from, to)`. Fails if `to` comes before `from`.
    pub fn within(&self, from: NaiveDateTime, to: NaiveDateTime) -> BizResult<BusinessDuration> {
        let segment = TimeSegment::new(truncate_to_minute(from), truncate_to_minute(to))?;
        Ok(DurationWithin::new(self, segment).result())
    }
}
