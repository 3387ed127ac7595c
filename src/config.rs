//! Loading and checking schedule definitions.
//!
//! A schedule file is YAML:
//!
//! ```yaml
//! hours:
//!   mon: { "09:00": "12:00", "13:00": "17:00" }
//!   tue: { "09:00": "17:00" }
//! breaks:
//!   - { day: tue, start: "12:00", end: "12:30" }
//! holidays:
//!   2006-12-25: closed
//!   2006-12-24: { "09:00": "12:00" }
//! ```

use crate::{
    BizError, BizResult, DayOfWeek, DayTime, DayTimeSegment, Holiday, Schedule, WeekTimeSegment,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Opening time to closing time, for one day.
pub type DayHours = BTreeMap<DayTime, DayTime>;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// Weekly business hours. Days left out are closed.
    #[serde(default)]
    pub hours: BTreeMap<DayOfWeek, DayHours>,

    /// Weekly breaks, cut out of the business hours of whatever day they fall on.
    #[serde(default)]
    pub breaks: Vec<BreakConfig>,

    /// Dates closed all day or open with their own hours.
    #[serde(default)]
    pub holidays: BTreeMap<NaiveDate, HolidayConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BreakConfig {
    pub day: DayOfWeek,
    pub start: DayTime,
    pub end: DayTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HolidayConfig {
    Keyword(HolidayKeyword),
    Hours(DayHours),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKeyword {
    Closed,
}

/// Monday to Friday, 09:00 to 17:00.
impl Default for ScheduleConfig {
    fn default() -> Self {
        let nine_to_five: DayHours = vec![(DayTime::from_raw(9 * 60), DayTime::from_raw(17 * 60))]
            .into_iter()
            .collect();

        Self {
            hours: DayOfWeek::ALL[1..6]
                .iter()
                .map(|day| (*day, nine_to_five.clone()))
                .collect(),
            breaks: Vec::new(),
            holidays: BTreeMap::new(),
        }
    }
}

impl ScheduleConfig {
    /// Reads a schedule file, falling back to the default schedule if there isn't one.
    pub fn from_file<P: AsRef<Path>>(path: P) -> BizResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "no schedule at {}; using the default weekday 09:00-17:00 schedule",
                path.display()
            );
            Ok(Self::default())
        } else {
            log::debug!("loading schedule from {}", path.display());
            Self::from_reader(fs::File::open(path)?)
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> BizResult<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml(yaml: &str) -> BizResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> BizResult<()> {
        log::debug!("writing schedule to {}", path.as_ref().display());
        Ok(fs::write(path, serde_yaml::to_string(self)?)?)
    }

    /// Checks the definition and turns it into a [`Schedule`].
    pub fn build(&self) -> BizResult<Schedule> {
        let mut hours = BTreeMap::new();
        for (day, day_hours) in &self.hours {
            hours.insert(*day, day_segments(&format!("{} hours", day), day_hours)?);
        }

        let breaks = self.week_breaks()?;

        let mut holidays = BTreeMap::new();
        for (date, holiday) in &self.holidays {
            let holiday = match holiday {
                HolidayConfig::Keyword(HolidayKeyword::Closed) => Holiday::Closed,
                HolidayConfig::Hours(day_hours) => {
                    Holiday::Hours(day_segments(&format!("hours on {}", date), day_hours)?)
                }
            };
            holidays.insert(*date, holiday);
        }

        let schedule = Schedule::new(hours, breaks, holidays);
        log::debug!(
            "built schedule: {} days with hours, {} breaks, {} holidays",
            schedule.hours().len(),
            schedule.breaks().len(),
            schedule.holidays().len()
        );
        Ok(schedule)
    }

    fn week_breaks(&self) -> BizResult<Vec<WeekTimeSegment>> {
        let mut breaks = Vec::with_capacity(self.breaks.len());
        for b in &self.breaks {
            let segment = non_empty_segment(&format!("{} break", b.day), b.start, b.end)?;
            breaks.push(WeekTimeSegment::from_day(b.day, &segment));
        }

        breaks.sort();
        if let Some(pair) = breaks.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
            return Err(BizError::InvalidConfig(format!(
                "breaks {} and {} overlap",
                pair[0], pair[1]
            )));
        }

        Ok(breaks)
    }
}

fn non_empty_segment(what: &str, start: DayTime, end: DayTime) -> BizResult<DayTimeSegment> {
    if start >= end {
        return Err(BizError::InvalidConfig(format!(
            "{} {}-{} must end after they start",
            what, start, end
        )));
    }
    DayTimeSegment::new(start, end)
}

fn day_segments(what: &str, day_hours: &DayHours) -> BizResult<Vec<DayTimeSegment>> {
    let segments = day_hours
        .iter()
        .map(|(start, end)| non_empty_segment(what, *start, *end))
        .collect::<BizResult<Vec<_>>>()?;

    // keyed by opening time, so already in order
    if let Some(pair) = segments.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
        return Err(BizError::InvalidConfig(format!(
            "{} {} and {} overlap",
            what, pair[0], pair[1]
        )));
    }

    Ok(segments)
}
