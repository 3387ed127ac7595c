use crate::{BizError, BizResult};
use chrono::Timelike;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub const MINUTES_IN_HOUR: i64 = 60;
pub const MINUTES_IN_DAY: i64 = 24 * MINUTES_IN_HOUR;

/// A minute of the day, from midnight (`00:00`) up to and including the end of the day (`24:00`).
///
/// The end of the day is its own value so that an interval can run "until midnight" without
/// spilling into the next day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayTime {
    minute: u16,
}

impl DayTime {
    pub const MIDNIGHT: Self = Self { minute: 0 };
    pub const ENDNIGHT: Self = Self {
        minute: MINUTES_IN_DAY as u16,
    };

    pub fn new(minute: i64) -> BizResult<Self> {
        if (0..=MINUTES_IN_DAY).contains(&minute) {
            Ok(Self {
                minute: minute as u16,
            })
        } else {
            Err(BizError::out_of_range("day minute", minute, 0, MINUTES_IN_DAY))
        }
    }

    /// For minutes already known to be within the day.
    pub(crate) fn from_raw(minute: i64) -> Self {
        debug_assert!((0..=MINUTES_IN_DAY).contains(&minute));
        Self {
            minute: minute as u16,
        }
    }

    pub fn from_hm(hour: u32, minute: u32) -> BizResult<Self> {
        if minute >= MINUTES_IN_HOUR as u32 {
            return Err(BizError::out_of_range(
                "minute",
                i64::from(minute),
                0,
                MINUTES_IN_HOUR - 1,
            ));
        }
        Self::new(i64::from(hour) * MINUTES_IN_HOUR + i64::from(minute))
    }

    pub fn from_hour(hour: u32) -> BizResult<Self> {
        Self::from_hm(hour, 0)
    }

    /// The minute of the day an instant falls on. Never `24:00`.
    pub fn from_instant<T: Timelike>(time: &T) -> Self {
        Self {
            minute: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    pub fn day_minute(self) -> i64 {
        i64::from(self.minute)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.minute) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minute) % 60
    }
}

impl TryFrom<i64> for DayTime {
    type Error = BizError;

    fn try_from(minute: i64) -> Result<Self, Self::Error> {
        Self::new(minute)
    }
}

/// Parses `HH:MM`, where `24:00` is the end of the day.
impl FromStr for DayTime {
    type Err = BizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| BizError::invalid_format("time of day", s))?;

        if minute.len() != 2 || hour.is_empty() || hour.len() > 2 {
            return Err(BizError::invalid_format("time of day", s));
        }

        let hour: u32 = hour
            .parse()
            .map_err(|_| BizError::invalid_format("time of day", s))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| BizError::invalid_format("time of day", s))?;

        Self::from_hm(hour, minute)
    }
}

impl Display for DayTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for DayTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
