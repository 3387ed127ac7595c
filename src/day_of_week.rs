use crate::day_time::{DayTime, MINUTES_IN_DAY};
use crate::week_time::WeekTime;
use crate::{BizError, BizResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const SYMBOLS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// One of the seven days of the week, Sunday (`0`) through Saturday (`6`).
///
/// Days only compare with other days. Comparing against a bare integer doesn't type-check:
///
/// ```compile_fail
/// use bizhours::DayOfWeek;
///
/// let _ = DayOfWeek::MONDAY < 1;
/// ```
///
/// and neither does building a day out of something that isn't a number:
///
/// ```compile_fail
/// use bizhours::DayOfWeek;
/// use std::convert::TryFrom;
///
/// let _ = DayOfWeek::try_from(Vec::<u8>::new());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfWeek {
    wday: u8,
}

impl DayOfWeek {
    pub const SUNDAY: Self = Self { wday: 0 };
    pub const MONDAY: Self = Self { wday: 1 };
    pub const TUESDAY: Self = Self { wday: 2 };
    pub const WEDNESDAY: Self = Self { wday: 3 };
    pub const THURSDAY: Self = Self { wday: 4 };
    pub const FRIDAY: Self = Self { wday: 5 };
    pub const SATURDAY: Self = Self { wday: 6 };

    pub const ALL: [Self; 7] = [
        Self::SUNDAY,
        Self::MONDAY,
        Self::TUESDAY,
        Self::WEDNESDAY,
        Self::THURSDAY,
        Self::FRIDAY,
        Self::SATURDAY,
    ];

    pub fn new(wday: i64) -> BizResult<Self> {
        if (0..7).contains(&wday) {
            Ok(Self { wday: wday as u8 })
        } else {
            Err(BizError::out_of_range("day of the week", wday, 0, 6))
        }
    }

    pub fn from_time(time: &NaiveDateTime) -> Self {
        Self::from_date(&time.date())
    }

    pub fn from_date(date: &NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Looks a day up by its three-letter tag (`"wed"`), ignoring case.
    pub fn from_symbol(symbol: &str) -> BizResult<Self> {
        let lowered = symbol.trim().to_lowercase();
        SYMBOLS
            .iter()
            .position(|s| *s == lowered)
            .map(|wday| Self { wday: wday as u8 })
            .ok_or_else(|| BizError::UnknownSymbol(symbol.to_string()))
    }

    pub fn first() -> Self {
        Self::SUNDAY
    }

    pub fn last() -> Self {
        Self::SATURDAY
    }

    pub fn wday(self) -> u8 {
        self.wday
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self.wday as usize]
    }

    pub fn start_minute(self) -> WeekTime {
        WeekTime::from_raw(i64::from(self.wday) * MINUTES_IN_DAY)
    }

    pub fn end_minute(self) -> WeekTime {
        WeekTime::from_raw(self.start_minute().week_minute() + MINUTES_IN_DAY)
    }

    /// True if the week minute falls on this day. The boundary minute shared with the next day
    /// counts as this day's end, so both `start_minute` and `end_minute` are contained.
    pub fn contains(self, week_time: WeekTime) -> bool {
        self.start_minute() <= week_time && week_time <= self.end_minute()
    }

    pub fn week_minute(self, day_time: DayTime) -> WeekTime {
        WeekTime::from_raw(self.start_minute().week_minute() + day_time.day_minute())
    }

    /// Inverse of [`DayOfWeek::week_minute`].
    ///
    /// A day boundary only reads as `00:00` when it's this day's own start; every other boundary
    /// reads as the end of a day (`24:00`).
    pub fn day_minute(self, week_time: WeekTime) -> DayTime {
        let offset = (week_time.week_minute() - self.start_minute().week_minute())
            .rem_euclid(MINUTES_IN_DAY);

        if offset == 0 && week_time != self.start_minute() {
            DayTime::ENDNIGHT
        } else {
            DayTime::from_raw(offset)
        }
    }

    /// The day after this one, wrapping Saturday around to Sunday.
    pub fn succ(self) -> Self {
        Self {
            wday: (self.wday + 1) % 7,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self {
            wday: weekday.num_days_from_sunday() as u8,
        }
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = BizError;

    fn try_from(wday: i64) -> Result<Self, Self::Error> {
        Self::new(wday)
    }
}

impl TryFrom<&str> for DayOfWeek {
    type Error = BizError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Strict integer parse: `"1"` is Monday, `"1one"` is a format error and `"7"` a range error.
impl FromStr for DayOfWeek {
    type Err = BizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wday: i64 = s
            .trim()
            .parse()
            .map_err(|_| BizError::invalid_format("day of the week", s))?;
        Self::new(wday)
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();
        write!(f, "{}{}", symbol[..1].to_uppercase(), &symbol[1..])
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DayVisitor;

        impl<'de> de::Visitor<'de> for DayVisitor {
            type Value = DayOfWeek;

            fn expecting(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "a weekday tag like \"mon\" or a number from 0 to 6")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                DayOfWeek::new(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                let v = i64::try_from(v).map_err(E::custom)?;
                DayOfWeek::new(v).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                DayOfWeek::from_symbol(v)
                    .or_else(|_| v.parse())
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DayVisitor)
    }
}
