use chrono::NaiveDateTime;
use std::io;

pub type BizResult<T> = Result<T, BizError>;

#[derive(Debug, thiserror::Error)]
pub enum BizError {
    /// The input could not be read as the expected kind of value at all.
    #[error("invalid {what}: '{input}'")]
    InvalidFormat { what: &'static str, input: String },

    /// The input was well formed but outside the accepted range.
    #[error("{what} {value} is out of range ({min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("'{0}' isn't a day of the week")]
    UnknownSymbol(String),

    #[error("segment ends ({end}) before it starts ({start})")]
    InvertedSegment {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("interval ends ({end}) before it starts ({start})")]
    InvertedInterval { start: String, end: String },

    #[error("the schedule has no business time left to cover the requested duration")]
    NoBusinessTime,

    #[error("invalid schedule configuration: {0}")]
    InvalidConfig(String),

    #[error("there was an i/o error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    ChronoParse(#[from] chrono::ParseError),
}

impl BizError {
    pub(crate) fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }

    pub(crate) fn inverted_interval<T: std::fmt::Display>(start: T, end: T) -> Self {
        Self::InvertedInterval {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub(crate) fn invalid_format(what: &'static str, input: &str) -> Self {
        Self::InvalidFormat {
            what,
            input: input.to_string(),
        }
    }
}
