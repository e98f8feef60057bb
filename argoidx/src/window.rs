//! Query date windows.

use crate::IndexError;
use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

/// A date limit with month or day granularity.
///
/// `"2021-03"` covers the whole month, `"2021-03-15"` the whole day.
/// Used as the inclusive lower or exclusive upper edge of a
/// [`DateWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBound {
    start: NaiveDateTime,
    end_exclusive: NaiveDateTime,
}

impl FromStr for DateBound {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, IndexError> {
        if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let next = day
                .succ_opt()
                .ok_or_else(|| IndexError::DateFormat(s.to_string()))?;
            return Ok(Self {
                start: start_of(day),
                end_exclusive: start_of(next),
            });
        }
        if let Ok(month) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            let next = month
                .checked_add_months(Months::new(1))
                .ok_or_else(|| IndexError::DateFormat(s.to_string()))?;
            return Ok(Self {
                start: start_of(month),
                end_exclusive: start_of(next),
            });
        }
        Err(IndexError::DateFormat(s.to_string()))
    }
}

/// Half-open query window: `since` inclusive, `until` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    since: NaiveDateTime,
    until: Option<NaiveDateTime>,
}

impl DateWindow {
    /// Everything from the start of `bound` onward, with an implicit
    /// open upper limit.
    pub fn since(bound: DateBound) -> Self {
        Self {
            since: bound.start,
            until: None,
        }
    }

    /// Everything from the start of `since` through the end of
    /// `until`.
    pub fn between(since: DateBound, until: DateBound) -> Self {
        Self {
            since: since.start,
            until: Some(until.end_exclusive),
        }
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.since && self.until.map_or(true, |until| t < until)
    }
}

fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
