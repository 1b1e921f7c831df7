use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::consts::SESSION_START_MONTH;
use crate::utils::Timezone;

use super::label::SessionYears;

/// Half-open interval `[start, end)` covered by one academic session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SessionRange {
    pub(crate) label: String,
    pub(crate) start_year: i32,
    pub(crate) end_year: i32,
    pub(crate) start: DateTime<FixedOffset>,
    pub(crate) end: DateTime<FixedOffset>,
    /// Set when the requested label was malformed and the current session
    /// was used instead.
    pub(crate) fallback: bool,
}

fn session_boundary(year: i32, timezone: Timezone) -> DateTime<FixedOffset> {
    let date = NaiveDate::from_ymd_opt(year, SESSION_START_MONTH, 1).unwrap_or(NaiveDate::MAX);
    timezone.start_of_day(date)
}

impl SessionRange {
    pub(crate) fn new(
        label: String,
        years: SessionYears,
        timezone: Timezone,
        fallback: bool,
    ) -> Self {
        Self {
            label,
            start_year: years.start_year,
            end_year: years.end_year,
            start: session_boundary(years.start_year, timezone),
            end: session_boundary(years.end_year, timezone),
            fallback,
        }
    }

    /// Snap `t` into `[start, end]`.
    pub(crate) fn clamp(&self, t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        if t < self.start {
            self.start
        } else if t > self.end {
            self.end
        } else {
            t
        }
    }
}
