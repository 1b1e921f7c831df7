//! Clamping arbitrary date ranges into a session window

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::utils::{Timezone, parse_date};

use super::control::DateControl;
use super::range::SessionRange;

/// One end of a requested range.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum DateInput {
    #[default]
    Absent,
    At(DateTime<FixedOffset>),
    Day(NaiveDate),
    /// Raw text from a form field; blank or unparseable text counts as absent.
    Text(String),
}

impl DateInput {
    /// Read the current textual value of a date control.
    pub(crate) fn from_control(control: &dyn DateControl) -> Self {
        DateInput::Text(control.value())
    }

    fn resolve(&self, timezone: Timezone) -> Option<DateTime<FixedOffset>> {
        match self {
            DateInput::Absent => None,
            DateInput::At(t) => Some(*t),
            DateInput::Day(date) => Some(timezone.start_of_day(*date)),
            DateInput::Text(s) => parse_date(s).map(|date| timezone.start_of_day(date)),
        }
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Day(date)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(t: DateTime<FixedOffset>) -> Self {
        DateInput::At(t)
    }
}

/// A range to clamp. Without a session label the active session is used.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClampRequest {
    pub(crate) from: DateInput,
    pub(crate) to: DateInput,
    pub(crate) session_label: Option<String>,
}

impl ClampRequest {
    pub(crate) fn new(
        from: impl Into<DateInput>,
        to: impl Into<DateInput>,
        session_label: Option<&str>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            session_label: session_label.map(str::to_string),
        }
    }

    /// Build a request from two form controls.
    pub(crate) fn from_controls(
        from: &dyn DateControl,
        to: &dyn DateControl,
        session_label: Option<&str>,
    ) -> Self {
        Self::new(
            DateInput::from_control(from),
            DateInput::from_control(to),
            session_label,
        )
    }
}

/// Result of clamping. Always satisfies `start <= from < to <= end` for the
/// resolved session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ClampedRange {
    pub(crate) from: DateTime<FixedOffset>,
    pub(crate) to: DateTime<FixedOffset>,
    pub(crate) from_iso: String,
    pub(crate) to_iso: String,
    pub(crate) session_label: String,
    /// The inputs collapsed or inverted and were replaced by the full session.
    pub(crate) reset: bool,
    /// The session label was malformed and the current session was used.
    pub(crate) fallback: bool,
}

fn to_iso(t: DateTime<FixedOffset>) -> String {
    t.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Clamp `from`/`to` into `range`. Missing ends default to the session
/// boundaries; if the clamped pair is empty or inverted, the whole session
/// is returned.
pub(crate) fn clamp_to_session(
    range: &SessionRange,
    from: &DateInput,
    to: &DateInput,
    timezone: Timezone,
) -> ClampedRange {
    let from = range.clamp(from.resolve(timezone).unwrap_or(range.start));
    let to = range.clamp(to.resolve(timezone).unwrap_or(range.end));

    let (from, to, reset) = if from < to {
        (from, to, false)
    } else {
        (range.start, range.end, true)
    };

    ClampedRange {
        from,
        to,
        from_iso: to_iso(from),
        to_iso: to_iso(to),
        session_label: range.label.clone(),
        reset,
        fallback: range.fallback,
    }
}
