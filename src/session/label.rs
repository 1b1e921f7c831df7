//! Session label parsing and formatting
//!
//! A label names one academic year, either as "YYYY-YY" or "YYYY-YYYY".

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::consts::SESSION_START_MONTH;

/// Start and end year of an academic session. `end_year > start_year` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub(crate) struct SessionYears {
    pub(crate) start_year: i32,
    pub(crate) end_year: i32,
}

impl SessionYears {
    fn new(start_year: i32, end_year: i32) -> Self {
        let end_year = if end_year > start_year {
            end_year
        } else {
            start_year + 1
        };
        Self {
            start_year,
            end_year,
        }
    }

    /// The session containing `date`: April onwards belongs to the session
    /// starting that year, January to March to the one before.
    pub(crate) fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() >= SESSION_START_MONTH {
            date.year()
        } else {
            date.year() - 1
        };
        Self::new(start_year, start_year + 1)
    }

    /// Shift by `n` academic years (negative for earlier sessions).
    pub(crate) fn offset(self, n: i32) -> Self {
        Self::new(self.start_year + n, self.start_year + n + 1)
    }

    /// Canonical "YYYY-YY" form.
    pub(crate) fn label(self) -> String {
        format!("{:04}-{:02}", self.start_year, self.end_year.rem_euclid(100))
    }
}

fn four_digit_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Parse a label without any fallback.
///
/// "YYYY-YY" carries the suffix into the start year's century; a suffix that
/// does not land after the start year (e.g. "2099-00") yields start + 1.
/// "YYYY-YYYY" is taken literally, with the same end > start guarantee.
pub(crate) fn parse_label(label: &str) -> Option<SessionYears> {
    let (head, tail) = label.trim().split_once('-')?;
    let start_year = four_digit_year(head)?;

    if tail.len() == 2 && tail.bytes().all(|b| b.is_ascii_digit()) {
        let suffix: i32 = tail.parse().ok()?;
        let century = start_year - start_year % 100;
        return Some(SessionYears::new(start_year, century + suffix));
    }

    let end_year = four_digit_year(tail)?;
    Some(SessionYears::new(start_year, end_year))
}

pub(crate) fn is_valid_label(label: &str) -> bool {
    parse_label(label).is_some()
}
