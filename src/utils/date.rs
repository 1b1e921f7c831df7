use chrono::NaiveDate;

use crate::consts::{DATE_FORMAT, DAY_FIRST_FORMAT};

/// Textual layout a date control reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateStyle {
    /// YYYY-MM-DD, the value format of native date pickers
    Iso,
    /// DD-MM-YYYY, used by plain text inputs
    DayFirst,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Iso => DATE_FORMAT,
            DateStyle::DayFirst => DAY_FIRST_FORMAT,
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when `s` is three numeric groups of the given widths joined by `sep`.
fn split_numeric(s: &str, sep: char, widths: [usize; 3]) -> bool {
    let parts: Vec<&str> = s.split(sep).collect();
    parts.len() == 3
        && parts
            .iter()
            .zip(widths)
            .all(|(p, w)| p.len() == w && all_digits(p))
}

/// Parse a calendar date in one of the accepted layouts:
/// YYYY-MM-DD, DD-MM-YYYY or DD/MM/YYYY.
///
/// Returns `None` for anything else, including impossible dates such as
/// 31-02-2025. Callers treat `None` as "no date given".
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if split_numeric(s, '-', [4, 2, 2]) {
        return NaiveDate::parse_from_str(s, DATE_FORMAT).ok();
    }
    if split_numeric(s, '-', [2, 2, 4]) {
        return NaiveDate::parse_from_str(s, DAY_FIRST_FORMAT).ok();
    }
    if split_numeric(s, '/', [2, 2, 4]) {
        return NaiveDate::parse_from_str(s, "%d/%m/%Y").ok();
    }
    None
}

pub(crate) fn format_date(date: NaiveDate, style: DateStyle) -> String {
    date.format(style.pattern()).to_string()
}
