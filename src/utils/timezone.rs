use chrono::offset::Offset;
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Midnight at the start of `date` in this timezone.
    pub(crate) fn start_of_day(self, date: NaiveDate) -> DateTime<FixedOffset> {
        let midnight = date.and_time(NaiveTime::MIN);
        match self {
            Timezone::Local => first_instant_at_or_after(&Local, midnight),
            Timezone::Named(tz) => first_instant_at_or_after(&tz, midnight),
        }
    }
}

/// Resolve a wall-clock time to an instant. Ambiguous times take the earlier
/// instant; times skipped by a DST jump move forward to the first valid one.
fn first_instant_at_or_after<T: TimeZone>(tz: &T, naive: NaiveDateTime) -> DateTime<FixedOffset> {
    let mut candidate = naive;
    for _ in 0..8 {
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            return dt.fixed_offset();
        }
        candidate += TimeDelta::minutes(15);
    }
    Utc.from_utc_datetime(&naive).fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        for s in ["", "local", "LOCAL", "  Local  "] {
            assert!(matches!(Timezone::parse(Some(s)).unwrap(), Timezone::Local));
        }
    }

    #[test]
    fn parse_utc_variants() {
        for s in ["utc", "UTC", "z", "Z", "  UTC  "] {
            let tz = Timezone::parse(Some(s)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Asia/Kolkata")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Asia::Kolkata)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn to_fixed_offset_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let fixed = tz.to_fixed_offset(utc);
        // EDT is UTC-4 in June
        assert_eq!(fixed.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(fixed.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn start_of_day_uses_zone_offset() {
        let tz = Timezone::Named(chrono_tz::Asia::Kolkata);
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let start = tz.start_of_day(date);
        assert_eq!(start.offset().local_minus_utc(), 5 * 3600 + 1800);
        assert_eq!(start.to_rfc3339(), "2025-04-01T00:00:00+05:30");
        assert_eq!(
            start.with_timezone(&Utc).to_rfc3339(),
            "2025-03-31T18:30:00+00:00"
        );
    }

    #[test]
    fn start_of_day_skips_missing_midnight() {
        // Chile springs forward at 00:00 local time on the first Sunday of September.
        let tz = Timezone::Named(chrono_tz::America::Santiago);
        let date = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let start = tz.start_of_day(date);
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.format("%H:%M").to_string(), "01:00");
    }
}
