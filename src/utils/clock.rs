use chrono::{NaiveDate, Utc};

use super::Timezone;

/// Source of "today" for session computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub(crate) fn today(self, timezone: Timezone) -> NaiveDate {
        match self {
            Clock::System => timezone.to_fixed_offset(Utc::now()).date_naive(),
            Clock::Fixed(date) => date,
        }
    }
}
