/// ISO date format used by native date pickers and JSON output: "2025-04-01"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day-first format used by plain text date inputs: "01-04-2025"
pub(crate) const DAY_FIRST_FORMAT: &str = "%d-%m-%Y";

/// Settings-store key holding the shared session configuration
pub(crate) const SHARED_CONFIG_KEY: &str = "academic_sessions";

/// Device-store key holding the locally selected session
pub(crate) const ACTIVE_SESSION_KEY: &str = "active_session";

/// Academic sessions start on April 1
pub(crate) const SESSION_START_MONTH: u32 = 4;

/// Labels carry a four-digit start year
pub(crate) const MIN_START_YEAR: i32 = 0;
pub(crate) const MAX_START_YEAR: i32 = 9999;

pub(crate) const DEFAULT_PAST_SESSIONS: u32 = 6;
pub(crate) const DEFAULT_FUTURE_SESSIONS: u32 = 1;
