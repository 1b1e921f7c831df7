pub(crate) mod clock;
pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod timezone;

pub(crate) use clock::Clock;
pub(crate) use date::{DateStyle, format_date, parse_date};
pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use timezone::Timezone;
