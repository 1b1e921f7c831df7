mod format;
mod json;
mod sessions;

pub(crate) use json::print_json;
pub(crate) use sessions::{
    SessionRow, print_clamped, print_range, print_session_table, print_shared_config,
};
