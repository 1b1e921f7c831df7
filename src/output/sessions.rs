use comfy_table::Color;
use serde::Serialize;

use crate::consts::DATE_FORMAT;
use crate::session::{ClampedRange, SessionConfig, SessionRange};

use super::format::{create_styled_table, format_markers, header_cell, styled_cell};

/// One selectable session, as shown by `list`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SessionRow {
    pub(crate) label: String,
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) current: bool,
    pub(crate) default: bool,
    pub(crate) active: bool,
}

impl SessionRow {
    pub(crate) fn new(range: &SessionRange, current: &str, default: Option<&str>, active: &str) -> Self {
        Self {
            label: range.label.clone(),
            start: range.start.format(DATE_FORMAT).to_string(),
            end: range.end.format(DATE_FORMAT).to_string(),
            current: range.label == current,
            default: default == Some(range.label.as_str()),
            active: range.label == active,
        }
    }
}

pub(crate) fn print_session_table(rows: &[SessionRow], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Session", use_color),
        header_cell("Starts", use_color),
        header_cell("Ends (exclusive)", use_color),
        header_cell("", use_color),
    ]);

    let active_color = if use_color { Some(Color::Green) } else { None };

    for row in rows {
        let color = if row.active { active_color } else { None };
        table.add_row(vec![
            styled_cell(&row.label, color, row.active),
            styled_cell(&row.start, None, false),
            styled_cell(&row.end, None, false),
            styled_cell(&format_markers(row.current, row.default, row.active), color, false),
        ]);
    }

    println!("{table}");
}

pub(crate) fn print_range(range: &SessionRange) {
    println!(
        "{}  {} .. {} (end exclusive)",
        range.label,
        range.start.format(DATE_FORMAT),
        range.end.format(DATE_FORMAT)
    );
    if range.fallback {
        println!("  (requested label not recognised, showing the current session)");
    }
}

pub(crate) fn print_clamped(range: &ClampedRange) {
    println!(
        "{}  {} .. {}",
        range.session_label,
        range.from.format(DATE_FORMAT),
        range.to.format(DATE_FORMAT)
    );
    if range.reset {
        println!("  (range was empty or inverted, using the whole session)");
    }
    if range.fallback {
        println!("  (requested label not recognised, using the current session)");
    }
}

pub(crate) fn print_shared_config(config: Option<&SessionConfig>) {
    match config {
        Some(config) => {
            println!("Sessions: {}", config.sessions.join(", "));
            println!("Default:  {}", config.default);
        }
        None => println!("No shared session configuration."),
    }
}
