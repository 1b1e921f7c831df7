//! Date form controls
//!
//! Anything with a readable and writable textual value can act as a date
//! control. Native date pickers hold ISO dates, plain text inputs hold
//! day-first dates.

use crate::utils::{DateStyle, format_date};

use super::range::SessionRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlKind {
    NativeDate,
    Text,
}

impl ControlKind {
    pub(crate) fn date_style(self) -> DateStyle {
        match self {
            ControlKind::NativeDate => DateStyle::Iso,
            ControlKind::Text => DateStyle::DayFirst,
        }
    }
}

pub(crate) trait DateControl {
    fn value(&self) -> String;

    fn set_value(&mut self, value: String);

    fn kind(&self) -> ControlKind;
}

/// In-memory control used when the value comes from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextControl {
    value: String,
    kind: ControlKind,
}

impl TextControl {
    pub(crate) fn new(value: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

impl DateControl for TextControl {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn kind(&self) -> ControlKind {
        self.kind
    }
}

fn fill(control: &mut dyn DateControl, date: chrono::NaiveDate, force: bool) {
    if force || control.value().trim().is_empty() {
        let text = format_date(date, control.kind().date_style());
        control.set_value(text);
    }
}

/// Write the session's start and end dates into two controls. Controls that
/// already hold a value are left alone unless `force` is set.
pub(crate) fn apply_default_range(
    from: &mut dyn DateControl,
    to: &mut dyn DateControl,
    range: &SessionRange,
    force: bool,
) {
    fill(from, range.start.date_naive(), force);
    fill(to, range.end.date_naive(), force);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::label::parse_label;
    use crate::utils::Timezone;

    fn range() -> SessionRange {
        SessionRange::new(
            "2025-26".to_string(),
            parse_label("2025-26").unwrap(),
            Timezone::Named(chrono_tz::UTC),
            false,
        )
    }

    #[test]
    fn fills_blank_controls_in_their_own_style() {
        let mut from = TextControl::new("", ControlKind::NativeDate);
        let mut to = TextControl::new("  ", ControlKind::Text);
        apply_default_range(&mut from, &mut to, &range(), false);
        assert_eq!(from.value(), "2025-04-01");
        assert_eq!(to.value(), "01-04-2026");
    }

    #[test]
    fn keeps_existing_values_without_force() {
        let mut from = TextControl::new("2025-06-01", ControlKind::NativeDate);
        let mut to = TextControl::new("", ControlKind::NativeDate);
        apply_default_range(&mut from, &mut to, &range(), false);
        assert_eq!(from.value(), "2025-06-01");
        assert_eq!(to.value(), "2026-04-01");
    }

    #[test]
    fn force_overwrites_existing_values() {
        let mut from = TextControl::new("01-06-2025", ControlKind::Text);
        let mut to = TextControl::new("01-07-2025", ControlKind::Text);
        apply_default_range(&mut from, &mut to, &range(), true);
        assert_eq!(from.value(), "01-04-2025");
        assert_eq!(to.value(), "01-04-2026");
    }
}
