//! Institution-wide session configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::AppError;

use super::label::is_valid_label;

/// Shared list of sessions plus the default. Sessions are unique and sorted;
/// `default` is a member of `sessions` whenever the list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SessionConfig {
    #[serde(default)]
    pub(crate) sessions: Vec<String>,
    #[serde(default)]
    pub(crate) default: String,
}

fn coerce_default(sessions: &[String], default: Option<String>) -> String {
    match default {
        Some(d) if sessions.contains(&d) => d,
        Some(d) if sessions.is_empty() => d,
        _ => sessions.last().cloned().unwrap_or_default(),
    }
}

impl SessionConfig {
    /// Validate and normalize a configuration about to be saved.
    pub(crate) fn normalize<I, S>(sessions: I, default: Option<&str>) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = BTreeSet::new();
        for raw in sessions {
            let label = raw.as_ref().trim();
            if label.is_empty() {
                continue;
            }
            if !is_valid_label(label) {
                return Err(AppError::InvalidSessionLabel {
                    input: label.to_string(),
                });
            }
            unique.insert(label.to_string());
        }
        if unique.is_empty() {
            return Err(AppError::EmptySessionList);
        }

        let sessions: Vec<String> = unique.into_iter().collect();
        let default = coerce_default(&sessions, default.map(|d| d.trim().to_string()));
        Ok(Self { sessions, default })
    }

    /// Lenient cleanup of a value read back from the store: malformed
    /// entries are dropped instead of rejected.
    pub(crate) fn sanitize(self) -> Self {
        let sessions: Vec<String> = self
            .sessions
            .iter()
            .map(|s| s.trim())
            .filter(|s| is_valid_label(s))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let default = coerce_default(&sessions, Some(self.default.trim().to_string()));
        Self { sessions, default }
    }

    /// The default label, if it is usable.
    pub(crate) fn default_label(&self) -> Option<&str> {
        let valid = if self.sessions.is_empty() {
            is_valid_label(&self.default)
        } else {
            self.sessions.contains(&self.default)
        };
        valid.then_some(self.default.as_str())
    }
}
