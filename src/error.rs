use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD, DD-MM-YYYY or DD/MM/YYYY)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid session label \"{input}\" (expected YYYY-YY or YYYY-YYYY)")]
    InvalidSessionLabel { input: String },

    #[error("Session list is empty")]
    EmptySessionList,

    #[error("Missing setting: {name}")]
    MissingSetting { name: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored value: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(test)]
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYY-MM-DD, DD-MM-YYYY or DD/MM/YYYY)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_label() {
        let e = AppError::InvalidSessionLabel {
            input: "banana".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid session label "banana" (expected YYYY-YY or YYYY-YYYY)"#
        );
    }

    #[test]
    fn app_error_from_store_error() {
        let store = StoreError::Unavailable("offline".to_string());
        let app: AppError = store.into();
        assert_eq!(app.to_string(), "Store unavailable: offline");
    }
}
