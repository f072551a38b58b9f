use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid time \"{input}\" (expected HH:MM)")]
    InvalidTime { input: String },

    #[error("Invalid month \"{input}\" (expected YYYY-MM)")]
    InvalidMonth { input: String },
}

#[derive(Debug, Error)]
pub(crate) enum ImportFormatError {
    #[error("Invalid JSON file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid JSON file: expected an array of sessions")]
    NotAnArray,
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Corrupt session data in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt session row {id}: {reason}")]
    Row { id: i64, reason: String },

    #[error("No session id left after {max}")]
    IdsExhausted { max: i64 },
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Import(#[from] ImportFormatError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize sessions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_date() {
        let e = ParseError::InvalidDate {
            input: "2024-3-x".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "2024-3-x" (expected YYYY-MM-DD)"#
        );
    }

    #[test]
    fn parse_error_display_time() {
        let e = ParseError::InvalidTime {
            input: "25:00".to_string(),
        };
        assert_eq!(e.to_string(), r#"Invalid time "25:00" (expected HH:MM)"#);
    }

    #[test]
    fn import_error_not_array() {
        assert_eq!(
            ImportFormatError::NotAnArray.to_string(),
            "Invalid JSON file: expected an array of sessions"
        );
    }

    #[test]
    fn app_error_from_parse_error() {
        let parse = ParseError::InvalidMonth {
            input: "2024-13".to_string(),
        };
        let app: AppError = parse.into();
        assert_eq!(app.to_string(), r#"Invalid month "2024-13" (expected YYYY-MM)"#);
    }

    #[test]
    fn ids_exhausted_names_the_largest_id() {
        let app: AppError = StoreError::IdsExhausted { max: i64::MAX }.into();
        assert_eq!(
            app.to_string(),
            format!("No session id left after {}", i64::MAX)
        );
    }

    #[test]
    fn app_error_from_import_error() {
        let app: AppError = ImportFormatError::NotAnArray.into();
        assert!(app.to_string().starts_with("Invalid JSON file"));
    }
}
