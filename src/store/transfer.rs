//! JSON export and validated import

use chrono::NaiveDate;

use crate::consts::EXPORT_FILE_PREFIX;
use crate::core::Session;
use crate::error::ImportFormatError;
use crate::utils::format_date;

/// Validate imported JSON: it must be an array and every element a session record
pub(crate) fn parse_import(content: &str) -> Result<Vec<Session>, ImportFormatError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(ImportFormatError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

pub(crate) fn export_json(sessions: &[Session]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(sessions)
}

/// e.g. `pomodoro_sessions_2024-03-10.json`
pub(crate) fn export_file_name(today: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.json", format_date(today))
}
