/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) const MINUTES_PER_DAY: i32 = 1440;

/// Length of a freshly prefilled session
pub(crate) const DEFAULT_DURATION_MIN: u32 = 25;

/// Shown in place of a missing quality rating
pub(crate) const NO_QUALITY: &str = "-";

pub(crate) const EXPORT_FILE_PREFIX: &str = "pomodoro_sessions_";
