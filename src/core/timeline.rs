//! Day timeline layout
//!
//! One interval per session, positioned in decimal hours and tagged with a
//! quality-derived color category.

use chrono::NaiveDate;

use crate::consts::NO_QUALITY;
use crate::core::types::Session;

const DAY_END_HOUR: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorCategory {
    High,
    Low,
    Neutral,
}

impl ColorCategory {
    /// High from 7 up, Low at 3 or below, Neutral otherwise.
    /// An unrated session is Neutral, never Low.
    pub(crate) fn from_quality(quality: Option<i64>) -> Self {
        match quality {
            Some(q) if q >= 7 => ColorCategory::High,
            Some(q) if q <= 3 => ColorCategory::Low,
            _ => ColorCategory::Neutral,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ColorCategory::High => "HIGH",
            ColorCategory::Low => "LOW",
            ColorCategory::Neutral => "NEUTRAL",
        }
    }

    pub(crate) fn fill(self) -> &'static str {
        match self {
            ColorCategory::High => "rgba(25, 135, 84, 0.7)",
            ColorCategory::Low => "rgba(220, 53, 69, 0.7)",
            ColorCategory::Neutral => "rgba(255, 193, 7, 0.7)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TimelineInterval {
    pub(crate) start_hour: f64,
    /// Clamped to 24.0 for sessions running past midnight
    pub(crate) end_hour: f64,
    pub(crate) category: ColorCategory,
    pub(crate) quality_label: String,
    pub(crate) duration_min: u32,
    pub(crate) start_time_label: String,
    pub(crate) crosses_midnight: bool,
}

impl TimelineInterval {
    fn from_session(session: &Session) -> Self {
        let start_hour = session.start_time.hour_decimal();
        let raw_end = start_hour + session.hours();
        let crosses_midnight = raw_end > DAY_END_HOUR;

        TimelineInterval {
            start_hour,
            end_hour: raw_end.min(DAY_END_HOUR),
            category: ColorCategory::from_quality(session.quality),
            quality_label: session
                .quality
                .map_or_else(|| NO_QUALITY.to_string(), |q| q.to_string()),
            duration_min: session.duration_min,
            start_time_label: session.start_time.to_string(),
            crosses_midnight,
        }
    }
}

/// Sessions logged on `date`, in stored order
pub(crate) fn sessions_on(sessions: &[Session], date: NaiveDate) -> Vec<Session> {
    sessions.iter().filter(|s| s.is_on(date)).cloned().collect()
}

/// Lay out one day's sessions, keeping input order
pub(crate) fn build_timeline(day_sessions: &[Session]) -> Vec<TimelineInterval> {
    day_sessions.iter().map(TimelineInterval::from_session).collect()
}

pub(crate) fn sorted_by_start(mut intervals: Vec<TimelineInterval>) -> Vec<TimelineInterval> {
    intervals.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));
    intervals
}
