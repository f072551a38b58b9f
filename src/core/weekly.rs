//! Rolling 7-day window aggregation
//!
//! Buckets sessions into the seven days ending at the window-end date and
//! prepares the parallel arrays the weekly chart is drawn from.

use chrono::NaiveDate;

use crate::core::types::Session;
use crate::utils::{add_days, weekday_long, weekday_short};

pub(crate) const WINDOW_DAYS: i64 = 7;

/// Statistics for one calendar day of the window
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DailyStat {
    pub(crate) date: NaiveDate,
    pub(crate) weekday_label: String,
    pub(crate) session_count: usize,
    pub(crate) total_hours: f64,
    /// Mean of the rated sessions; 0 when the day has none
    pub(crate) average_quality: f64,
    pub(crate) rated_count: usize,
    pub(crate) is_selected: bool,
}

impl DailyStat {
    /// The average for display; `None` tells an unrated day apart from a 0 average
    pub(crate) fn rated_average(&self) -> Option<f64> {
        (self.rated_count > 0).then_some(self.average_quality)
    }
}

/// Bar styling derived from the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BarStyle {
    pub(crate) fill: &'static str,
    pub(crate) border_width: u8,
}

impl BarStyle {
    pub(crate) const SELECTED: BarStyle = BarStyle {
        fill: "rgba(59, 104, 83, 0.9)",
        border_width: 2,
    };
    pub(crate) const NORMAL: BarStyle = BarStyle {
        fill: "rgba(81, 144, 114, 0.6)",
        border_width: 0,
    };

    fn for_selection(selected: bool) -> Self {
        if selected {
            Self::SELECTED
        } else {
            Self::NORMAL
        }
    }
}

/// Chart-ready arrays, index-aligned with `WeeklyWindow::days`
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct WeeklyChart {
    pub(crate) labels: Vec<String>,
    pub(crate) hours: Vec<f64>,
    pub(crate) quality: Vec<f64>,
    pub(crate) styles: Vec<BarStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WeeklyWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) selected: NaiveDate,
    /// Oldest first
    pub(crate) days: Vec<DailyStat>,
    pub(crate) chart: WeeklyChart,
}

impl WeeklyWindow {
    pub(crate) fn total_sessions(&self) -> usize {
        self.days.iter().map(|d| d.session_count).sum()
    }

    pub(crate) fn total_hours(&self) -> f64 {
        self.days.iter().map(|d| d.total_hours).sum()
    }

    pub(crate) fn selected_day(&self) -> Option<&DailyStat> {
        self.days.iter().find(|d| d.is_selected)
    }
}

/// Mean quality over the sessions that carry a rating, 0 when none do
pub(crate) fn average_quality<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> f64 {
    // Summed as f64: imported ratings are unbounded i64 values
    let (sum, rated) = sessions
        .into_iter()
        .filter_map(|s| s.quality)
        .fold((0.0f64, 0u32), |(sum, n), q| (sum + q as f64, n + 1));
    if rated == 0 {
        0.0
    } else {
        sum / f64::from(rated)
    }
}

pub(crate) fn daily_stat(sessions: &[Session], date: NaiveDate, selected: NaiveDate) -> DailyStat {
    let day_sessions: Vec<&Session> = sessions.iter().filter(|s| s.is_on(date)).collect();
    let total_minutes: u64 = day_sessions.iter().map(|s| u64::from(s.duration_min)).sum();

    DailyStat {
        date,
        weekday_label: weekday_long(date),
        session_count: day_sessions.len(),
        total_hours: total_minutes as f64 / 60.0,
        average_quality: average_quality(day_sessions.iter().copied()),
        rated_count: day_sessions.iter().filter(|s| s.quality.is_some()).count(),
        is_selected: date == selected,
    }
}

/// Aggregate the seven days ending at `window_end` (inclusive), oldest first
pub(crate) fn aggregate_week(
    sessions: &[Session],
    window_end: NaiveDate,
    selected: NaiveDate,
) -> WeeklyWindow {
    let start = add_days(window_end, -(WINDOW_DAYS - 1));
    let mut days = Vec::with_capacity(WINDOW_DAYS as usize);
    let mut chart = WeeklyChart::default();

    for offset in 0..WINDOW_DAYS {
        let date = add_days(start, offset);
        let stat = daily_stat(sessions, date, selected);

        chart.labels.push(weekday_short(date));
        chart.hours.push(stat.total_hours);
        chart.quality.push(stat.average_quality);
        chart.styles.push(BarStyle::for_selection(stat.is_selected));
        days.push(stat);
    }

    log::debug!(
        "weekly window {start}..{window_end}: {} sessions",
        days.iter().map(|d| d.session_count).sum::<usize>()
    );

    WeeklyWindow {
        start,
        end: window_end,
        selected,
        days,
        chart,
    }
}
