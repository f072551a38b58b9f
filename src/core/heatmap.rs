//! Monthly heatmap of logged hours
//!
//! The grid is Monday-first: leading padding cells align day 1 under its
//! weekday column.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::core::types::Session;
use crate::utils::{days_in_month, first_of_month};

/// Lowest intensity a day with any logged time gets
pub(crate) const INTENSITY_FLOOR: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HeatmapCell {
    /// Day of month; `None` for leading padding
    pub(crate) day: Option<u32>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) total_hours: f64,
    pub(crate) intensity: f64,
    pub(crate) is_today: bool,
}

impl HeatmapCell {
    fn padding() -> Self {
        HeatmapCell {
            day: None,
            date: None,
            total_hours: 0.0,
            intensity: 0.0,
            is_today: false,
        }
    }

    pub(crate) fn is_padding(&self) -> bool {
        self.day.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthHeatmap {
    pub(crate) year: i32,
    /// Zero-based month
    pub(crate) month: u32,
    pub(crate) start_padding: usize,
    /// Largest daily total, never below 1
    pub(crate) max_hours: f64,
    pub(crate) cells: Vec<HeatmapCell>,
}

impl MonthHeatmap {
    pub(crate) fn days(&self) -> impl Iterator<Item = &HeatmapCell> {
        self.cells.iter().filter(|c| !c.is_padding())
    }

    pub(crate) fn total_hours(&self) -> f64 {
        self.days().map(|c| c.total_hours).sum()
    }

    pub(crate) fn active_days(&self) -> usize {
        self.days().filter(|c| c.total_hours > 0.0).count()
    }
}

/// Empty cells before day 1 in a Monday-first grid
pub(crate) fn start_padding(first: NaiveDate) -> usize {
    let sunday_based = first.weekday().num_days_from_sunday() as i64;
    (sunday_based - 1).rem_euclid(7) as usize
}

pub(crate) fn intensity(total_hours: f64, max_hours: f64) -> f64 {
    if total_hours > 0.0 {
        INTENSITY_FLOOR + (total_hours / max_hours) * (1.0 - INTENSITY_FLOOR)
    } else {
        0.0
    }
}

/// Build the heatmap for a zero-based `month` of `year`.
/// Returns an empty grid when the month index is out of range.
pub(crate) fn aggregate_month(
    sessions: &[Session],
    month: u32,
    year: i32,
    today: NaiveDate,
) -> MonthHeatmap {
    let Some(first) = first_of_month(year, month) else {
        log::warn!("month index {month} out of range, heatmap left empty");
        return MonthHeatmap {
            year,
            month,
            start_padding: 0,
            max_hours: 1.0,
            cells: Vec::new(),
        };
    };

    let mut daily_hours: HashMap<u32, f64> = HashMap::new();
    let mut max_hours: f64 = 1.0;
    for session in sessions
        .iter()
        .filter(|s| s.date.year() == year && s.date.month0() == month)
    {
        let hours = daily_hours.entry(session.date.day()).or_insert(0.0);
        *hours += session.hours();
        if *hours > max_hours {
            max_hours = *hours;
        }
    }

    let padding = start_padding(first);
    let day_count = days_in_month(year, month);
    let mut cells = Vec::with_capacity(padding + day_count as usize);
    cells.extend((0..padding).map(|_| HeatmapCell::padding()));

    for day in 1..=day_count {
        let date = first.with_day(day);
        let total_hours = daily_hours.get(&day).copied().unwrap_or(0.0);
        cells.push(HeatmapCell {
            day: Some(day),
            date,
            total_hours,
            intensity: intensity(total_hours, max_hours),
            is_today: date == Some(today),
        });
    }

    MonthHeatmap {
        year,
        month,
        start_padding: padding,
        max_hours,
        cells,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn session(date: NaiveDate, duration: u32) -> Session {
        Session {
            id: 0,
            date,
            start_time: "09:00".parse().unwrap(),
            duration_min: duration,
            quality: None,
        }
    }

    #[test]
    fn padding_follows_first_weekday() {
        // 2024-05-01 is a Wednesday
        assert_eq!(start_padding(d(2024, 5, 1)), 2);
        // 2024-01-01 is a Monday
        assert_eq!(start_padding(d(2024, 1, 1)), 0);
        // 2024-09-01 is a Sunday
        assert_eq!(start_padding(d(2024, 9, 1)), 6);
        // 2024-06-01 is a Saturday
        assert_eq!(start_padding(d(2024, 6, 1)), 5);
    }

    #[test]
    fn grid_has_padding_then_every_day() {
        let map = aggregate_month(&[], 8, 2024, d(2000, 1, 1));
        assert_eq!(map.start_padding, 6);
        assert_eq!(map.cells.len(), 6 + 30);
        assert!(map.cells[..6].iter().all(HeatmapCell::is_padding));
        assert_eq!(map.cells[6].day, Some(1));
        assert_eq!(map.cells.last().and_then(|c| c.day), Some(30));
    }

    #[test]
    fn leap_february_has_29_days() {
        let map = aggregate_month(&[], 1, 2024, d(2000, 1, 1));
        assert_eq!(map.days().count(), 29);
        let map = aggregate_month(&[], 1, 2023, d(2000, 1, 1));
        assert_eq!(map.days().count(), 28);
    }

    #[test]
    fn empty_month_has_zero_intensity_and_floor_max() {
        let map = aggregate_month(&[], 2, 2024, d(2000, 1, 1));
        assert_eq!(map.max_hours, 1.0);
        assert!(map.days().all(|c| c.total_hours == 0.0 && c.intensity == 0.0));
        assert_eq!(map.total_hours(), 0.0);
    }

    #[test]
    fn intensity_scales_with_floor() {
        let sessions = vec![
            session(d(2024, 3, 5), 240),
            session(d(2024, 3, 5), 60),
            session(d(2024, 3, 6), 5),
            session(d(2024, 3, 7), 150),
        ];
        let map = aggregate_month(&sessions, 2, 2024, d(2000, 1, 1));
        assert_eq!(map.max_hours, 5.0);

        let cell = |day: u32| map.days().find(|c| c.day == Some(day)).unwrap();
        assert_eq!(cell(5).total_hours, 5.0);
        assert_eq!(cell(5).intensity, 1.0);
        assert!(cell(6).intensity >= INTENSITY_FLOOR);
        assert!((cell(7).intensity - (0.1 + 0.5 * 0.9)).abs() < 1e-9);
        assert_eq!(cell(8).intensity, 0.0);
        assert_eq!(map.active_days(), 3);
    }

    #[test]
    fn small_month_totals_use_unit_max() {
        let sessions = vec![session(d(2024, 3, 5), 30)];
        let map = aggregate_month(&sessions, 2, 2024, d(2000, 1, 1));
        assert_eq!(map.max_hours, 1.0);
        let cell = map.days().find(|c| c.day == Some(5)).unwrap();
        assert!((cell.intensity - 0.55).abs() < 1e-9);
    }

    #[test]
    fn other_months_and_years_are_excluded() {
        let sessions = vec![
            session(d(2023, 3, 5), 60),
            session(d(2024, 4, 5), 60),
            session(d(2024, 3, 31), 60),
        ];
        let map = aggregate_month(&sessions, 2, 2024, d(2000, 1, 1));
        assert_eq!(map.total_hours(), 1.0);
        assert_eq!(map.active_days(), 1);
    }

    #[test]
    fn marks_today() {
        let map = aggregate_month(&[], 2, 2024, d(2024, 3, 15));
        let today: Vec<_> = map.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, Some(15));

        let other = aggregate_month(&[], 3, 2024, d(2024, 3, 15));
        assert!(other.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn out_of_range_month_is_empty() {
        let map = aggregate_month(&[], 12, 2024, d(2024, 3, 15));
        assert!(map.cells.is_empty());
    }

    #[test]
    fn intensity_function() {
        assert_eq!(intensity(0.0, 3.0), 0.0);
        assert_eq!(intensity(3.0, 3.0), 1.0);
        assert!(intensity(0.001, 10.0) >= 0.1);
    }
}
