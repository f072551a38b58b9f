use chrono::NaiveDate;

use crate::consts::MINUTES_PER_DAY;
use crate::core::{ColorCategory, TimelineInterval};
use crate::output::format::{
    ANSI_RESET, TableOptions, category_ansi, category_color, create_styled_table, header_cell,
    print_summary_line, right_cell, styled_cell,
};
use crate::utils::{format_date, minutes_to_time};

/// Visible hour range of the track
const TRACK_START_HOUR: u32 = 6;
const TRACK_END_HOUR: u32 = 22;
const COLUMNS_PER_HOUR: u32 = 4;
const LABEL_EVERY_HOURS: u32 = 2;

fn track_glyph(category: ColorCategory) -> char {
    match category {
        ColorCategory::High => '█',
        ColorCategory::Neutral => '▒',
        ColorCategory::Low => '░',
    }
}

fn end_label(interval: &TimelineInterval) -> String {
    // The real end, not the clamped bar end
    let end_minutes = ((interval.start_hour * 60.0).round() as i64
        + i64::from(interval.duration_min))
    .rem_euclid(i64::from(MINUTES_PER_DAY));
    let label = minutes_to_time(end_minutes as i32);
    if interval.crosses_midnight {
        format!("{label} (+1)")
    } else {
        label
    }
}

fn total_minutes(intervals: &[TimelineInterval]) -> u64 {
    intervals.iter().map(|iv| u64::from(iv.duration_min)).sum()
}

/// Category per track column; later intervals draw over earlier ones
fn track_columns(intervals: &[TimelineInterval]) -> Vec<Option<ColorCategory>> {
    let width = ((TRACK_END_HOUR - TRACK_START_HOUR) * COLUMNS_PER_HOUR) as usize;
    let mut columns = vec![None; width];
    for (i, slot) in columns.iter_mut().enumerate() {
        let mid = f64::from(TRACK_START_HOUR) + (i as f64 + 0.5) / f64::from(COLUMNS_PER_HOUR);
        *slot = intervals
            .iter()
            .rev()
            .find(|iv| iv.start_hour <= mid && mid < iv.end_hour)
            .map(|iv| iv.category);
    }
    columns
}

pub(super) fn render_track(intervals: &[TimelineInterval], use_color: bool) -> String {
    let mut line = String::new();
    for slot in track_columns(intervals) {
        match slot {
            Some(category) if use_color => {
                line.push_str(category_ansi(category));
                line.push(track_glyph(category));
                line.push_str(ANSI_RESET);
            }
            Some(category) => line.push(track_glyph(category)),
            None => line.push('·'),
        }
    }
    line
}

pub(super) fn render_axis() -> String {
    let step = (LABEL_EVERY_HOURS * COLUMNS_PER_HOUR) as usize;
    let mut axis = String::new();
    for hour in (TRACK_START_HOUR..TRACK_END_HOUR).step_by(LABEL_EVERY_HOURS as usize) {
        axis.push_str(&format!("{:<step$}", format!("{hour:02}:00")));
    }
    axis.push_str(&format!("{TRACK_END_HOUR:02}:00"));
    axis
}

pub(crate) fn print_timeline(date: NaiveDate, intervals: &[TimelineInterval], opts: TableOptions) {
    let c = opts.use_color;
    println!("\n  Timeline for {}\n", format_date(date));

    if intervals.is_empty() {
        println!("  No sessions logged.\n");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Start", c),
        header_cell("End", c),
        header_cell("Duration", c),
        header_cell("Quality", c),
        header_cell("Category", c),
    ]);
    for interval in intervals {
        let color = if c { Some(category_color(interval.category)) } else { None };
        table.add_row(vec![
            styled_cell(&interval.start_time_label, None, false),
            styled_cell(&end_label(interval), None, false),
            right_cell(&format!("{} min", interval.duration_min), None, false),
            right_cell(&interval.quality_label, color, false),
            styled_cell(interval.category.as_str(), color, true),
        ]);
    }
    println!("{table}");

    println!("\n  {}", render_track(intervals, c));
    println!("  {}", render_axis());

    print_summary_line(
        &format!(
            "{} sessions | {:.2}h | █ high  ▒ neutral  ░ low",
            intervals.len(),
            total_minutes(intervals) as f64 / 60.0
        ),
        c,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Session, build_timeline};

    fn session(start: &str, duration: u32, quality: Option<i64>) -> Session {
        Session {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            start_time: start.parse().unwrap(),
            duration_min: duration,
            quality,
        }
    }

    #[test]
    fn axis_spans_track() {
        let axis = render_axis();
        assert!(axis.starts_with("06:00   08:00"));
        assert!(axis.ends_with("22:00"));
        let track = render_track(&[], false);
        assert_eq!(track.chars().count(), 64);
        assert_eq!(axis.chars().count(), 64 + 5);
    }

    #[test]
    fn track_draws_categories() {
        let intervals = build_timeline(&[
            session("06:00", 60, Some(9)),
            session("08:00", 30, Some(2)),
            session("10:00", 15, None),
        ]);
        let track: Vec<char> = render_track(&intervals, false).chars().collect();
        assert!(track[..4].iter().all(|&g| g == '█'));
        assert_eq!(track[4], '·');
        assert!(track[8..10].iter().all(|&g| g == '░'));
        assert_eq!(track[16], '▒');
        assert_eq!(track[17], '·');
    }

    #[test]
    fn sessions_outside_track_are_clipped() {
        let intervals = build_timeline(&[session("23:00", 30, Some(8))]);
        assert!(render_track(&intervals, false).chars().all(|g| g == '·'));
    }

    #[test]
    fn end_label_flags_midnight_crossing() {
        let intervals = build_timeline(&[session("23:50", 25, None), session("09:00", 25, None)]);
        assert_eq!(end_label(&intervals[0]), "00:15 (+1)");
        assert_eq!(end_label(&intervals[1]), "09:25");
    }

    #[test]
    fn end_label_wraps_multi_day_durations() {
        let intervals = build_timeline(&[session("09:00", 3_000_000_000, None)]);
        assert!(end_label(&intervals[0]).starts_with("17:00"));
    }

    #[test]
    fn total_minutes_exceeds_u32() {
        let intervals = build_timeline(&[
            session("09:00", 3_000_000_000, None),
            session("10:00", 3_000_000_000, None),
        ]);
        assert_eq!(total_minutes(&intervals), 6_000_000_000);
    }
}
