use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::core::{DailyStat, WeeklyWindow};
use crate::output::format::{
    TableOptions, create_styled_table, format_hours, format_quality, header_cell,
    print_summary_line, quality_color, right_cell, styled_cell,
};
use crate::utils::format_date;

const SELECTED_MARKER: &str = "▶";

/// Days in display order; the window itself is always oldest first
fn ordered_days(week: &WeeklyWindow, order: SortOrder) -> Vec<&DailyStat> {
    let mut days: Vec<&DailyStat> = week.days.iter().collect();
    if order == SortOrder::Desc {
        days.reverse();
    }
    days
}

fn day_row(day: &DailyStat, use_color: bool) -> Vec<Cell> {
    let bold = day.is_selected;
    let day_color = if use_color && day.is_selected {
        Some(Color::Green)
    } else {
        None
    };
    let label = if day.is_selected {
        format!("{SELECTED_MARKER} {}", day.weekday_label)
    } else {
        format!("  {}", day.weekday_label)
    };
    let quality_fg = if use_color {
        quality_color(day.rated_average())
    } else {
        None
    };

    vec![
        styled_cell(&label, day_color, bold),
        styled_cell(&format_date(day.date), None, bold),
        right_cell(&day.session_count.to_string(), None, bold),
        right_cell(&format_hours(day.total_hours), None, bold),
        right_cell(&format_quality(day.rated_average()), quality_fg, bold),
    ]
}

/// Long form of the selected day, e.g. "Sunday, March 10, 2024"
pub(super) fn long_date(day: &DailyStat) -> String {
    day.date.format("%A, %B %-d, %Y").to_string()
}

pub(crate) fn print_weekly_table(week: &WeeklyWindow, opts: TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Day", c),
        header_cell("Date", c),
        header_cell("Sessions", c),
        header_cell("Hours", c),
        header_cell("Quality", c),
    ]);

    for day in ordered_days(week, opts.order) {
        table.add_row(day_row(day, c));
    }

    let total_color = if c { Some(Color::Yellow) } else { None };
    table.add_row(vec![
        styled_cell("Total", total_color, true),
        styled_cell("", None, false),
        right_cell(&week.total_sessions().to_string(), total_color, true),
        right_cell(&format_hours(week.total_hours()), total_color, true),
        styled_cell("", None, false),
    ]);

    println!(
        "\n  Week {} to {}\n",
        format_date(week.start),
        format_date(week.end)
    );
    println!("{table}");

    let summary = match week.selected_day() {
        Some(day) => format!(
            "Selected: {} | {} sessions | {}",
            long_date(day),
            day.session_count,
            format_hours(day.total_hours)
        ),
        None => format!(
            "Selected: {} (outside this window)",
            format_date(week.selected)
        ),
    };
    print_summary_line(&summary, c);
}
