use comfy_table::{Attribute, Cell, CellAlignment, Color};

use crate::core::{HeatmapCell, MonthHeatmap};
use crate::output::format::{
    TableOptions, create_styled_table, format_hours, header_cell, heat_color, print_summary_line,
};
use crate::utils::MONTH_NAMES;

const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(super) fn month_title(heatmap: &MonthHeatmap) -> String {
    let name = MONTH_NAMES
        .get(heatmap.month as usize)
        .copied()
        .unwrap_or("?");
    format!("{name} {}", heatmap.year)
}

/// Day number, a today marker, and the hours when any were logged
fn cell_text(cell: &HeatmapCell) -> String {
    let Some(day) = cell.day else {
        return String::new();
    };
    let mut text = if cell.is_today {
        format!("{day} *")
    } else {
        day.to_string()
    };
    if cell.total_hours > 0.0 {
        text.push('\n');
        text.push_str(&format_hours(cell.total_hours));
    }
    text
}

fn grid_cell(cell: &HeatmapCell, use_color: bool) -> Cell {
    let mut out = Cell::new(cell_text(cell)).set_alignment(CellAlignment::Center);
    if use_color && cell.intensity > 0.0 {
        out = out.bg(heat_color(cell.intensity));
        if cell.intensity > 0.55 {
            out = out.fg(Color::White);
        } else {
            out = out.fg(Color::Black);
        }
    }
    if cell.is_today {
        out = out.add_attribute(Attribute::Bold);
    }
    out
}

pub(crate) fn print_heatmap(heatmap: &MonthHeatmap, opts: TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(
        WEEKDAY_HEADERS
            .iter()
            .map(|h| header_cell(h, c))
            .collect::<Vec<_>>(),
    );

    for week in heatmap.cells.chunks(7) {
        let mut row: Vec<Cell> = week.iter().map(|cell| grid_cell(cell, c)).collect();
        // Pad the last week so every row has seven columns
        row.resize_with(7, || Cell::new(""));
        table.add_row(row);
    }

    println!("\n  {}\n", month_title(heatmap));
    println!("{table}");

    let summary = format!(
        "{} logged over {} active days | busiest day {} | * today",
        format_hours(heatmap.total_hours()),
        heatmap.active_days(),
        format_hours(
            heatmap
                .days()
                .map(|d| d.total_hours)
                .fold(0.0, f64::max)
        ),
    );
    print_summary_line(&summary, c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Session, aggregate_month};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn title_uses_month_name() {
        let heatmap = aggregate_month(&[], 1, 2024, d(2024, 2, 10));
        assert_eq!(month_title(&heatmap), "February 2024");
    }

    #[test]
    fn cell_text_marks_today_and_hours() {
        let sessions = vec![Session {
            id: 1,
            date: d(2024, 3, 5),
            start_time: "09:00".parse().unwrap(),
            duration_min: 90,
            quality: None,
        }];
        let heatmap = aggregate_month(&sessions, 2, 2024, d(2024, 3, 5));
        let cell = heatmap.days().find(|c| c.day == Some(5)).unwrap();
        assert_eq!(cell_text(cell), "5 *\n1.50h");
        let quiet = heatmap.days().find(|c| c.day == Some(6)).unwrap();
        assert_eq!(cell_text(quiet), "6");
        let padding = &heatmap.cells[0];
        assert!(padding.is_padding());
        assert_eq!(cell_text(padding), "");
    }
}
