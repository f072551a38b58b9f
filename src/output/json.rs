use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::core::{MonthHeatmap, TimelineInterval, WeeklyWindow};
use crate::utils::format_date;

fn timeline_value(intervals: &[TimelineInterval]) -> Value {
    let items: Vec<Value> = intervals
        .iter()
        .map(|iv| {
            json!({
                "start_time": iv.start_time_label,
                "start_hour": iv.start_hour,
                "end_hour": iv.end_hour,
                "duration_min": iv.duration_min,
                "quality": iv.quality_label,
                "category": iv.category.as_str(),
                "fill": iv.category.fill(),
                "crosses_midnight": iv.crosses_midnight,
            })
        })
        .collect();
    Value::Array(items)
}

/// Weekly window plus the selected day's timeline. Days stay oldest first so
/// they line up with the chart arrays.
pub(crate) fn output_weekly_json(
    week: &WeeklyWindow,
    selected_timeline: &[TimelineInterval],
) -> Result<String, serde_json::Error> {
    let days: Vec<Value> = week
        .days
        .iter()
        .map(|day| {
            json!({
                "date": format_date(day.date),
                "weekday": day.weekday_label,
                "sessions": day.session_count,
                "total_hours": day.total_hours,
                "average_quality": day.average_quality,
                "rated_sessions": day.rated_count,
                "selected": day.is_selected,
            })
        })
        .collect();

    let styles: Vec<Value> = week
        .chart
        .styles
        .iter()
        .map(|s| json!({ "fill": s.fill, "border_width": s.border_width }))
        .collect();

    let output = json!({
        "start": format_date(week.start),
        "end": format_date(week.end),
        "selected": format_date(week.selected),
        "days": days,
        "chart": {
            "labels": week.chart.labels,
            "hours": week.chart.hours,
            "quality": week.chart.quality,
            "styles": styles,
        },
        "total_sessions": week.total_sessions(),
        "total_hours": week.total_hours(),
        "timeline": timeline_value(selected_timeline),
    });
    serde_json::to_string_pretty(&output)
}

pub(crate) fn output_heatmap_json(heatmap: &MonthHeatmap) -> Result<String, serde_json::Error> {
    let cells: Vec<Value> = heatmap
        .cells
        .iter()
        .map(|cell| {
            json!({
                "day": cell.day,
                "padding": cell.is_padding(),
                "date": cell.date.map(format_date),
                "total_hours": cell.total_hours,
                "intensity": cell.intensity,
                "today": cell.is_today,
            })
        })
        .collect();

    let output = json!({
        "year": heatmap.year,
        "month": heatmap.month + 1,
        "start_padding": heatmap.start_padding,
        "max_hours": heatmap.max_hours,
        "total_hours": heatmap.total_hours(),
        "active_days": heatmap.active_days(),
        "cells": cells,
    });
    serde_json::to_string_pretty(&output)
}

pub(crate) fn output_timeline_json(
    date: NaiveDate,
    intervals: &[TimelineInterval],
) -> Result<String, serde_json::Error> {
    let output = json!({
        "date": format_date(date),
        "intervals": timeline_value(intervals),
    });
    serde_json::to_string_pretty(&output)
}
