use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::cli::SortOrder;
use crate::consts::NO_QUALITY;
use crate::core::ColorCategory;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
}

pub(super) fn format_hours(hours: f64) -> String {
    format!("{hours:.2}h")
}

/// Average quality with one decimal, or a dash when nothing was rated
pub(super) fn format_quality(quality: Option<f64>) -> String {
    match quality {
        Some(q) => format!("{q:.1}"),
        None => NO_QUALITY.to_string(),
    }
}

/// Badge color for an average quality: good from 7, fair from 4, poor below
pub(super) fn quality_color(quality: Option<f64>) -> Option<Color> {
    let q = quality?;
    if q >= 7.0 {
        Some(Color::Green)
    } else if q >= 4.0 {
        Some(Color::Yellow)
    } else {
        Some(Color::Red)
    }
}

pub(super) fn category_color(category: ColorCategory) -> Color {
    match category {
        ColorCategory::High => Color::Green,
        ColorCategory::Low => Color::Red,
        ColorCategory::Neutral => Color::Yellow,
    }
}

/// ANSI foreground escape for inline (non-table) text
pub(super) fn category_ansi(category: ColorCategory) -> &'static str {
    match category {
        ColorCategory::High => "\x1b[32m",
        ColorCategory::Low => "\x1b[31m",
        ColorCategory::Neutral => "\x1b[33m",
    }
}

pub(super) const ANSI_RESET: &str = "\x1b[0m";

/// Blend white toward the heatmap green by `intensity` (0.0-1.0)
pub(super) fn heat_color(intensity: f64) -> Color {
    const BASE: (f64, f64, f64) = (81.0, 144.0, 114.0);
    let t = intensity.clamp(0.0, 1.0);
    let mix = |c: f64| (255.0 + (c - 255.0) * t).round() as u8;
    Color::Rgb {
        r: mix(BASE.0),
        g: mix(BASE.1),
        b: mix(BASE.2),
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Print the summary line below a table
pub(super) fn print_summary_line(text: &str, use_color: bool) {
    if use_color {
        println!("\n  \x1b[36m{text}\x1b[0m\n");
    } else {
        println!("\n  {text}\n");
    }
}
