mod format;
mod heatmap;
mod json;
mod timeline;
mod weekly;

pub(crate) use format::TableOptions;
pub(crate) use heatmap::print_heatmap;
pub(crate) use json::{output_heatmap_json, output_timeline_json, output_weekly_json};
pub(crate) use timeline::print_timeline;
pub(crate) use weekly::print_weekly_table;
