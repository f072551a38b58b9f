//! Core module - session model and the aggregation/layout engine

mod clock;
mod draft;
mod heatmap;
mod state;
mod timeline;
mod types;
mod weekly;

pub(crate) use clock::ClockTime;
pub(crate) use draft::SessionDraft;
pub(crate) use heatmap::{HeatmapCell, MonthHeatmap, aggregate_month};
pub(crate) use state::{View, ViewState};
pub(crate) use timeline::{
    ColorCategory, TimelineInterval, build_timeline, sessions_on, sorted_by_start,
};
pub(crate) use types::Session;
pub(crate) use weekly::{DailyStat, WeeklyWindow, aggregate_week};
