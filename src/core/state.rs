//! Selection and navigation state
//!
//! A plain holder owned by the app layer. Aggregators never read it directly;
//! callers pass the relevant fields in.

use chrono::{Datelike, NaiveDate};

use crate::utils::{add_days, end_of_week};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Weekly,
    Monthly,
    Add,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewState {
    pub(crate) selected_date: NaiveDate,
    pub(crate) window_end_date: NaiveDate,
    /// Zero-based month shown by the heatmap
    pub(crate) current_month: u32,
    pub(crate) current_year: i32,
    pub(crate) current_view: View,
}

impl ViewState {
    /// Initial state: the 7 days ending today, with today selected
    pub(crate) fn new(today: NaiveDate) -> Self {
        ViewState {
            selected_date: today,
            window_end_date: today,
            current_month: today.month0(),
            current_year: today.year(),
            current_view: View::Weekly,
        }
    }

    /// Highlight a day without moving the window
    pub(crate) fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Move the window end by `days`; the selection stays put
    pub(crate) fn shift_window(&mut self, days: i64) {
        self.window_end_date = add_days(self.window_end_date, days);
    }

    /// Step the heatmap month, carrying into the year
    pub(crate) fn change_month(&mut self, delta: i32) {
        let absolute = self.current_year as i64 * 12 + self.current_month as i64 + delta as i64;
        self.current_year = absolute.div_euclid(12) as i32;
        self.current_month = absolute.rem_euclid(12) as u32;
    }

    pub(crate) fn set_month(&mut self, year: i32, month0: u32) {
        self.current_year = year;
        self.current_month = month0;
    }

    /// Switch view. A target date selects that day and moves the window to
    /// the Sunday-ending week containing it.
    pub(crate) fn show_view(&mut self, view: View, target: Option<NaiveDate>) {
        self.current_view = view;
        if let Some(date) = target {
            self.selected_date = date;
            self.window_end_date = end_of_week(date);
        }
    }
}
