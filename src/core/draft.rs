//! A session being entered, before it gets an id
//!
//! Start, end and duration stay consistent the same way the entry form keeps
//! them: editing the end or the duration moves the start. Times wrap at
//! midnight without carrying a day.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::consts::DEFAULT_DURATION_MIN;
use crate::core::clock::ClockTime;
use crate::core::types::Session;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SessionDraft {
    pub(crate) date: NaiveDate,
    pub(crate) start: ClockTime,
    pub(crate) duration_min: u32,
    pub(crate) quality: Option<i64>,
}

impl SessionDraft {
    /// A default-length session that ends now
    pub(crate) fn prefill(now: NaiveDateTime) -> Self {
        let now_time = ClockTime::from_minutes((now.hour() * 60 + now.minute()) as i32);
        SessionDraft {
            date: now.date(),
            start: now_time.offset(-i64::from(DEFAULT_DURATION_MIN)),
            duration_min: DEFAULT_DURATION_MIN,
            quality: None,
        }
    }

    pub(crate) fn end_time(&self) -> ClockTime {
        self.start.offset(i64::from(self.duration_min))
    }

    /// Keep the duration and move the start so the session ends at `end`
    pub(crate) fn with_end(mut self, end: ClockTime) -> Self {
        self.start = end.offset(-i64::from(self.duration_min));
        self
    }

    pub(crate) fn into_session(self, id: i64) -> Session {
        Session {
            id,
            date: self.date,
            start_time: self.start,
            duration_min: self.duration_min,
            quality: self.quality,
        }
    }
}
