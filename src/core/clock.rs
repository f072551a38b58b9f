use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::consts::MINUTES_PER_DAY;
use crate::error::ParseError;
use crate::utils::{minutes_to_time, time_to_minutes};

/// Wall-clock time of day with minute resolution, stored as minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ClockTime(u16);

impl ClockTime {
    /// Build from any minute count, wrapping around the day
    pub(crate) fn from_minutes(total: i32) -> Self {
        ClockTime(total.rem_euclid(MINUTES_PER_DAY) as u16)
    }

    pub(crate) fn minutes(self) -> i32 {
        i32::from(self.0)
    }

    pub(crate) fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub(crate) fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Hours as a decimal, e.g. 09:30 -> 9.5
    pub(crate) fn hour_decimal(self) -> f64 {
        f64::from(self.hour()) + f64::from(self.minute()) / 60.0
    }

    /// Move by `delta` minutes; crossing midnight wraps silently
    pub(crate) fn offset(self, delta: i64) -> Self {
        let wrapped = (i64::from(self.0) + delta).rem_euclid(i64::from(MINUTES_PER_DAY));
        ClockTime(wrapped as u16)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time_to_minutes(s).map(ClockTime::from_minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_time(self.minutes()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
