use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_time_label, parse_time_label};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the half-hour scheduling grid, stored as minute-of-day.
///
/// Valid values run from 10:00AM (600) to 9:30PM (1290) in 30 minute steps.
/// On the wire it is the 12-hour label shown in the grid selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const EARLIEST: TimeOfDay = TimeOfDay(10 * 60);
    pub const LATEST: TimeOfDay = TimeOfDay(21 * 60 + 30);
    pub const STEP: u16 = 30;

    /// Build from minutes since midnight; `None` when off the grid.
    pub fn from_minutes(mins: u16) -> Option<Self> {
        let on_grid = (Self::EARLIEST.0..=Self::LATEST.0).contains(&mins)
            && (mins - Self::EARLIEST.0) % Self::STEP == 0;
        on_grid.then_some(TimeOfDay(mins))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Every selectable value, earliest first.
    pub fn grid() -> impl Iterator<Item = TimeOfDay> {
        (Self::EARLIEST.0..=Self::LATEST.0)
            .step_by(Self::STEP as usize)
            .map(TimeOfDay)
    }

    /// Parse `10:00AM` or `14:30`; the value must sit on the grid.
    pub fn parse(s: &str) -> AppResult<Self> {
        parse_time_label(s)
            .and_then(Self::from_minutes)
            .ok_or_else(|| AppError::InvalidTime(s.trim().to_string()))
    }

    pub fn label(self) -> String {
        format_time_label(self.0)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::EARLIEST
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.label()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TimeOfDay::parse(&s)
    }
}
