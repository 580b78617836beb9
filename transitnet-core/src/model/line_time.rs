use super::WeekdayMask;
use serde::{Deserialize, Serialize};

/// the typical interval between departures of a line during one service window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTime {
    pub weekdays: WeekdayMask,
    pub start_hour: u32,
    /// `start_hour` plus the window span.
    pub end_hour: u32,
    /// seconds between departures, always positive.
    pub interval: u32,
}

impl LineTime {
    pub fn new(weekdays: WeekdayMask, start_hour: u32, hour_range: u32, interval: u32) -> LineTime {
        LineTime {
            weekdays,
            start_hour,
            end_hour: start_hour.saturating_add(hour_range),
            interval,
        }
    }
}
