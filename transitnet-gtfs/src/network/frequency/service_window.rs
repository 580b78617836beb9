use serde::{Deserialize, Serialize};
use transitnet_core::model::WeekdayMask;

/// a set of weekdays and the hour a frequency estimate starts at. every window
/// spans the same number of hours, set on the build configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceWindow {
    pub weekdays: WeekdayMask,
    pub start_hour: u32,
}

impl ServiceWindow {
    pub const SECONDS_PER_HOUR: u32 = 3600;
    /// service days run past midnight, GTFS times reach into the second day.
    pub const MAX_START_HOUR: u32 = 47;

    pub fn new(weekdays: WeekdayMask, start_hour: u32) -> ServiceWindow {
        ServiceWindow {
            weekdays,
            start_hour,
        }
    }

    /// Monday from 06:00 and Friday+Saturday from 21:00.
    pub fn defaults() -> Vec<ServiceWindow> {
        vec![
            ServiceWindow::new(WeekdayMask::MONDAY, 6),
            ServiceWindow::new(WeekdayMask::FRIDAY | WeekdayMask::SATURDAY, 21),
        ]
    }

    pub fn end_hour(&self, hour_range: u32) -> u32 {
        self.start_hour.saturating_add(hour_range)
    }

    /// true if `seconds` (since service day start) falls in an hour within
    /// `[start_hour, start_hour + hour_range]`, both ends inclusive.
    pub fn contains_time(&self, seconds: u32, hour_range: u32) -> bool {
        let hour = seconds / Self::SECONDS_PER_HOUR;
        hour >= self.start_hour && hour <= self.end_hour(hour_range)
    }

    /// true if the hours of `[start_time, end_time]` touch this window.
    pub fn overlaps(&self, start_time: u32, end_time: u32, hour_range: u32) -> bool {
        let start = start_time / Self::SECONDS_PER_HOUR;
        let end = end_time / Self::SECONDS_PER_HOUR;
        end >= self.start_hour && start <= self.end_hour(hour_range)
    }
}
