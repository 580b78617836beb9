//! typical line intervals per service window.
//!
//! candidate trips for a window are those whose calendar covers every weekday
//! of the window. lines published only through calendar exceptions fall back
//! to the service most often added on those weekdays. the interval is then
//! taken from frequencies.txt headways when they cover more trips than the
//! timetable does, or else from the mean gap between first departures.
mod frequency_ops;
mod service_window;

pub use frequency_ops::{estimate_interval, estimate_line_times, mean_departure_gap};
pub use service_window::ServiceWindow;
