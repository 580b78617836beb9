mod index;
mod line;
mod line_time;
mod network;
mod stop;
mod travel_option;
mod weekday_mask;

pub use index::{LineIndex, StopIndex};
pub use line::Line;
pub use line_time::LineTime;
pub use network::Network;
pub use stop::Stop;
pub use travel_option::TravelOption;
pub use weekday_mask::WeekdayMask;
