use super::{Line, LineIndex, Stop, StopIndex};
use serde::{Deserialize, Serialize};

/// the assembled travel-time graph for one run. once built, a network is only
/// read (for validation and encoding), never modified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub city_id: String,
    pub stops: Vec<Stop>,
    pub lines: Vec<Line>,
}

impl Network {
    pub fn get_stop(&self, index: StopIndex) -> Option<&Stop> {
        self.stops.get(index.0)
    }

    pub fn get_line(&self, index: LineIndex) -> Option<&Line> {
        self.lines.get(index.0)
    }

    /// counts (ride, walk) edges across all stops.
    pub fn edge_counts(&self) -> (usize, usize) {
        self.stops.iter().fold((0, 0), |(rides, walks), stop| {
            let w = stop.walk_options().count();
            (rides + stop.travel_options.len() - w, walks + w)
        })
    }
}
