use super::{LineIndex, StopIndex};
use serde::{Deserialize, Serialize};

/// a directed connection leaving the stop that owns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TravelOption {
    /// scheduled travel along a line to the next stop of its representative trip.
    Ride {
        target: StopIndex,
        line: LineIndex,
        /// seconds from departure at the owning stop to arrival at the target.
        /// not wrapped at midnight.
        travel_time: i32,
        /// seconds the vehicle dwells at the owning stop before departing.
        stay_time: i32,
    },
    /// walking to a nearby stop.
    Walk {
        target: StopIndex,
        /// meters, rounded to the nearest integer.
        distance: u32,
    },
}

impl TravelOption {
    pub fn target(&self) -> StopIndex {
        match self {
            TravelOption::Ride { target, .. } => *target,
            TravelOption::Walk { target, .. } => *target,
        }
    }

    pub fn line(&self) -> Option<LineIndex> {
        match self {
            TravelOption::Ride { line, .. } => Some(*line),
            TravelOption::Walk { .. } => None,
        }
    }

    pub fn is_walk(&self) -> bool {
        matches!(self, TravelOption::Walk { .. })
    }
}
