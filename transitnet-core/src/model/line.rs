use super::LineTime;
use serde::{Deserialize, Serialize};

/// a direction-specific service pattern shared by many scheduled trips.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// built from the representative trip as `{trip_id}|{route_id}`.
    pub line_id: String,
    pub name: Option<String>,
    pub line_times: Vec<LineTime>,
}

impl Line {
    pub const LINE_ID_SEPARATOR: &'static str = "|";

    pub fn new(trip_id: &str, route_id: &str, name: Option<String>, line_times: Vec<LineTime>) -> Line {
        Line {
            line_id: format!("{trip_id}{}{route_id}", Self::LINE_ID_SEPARATOR),
            name,
            line_times,
        }
    }
}
