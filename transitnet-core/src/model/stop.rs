use super::TravelOption;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a canonical stop: one or more raw feed stops judged to be the same station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
    pub travel_options: Vec<TravelOption>,
}

impl Stop {
    pub const NAME_SEPARATOR: &'static str = " | ";

    pub fn new(location: Point<f64>, name: Option<String>) -> Stop {
        Stop {
            latitude: location.y(),
            longitude: location.x(),
            name,
            travel_options: vec![],
        }
    }

    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// appends another raw stop's label to this stop's name. labels are not
    /// deduplicated. coordinates are left untouched.
    pub fn extend_name(&mut self, label: &str) {
        match &mut self.name {
            Some(name) => {
                name.push_str(Self::NAME_SEPARATOR);
                name.push_str(label);
            }
            None => self.name = Some(label.to_string()),
        }
    }

    pub fn walk_options(&self) -> impl Iterator<Item = &TravelOption> {
        self.travel_options.iter().filter(|o| o.is_walk())
    }

    pub fn ride_options(&self) -> impl Iterator<Item = &TravelOption> {
        self.travel_options.iter().filter(|o| !o.is_walk())
    }
}
