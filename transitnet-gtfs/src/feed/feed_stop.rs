use geo::Point;

/// a stop as published by one feed.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedStop {
    /// GTFS stop_id, unique within its feed only.
    pub id: String,
    pub name: Option<String>,
    /// lon,lat of the stop or of its parent station. stops without either
    /// cannot be placed in the network.
    pub location: Option<Point<f64>>,
}

impl FeedStop {
    pub fn new(id: &str, name: Option<&str>, location: Option<Point<f64>>) -> FeedStop {
        FeedStop {
            id: id.to_string(),
            name: name.map(String::from),
            location,
        }
    }

    /// display label used when extra info is requested, formatted `name (id)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name.as_deref().unwrap_or_default(), self.id)
    }
}
