/// the naming attributes of a GTFS route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedRoute {
    pub id: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl FeedRoute {
    pub fn new(id: &str, short_name: Option<&str>, long_name: Option<&str>) -> FeedRoute {
        FeedRoute {
            id: id.to_string(),
            short_name: short_name.map(String::from),
            long_name: long_name.map(String::from),
        }
    }
}
