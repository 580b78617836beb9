//! in-memory feed builders shared by unit tests.
use std::collections::HashMap;
use std::path::PathBuf;

use geo::Point;
use transitnet_core::model::WeekdayMask;

use crate::feed::{FeedRoute, FeedSource, FeedStop, FeedStopTime, FeedTrip, ServiceException};

pub fn stop(id: &str, lon: f64, lat: f64) -> FeedStop {
    FeedStop::new(id, Some(format!("Stop {id}").as_str()), Some(Point::new(lon, lat)))
}

/// a stop time arriving and departing at the same second.
pub fn at(stop: usize, seconds: u32) -> FeedStopTime {
    FeedStopTime {
        stop,
        arrival_time: Some(seconds),
        departure_time: Some(seconds),
        stop_sequence: stop as u32,
    }
}

pub fn trip(id: &str, route_id: Option<&str>, service_id: &str, stop_times: Vec<FeedStopTime>) -> FeedTrip {
    FeedTrip {
        id: id.to_string(),
        route_id: route_id.map(String::from),
        service_id: service_id.to_string(),
        headsign: None,
        direction: None,
        stop_times,
        headways: vec![],
    }
}

/// a trip on `route_id` leaving stop 0 at `departure` and reaching stop 1
/// ten minutes later.
pub fn departing(id: &str, route_id: &str, service_id: &str, departure: u32) -> FeedTrip {
    trip(
        id,
        Some(route_id),
        service_id,
        vec![at(0, departure), at(1, departure + 600)],
    )
}

pub fn feed(
    name: &str,
    stops: Vec<FeedStop>,
    trips: Vec<FeedTrip>,
    routes: Vec<FeedRoute>,
    calendars: &[(&str, u8)],
    exceptions: Vec<(&str, ServiceException)>,
) -> FeedSource {
    let calendars = calendars
        .iter()
        .map(|(service_id, bits)| (service_id.to_string(), WeekdayMask::new(*bits)))
        .collect();
    let mut exception_map: HashMap<String, Vec<ServiceException>> = HashMap::new();
    for (service_id, exception) in exceptions {
        exception_map
            .entry(service_id.to_string())
            .or_default()
            .push(exception);
    }
    FeedSource::new(
        name,
        PathBuf::from(name),
        stops,
        trips,
        routes,
        calendars,
        exception_map,
    )
}
