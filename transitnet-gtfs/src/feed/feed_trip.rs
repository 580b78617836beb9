use std::collections::{BinaryHeap, HashMap};

use gtfs_structures::{DirectionType, Trip};

use crate::feed::FeedError;

/// a trip prepared for network assembly: stop references resolved to
/// positions in the feed's stop table and stop times in sequence order.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedTrip {
    /// GTFS trip identifier
    pub id: String,
    /// GTFS route_id associated with this trip. `None` when the trip does not
    /// reference a route listed in the feed.
    pub route_id: Option<String>,
    /// service associated with this trip
    pub service_id: String,
    pub headsign: Option<String>,
    /// GTFS direction_id, 0 or 1
    pub direction: Option<u8>,
    /// stop times in ascending stop_sequence order
    pub stop_times: Vec<FeedStopTime>,
    /// frequencies.txt rows attached to this trip
    pub headways: Vec<HeadwayRecord>,
}

/// one stop visit of a trip. times are seconds since the start of the
/// service day and may exceed 24 hours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FeedStopTime {
    /// position of the stop in [`crate::feed::FeedSource::stops`]
    pub stop: usize,
    pub arrival_time: Option<u32>,
    pub departure_time: Option<u32>,
    pub stop_sequence: u32,
}

/// a frequencies.txt row: the trip repeats every `headway_secs` between
/// `start_time` and `end_time`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeadwayRecord {
    pub start_time: u32,
    pub end_time: u32,
    pub headway_secs: u32,
}

impl FeedTrip {
    /// converts a parsed GTFS trip, looking up stops by id in `stop_lookup`.
    ///
    /// # Arguments
    ///
    /// * `trip` - parsed trip with its stop times and frequencies
    /// * `has_route` - whether the trip's route_id is listed in routes.txt
    /// * `stop_lookup` - stop_id to position in the feed stop table
    /// * `feed_name` - used for error reporting
    pub fn from_gtfs(
        trip: &Trip,
        has_route: bool,
        stop_lookup: &HashMap<String, usize>,
        feed_name: &str,
    ) -> Result<FeedTrip, FeedError> {
        let stop_times = get_ordered_stops(trip, feed_name)?
            .into_iter()
            .map(|st| {
                let stop = stop_lookup.get(&st.stop.id).copied().ok_or_else(|| {
                    FeedError::MalformedFeedError {
                        feed: feed_name.to_string(),
                        message: format!(
                            "trip '{}' visits stop '{}' which is not in stops.txt",
                            trip.id, st.stop.id
                        ),
                    }
                })?;
                Ok(FeedStopTime {
                    stop,
                    arrival_time: st.arrival_time,
                    departure_time: st.departure_time,
                    stop_sequence: st.stop_sequence,
                })
            })
            .collect::<Result<Vec<_>, FeedError>>()?;

        let route_id = if has_route && !trip.route_id.is_empty() {
            Some(trip.route_id.clone())
        } else {
            None
        };
        let direction = match trip.direction_id {
            Some(DirectionType::Outbound) => Some(0),
            Some(DirectionType::Inbound) => Some(1),
            None => None,
        };
        let headways = trip
            .frequencies
            .iter()
            .map(|f| HeadwayRecord {
                start_time: f.start_time,
                end_time: f.end_time,
                headway_secs: f.headway_secs,
            })
            .collect();

        Ok(FeedTrip {
            id: trip.id.clone(),
            route_id,
            service_id: trip.service_id.clone(),
            headsign: trip.trip_headsign.clone(),
            direction,
            stop_times,
            headways,
        })
    }

    /// departure time at the first stop, falling back to its arrival time.
    pub fn first_departure(&self) -> Option<u32> {
        self.stop_times
            .first()
            .and_then(|st| st.departure_time.or(st.arrival_time))
    }
}

/// Returns the trip's stop times ordered (ascending) by stop_sequence. Internally uses
/// [BinaryHeap] to sort since [gtfs_structures::StopTime] does not implement [Ord].
fn get_ordered_stops<'a>(
    trip: &'a Trip,
    feed_name: &str,
) -> Result<Vec<&'a gtfs_structures::StopTime>, FeedError> {
    let stop_queue_order: BinaryHeap<(u32, usize)> = trip
        .stop_times
        .iter()
        .enumerate()
        .map(|(i, st)| (st.stop_sequence, i))
        .collect();

    stop_queue_order
        .into_sorted_vec() // Ascending according to documentation
        .iter()
        .map(|(_, idx)| {
            trip.stop_times
                .get(*idx)
                .ok_or_else(|| FeedError::MalformedFeedError {
                    feed: feed_name.to_string(),
                    message: format!("expected stop index {idx} not found in trip {}", trip.id),
                })
        })
        .collect::<Result<Vec<_>, _>>()
}
