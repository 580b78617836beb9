use indexmap::IndexMap;

use crate::feed::{FeedSet, TripRef};

/// trips with equal fingerprints are served by the same line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TripFingerprint {
    /// empty when the trip has no resolvable route
    pub route_id: String,
    pub headsign: String,
    pub direction: u8,
}

impl TripFingerprint {
    pub fn new(route_id: Option<&str>, headsign: Option<&str>, direction: Option<u8>) -> Self {
        TripFingerprint {
            route_id: route_id.unwrap_or_default().to_string(),
            headsign: headsign.unwrap_or_default().to_string(),
            direction: direction.unwrap_or_default(),
        }
    }
}

/// lines in the order their first trip was seen, each with its trips in the
/// order they were seen.
pub type TripGroups = IndexMap<TripFingerprint, Vec<TripRef>>;

/// partitions the trips of every source into lines. sources are visited in
/// set order and trips in feed order.
pub fn group_trips(feeds: &FeedSet) -> TripGroups {
    let mut groups: TripGroups = IndexMap::new();
    for (feed_idx, feed) in feeds.iter() {
        for (trip_idx, trip) in feed.trips.iter().enumerate() {
            if trip.route_id.is_none() {
                log::warn!(
                    "trip '{}' of gtfs source '{}' is missing its route, grouping it without one",
                    trip.id,
                    feed.name
                );
            }
            let fingerprint = TripFingerprint::new(
                trip.route_id.as_deref(),
                trip.headsign.as_deref(),
                trip.direction,
            );
            groups.entry(fingerprint).or_default().push(TripRef {
                feed: feed_idx,
                trip: trip_idx,
            });
        }
    }
    log::info!("grouped trips into {} lines", groups.len());
    groups
}
