use kdam::tqdm;
use transitnet_core::model::{Line, LineIndex, Network, StopIndex, TravelOption};

use super::frequency::estimate_line_times;
use crate::feed::{FeedSet, RawStopKey, TripRef};
use crate::network::{
    compose_route_names, group_trips, NetworkBuildConfig, NetworkError, StopIdentityResolver,
    WalkEdgeSynthesizer,
};

/// assembles a [`Network`] line by line. owns the canonical stop and line
/// tables until [`NetworkBuilder::finish`] hands them over.
pub struct NetworkBuilder<'a> {
    feeds: &'a FeedSet,
    config: &'a NetworkBuildConfig,
    resolver: StopIdentityResolver,
    walker: WalkEdgeSynthesizer,
    lines: Vec<Line>,
}

/// a stop of the representative trip that made it into the network.
struct PreviousStop {
    stop: StopIndex,
    arrival: u32,
    departure: u32,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(feeds: &'a FeedSet, config: &'a NetworkBuildConfig) -> Self {
        Self {
            feeds,
            config,
            resolver: StopIdentityResolver::new(
                config.identity_radius,
                config.extra_info,
                config.missing_stop_location_policy,
            ),
            walker: WalkEdgeSynthesizer::new(config.walk_radius),
            lines: vec![],
        }
    }

    /// adds the line served by `trips`, taking the first trip as its
    /// representative for stops and ride edges.
    ///
    /// # Returns
    ///
    /// * `None` when the line has no frequency estimate in any service
    ///   window. such lines add nothing to the network.
    pub fn add_line(&mut self, trips: &[TripRef]) -> Result<Option<LineIndex>, NetworkError> {
        let Some(representative) = trips.first().copied() else {
            return Ok(None);
        };
        let line_times = estimate_line_times(
            self.feeds,
            trips,
            &self.config.service_windows,
            self.config.hour_range,
        );
        if line_times.is_empty() {
            return Ok(None);
        }
        let trip = self.feeds.trip(representative).ok_or_else(|| {
            NetworkError::InternalError(format!(
                "trip {} of gtfs source {} does not exist",
                representative.trip, representative.feed.0
            ))
        })?;

        let name = self
            .config
            .extra_info
            .then(|| compose_route_names(self.feeds, trips));
        let line_idx = LineIndex(self.lines.len());
        self.lines.push(Line::new(
            &trip.id,
            trip.route_id.as_deref().unwrap_or_default(),
            name,
            line_times,
        ));

        let mut previous: Option<PreviousStop> = None;
        for stop_time in trip.stop_times.iter() {
            let (arrival, departure) = match (stop_time.arrival_time, stop_time.departure_time) {
                (Some(a), Some(d)) => (a, d),
                (Some(a), None) => (a, a),
                (None, Some(d)) => (d, d),
                (None, None) => continue,
            };
            let key = RawStopKey {
                feed: representative.feed,
                stop: stop_time.stop,
            };
            let Some(stop) = self.resolver.resolve(self.feeds, key)? else {
                continue;
            };
            self.walker.visit(self.feeds, &mut self.resolver, stop)?;

            if let Some(prev) = previous {
                let ride = TravelOption::Ride {
                    target: stop,
                    line: line_idx,
                    travel_time: seconds_between(prev.departure, arrival),
                    stay_time: seconds_between(prev.arrival, prev.departure),
                };
                self.resolver
                    .stop_mut(prev.stop)
                    .ok_or_else(|| {
                        NetworkError::InternalError(format!(
                            "canonical stop {} does not exist",
                            prev.stop
                        ))
                    })?
                    .travel_options
                    .push(ride);
            }
            previous = Some(PreviousStop {
                stop,
                arrival,
                departure,
            });
        }
        Ok(Some(line_idx))
    }

    /// freezes the network. stop and line indices handed out so far stay valid.
    pub fn finish(self) -> Network {
        Network {
            city_id: self.feeds.city_id(),
            stops: self.resolver.into_stops(),
            lines: self.lines,
        }
    }
}

/// builds the travel-time network of every source in `feeds`.
pub fn build_network(feeds: &FeedSet, config: &NetworkBuildConfig) -> Result<Network, NetworkError> {
    config.validate()?;
    let groups = group_trips(feeds);
    let mut builder = NetworkBuilder::new(feeds, config);

    let mut dropped: usize = 0;
    let line_iter = tqdm!(groups.values(), total = groups.len(), desc = "build lines");
    for trips in line_iter {
        if builder.add_line(trips)?.is_none() {
            dropped += 1;
        }
    }
    eprintln!();

    let network = builder.finish();
    let (rides, walks) = network.edge_counts();
    log::info!(
        "built network '{}' with {} stops, {} lines ({} irregular lines dropped), {} ride and {} walk edges",
        network.city_id,
        network.stops.len(),
        network.lines.len(),
        dropped,
        rides,
        walks
    );
    Ok(network)
}

/// `to - from` in seconds, saturating at the bounds of `i32`.
fn seconds_between(from: u32, to: u32) -> i32 {
    let delta = i64::from(to) - i64::from(from);
    i32::try_from(delta).unwrap_or(if delta < 0 { i32::MIN } else { i32::MAX })
}
