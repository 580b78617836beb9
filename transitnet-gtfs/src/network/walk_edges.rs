use std::collections::HashSet;

use transitnet_core::model::{StopIndex, TravelOption};

use crate::feed::FeedSet;
use crate::network::{NetworkError, StopIdentityResolver};

/// adds walk edges from canonical stops to every other canonical stop within
/// the walk radius. each stop is visited at most once and edges are only
/// stored on the visited stop.
#[derive(Debug)]
pub struct WalkEdgeSynthesizer {
    walk_radius: f64,
    visited: HashSet<StopIndex>,
}

impl WalkEdgeSynthesizer {
    pub fn new(walk_radius: f64) -> Self {
        Self {
            walk_radius,
            visited: HashSet::new(),
        }
    }

    /// walk edges for `stop` on its first visit. raw stops found nearby are
    /// resolved, which may register new canonical stops.
    ///
    /// # Returns
    ///
    /// * the number of walk edges added, 0 on repeat visits
    pub fn visit(
        &mut self,
        feeds: &FeedSet,
        resolver: &mut StopIdentityResolver,
        stop: StopIndex,
    ) -> Result<usize, NetworkError> {
        if !self.visited.insert(stop) {
            return Ok(0);
        }
        let location = resolver
            .stop(stop)
            .map(|s| s.location())
            .ok_or_else(|| NetworkError::InternalError(format!("canonical stop {stop} does not exist")))?;

        let mut targets: HashSet<StopIndex> = HashSet::new();
        let mut options: Vec<TravelOption> = vec![];
        for hit in feeds.stops_within(location, self.walk_radius) {
            let Some(target) = resolver.resolve(feeds, hit.key())? else {
                continue;
            };
            if target == stop || !targets.insert(target) {
                continue;
            }
            options.push(TravelOption::Walk {
                target,
                distance: hit.distance.round() as u32,
            });
        }

        let added = options.len();
        resolver
            .stop_mut(stop)
            .ok_or_else(|| NetworkError::InternalError(format!("canonical stop {stop} does not exist")))?
            .travel_options
            .extend(options);
        Ok(added)
    }

    pub fn is_visited(&self, stop: StopIndex) -> bool {
        self.visited.contains(&stop)
    }
}
