use std::collections::HashMap;

use transitnet_core::model::{Stop, StopIndex};

use crate::feed::{FeedSet, RawStopKey};
use crate::network::{MissingStopLocationPolicy, NetworkError};

/// maps raw feed stops to canonical network stops. raw stops closer than the
/// identity radius to an already registered raw stop, from any source, share
/// its canonical stop.
///
/// canonical stops are only ever appended, so a [`StopIndex`] never changes
/// once handed out. the first raw stop registered at a location fixes the
/// canonical coordinates.
#[derive(Debug)]
pub struct StopIdentityResolver {
    identity_radius: f64,
    extra_info: bool,
    missing_location_policy: MissingStopLocationPolicy,
    stops: Vec<Stop>,
    registered: HashMap<RawStopKey, StopIndex>,
}

impl StopIdentityResolver {
    pub fn new(
        identity_radius: f64,
        extra_info: bool,
        missing_location_policy: MissingStopLocationPolicy,
    ) -> Self {
        Self {
            identity_radius,
            extra_info,
            missing_location_policy,
            stops: vec![],
            registered: HashMap::new(),
        }
    }

    /// canonical stop of `key`, registering it on first use.
    ///
    /// # Returns
    ///
    /// * `None` when the raw stop has no location and the policy drops such
    ///   stops.
    pub fn resolve(
        &mut self,
        feeds: &FeedSet,
        key: RawStopKey,
    ) -> Result<Option<StopIndex>, NetworkError> {
        if let Some(idx) = self.registered.get(&key) {
            return Ok(Some(*idx));
        }
        let raw = feeds.stop(key).ok_or_else(|| {
            NetworkError::InternalError(format!(
                "stop {} of gtfs source {} does not exist",
                key.stop, key.feed.0
            ))
        })?;
        let location = match (raw.location, self.missing_location_policy) {
            (Some(location), _) => location,
            (None, MissingStopLocationPolicy::DropStop) => {
                log::debug!("dropping stop '{}' without a location", raw.id);
                return Ok(None);
            }
            (None, MissingStopLocationPolicy::Fail) => {
                let feed = feeds.get(key.feed).map(|f| f.name.clone()).unwrap_or_default();
                return Err(NetworkError::MissingStopLocation {
                    feed,
                    stop_id: raw.id.clone(),
                });
            }
        };

        let nearby = feeds
            .stops_within(location, self.identity_radius)
            .iter()
            .find_map(|hit| self.registered.get(&hit.key()).copied());

        let idx = match nearby {
            Some(idx) => {
                if self.extra_info {
                    let stop = self.stops.get_mut(idx.0).ok_or_else(|| {
                        NetworkError::InternalError(format!("canonical stop {idx} does not exist"))
                    })?;
                    stop.extend_name(&raw.label());
                }
                idx
            }
            None => {
                let idx = StopIndex(self.stops.len());
                let name = self.extra_info.then(|| raw.label());
                self.stops.push(Stop::new(location, name));
                idx
            }
        };
        self.registered.insert(key, idx);
        Ok(Some(idx))
    }

    pub fn stop(&self, idx: StopIndex) -> Option<&Stop> {
        self.stops.get(idx.0)
    }

    pub fn stop_mut(&mut self, idx: StopIndex) -> Option<&mut Stop> {
        self.stops.get_mut(idx.0)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }
}
