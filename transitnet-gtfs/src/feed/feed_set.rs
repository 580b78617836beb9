use std::path::PathBuf;
use std::sync::Mutex;

use geo::Point;
use kdam::{Bar, BarExt};
use rayon::prelude::*;

use crate::feed::{FeedError, FeedSource, FeedStop, FeedTrip};

/// position of a source in its [`FeedSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedIndex(pub usize);

/// a raw stop: the stop's position within the stop table of one source.
/// stop ids are only unique within a source, so the source is part of the key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawStopKey {
    pub feed: FeedIndex,
    pub stop: usize,
}

/// a trip: its position within the trip table of one source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripRef {
    pub feed: FeedIndex,
    pub trip: usize,
}

/// result of a proximity query across all sources.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StopHit {
    pub feed: FeedIndex,
    pub stop: usize,
    /// meters
    pub distance: f64,
}

impl StopHit {
    pub fn key(&self) -> RawStopKey {
        RawStopKey {
            feed: self.feed,
            stop: self.stop,
        }
    }
}

/// all sources loaded for one run, in discovery order. built once at the
/// entry point and passed by reference to network assembly.
#[derive(Debug, Default)]
pub struct FeedSet {
    feeds: Vec<FeedSource>,
}

impl FeedSet {
    pub fn new(feeds: Vec<FeedSource>) -> FeedSet {
        FeedSet { feeds }
    }

    /// loads every source in parallel and waits for all of them. the first
    /// failure fails the whole set; nothing is returned for partial loads.
    ///
    /// # Arguments
    ///
    /// * `paths` - discovered source paths, the order of the resulting set
    /// * `parallelism` - loader threads. 0 uses one per core.
    pub fn load(paths: &[PathBuf], parallelism: usize) -> Result<FeedSet, FeedError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .build()
            .map_err(|e| FeedError::ThreadPoolError(e.to_string()))?;

        let bar = Mutex::new(
            Bar::builder()
                .total(paths.len())
                .desc("load gtfs sources")
                .build()
                .map_err(FeedError::InternalError)?,
        );

        let loaded = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = FeedSource::load(path);
                    if let Ok(mut bar) = bar.lock() {
                        let _ = bar.update(1);
                    }
                    result
                })
                .collect::<Result<Vec<_>, _>>()
        });
        eprintln!();

        let feeds = loaded?;
        log::info!("loaded {} gtfs sources", feeds.len());
        Ok(FeedSet::new(feeds))
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn get(&self, feed: FeedIndex) -> Option<&FeedSource> {
        self.feeds.get(feed.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeedIndex, &FeedSource)> {
        self.feeds
            .iter()
            .enumerate()
            .map(|(idx, f)| (FeedIndex(idx), f))
    }

    pub fn stop(&self, key: RawStopKey) -> Option<&FeedStop> {
        self.get(key.feed).and_then(|f| f.get_stop(key.stop))
    }

    pub fn trip(&self, trip: TripRef) -> Option<&FeedTrip> {
        self.get(trip.feed).and_then(|f| f.get_trip(trip.trip))
    }

    /// name of the first source, used as the network's city identifier.
    pub fn city_id(&self) -> String {
        self.feeds.first().map(|f| f.name.clone()).unwrap_or_default()
    }

    /// stops of every source strictly closer than `radius_meters` to `point`,
    /// ordered by distance, then source, then stop position.
    pub fn stops_within(&self, point: Point<f64>, radius_meters: f64) -> Vec<StopHit> {
        let mut hits = self
            .iter()
            .flat_map(|(feed, source)| {
                source
                    .stops_within(point, radius_meters)
                    .into_iter()
                    .map(move |(stop, distance)| StopHit {
                        feed,
                        stop,
                        distance,
                    })
            })
            .collect::<Vec<_>>();
        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.feed.cmp(&b.feed))
                .then(a.stop.cmp(&b.stop))
        });
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedIndex, FeedSet, RawStopKey};
    use crate::feed::{FeedSource, FeedStop};
    use geo::Point;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn feed(name: &str, stops: Vec<FeedStop>) -> FeedSource {
        FeedSource::new(
            name,
            PathBuf::from(name),
            stops,
            vec![],
            vec![],
            HashMap::new(),
            HashMap::new(),
        )
    }

    #[test]
    fn test_stops_within_spans_sources() {
        let a = feed(
            "a",
            vec![
                FeedStop::new("a1", None, Some(Point::new(0.0, 0.0))),
                FeedStop::new("a2", None, Some(Point::new(0.0, 0.001))),
            ],
        );
        let b = feed("b", vec![FeedStop::new("b1", None, Some(Point::new(0.0, 0.0)))]);
        let set = FeedSet::new(vec![a, b]);

        let hits = set.stops_within(Point::new(0.0, 0.0), 200.0);
        let keys = hits.iter().map(|h| h.key()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                RawStopKey { feed: FeedIndex(0), stop: 0 },
                RawStopKey { feed: FeedIndex(1), stop: 0 },
                RawStopKey { feed: FeedIndex(0), stop: 1 },
            ]
        );
        assert_eq!(set.city_id(), "a");
    }

    #[test]
    fn test_empty_set() {
        let set = FeedSet::default();
        assert!(set.is_empty());
        assert_eq!(set.city_id(), "");
        assert!(set.stops_within(Point::new(0.0, 0.0), 1000.0).is_empty());
    }

    #[test]
    fn test_load_fails_on_missing_source() {
        let paths = vec![PathBuf::from("/nonexistent/transitnet/feed.zip")];
        let result = FeedSet::load(&paths, 1);
        assert!(result.is_err());
    }
}
