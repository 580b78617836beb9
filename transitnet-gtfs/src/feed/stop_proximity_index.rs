use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use transitnet_core::util::geo_utils;

use crate::feed::FeedStop;

/// spatial index over the located stops of one feed.
#[derive(Debug, Default)]
pub struct StopProximityIndex {
    rtree: RTree<StopNode>,
}

#[derive(Clone, Debug, PartialEq)]
struct StopNode {
    /// lon, lat
    point: [f64; 2],
    /// position in the feed's stop table
    stop: usize,
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

impl StopProximityIndex {
    /// indexes every stop that has a location. the stored value is the stop's
    /// position in `stops`.
    pub fn new(stops: &[FeedStop]) -> StopProximityIndex {
        let nodes = stops
            .iter()
            .enumerate()
            .filter_map(|(stop, s)| {
                s.location.map(|p| StopNode {
                    point: [p.x(), p.y()],
                    stop,
                })
            })
            .collect::<Vec<_>>();
        StopProximityIndex {
            rtree: RTree::bulk_load(nodes),
        }
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// finds the stops strictly closer than `radius_meters` to `point`.
    ///
    /// candidates are taken from padded envelopes in degrees, split at the
    /// antimeridian, and then filtered by haversine distance.
    ///
    /// # Returns
    ///
    /// * `(stop position, distance in meters)` pairs ordered by distance, then
    ///   by stop position
    pub fn stops_within(&self, point: Point<f64>, radius_meters: f64) -> Vec<(usize, f64)> {
        let mut hits = geo_utils::envelopes_around(point, radius_meters)
            .iter()
            .flat_map(|envelope| self.rtree.locate_in_envelope(envelope))
            .filter_map(|node| {
                let distance =
                    geo_utils::haversine_distance(point, Point::new(node.point[0], node.point[1]));
                if distance < radius_meters {
                    Some((node.stop, distance))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        // envelopes may overlap at the poles
        hits.dedup_by_key(|(stop, _)| *stop);
        hits
    }
}
