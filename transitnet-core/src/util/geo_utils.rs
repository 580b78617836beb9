use geo::{Distance, Haversine, Point};
use rstar::AABB;

/// approximate length of one degree of latitude in meters.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// great-circle distance in meters between two WGS84 points.
pub fn haversine_distance(src: Point<f64>, dst: Point<f64>) -> f64 {
    Haversine.distance(src, dst)
}

/// creates search envelopes in degrees that together contain the circle of
/// `radius_meters` around `point`.
///
/// the envelopes are only used as a coarse filter ahead of an exact haversine
/// test, so they are padded rather than tight. longitude degrees shrink with
/// latitude, so the longitude span is widened by 1/cos(lat), capped near the
/// poles. a span crossing the antimeridian is split into one envelope on each
/// side of it.
///
/// # Arguments
///
/// * `point` - center of the search, x = longitude, y = latitude
/// * `radius_meters` - search radius
///
/// # Returns
///
/// * one or two envelopes over `[lon, lat]` coordinates
pub fn envelopes_around(point: Point<f64>, radius_meters: f64) -> Vec<AABB<[f64; 2]>> {
    let padded = radius_meters * 1.1;
    let lat_delta = padded / METERS_PER_DEGREE;
    let cos_lat = point.y().to_radians().cos().abs().max(0.01);
    let lon_delta = (lat_delta / cos_lat).min(180.0);
    let (south, north) = (point.y() - lat_delta, point.y() + lat_delta);
    let (west, east) = (point.x() - lon_delta, point.x() + lon_delta);

    if west < -180.0 {
        vec![
            AABB::from_corners([-180.0, south], [east, north]),
            AABB::from_corners([west + 360.0, south], [180.0, north]),
        ]
    } else if east > 180.0 {
        vec![
            AABB::from_corners([west, south], [180.0, north]),
            AABB::from_corners([-180.0, south], [east - 360.0, north]),
        ]
    } else {
        vec![AABB::from_corners([west, south], [east, north])]
    }
}
