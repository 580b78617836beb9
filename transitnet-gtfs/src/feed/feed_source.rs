use std::collections::HashMap;
use std::path::{Path, PathBuf};

use geo::Point;
use gtfs_structures::{Exception, Gtfs};
use itertools::Itertools;
use transitnet_core::model::WeekdayMask;

use crate::feed::{
    FeedError, FeedRoute, FeedStop, FeedTrip, ServiceException, StopProximityIndex,
};

/// one loaded GTFS source, converted into the records used for network
/// assembly. read-only once built.
#[derive(Debug)]
pub struct FeedSource {
    /// last component of the source path
    pub name: String,
    pub path: PathBuf,
    /// stops sorted by stop_id
    pub stops: Vec<FeedStop>,
    /// trips sorted by trip_id
    pub trips: Vec<FeedTrip>,
    pub routes: HashMap<String, FeedRoute>,
    /// service_id to the weekdays of its calendar.txt row
    pub calendars: HashMap<String, WeekdayMask>,
    /// service_id to its calendar_dates.txt rows, in file order
    pub exceptions: HashMap<String, Vec<ServiceException>>,
    stop_lookup: HashMap<String, usize>,
    index: StopProximityIndex,
}

impl FeedSource {
    /// assembles a feed from already converted records, indexing its stops.
    /// trip stop times must reference positions in `stops`.
    pub fn new(
        name: &str,
        path: PathBuf,
        stops: Vec<FeedStop>,
        trips: Vec<FeedTrip>,
        routes: Vec<FeedRoute>,
        calendars: HashMap<String, WeekdayMask>,
        exceptions: HashMap<String, Vec<ServiceException>>,
    ) -> FeedSource {
        let stop_lookup = stops
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.id.clone(), idx))
            .collect();
        let index = StopProximityIndex::new(&stops);
        let routes = routes.into_iter().map(|r| (r.id.clone(), r)).collect();
        FeedSource {
            name: name.to_string(),
            path,
            stops,
            trips,
            routes,
            calendars,
            exceptions,
            stop_lookup,
            index,
        }
    }

    /// reads a GTFS zip archive or directory.
    pub fn load(path: &Path) -> Result<FeedSource, FeedError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| FeedError::InvalidPathError(path.to_string_lossy().to_string()))?;
        let gtfs = Gtfs::new(path_str).map_err(|e| FeedError::BundleReadError {
            path: path_str.to_string(),
            message: e.to_string(),
        })?;
        log::info!(
            "read gtfs source {} with {} stops, {} trips",
            path_str,
            gtfs.stops.len(),
            gtfs.trips.len()
        );
        FeedSource::from_gtfs(path, &gtfs)
    }

    /// converts a parsed [`Gtfs`] dataset. stops and trips are sorted by id so
    /// that downstream "first seen" ordering does not depend on hash map order.
    pub fn from_gtfs(path: &Path, gtfs: &Gtfs) -> Result<FeedSource, FeedError> {
        let name = source_name(path);

        let stops = gtfs
            .stops
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(stop_id, stop)| {
                FeedStop::new(stop_id, stop.name.as_deref(), get_stop_location(stop, gtfs))
            })
            .collect::<Vec<_>>();
        let stop_lookup: HashMap<String, usize> = stops
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.id.clone(), idx))
            .collect();

        let trips = gtfs
            .trips
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(_, trip)| {
                let has_route = gtfs.routes.contains_key(&trip.route_id);
                FeedTrip::from_gtfs(trip, has_route, &stop_lookup, &name)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let routes = gtfs
            .routes
            .values()
            .map(|r| FeedRoute::new(&r.id, r.short_name.as_deref(), r.long_name.as_deref()))
            .collect();

        let calendars = gtfs
            .calendar
            .iter()
            .map(|(service_id, c)| {
                let flags = [
                    c.monday, c.tuesday, c.wednesday, c.thursday, c.friday, c.saturday, c.sunday,
                ];
                (service_id.clone(), WeekdayMask::from_flags(flags))
            })
            .collect();

        let exceptions = gtfs
            .calendar_dates
            .iter()
            .map(|(service_id, dates)| {
                let rows = dates
                    .iter()
                    .map(|cd| match cd.exception_type {
                        Exception::Added => ServiceException::added(cd.date),
                        Exception::Deleted => ServiceException::removed(cd.date),
                    })
                    .collect();
                (service_id.clone(), rows)
            })
            .collect();

        Ok(FeedSource::new(
            &name,
            path.to_path_buf(),
            stops,
            trips,
            routes,
            calendars,
            exceptions,
        ))
    }

    pub fn get_stop(&self, stop: usize) -> Option<&FeedStop> {
        self.stops.get(stop)
    }

    pub fn get_stop_by_id(&self, stop_id: &str) -> Option<(usize, &FeedStop)> {
        let idx = *self.stop_lookup.get(stop_id)?;
        self.stops.get(idx).map(|s| (idx, s))
    }

    pub fn get_trip(&self, trip: usize) -> Option<&FeedTrip> {
        self.trips.get(trip)
    }

    pub fn get_route(&self, route_id: &str) -> Option<&FeedRoute> {
        self.routes.get(route_id)
    }

    /// weekdays of the service's calendar row. services without a calendar
    /// row have no weekdays.
    pub fn calendar_mask(&self, service_id: &str) -> WeekdayMask {
        self.calendars
            .get(service_id)
            .copied()
            .unwrap_or(WeekdayMask::EMPTY)
    }

    pub fn exceptions(&self, service_id: &str) -> &[ServiceException] {
        self.exceptions
            .get(service_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// located stops of this feed strictly closer than `radius_meters`.
    pub fn stops_within(&self, point: Point<f64>, radius_meters: f64) -> Vec<(usize, f64)> {
        self.index.stops_within(point, radius_meters)
    }
}

/// name of a source: the final component of its path.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

// Checks the stop and its parent for lon,lat location. Returns None if this fails (parent doesn't exists or doesn't have location)
fn get_stop_location(stop: &gtfs_structures::Stop, gtfs: &Gtfs) -> Option<Point<f64>> {
    if let (Some(lon), Some(lat)) = (stop.longitude, stop.latitude) {
        return Some(Point::new(lon, lat));
    }

    // only one step up. a parent without a location is treated as bad data
    stop.parent_station
        .as_ref()
        .and_then(|parent_id| gtfs.stops.get(parent_id))
        .and_then(
            |parent_stop| match (parent_stop.longitude, parent_stop.latitude) {
                (Some(lon), Some(lat)) => Some(Point::new(lon, lat)),
                _ => None,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::{source_name, FeedSource};
    use crate::feed::{FeedStop, HeadwayRecord, ServiceException};
    use chrono::NaiveDate;
    use geo::Point;
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use transitnet_core::model::WeekdayMask;

    fn write_table(dir: &Path, name: &str, rows: &[&str]) {
        fs::write(dir.join(name), rows.join("\n") + "\n").expect("test setup failed writing table");
    }

    /// a small source with a parent station, a trip on a route missing from
    /// routes.txt, stop times out of sequence order, exceptions and headways.
    fn write_source() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("transitnet-source-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("test setup failed creating source directory");
        write_table(
            &dir,
            "agency.txt",
            &[
                "agency_id,agency_name,agency_url,agency_timezone",
                "ag,Test Transit,https://example.com,Europe/Berlin",
            ],
        );
        write_table(
            &dir,
            "stops.txt",
            &[
                "stop_id,stop_name,stop_lat,stop_lon,location_type,parent_station",
                "station,Central Station,52.5,13.4,1,",
                "platform,Central Platform,,,0,station",
                "orphan,Orphan,,,0,",
                "b,Stop B,52.51,13.41,0,",
            ],
        );
        write_table(
            &dir,
            "routes.txt",
            &[
                "route_id,agency_id,route_short_name,route_long_name,route_type",
                "r1,ag,1,Ring,3",
            ],
        );
        write_table(
            &dir,
            "trips.txt",
            &[
                "route_id,service_id,trip_id,trip_headsign,direction_id",
                "r1,wk,t1,Ring,0",
                "gone,hol,t2,,1",
            ],
        );
        write_table(
            &dir,
            "stop_times.txt",
            &[
                "trip_id,arrival_time,departure_time,stop_id,stop_sequence",
                "t1,06:10:00,06:10:00,b,5",
                "t1,06:00:00,06:00:30,platform,1",
                "t2,,07:00:00,platform,1",
                "t2,07:05:00,,b,2",
            ],
        );
        write_table(
            &dir,
            "calendar.txt",
            &[
                "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date",
                "wk,1,1,1,1,1,0,0,20240101,20241231",
            ],
        );
        write_table(
            &dir,
            "calendar_dates.txt",
            &[
                "service_id,date,exception_type",
                "hol,20240501,1",
                "wk,20240501,2",
            ],
        );
        write_table(
            &dir,
            "frequencies.txt",
            &[
                "trip_id,start_time,end_time,headway_secs",
                "t1,06:00:00,09:00:00,600",
            ],
        );
        dir
    }

    #[test]
    fn test_load_converts_gtfs_tables() {
        let dir = write_source();
        let feed = FeedSource::load(&dir).expect("source loads");
        let may_day = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");

        let stop_ids = feed.stops.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(stop_ids, vec!["b", "orphan", "platform", "station"]);
        let (platform, platform_stop) = feed.get_stop_by_id("platform").expect("platform exists");
        assert_eq!(platform_stop.location, Some(Point::new(13.4, 52.5)));
        let (orphan, orphan_stop) = feed.get_stop_by_id("orphan").expect("orphan exists");
        assert_eq!(orphan_stop.location, None);
        let (b, _) = feed.get_stop_by_id("b").expect("b exists");

        // the orphan has no location and is left out of the proximity index
        let hits = feed.stops_within(Point::new(13.4, 52.5), 100.0);
        assert_eq!(hits.iter().map(|(s, _)| *s).collect::<Vec<_>>(), vec![platform, 3]);
        assert!(hits.iter().all(|(s, _)| *s != orphan));

        assert_eq!(feed.trips.len(), 2);
        let t1 = feed.get_trip(0).expect("t1 exists");
        assert_eq!(t1.id, "t1");
        assert_eq!(t1.route_id.as_deref(), Some("r1"));
        assert_eq!(t1.direction, Some(0));
        assert_eq!(t1.headsign.as_deref(), Some("Ring"));
        let visits = t1.stop_times.iter().map(|st| (st.stop, st.stop_sequence)).collect::<Vec<_>>();
        assert_eq!(visits, vec![(platform, 1), (b, 5)]);
        assert_eq!(t1.first_departure(), Some(6 * 3600 + 30));
        assert_eq!(
            t1.headways,
            vec![HeadwayRecord {
                start_time: 6 * 3600,
                end_time: 9 * 3600,
                headway_secs: 600,
            }]
        );

        let t2 = feed.get_trip(1).expect("t2 exists");
        assert_eq!(t2.id, "t2");
        assert_eq!(t2.route_id, None);
        assert_eq!(t2.direction, Some(1));
        assert!(t2.headways.is_empty());
        assert_eq!(t2.first_departure(), Some(7 * 3600));
        assert_eq!(t2.stop_times[1].arrival_time, Some(7 * 3600 + 300));
        assert_eq!(t2.stop_times[1].departure_time, None);

        let route = feed.get_route("r1").expect("r1 exists");
        assert_eq!(route.short_name.as_deref(), Some("1"));
        assert_eq!(route.long_name.as_deref(), Some("Ring"));
        assert!(feed.get_route("gone").is_none());

        assert_eq!(feed.calendar_mask("wk").bits(), 31);
        assert!(feed.calendar_mask("hol").is_empty());
        assert_eq!(feed.exceptions("hol"), [ServiceException::added(may_day)]);
        assert_eq!(feed.exceptions("wk"), [ServiceException::removed(may_day)]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_source_name_is_last_component() {
        assert_eq!(source_name(Path::new("/data/feeds/berlin")), "berlin");
        assert_eq!(source_name(Path::new("/data/feeds/vbb.zip")), "vbb.zip");
    }

    #[test]
    fn test_service_lookups_default_when_missing() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).expect("valid date");
        let feed = FeedSource::new(
            "a",
            PathBuf::from("a"),
            vec![FeedStop::new("s1", None, Some(Point::new(0.0, 0.0)))],
            vec![],
            vec![],
            HashMap::from([(String::from("wk"), WeekdayMask::new(31))]),
            HashMap::from([(String::from("hol"), vec![ServiceException::added(date)])]),
        );
        assert_eq!(feed.calendar_mask("wk").bits(), 31);
        assert!(feed.calendar_mask("hol").is_empty());
        assert_eq!(feed.exceptions("hol").len(), 1);
        assert!(feed.exceptions("wk").is_empty());
        assert_eq!(feed.get_stop_by_id("s1").map(|(i, _)| i), Some(0));
    }
}
