use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use transitnet_core::model::{LineTime, WeekdayMask};

use super::ServiceWindow;
use crate::feed::{ExceptionKind, FeedIndex, FeedSet, FeedTrip, TripRef};

/// estimates the typical interval of a line in each service window.
///
/// # Arguments
///
/// * `feeds` - loaded sources the trip references point into
/// * `trips` - every trip grouped into the line, in grouping order
/// * `windows` - service windows to estimate, in output order
/// * `hour_range` - span of each window in hours
///
/// # Returns
///
/// * one [`LineTime`] per window with an estimate. empty when the line shows
///   no regular service in any window.
pub fn estimate_line_times(
    feeds: &FeedSet,
    trips: &[TripRef],
    windows: &[ServiceWindow],
    hour_range: u32,
) -> Vec<LineTime> {
    windows
        .iter()
        .filter_map(|window| {
            estimate_interval(feeds, trips, window, hour_range)
                .map(|interval| LineTime::new(window.weekdays, window.start_hour, hour_range, interval))
        })
        .collect()
}

/// interval in seconds for one window, if the candidate trips support one.
pub fn estimate_interval(
    feeds: &FeedSet,
    trips: &[TripRef],
    window: &ServiceWindow,
    hour_range: u32,
) -> Option<u32> {
    if window.weekdays.is_empty() {
        return None;
    }
    let mut candidates = calendar_candidates(feeds, trips, window.weekdays);
    if candidates.is_empty() {
        candidates = exception_candidates(feeds, trips, window, hour_range);
    }
    if candidates.is_empty() {
        return None;
    }

    let mut headway_sum: u64 = 0;
    let mut headway_records: u64 = 0;
    let mut headway_trips: usize = 0;
    let mut departures: Vec<u32> = vec![];
    for trip in candidates.iter() {
        if !trip.headways.is_empty() {
            let overlapping = trip
                .headways
                .iter()
                .filter(|h| window.overlaps(h.start_time, h.end_time, hour_range))
                .collect::<Vec<_>>();
            if !overlapping.is_empty() {
                headway_trips += 1;
            }
            for h in overlapping {
                headway_sum += u64::from(h.headway_secs);
                headway_records += 1;
            }
            continue;
        }
        if let Some(departure) = trip.first_departure() {
            if window.contains_time(departure, hour_range) {
                departures.push(departure);
            }
        }
    }

    if headway_records > 0 && headway_trips > departures.len() {
        let mean = headway_sum / headway_records;
        return u32::try_from(mean).ok().filter(|interval| *interval > 0);
    }
    mean_departure_gap(&mut departures)
}

/// rounded mean of the gaps between consecutive sorted departures. needs at
/// least two departures; a single departure in a window shows no pattern.
pub fn mean_departure_gap(departures: &mut [u32]) -> Option<u32> {
    if departures.len() < 2 {
        return None;
    }
    departures.sort_unstable();
    let gap_sum: f64 = departures
        .windows(2)
        .map(|pair| f64::from(pair[1] - pair[0]))
        .sum();
    let mean = (gap_sum / (departures.len() - 1) as f64).round();
    if mean >= 1.0 && mean <= f64::from(u32::MAX) {
        Some(mean as u32)
    } else {
        None
    }
}

/// trips whose calendar runs on every day of `weekdays`.
fn calendar_candidates<'a>(
    feeds: &'a FeedSet,
    trips: &[TripRef],
    weekdays: WeekdayMask,
) -> Vec<&'a FeedTrip> {
    trips
        .iter()
        .filter_map(|tref| {
            let feed = feeds.get(tref.feed)?;
            let trip = feed.get_trip(tref.trip)?;
            if feed.calendar_mask(&trip.service_id).contains_all(weekdays) {
                Some(trip)
            } else {
                None
            }
        })
        .collect()
}

/// lines modelled through calendar_dates.txt only have no calendar weekdays.
/// the service whose added dates fall most often on the window's weekdays is
/// taken as the line's regular service, and its trips departing within the
/// window become the candidates.
fn exception_candidates<'a>(
    feeds: &'a FeedSet,
    trips: &[TripRef],
    window: &ServiceWindow,
    hour_range: u32,
) -> Vec<&'a FeedTrip> {
    let Some((feed_idx, service_id)) = most_common_added_service(feeds, trips, window.weekdays)
    else {
        return vec![];
    };
    trips
        .iter()
        .filter(|tref| tref.feed == feed_idx)
        .filter_map(|tref| feeds.trip(*tref))
        .filter(|trip| trip.service_id == service_id)
        .filter(|trip| {
            trip.first_departure()
                .map(|d| window.contains_time(d, hour_range))
                .unwrap_or(false)
        })
        .collect()
}

/// votes for each distinct service of the line, one vote per added date on a
/// weekday of `weekdays`. the first service to reach the highest count wins.
fn most_common_added_service<'a>(
    feeds: &'a FeedSet,
    trips: &[TripRef],
    weekdays: WeekdayMask,
) -> Option<(FeedIndex, &'a str)> {
    let mut seen: HashSet<(FeedIndex, &str)> = HashSet::new();
    let mut votes: HashMap<(FeedIndex, &str), usize> = HashMap::new();
    let mut winner: Option<(FeedIndex, &str)> = None;
    let mut winner_votes: usize = 0;

    for tref in trips.iter() {
        let Some(feed) = feeds.get(tref.feed) else {
            continue;
        };
        let Some(trip) = feed.get_trip(tref.trip) else {
            continue;
        };
        let key = (tref.feed, trip.service_id.as_str());
        if !seen.insert(key) {
            continue;
        }
        for exception in feed.exceptions(&trip.service_id) {
            if exception.kind != ExceptionKind::Added {
                continue;
            }
            if !WeekdayMask::from_weekday(exception.date.weekday()).intersects(weekdays) {
                continue;
            }
            let count = votes.entry(key).or_insert(0);
            *count += 1;
            if *count > winner_votes {
                winner_votes = *count;
                winner = Some(key);
            }
        }
    }
    winner
}
