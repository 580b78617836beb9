use std::collections::HashSet;

use itertools::Itertools;

use crate::feed::{FeedRoute, FeedSet, TripRef};

/// display name of a line: its distinct routes in first-seen order, joined by
/// `" | "`. trips without a resolvable route are skipped.
pub fn compose_route_names(feeds: &FeedSet, trips: &[TripRef]) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    trips
        .iter()
        .filter_map(|tref| {
            let feed = feeds.get(tref.feed)?;
            let route_id = feed.get_trip(tref.trip)?.route_id.as_deref()?;
            feed.get_route(route_id)
        })
        .filter(|route| seen.insert(route.id.as_str()))
        .map(route_label)
        .join(" | ")
}

/// `LongName (ShortName,RouteId)`, or `ShortName (RouteId)` without a long name.
fn route_label(route: &FeedRoute) -> String {
    let short_name = route.short_name.as_deref().unwrap_or_default();
    match route.long_name.as_deref() {
        Some(long_name) if !long_name.is_empty() => {
            format!("{long_name} ({short_name},{})", route.id)
        }
        _ => format!("{short_name} ({})", route.id),
    }
}

#[cfg(test)]
mod tests {
    use super::compose_route_names;
    use crate::feed::test_feed::{departing, feed, trip};
    use crate::feed::{FeedIndex, FeedRoute, FeedSet, TripRef};

    #[test]
    fn test_names_of_distinct_routes() {
        let trips = vec![
            departing("t1", "R12", "wk", 0),
            trip("t2", None, "wk", vec![]),
            departing("t3", "R14", "wk", 0),
            departing("t4", "R12", "wk", 0),
            departing("t5", "R99", "wk", 0),
        ];
        let routes = vec![
            FeedRoute::new("R12", Some("12"), Some("Downtown Express")),
            FeedRoute::new("R14", Some("14"), Some("")),
        ];
        let feeds = FeedSet::new(vec![feed("a", vec![], trips, routes, &[], vec![])]);
        let refs = (0..5)
            .map(|trip| TripRef {
                feed: FeedIndex(0),
                trip,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            compose_route_names(&feeds, &refs),
            "Downtown Express (12,R12) | 14 (R14)"
        );
        assert_eq!(compose_route_names(&feeds, &refs[1..2]), "");
    }
}
