mod discovery;
mod feed_error;
mod feed_route;
mod feed_set;
mod feed_source;
mod feed_stop;
mod feed_trip;
mod service_exception;
mod stop_proximity_index;
#[cfg(test)]
pub(crate) mod test_feed;

pub use discovery::{discover_feed_paths, CALENDAR_TABLES, REQUIRED_TABLES};
pub use feed_error::FeedError;
pub use feed_route::FeedRoute;
pub use feed_set::{FeedIndex, FeedSet, RawStopKey, StopHit, TripRef};
pub use feed_source::FeedSource;
pub use feed_stop::FeedStop;
pub use feed_trip::{FeedStopTime, FeedTrip, HeadwayRecord};
pub use service_exception::{ExceptionKind, ServiceException};
pub use stop_proximity_index::StopProximityIndex;
