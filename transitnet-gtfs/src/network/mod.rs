mod build_config;
pub mod frequency;
mod missing_stop_location_policy;
mod network_builder;
mod network_error;
mod route_names;
mod stop_resolver;
mod trip_grouper;
mod walk_edges;

pub use build_config::NetworkBuildConfig;
pub use missing_stop_location_policy::MissingStopLocationPolicy;
pub use network_builder::{build_network, NetworkBuilder};
pub use network_error::NetworkError;
pub use route_names::compose_route_names;
pub use stop_resolver::StopIdentityResolver;
pub use trip_grouper::{group_trips, TripFingerprint, TripGroups};
pub use walk_edges::WalkEdgeSynthesizer;
