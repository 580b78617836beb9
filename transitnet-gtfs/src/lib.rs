//! builds a travel-time [`transitnet_core::model::Network`] from one or more
//! GTFS feeds.
//!
//! the pipeline is split in three modules:
//!   - [`feed`]: discovers GTFS sources and loads them in parallel into a [`feed::FeedSet`]
//!   - [`network`]: groups trips into lines, merges stops, synthesizes walk and ride edges
//!     and estimates line frequencies
//!   - [`app`]: the command line application writing the encoded network
pub mod app;
pub mod feed;
pub mod network;
