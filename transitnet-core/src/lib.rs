//! travel-time network model shared by the transitnet tools.
//!
//! a [`model::Network`] is a table of canonical stops joined by ride and walk
//! edges, plus a table of lines annotated with typical service intervals. the
//! [`proto`] module encodes a network into the numbered-field binary format
//! consumed by downstream isochrone clients.
pub mod model;
pub mod proto;
pub mod util;
