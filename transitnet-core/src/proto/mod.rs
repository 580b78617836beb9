//! numbered-field binary encoding of a [`crate::model::Network`].
//!
//! field numbers are part of the contract with downstream clients and must
//! never be reassigned. new fields take new numbers.
mod network_message;
mod proto_error;
mod proto_ops;

pub use network_message::{
    LineMessage, LineTimeMessage, NetworkMessage, StopMessage, TravelOptionMessage,
};
pub use proto_error::ProtoError;
pub use proto_ops::{decode_network, encode_network};
