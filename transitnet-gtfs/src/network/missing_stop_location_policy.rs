use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle
/// missing lon,lat data for a stop
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingStopLocationPolicy {
    /// abort network assembly
    Fail,
    /// leave the stop out; ride edges span to the next located stop
    #[default]
    DropStop,
}
