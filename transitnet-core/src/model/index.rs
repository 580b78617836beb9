use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// position of a canonical stop in the [`crate::model::Network`] stop table.
/// assigned once when the stop is created and never renumbered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopIndex(pub usize);

/// position of a line in the [`crate::model::Network`] line table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineIndex(pub usize);

impl Display for StopIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for LineIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
