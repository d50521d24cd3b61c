use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier the host derives from a block state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct StateId(pub u32);

impl StateId {
    /// Create a new StateId from a raw u32 value
    pub const fn new(id: u32) -> Self {
        StateId(id)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(id: u32) -> Self {
        StateId(id)
    }
}

/// Opaque handle to a host block state.
///
/// The registry never looks inside a state: it only compares two handles
/// for equality and converts one into its `StateId`.
pub trait BlockState: Clone + PartialEq + fmt::Debug {
    fn state_id(&self) -> StateId;
}
