//! Error types for the containment engine

use thiserror::Error;

/// Result type for containment operations
pub type Result<T> = std::result::Result<T, FirebreakError>;

/// Errors that can occur while building a network or playing a round
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FirebreakError {
    /// Link endpoints are out of range or form a self-loop
    #[error("Invalid link: ({0}, {1})")]
    InvalidLink(usize, usize),

    /// Link already exists between the two nodes
    #[error("Link already exists: ({0}, {1})")]
    DuplicateLink(usize, usize),

    /// Exit node index is out of range
    #[error("Invalid exit node: {0}")]
    InvalidExit(usize),

    /// The intruder's position has not been observed this round
    #[error("Intruder position is unknown")]
    IntruderUnknown,

    /// No remaining link connects any adjacent pair of the pursuit path
    #[error("Cannot find a cuttable link along the pursuit path")]
    NoCuttableLink,

    /// The node has no remaining links to sever
    #[error("Node {0} has no remaining links")]
    NodeIsolated(usize),
}

impl FirebreakError {
    /// Check if the error invalidates the network description itself
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            FirebreakError::InvalidLink(_, _)
                | FirebreakError::DuplicateLink(_, _)
                | FirebreakError::InvalidExit(_)
        )
    }

    /// Check if the error only fails the current round
    ///
    /// Round failures are absorbed at the round boundary: the engine logs
    /// them, produces no cut, and keeps playing.
    pub fn is_round_failure(&self) -> bool {
        matches!(
            self,
            FirebreakError::IntruderUnknown
                | FirebreakError::NoCuttableLink
                | FirebreakError::NodeIsolated(_)
        )
    }
}
