//! Errors raised while assembling a universe of states.

use thiserror::Error;

/// Errors that can occur when building or loading a universe.
///
/// These only arise while the state graph is assembled. Once a machine is
/// running, the only failure is a rejected transit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No states defined. Add at least one state")]
    EmptyUniverse,

    #[error("State '{id}' is defined more than once")]
    DuplicateState { id: String },

    #[error("State '{from}' allows a transition to undefined state '{to}'")]
    UnknownTarget { from: String, to: String },

    #[error("State '{id}' is not part of this universe")]
    UnknownState { id: String },

    /// Decoding a universe definition failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Encoding a universe definition failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
