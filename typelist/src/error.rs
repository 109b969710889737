use thiserror::Error;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The error returned when a runtime lookup asks a finite sequence for more than it has.
///
/// Type-level misuse of a sequence (taking the head of an empty one, say) is rejected by the
/// compiler and never gets this far; this error only arises from indices chosen at runtime, as
/// in [`nth`](crate::reify::nth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum SequenceError {
    /// The sequence ran out before reaching the requested index.
    #[error("index {index} is past the end of a sequence of length {length}")]
    Exhausted {
        /// The index which was requested.
        index: usize,
        /// The number of elements the sequence actually has.
        length: usize,
    },
}
