//! Shared error types for the sorting core

use thiserror::Error;

/// Main error type for the counting-sort pipeline.
///
/// `EmptyInput` is the only variant a caller should ever observe in
/// practice. The range variants guard invariants the pipeline maintains
/// itself: they become reachable only when a frequency or cumulative table
/// is threaded in from a different input than the one being sorted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Input sequence has no elements
    #[error("input sequence is empty")]
    EmptyInput,

    /// An element exceeds the maximum the frequency table was sized for
    #[error("value {value} is outside the expected range 0..={max}")]
    ValueOutOfRange { value: u64, max: u64 },

    /// An element has no entry in the cumulative table
    #[error("value {value} has no slot in a cumulative table of length {table_len}")]
    IndexOutOfRange { value: u64, table_len: usize },
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, SortError>;
