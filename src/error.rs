//! Error types for chain operations

use thiserror::Error;

/// The error raised when a position argument falls outside the chain's valid range
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("index out of range: {index}")]
pub struct IndexOutOfRange {
    /// The offending index
    pub index: usize,
}

/// Result type for chain operations that validate a position argument
pub type Result<T> = std::result::Result<T, IndexOutOfRange>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_offending_index() {
        let error = IndexOutOfRange { index: 42 };
        assert_eq!(error.to_string(), "index out of range: 42");
    }

    #[test]
    fn the_index_is_recoverable_from_the_error() {
        let error = IndexOutOfRange { index: 7 };
        assert_eq!(error.index, 7);
    }
}
