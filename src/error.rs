//! Error types for chromagen.
//!
//! Every fallible operation in the engine returns [`Result`]. Nothing is
//! retried; failures propagate to the caller of the evolution driver.

use thiserror::Error;

/// Errors produced by graph construction, configuration, and evolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter or input value is out of range or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A color sequence does not cover every node of the graph.
    #[error("color count mismatch: graph has {expected} nodes, got {actual} colors")]
    ColorCountMismatch { expected: usize, actual: usize },

    /// An operation that needs at least one candidate got none.
    #[error("population is empty")]
    EmptyPopulation,

    /// The parent pairs ran out before the next generation was full.
    #[error(
        "parent pairs exhausted: produced {produced} of {target} candidates from {pairs} pairs"
    )]
    ExhaustedParents {
        target: usize,
        produced: usize,
        pairs: usize,
    },
}

impl Error {
    /// Returns `true` for every error caused by a bad caller-supplied value.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::ColorCountMismatch { .. } | Error::EmptyPopulation
        )
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_kinds() {
        assert!(Error::invalid("bad").is_invalid_input());
        assert!(Error::ColorCountMismatch {
            expected: 3,
            actual: 2
        }
        .is_invalid_input());
        assert!(Error::EmptyPopulation.is_invalid_input());
        assert!(!Error::ExhaustedParents {
            target: 5,
            produced: 4,
            pairs: 2
        }
        .is_invalid_input());
    }

    #[test]
    fn test_display_messages() {
        let err = Error::ColorCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "color count mismatch: graph has 4 nodes, got 3 colors"
        );
        let err = Error::ExhaustedParents {
            target: 5,
            produced: 4,
            pairs: 2,
        };
        assert!(err.to_string().contains("produced 4 of 5"));
    }
}
