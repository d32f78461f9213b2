//! Error types for session setup
//!
//! [`SessionError`] covers every way a caller can misconfigure a run. Stepping,
//! playback toggles and emitter exhaustion never produce errors: misuse of an
//! action in the wrong state is a no-op.

use thiserror::Error;

/// Broad category of a [`SessionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown algorithm or an input of the wrong shape for the algorithm
    Configuration,
    /// Input values outside what the chosen graph allows
    Validation,
}

/// Errors raised while creating or rebuilding a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Algorithm identifier not recognized
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    /// Sorting algorithm given a graph, or graph algorithm given a sequence
    #[error("Algorithm '{algorithm}' expects {expected} input")]
    InputMismatch {
        algorithm: &'static str,
        expected: &'static str,
    },

    /// Start or goal id not present in the graph
    #[error("{role} node {node} is outside the graph (valid ids are 0..{node_count})")]
    NodeOutOfRange {
        role: &'static str,
        node: usize,
        node_count: usize,
    },

    /// Graph has no nodes to traverse
    #[error("Graph has no nodes")]
    EmptyGraph,

    /// Weight given for a pair of nodes that are not adjacent
    #[error("No edge between {u} and {v}")]
    UnknownEdge { u: usize, v: usize },

    /// Negative or non-finite edge weight
    #[error("Invalid weight {weight} on edge ({u}, {v})")]
    InvalidWeight { u: usize, v: usize, weight: f64 },
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::UnknownAlgorithm { .. } => ErrorKind::Configuration,
            SessionError::InputMismatch { .. } => ErrorKind::Configuration,
            SessionError::NodeOutOfRange { .. } => ErrorKind::Validation,
            SessionError::EmptyGraph => ErrorKind::Validation,
            SessionError::UnknownEdge { .. } => ErrorKind::Validation,
            SessionError::InvalidWeight { .. } => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let unknown = SessionError::UnknownAlgorithm {
            name: "bogo".to_string(),
        };
        assert_eq!(unknown.kind(), ErrorKind::Configuration);

        let out_of_range = SessionError::NodeOutOfRange {
            role: "Goal",
            node: 99,
            node_count: 48,
        };
        assert_eq!(out_of_range.kind(), ErrorKind::Validation);
        assert_eq!(
            out_of_range.to_string(),
            "Goal node 99 is outside the graph (valid ids are 0..48)"
        );
    }
}
