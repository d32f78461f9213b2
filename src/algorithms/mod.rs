//! Frame-producing algorithm cores
//!
//! - [`sorting`]: bubble, insertion, merge and quick sort over `i64` sequences
//! - [`graph`]: BFS, DFS and Dijkstra over an undirected [`graph::Graph`]
//!
//! # Emitter model
//!
//! Every algorithm is a plain struct implementing `Iterator<Item = Frame>`.
//! The struct holds the whole run state (cursors, work stacks, frontier), so
//! pulling the next frame is an ordinary `next()` call and nothing runs between
//! calls. Recursive algorithms keep an explicit stack of pending subranges in
//! place of call-stack recursion, popped in the same depth-first order.
//!
//! Emitters own a private copy of their input and are deterministic: the same
//! input always produces the same frame sequence.

pub mod graph;
pub mod sorting;

use crate::session::errors::SessionError;
use crate::snapshot::Frame;
use std::fmt;
use std::str::FromStr;

/// A lazily evaluated, non-restartable stream of frames
pub type Emitter = Box<dyn Iterator<Item = Frame>>;

/// Algorithm identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
    ];

    /// Stable identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    /// Human-readable name for headers
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn is_sorting(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge | Algorithm::Quick
        )
    }

    pub fn is_graph(self) -> bool {
        !self.is_sorting()
    }

    /// Next algorithm of the same family, wrapping around
    pub fn next_in_family(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Insertion,
            Algorithm::Insertion => Algorithm::Merge,
            Algorithm::Merge => Algorithm::Quick,
            Algorithm::Quick => Algorithm::Bubble,
            Algorithm::Bfs => Algorithm::Dfs,
            Algorithm::Dfs => Algorithm::Dijkstra,
            Algorithm::Dijkstra => Algorithm::Bfs,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = SessionError;

    /// Accepts the short id or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|alg| {
                alg.id().eq_ignore_ascii_case(wanted)
                    || alg.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SessionError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::errors::ErrorKind;

    #[test]
    fn test_parse_ids_and_names() {
        assert_eq!("quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("Merge Sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!("DIJKSTRA".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
    }

    #[test]
    fn test_unknown_algorithm_is_configuration_error() {
        let err = "bogosort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_family_cycle_stays_in_family() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.is_sorting(), alg.next_in_family().is_sorting());
        }
    }
}
