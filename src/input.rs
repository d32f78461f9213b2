//! Session inputs and sample data

use crate::algorithms::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

/// What an algorithm runs over
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Values to sort
    Sequence(Vec<i64>),
    /// Graph to search from `start`, optionally stopping at `goal`
    Graph {
        graph: Rc<Graph>,
        start: usize,
        goal: Option<usize>,
    },
}

impl Input {
    pub fn sequence(values: impl Into<Vec<i64>>) -> Self {
        Input::Sequence(values.into())
    }

    pub fn graph(graph: Graph, start: usize, goal: Option<usize>) -> Self {
        Input::Graph {
            graph: Rc::new(graph),
            start,
            goal,
        }
    }

    /// Short description of the input shape for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Sequence(_) => "sequence",
            Input::Graph { .. } => "graph",
        }
    }
}

/// `len` values in `1..100`, reproducible for a given `seed`
pub fn random_sequence(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1..100)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_sequence_is_seeded() {
        let a = random_sequence(40, 42);
        let b = random_sequence(40, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.iter().all(|v| (1..100).contains(v)));
        assert_ne!(a, random_sequence(40, 43));
    }
}
