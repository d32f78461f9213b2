//! Graph topology and search emitters
//!
//! A [`Graph`] is undirected with node ids `0..node_count`. Adjacency order is
//! the order edges were added, which fixes the order searches look at
//! neighbors and therefore the exact frame sequence.
//!
//! All three searches share one tinting convention, applied in this order so
//! later tints win:
//!
//! ```text
//! frontier → settled → current → goal
//! ```
//!
//! The terminal frame tints settled nodes and, when the goal was reached,
//! overrides the reconstructed path with [`NodeTint::Path`].

pub mod dijkstra;
pub mod grid;
pub mod path;
pub mod traversal;

pub use dijkstra::Dijkstra;
pub use traversal::{Discipline, Traversal};

use crate::session::errors::SessionError;
use crate::snapshot::{Frame, MetaValue, Metadata, NodeTint, Snapshot, FOUND, PATH, VISITED};
use rustc_hash::{FxHashMap, FxHashSet};

/// Undirected graph with optional per-edge weights (default 1)
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    positions: Vec<(f64, f64)>,
    edges: Vec<(usize, usize)>,
    neighbors: Vec<Vec<usize>>,
    weights: FxHashMap<(usize, usize), f64>,
}

impl Graph {
    /// Build a graph from node positions (indexed by id) and an edge list
    pub fn new(positions: Vec<(f64, f64)>, edges: Vec<(usize, usize)>) -> Result<Self, SessionError> {
        let node_count = positions.len();
        let mut neighbors = vec![Vec::new(); node_count];
        for &(u, v) in &edges {
            for node in [u, v] {
                if node >= node_count {
                    return Err(SessionError::NodeOutOfRange {
                        role: "Edge endpoint",
                        node,
                        node_count,
                    });
                }
            }
            neighbors[u].push(v);
            neighbors[v].push(u);
        }

        Ok(Graph {
            positions,
            edges,
            neighbors,
            weights: FxHashMap::default(),
        })
    }

    /// Attach a weight to an existing edge; either direction may be given
    pub fn with_weight(mut self, u: usize, v: usize, weight: f64) -> Result<Self, SessionError> {
        if !self.has_edge(u, v) {
            return Err(SessionError::UnknownEdge { u, v });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(SessionError::InvalidWeight { u, v, weight });
        }
        self.weights.insert(edge_key(u, v), weight);
        Ok(self)
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Neighbors of `node` in insertion order (empty for unknown ids)
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Edge weight, the same in both directions, defaulting to 1
    pub fn weight(&self, u: usize, v: usize) -> f64 {
        self.weights.get(&edge_key(u, v)).copied().unwrap_or(1.0)
    }

    /// Check that `start` and `goal` name nodes of this graph
    pub fn validate(&self, start: usize, goal: Option<usize>) -> Result<(), SessionError> {
        let node_count = self.node_count();
        if node_count == 0 {
            return Err(SessionError::EmptyGraph);
        }
        if start >= node_count {
            return Err(SessionError::NodeOutOfRange {
                role: "Start",
                node: start,
                node_count,
            });
        }
        if let Some(goal) = goal.filter(|&g| g >= node_count) {
            return Err(SessionError::NodeOutOfRange {
                role: "Goal",
                node: goal,
                node_count,
            });
        }
        Ok(())
    }
}

/// Weight map key for an undirected edge
fn edge_key(u: usize, v: usize) -> (usize, usize) {
    (u.min(v), u.max(v))
}

/// Build a node-tint snapshot following the shared convention
pub(crate) fn paint(
    node_count: usize,
    frontier: impl IntoIterator<Item = usize>,
    settled: &FxHashSet<usize>,
    current: Option<usize>,
    goal: Option<usize>,
) -> Snapshot {
    let mut tints = vec![None; node_count];
    let mut tint = |node: usize, t: NodeTint| {
        if let Some(slot) = tints.get_mut(node) {
            *slot = Some(t);
        }
    };

    for node in frontier {
        tint(node, NodeTint::Frontier);
    }
    for &node in settled {
        tint(node, NodeTint::Settled);
    }
    if let Some(node) = current {
        tint(node, NodeTint::Current);
    }
    if let Some(node) = goal {
        tint(node, NodeTint::Goal);
    }
    Snapshot::Graph(tints)
}

/// Terminal frame of a search: settled nodes plus, on success, the path.
///
/// `metadata` carries the algorithm-specific counters; `found` and `path` are
/// added here.
pub(crate) fn final_frame(
    node_count: usize,
    settled: &FxHashSet<usize>,
    parent: &FxHashMap<usize, usize>,
    start: usize,
    goal: Option<usize>,
    metadata: Metadata,
) -> Frame {
    let route = goal
        .filter(|g| settled.contains(g))
        .and_then(|g| path::reconstruct(parent, start, g));

    let mut tints = vec![None; node_count];
    for &node in settled {
        if let Some(slot) = tints.get_mut(node) {
            *slot = Some(NodeTint::Settled);
        }
    }

    let mut metadata = metadata.with(VISITED, MetaValue::Count(settled.len()));
    match route {
        Some(route) => {
            tracing::trace!(len = route.len(), "path reconstructed");
            for &node in &route {
                if let Some(slot) = tints.get_mut(node) {
                    *slot = Some(NodeTint::Path);
                }
            }
            metadata.insert(FOUND, MetaValue::Flag(true));
            metadata.insert(PATH, MetaValue::Path(route));
        }
        None => metadata.insert(FOUND, MetaValue::Flag(false)),
    }

    Frame::done(Snapshot::Graph(tints), metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_symmetric_adjacency() {
        let graph = Graph::new(vec![(0.0, 0.0); 3], vec![(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert!(graph.has_edge(2, 1));
        assert!(!graph.has_edge(0, 2));
    }

    #[test]
    fn test_edge_endpoint_out_of_range() {
        let err = Graph::new(vec![(0.0, 0.0); 2], vec![(0, 5)]).unwrap_err();
        assert!(matches!(err, SessionError::NodeOutOfRange { node: 5, .. }));
    }

    #[test]
    fn test_weight_lookup_either_direction() {
        let graph = Graph::new(vec![(0.0, 0.0); 3], vec![(0, 1), (1, 2)])
            .unwrap()
            .with_weight(1, 0, 4.5)
            .unwrap();
        assert_eq!(graph.weight(0, 1), 4.5);
        assert_eq!(graph.weight(1, 0), 4.5);
        assert_eq!(graph.weight(1, 2), 1.0);
    }

    #[test]
    fn test_reweighting_reverse_direction_overwrites() {
        let graph = Graph::new(vec![(0.0, 0.0); 2], vec![(0, 1)])
            .unwrap()
            .with_weight(0, 1, 5.0)
            .unwrap()
            .with_weight(1, 0, 3.0)
            .unwrap();
        assert_eq!(graph.weight(0, 1), 3.0);
        assert_eq!(graph.weight(1, 0), 3.0);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let graph = Graph::new(vec![(0.0, 0.0); 2], vec![(0, 1)]).unwrap();
        assert!(graph.with_weight(0, 1, -1.0).is_err());
    }

    #[test]
    fn test_validate_start_and_goal() {
        let graph = grid::build_grid(2, 2);
        assert!(graph.validate(0, Some(3)).is_ok());
        assert!(graph.validate(4, None).is_err());
        assert!(graph.validate(0, Some(4)).is_err());
        assert_eq!(grid::build_grid(0, 3).validate(0, None), Err(SessionError::EmptyGraph));
    }

    #[test]
    fn test_paint_precedence() {
        let settled: FxHashSet<usize> = [1].into_iter().collect();
        let snap = paint(4, [1, 2], &settled, Some(0), Some(3));
        assert_eq!(
            snap.tints().unwrap(),
            &[
                Some(NodeTint::Current),
                Some(NodeTint::Settled),
                Some(NodeTint::Frontier),
                Some(NodeTint::Goal),
            ]
        );
    }
}
