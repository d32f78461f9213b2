//! Dijkstra shortest-path emitter with lazy deletion

use super::{final_frame, paint, Graph};
use crate::session::errors::SessionError;
use crate::snapshot::{Frame, MetaValue, Metadata, DIST, FOUND, QUEUE, VISITED};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// Frontier entry; ordered so `BinaryHeap` pops the smallest distance first,
/// ties broken by the smaller node id
#[derive(Debug, Clone, Copy)]
struct Entry {
    dist: f64,
    node: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Initial,
    Take,
    /// Relaxing edges out of `node`, settled at distance `dist`
    Relax { node: usize, dist: f64, next: usize },
    Finish,
    Done,
}

/// Weighted shortest-path search.
///
/// Entries are never removed from the frontier when a shorter distance is
/// found; the outdated entry is skipped silently when popped. The `queue`
/// metadata therefore reports the raw frontier length, stale entries
/// included.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    graph: Rc<Graph>,
    start: usize,
    goal: Option<usize>,
    dist: Vec<f64>,
    parent: FxHashMap<usize, usize>,
    settled: FxHashSet<usize>,
    frontier: BinaryHeap<Entry>,
    phase: Phase,
}

impl Dijkstra {
    /// Fails if `start` or `goal` is not a node of `graph`
    pub fn new(graph: Rc<Graph>, start: usize, goal: Option<usize>) -> Result<Self, SessionError> {
        graph.validate(start, goal)?;
        let mut dist = vec![f64::INFINITY; graph.node_count()];
        dist[start] = 0.0;
        let mut frontier = BinaryHeap::new();
        frontier.push(Entry {
            dist: 0.0,
            node: start,
        });

        Ok(Dijkstra {
            graph,
            start,
            goal,
            dist,
            parent: FxHashMap::default(),
            settled: FxHashSet::default(),
            frontier,
            phase: Phase::Initial,
        })
    }

    fn meta(&self, queue: usize, found: bool) -> Metadata {
        Metadata::new()
            .with(VISITED, MetaValue::Count(self.settled.len()))
            .with(QUEUE, MetaValue::Count(queue))
            .with(DIST, MetaValue::Distances(self.dist.clone()))
            .with(FOUND, MetaValue::Flag(found))
    }

    fn frame(&self, highlighted: usize, current: Option<usize>, found: bool) -> Frame {
        let snapshot = paint(
            self.graph.node_count(),
            self.frontier.iter().map(|e| e.node),
            &self.settled,
            current,
            self.goal,
        );
        Frame::compare(snapshot, vec![highlighted], self.meta(self.frontier.len(), found))
    }
}

impl Iterator for Dijkstra {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            match self.phase {
                Phase::Initial => {
                    self.phase = Phase::Take;
                    return Some(self.frame(self.start, None, false));
                }
                Phase::Take => {
                    let Some(Entry { dist, node }) = self.frontier.pop() else {
                        self.phase = Phase::Finish;
                        continue;
                    };
                    // stale entry
                    if !self.settled.insert(node) {
                        continue;
                    }
                    let found = self.goal == Some(node);
                    self.phase = if found {
                        Phase::Finish
                    } else {
                        Phase::Relax { node, dist, next: 0 }
                    };
                    return Some(self.frame(node, Some(node), found));
                }
                Phase::Relax { node, dist, next } => {
                    let Some(&v) = self.graph.neighbors(node).get(next) else {
                        self.phase = Phase::Take;
                        continue;
                    };
                    self.phase = Phase::Relax {
                        node,
                        dist,
                        next: next + 1,
                    };
                    let candidate = dist + self.graph.weight(node, v);
                    // strict: ties keep the earlier predecessor
                    if candidate < self.dist[v] {
                        self.dist[v] = candidate;
                        self.parent.insert(v, node);
                        self.frontier.push(Entry {
                            dist: candidate,
                            node: v,
                        });
                        return Some(self.frame(v, None, false));
                    }
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(final_frame(
                        self.graph.node_count(),
                        &self.settled,
                        &self.parent,
                        self.start,
                        self.goal,
                        self.meta(0, false),
                    ));
                }
                Phase::Done => return None,
            }
        }
    }
}
