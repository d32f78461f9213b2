//! Breadth-first and depth-first search emitters

use super::{final_frame, paint, Graph};
use crate::session::errors::SessionError;
use crate::snapshot::{Frame, MetaValue, Metadata, FOUND, FRONTIER, STACK, VISITED};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::rc::Rc;

/// Order in which discovered nodes leave the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Queue: breadth-first
    Fifo,
    /// Stack: depth-first
    Lifo,
}

impl Discipline {
    /// Metadata key carrying the frontier size
    fn size_key(self) -> &'static str {
        match self {
            Discipline::Fifo => FRONTIER,
            Discipline::Lifo => STACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initial,
    Take,
    /// Scanning neighbors of `current`; `next` counts neighbors already looked at
    Expand { current: usize, next: usize },
    Finish,
    Done,
}

/// Unweighted search over a [`Graph`].
///
/// A node is settled the first time it leaves the frontier. A neighbor is
/// added only if it is neither settled nor already waiting in the frontier,
/// so no node is ever settled twice. Depth-first search pushes neighbors in
/// reverse adjacency order so they pop in natural order.
#[derive(Debug, Clone)]
pub struct Traversal {
    graph: Rc<Graph>,
    discipline: Discipline,
    start: usize,
    goal: Option<usize>,
    frontier: VecDeque<usize>,
    waiting: FxHashSet<usize>,
    settled: FxHashSet<usize>,
    parent: FxHashMap<usize, usize>,
    phase: Phase,
}

impl Traversal {
    /// Fails if `start` or `goal` is not a node of `graph`
    pub fn new(
        graph: Rc<Graph>,
        discipline: Discipline,
        start: usize,
        goal: Option<usize>,
    ) -> Result<Self, SessionError> {
        graph.validate(start, goal)?;
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        let mut waiting = FxHashSet::default();
        waiting.insert(start);

        Ok(Traversal {
            graph,
            discipline,
            start,
            goal,
            frontier,
            waiting,
            settled: FxHashSet::default(),
            parent: FxHashMap::default(),
            phase: Phase::Initial,
        })
    }

    pub fn bfs(graph: Rc<Graph>, start: usize, goal: Option<usize>) -> Result<Self, SessionError> {
        Self::new(graph, Discipline::Fifo, start, goal)
    }

    pub fn dfs(graph: Rc<Graph>, start: usize, goal: Option<usize>) -> Result<Self, SessionError> {
        Self::new(graph, Discipline::Lifo, start, goal)
    }

    fn pop(&mut self) -> Option<usize> {
        let node = match self.discipline {
            Discipline::Fifo => self.frontier.pop_front(),
            Discipline::Lifo => self.frontier.pop_back(),
        }?;
        self.waiting.remove(&node);
        Some(node)
    }

    fn meta(&self, found: bool) -> Metadata {
        Metadata::new()
            .with(VISITED, MetaValue::Count(self.settled.len()))
            .with(self.discipline.size_key(), MetaValue::Count(self.frontier.len()))
            .with(FOUND, MetaValue::Flag(found))
    }

    fn frame(&self, highlighted: usize, current: Option<usize>, found: bool) -> Frame {
        let snapshot = paint(
            self.graph.node_count(),
            self.frontier.iter().copied(),
            &self.settled,
            current,
            self.goal,
        );
        Frame::compare(snapshot, vec![highlighted], self.meta(found))
    }

    /// Neighbor number `index` in scan order
    fn neighbor(&self, node: usize, index: usize) -> Option<usize> {
        let adjacent = self.graph.neighbors(node);
        match self.discipline {
            Discipline::Fifo => adjacent.get(index).copied(),
            Discipline::Lifo => adjacent
                .len()
                .checked_sub(index + 1)
                .map(|i| adjacent[i]),
        }
    }
}

impl Iterator for Traversal {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            match self.phase {
                Phase::Initial => {
                    self.phase = Phase::Take;
                    return Some(self.frame(self.start, None, false));
                }
                Phase::Take => {
                    let Some(current) = self.pop() else {
                        self.phase = Phase::Finish;
                        continue;
                    };
                    if !self.settled.insert(current) {
                        continue;
                    }
                    let found = self.goal == Some(current);
                    self.phase = if found {
                        Phase::Finish
                    } else {
                        Phase::Expand { current, next: 0 }
                    };
                    return Some(self.frame(current, Some(current), found));
                }
                Phase::Expand { current, next } => {
                    let Some(candidate) = self.neighbor(current, next) else {
                        self.phase = Phase::Take;
                        continue;
                    };
                    self.phase = Phase::Expand {
                        current,
                        next: next + 1,
                    };
                    if self.settled.contains(&candidate) || self.waiting.contains(&candidate) {
                        continue;
                    }
                    self.parent.insert(candidate, current);
                    self.frontier.push_back(candidate);
                    self.waiting.insert(candidate);
                    return Some(self.frame(candidate, None, false));
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    let metadata =
                        Metadata::new().with(self.discipline.size_key(), MetaValue::Count(0));
                    return Some(final_frame(
                        self.graph.node_count(),
                        &self.settled,
                        &self.parent,
                        self.start,
                        self.goal,
                        metadata,
                    ));
                }
                Phase::Done => return None,
            }
        }
    }
}
