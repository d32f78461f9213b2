// Frames: immutable snapshots of algorithm progress

use std::collections::BTreeMap;

/// Metadata key: trailing elements guaranteed sorted (bubble sort)
pub const SORTED_TAIL_LEN: &str = "sorted_tail_len";
/// Metadata key: leading elements already in order (insertion sort)
pub const SORTED_PREFIX_LEN: &str = "sorted_prefix_len";
/// Metadata key: inclusive index span of the current divide-and-conquer step
pub const ACTIVE_RANGE: &str = "active_range";
/// Metadata key: index of the quicksort pivot
pub const PIVOT: &str = "pivot";
/// Metadata key: number of settled nodes
pub const VISITED: &str = "visited";
/// Metadata key: BFS queue length
pub const FRONTIER: &str = "frontier";
/// Metadata key: DFS stack length
pub const STACK: &str = "stack";
/// Metadata key: Dijkstra priority-queue length (stale entries included)
pub const QUEUE: &str = "queue";
/// Metadata key: tentative distances indexed by node id
pub const DIST: &str = "dist";
/// Metadata key: whether the goal has been reached
pub const FOUND: &str = "found";
/// Metadata key: reconstructed start → goal path
pub const PATH: &str = "path";

/// How a graph node is tinted in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTint {
    Frontier,
    Settled,
    Current,
    Goal,
    Path,
}

/// Immutable copy of the working storage at one instant.
///
/// Emitters clone their working state into a fresh snapshot for every frame,
/// so a frame handed out earlier never changes when the algorithm moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// Array contents of a sorting run
    Sequence(Vec<i64>),
    /// Per-node tint of a graph run, indexed by node id (`None` = untouched)
    Graph(Vec<Option<NodeTint>>),
}

impl Snapshot {
    /// Number of addressable positions (array slots or node ids)
    pub fn len(&self) -> usize {
        match self {
            Snapshot::Sequence(values) => values.len(),
            Snapshot::Graph(tints) => tints.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Option<&[i64]> {
        match self {
            Snapshot::Sequence(values) => Some(values),
            Snapshot::Graph(_) => None,
        }
    }

    pub fn tints(&self) -> Option<&[Option<NodeTint>]> {
        match self {
            Snapshot::Sequence(_) => None,
            Snapshot::Graph(tints) => Some(tints),
        }
    }
}

/// A single metadata value attached to a frame
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Count(usize),
    Index(usize),
    Flag(bool),
    Range(usize, usize),
    Path(Vec<usize>),
    /// Tentative distances by node id; unreached nodes hold `f64::INFINITY`
    Distances(Vec<f64>),
}

/// String-keyed metadata; always present on a frame, possibly empty.
///
/// The typed getters return `None` both for missing keys and for keys holding
/// a different kind of value, so readers never have to handle a type error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: BTreeMap<String, MetaValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: MetaValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: MetaValue) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, key: &str) -> Option<usize> {
        match self.get(key) {
            Some(MetaValue::Count(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn index(&self, key: &str) -> Option<usize> {
        match self.get(key) {
            Some(MetaValue::Index(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(MetaValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn range(&self, key: &str) -> Option<(usize, usize)> {
        match self.get(key) {
            Some(MetaValue::Range(lo, hi)) => Some((*lo, *hi)),
            _ => None,
        }
    }

    pub fn path(&self, key: &str) -> Option<&[usize]> {
        match self.get(key) {
            Some(MetaValue::Path(path)) => Some(path),
            _ => None,
        }
    }

    pub fn distances(&self, key: &str) -> Option<&[f64]> {
        match self.get(key) {
            Some(MetaValue::Distances(dist)) => Some(dist),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One observable step of an algorithm run
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub snapshot: Snapshot,
    /// Positions (array indices or node ids) the step acted on, in the order
    /// the algorithm touched them. Empty on the terminal frame.
    pub highlighted: Vec<usize>,
    /// Whether the step wrote to the working storage
    pub mutated: bool,
    pub metadata: Metadata,
}

impl Frame {
    pub fn new(snapshot: Snapshot, highlighted: Vec<usize>, mutated: bool, metadata: Metadata) -> Self {
        Frame {
            snapshot,
            highlighted,
            mutated,
            metadata,
        }
    }

    /// Frame that merely inspects positions
    pub fn compare(snapshot: Snapshot, highlighted: Vec<usize>, metadata: Metadata) -> Self {
        Self::new(snapshot, highlighted, false, metadata)
    }

    /// Frame emitted right after a write
    pub fn write(snapshot: Snapshot, highlighted: Vec<usize>, metadata: Metadata) -> Self {
        Self::new(snapshot, highlighted, true, metadata)
    }

    /// Terminal frame: nothing highlighted
    pub fn done(snapshot: Snapshot, metadata: Metadata) -> Self {
        Self::new(snapshot, Vec::new(), false, metadata)
    }

    pub fn is_comparison(&self) -> bool {
        !self.mutated && !self.highlighted.is_empty()
    }

    /// Short caption for the step kind
    pub fn label(&self) -> &'static str {
        if self.mutated {
            "Swap"
        } else if !self.highlighted.is_empty() {
            "Compare"
        } else {
            "..."
        }
    }

    pub fn found(&self) -> bool {
        self.metadata.flag(FOUND).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_getters_are_type_checked() {
        let meta = Metadata::new()
            .with(SORTED_TAIL_LEN, MetaValue::Count(3))
            .with(ACTIVE_RANGE, MetaValue::Range(1, 4));

        assert_eq!(meta.count(SORTED_TAIL_LEN), Some(3));
        assert_eq!(meta.range(ACTIVE_RANGE), Some((1, 4)));
        // wrong kind reads as absent
        assert_eq!(meta.index(SORTED_TAIL_LEN), None);
        assert_eq!(meta.count(PIVOT), None);
    }

    #[test]
    fn test_frame_labels() {
        let snap = Snapshot::Sequence(vec![2, 1]);
        assert_eq!(Frame::compare(snap.clone(), vec![0, 1], Metadata::new()).label(), "Compare");
        assert_eq!(Frame::write(snap.clone(), vec![0, 1], Metadata::new()).label(), "Swap");
        assert_eq!(Frame::done(snap, Metadata::new()).label(), "...");
    }

    #[test]
    fn test_snapshot_len() {
        assert_eq!(Snapshot::Sequence(vec![1, 2, 3]).len(), 3);
        assert!(Snapshot::Graph(Vec::new()).is_empty());
    }
}
