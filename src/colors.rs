//! Presentation hints derived from frames
//!
//! Colors here are abstract tokens; turning them into concrete terminal colors
//! is the front end's job (see `ui::theme`).

use crate::algorithms::Algorithm;
use crate::snapshot::{Frame, Metadata, NodeTint, Snapshot, ACTIVE_RANGE, PIVOT, SORTED_PREFIX_LEN, SORTED_TAIL_LEN};
use std::collections::BTreeMap;

/// Abstract color identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Base,
    /// Positions the step acted on
    Highlight,
    Sorted,
    ActiveRange,
    Pivot,
    Frontier,
    Settled,
    Current,
    Goal,
    Path,
}

impl From<NodeTint> for ColorToken {
    fn from(tint: NodeTint) -> Self {
        match tint {
            NodeTint::Frontier => ColorToken::Frontier,
            NodeTint::Settled => ColorToken::Settled,
            NodeTint::Current => ColorToken::Current,
            NodeTint::Goal => ColorToken::Goal,
            NodeTint::Path => ColorToken::Path,
        }
    }
}

/// Per-position color overrides for one snapshot.
///
/// Sorting rules key off `sorted_tail_len`, `sorted_prefix_len`,
/// `active_range` and `pivot`; a missing or mistyped field contributes
/// nothing. Graph snapshots map their node tints directly. Positions outside
/// the snapshot are never produced.
pub fn overrides_for(
    snapshot: &Snapshot,
    algorithm: Algorithm,
    metadata: &Metadata,
) -> BTreeMap<usize, ColorToken> {
    let mut overrides = BTreeMap::new();
    let n = snapshot.len();

    if let Snapshot::Graph(tints) = snapshot {
        for (node, tint) in tints.iter().enumerate() {
            if let Some(tint) = tint {
                overrides.insert(node, ColorToken::from(*tint));
            }
        }
        return overrides;
    }

    match algorithm {
        Algorithm::Bubble => {
            if let Some(tail) = metadata.count(SORTED_TAIL_LEN).filter(|&t| t > 0) {
                for idx in n.saturating_sub(tail)..n {
                    overrides.insert(idx, ColorToken::Sorted);
                }
            }
        }
        Algorithm::Insertion => {
            if let Some(prefix) = metadata.count(SORTED_PREFIX_LEN) {
                for idx in 0..prefix.min(n) {
                    overrides.insert(idx, ColorToken::Sorted);
                }
            }
        }
        Algorithm::Merge | Algorithm::Quick => {
            if let Some((lo, hi)) = metadata.range(ACTIVE_RANGE) {
                if n > 0 {
                    for idx in lo..=hi.min(n - 1) {
                        overrides.insert(idx, ColorToken::ActiveRange);
                    }
                }
            }
            if algorithm == Algorithm::Quick {
                if let Some(pivot) = metadata.index(PIVOT).filter(|&p| p < n) {
                    overrides.insert(pivot, ColorToken::Pivot);
                }
            }
        }
        Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra => {}
    }

    overrides
}

/// Overrides for a frame; see [`overrides_for`]
pub fn color_overrides(frame: &Frame, algorithm: Algorithm) -> BTreeMap<usize, ColorToken> {
    overrides_for(&frame.snapshot, algorithm, &frame.metadata)
}

/// Final color of every position: base, then overrides, then the frame's own
/// highlight on top. Out-of-range highlights are ignored.
pub fn paint(frame: &Frame, algorithm: Algorithm) -> Vec<ColorToken> {
    let mut colors = vec![ColorToken::Base; frame.snapshot.len()];
    for (idx, token) in color_overrides(frame, algorithm) {
        if let Some(slot) = colors.get_mut(idx) {
            *slot = token;
        }
    }
    for &idx in &frame.highlighted {
        if let Some(slot) = colors.get_mut(idx) {
            *slot = ColorToken::Highlight;
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MetaValue;

    fn seq_frame(n: usize, highlighted: Vec<usize>, metadata: Metadata) -> Frame {
        Frame::compare(Snapshot::Sequence(vec![0; n]), highlighted, metadata)
    }

    #[test]
    fn test_bubble_tail_is_sorted() {
        let frame = seq_frame(5, vec![], Metadata::new().with(SORTED_TAIL_LEN, MetaValue::Count(2)));
        let overrides = color_overrides(&frame, Algorithm::Bubble);
        assert_eq!(overrides.keys().copied().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_insertion_prefix_is_clamped() {
        let frame = seq_frame(3, vec![], Metadata::new().with(SORTED_PREFIX_LEN, MetaValue::Count(10)));
        assert_eq!(color_overrides(&frame, Algorithm::Insertion).len(), 3);
    }

    #[test]
    fn test_quick_pivot_over_active_range() {
        let meta = Metadata::new()
            .with(ACTIVE_RANGE, MetaValue::Range(1, 3))
            .with(PIVOT, MetaValue::Index(3));
        let overrides = color_overrides(&seq_frame(6, vec![], meta), Algorithm::Quick);
        assert_eq!(overrides.get(&1), Some(&ColorToken::ActiveRange));
        assert_eq!(overrides.get(&3), Some(&ColorToken::Pivot));
        assert_eq!(overrides.get(&0), None);
    }

    #[test]
    fn test_merge_ignores_pivot() {
        let meta = Metadata::new().with(PIVOT, MetaValue::Index(0));
        assert!(color_overrides(&seq_frame(4, vec![], meta), Algorithm::Merge).is_empty());
    }

    #[test]
    fn test_out_of_bounds_range_is_clipped() {
        let meta = Metadata::new()
            .with(ACTIVE_RANGE, MetaValue::Range(2, 99))
            .with(PIVOT, MetaValue::Index(99));
        let overrides = color_overrides(&seq_frame(4, vec![], meta), Algorithm::Quick);
        assert_eq!(overrides.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_missing_or_mistyped_metadata_is_noop() {
        let meta = Metadata::new().with(SORTED_TAIL_LEN, MetaValue::Flag(true));
        assert!(color_overrides(&seq_frame(4, vec![], meta), Algorithm::Bubble).is_empty());
        assert!(color_overrides(&seq_frame(4, vec![], Metadata::new()), Algorithm::Quick).is_empty());
    }

    #[test]
    fn test_highlight_wins_and_ignores_out_of_range() {
        let meta = Metadata::new().with(SORTED_TAIL_LEN, MetaValue::Count(2));
        let colors = paint(&seq_frame(3, vec![2, 7], meta), Algorithm::Bubble);
        assert_eq!(
            colors,
            vec![ColorToken::Base, ColorToken::Sorted, ColorToken::Highlight]
        );
    }

    #[test]
    fn test_graph_tints_map_to_tokens() {
        let frame = Frame::done(
            Snapshot::Graph(vec![Some(NodeTint::Path), None, Some(NodeTint::Settled)]),
            Metadata::new(),
        );
        let colors = paint(&frame, Algorithm::Bfs);
        assert_eq!(
            colors,
            vec![ColorToken::Path, ColorToken::Base, ColorToken::Settled]
        );
    }
}
