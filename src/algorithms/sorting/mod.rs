//! Sorting emitters
//!
//! Each emitter copies its input into private working storage and yields one
//! frame per comparison or write. The last frame has a fully sorted snapshot
//! and an empty highlight.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use crate::snapshot::Snapshot;

/// Copy-on-yield snapshot of the working array
pub(crate) fn snapshot_of(values: &[i64]) -> Snapshot {
    Snapshot::Sequence(values.to_vec())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::snapshot::Frame;

    pub fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn final_values(frames: &[Frame]) -> Vec<i64> {
        frames
            .last()
            .and_then(|f| f.snapshot.values())
            .map(|v| v.to_vec())
            .unwrap_or_default()
    }

    pub fn comparisons(frames: &[Frame]) -> usize {
        frames.iter().filter(|f| f.is_comparison()).count()
    }

    pub fn writes(frames: &[Frame]) -> usize {
        frames.iter().filter(|f| f.mutated).count()
    }
}
