//! Top-down merge sort emitter
//!
//! Recursion is replaced by a work stack of [`Task`]s. Splitting `[lo, hi]`
//! pushes the merge first and the left half last, so the stack pops all of the
//! left subtree, then all of the right subtree, then the merge: the same order
//! a recursive implementation would produce.

use super::snapshot_of;
use crate::snapshot::{Frame, MetaValue, Metadata, ACTIVE_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// In-progress merge of `aux[lo..=mid]` and `aux[mid+1..=hi]` into `values`
#[derive(Debug, Clone)]
struct MergeCursor {
    lo: usize,
    mid: usize,
    hi: usize,
    i: usize,
    j: usize,
    k: usize,
    /// Comparison frame for slot `k` already emitted
    compared: bool,
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    values: Vec<i64>,
    aux: Vec<i64>,
    tasks: Vec<Task>,
    cursor: Option<MergeCursor>,
    finished: bool,
}

impl MergeSort {
    pub fn new(input: &[i64]) -> Self {
        let mut tasks = Vec::new();
        if input.len() > 1 {
            tasks.push(Task::Sort {
                lo: 0,
                hi: input.len() - 1,
            });
        }
        MergeSort {
            values: input.to_vec(),
            aux: input.to_vec(),
            tasks,
            cursor: None,
            finished: false,
        }
    }

    fn meta(lo: usize, hi: usize) -> Metadata {
        Metadata::new().with(ACTIVE_RANGE, MetaValue::Range(lo, hi))
    }

    /// Advance the active merge by one frame, or `None` once it has filled
    /// every slot
    fn merge_step(&mut self) -> Option<Frame> {
        let cursor = self.cursor.as_mut()?;
        if cursor.k > cursor.hi {
            self.cursor = None;
            return None;
        }

        let meta = Self::meta(cursor.lo, cursor.hi);
        let left_open = cursor.i <= cursor.mid;
        let right_open = cursor.j <= cursor.hi;

        if left_open && right_open && !cursor.compared {
            cursor.compared = true;
            return Some(Frame::compare(
                snapshot_of(&self.values),
                vec![cursor.i, cursor.j],
                meta,
            ));
        }

        let k = cursor.k;
        let take_right = !left_open || (right_open && self.aux[cursor.j] < self.aux[cursor.i]);
        if take_right {
            self.values[k] = self.aux[cursor.j];
            cursor.j += 1;
        } else {
            self.values[k] = self.aux[cursor.i];
            cursor.i += 1;
        }
        cursor.k += 1;
        cursor.compared = false;

        Some(Frame::write(snapshot_of(&self.values), vec![k], meta))
    }
}

impl Iterator for MergeSort {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            if self.cursor.is_some() {
                if let Some(frame) = self.merge_step() {
                    return Some(frame);
                }
                continue;
            }

            match self.tasks.pop() {
                Some(Task::Sort { lo, hi }) => {
                    if lo >= hi {
                        continue;
                    }
                    let mid = lo + (hi - lo) / 2;
                    self.tasks.push(Task::Merge { lo, mid, hi });
                    self.tasks.push(Task::Sort { lo: mid + 1, hi });
                    self.tasks.push(Task::Sort { lo, hi: mid });
                }
                Some(Task::Merge { lo, mid, hi }) => {
                    tracing::trace!(lo, mid, hi, "merge");
                    self.aux[lo..=hi].copy_from_slice(&self.values[lo..=hi]);
                    self.cursor = Some(MergeCursor {
                        lo,
                        mid,
                        hi,
                        i: lo,
                        j: mid + 1,
                        k: lo,
                        compared: false,
                    });
                }
                None => {
                    if self.finished {
                        return None;
                    }
                    self.finished = true;
                    return Some(Frame::done(snapshot_of(&self.values), Metadata::new()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    #[test]
    fn test_one_write_per_slot_per_merge() {
        // n = 4: merges of width 2, 2 and 4 fill 8 slots
        let frames: Vec<Frame> = MergeSort::new(&[4, 3, 2, 1]).collect();
        assert_eq!(writes(&frames), 8);
        assert_eq!(final_values(&frames), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_left_subtree_frames_come_first() {
        let frames: Vec<Frame> = MergeSort::new(&[4, 3, 2, 1]).collect();
        let ranges: Vec<(usize, usize)> = frames
            .iter()
            .filter_map(|f| f.metadata.range(ACTIVE_RANGE))
            .collect();
        let mut order = ranges.clone();
        order.dedup();
        assert_eq!(order, vec![(0, 1), (2, 3), (0, 3)]);
    }

    #[test]
    fn test_merge_frames_stay_inside_active_range() {
        let frames: Vec<Frame> = MergeSort::new(&[9, 1, 8, 2, 7, 3, 6]).collect();
        for frame in &frames {
            if let Some((lo, hi)) = frame.metadata.range(ACTIVE_RANGE) {
                assert!(frame.highlighted.iter().all(|&i| lo <= i && i <= hi));
            }
        }
        assert!(is_sorted(&final_values(&frames)));
    }

    #[test]
    fn test_single_element_yields_final_frame_only() {
        let frames: Vec<Frame> = MergeSort::new(&[42]).collect();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].metadata.is_empty());
    }
}
