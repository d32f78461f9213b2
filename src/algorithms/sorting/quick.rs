//! Quicksort emitter with Lomuto partitioning (last element as pivot)

use super::snapshot_of;
use crate::snapshot::{Frame, MetaValue, Metadata, ACTIVE_RANGE, PIVOT};

/// Partition of `[lo, hi]` in progress around `values[hi]`
#[derive(Debug, Clone)]
struct Partition {
    lo: usize,
    hi: usize,
    pivot: i64,
    /// Next slot for an element `<= pivot`
    i: usize,
    /// Candidate being scanned
    j: usize,
    /// Comparison frame for `j` already emitted
    compared: bool,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    values: Vec<i64>,
    /// Pending `(lo, hi)` subranges; the top is partitioned next
    pending: Vec<(usize, usize)>,
    partition: Option<Partition>,
    finished: bool,
}

impl QuickSort {
    pub fn new(input: &[i64]) -> Self {
        let mut pending = Vec::new();
        if input.len() > 1 {
            pending.push((0, input.len() - 1));
        }
        QuickSort {
            values: input.to_vec(),
            pending,
            partition: None,
            finished: false,
        }
    }

    fn meta(pivot: usize, lo: usize, hi: usize) -> Metadata {
        Metadata::new()
            .with(PIVOT, MetaValue::Index(pivot))
            .with(ACTIVE_RANGE, MetaValue::Range(lo, hi))
    }

    /// Advance the active partition by at most one frame
    fn partition_step(&mut self) -> Option<Frame> {
        let part = self.partition.as_mut()?;
        let (lo, hi) = (part.lo, part.hi);

        if part.j < hi {
            if !part.compared {
                part.compared = true;
                return Some(Frame::compare(
                    snapshot_of(&self.values),
                    vec![part.j, hi],
                    Self::meta(hi, lo, hi),
                ));
            }

            let j = part.j;
            part.j += 1;
            part.compared = false;
            if self.values[j] <= part.pivot {
                let i = part.i;
                part.i += 1;
                if i != j {
                    self.values.swap(i, j);
                    return Some(Frame::write(
                        snapshot_of(&self.values),
                        vec![i, j],
                        Self::meta(hi, lo, hi),
                    ));
                }
            }
            return None;
        }

        // scan complete: settle the pivot and queue both sides, left on top
        let p = part.i;
        self.partition = None;
        self.pending.push((p + 1, hi));
        if p > lo {
            self.pending.push((lo, p - 1));
        }

        if p != hi {
            self.values.swap(p, hi);
            return Some(Frame::write(
                snapshot_of(&self.values),
                vec![p, hi],
                Self::meta(p, lo, hi),
            ));
        }
        None
    }
}

impl Iterator for QuickSort {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            if self.partition.is_some() {
                if let Some(frame) = self.partition_step() {
                    return Some(frame);
                }
                continue;
            }

            match self.pending.pop() {
                Some((lo, hi)) => {
                    if lo >= hi {
                        continue;
                    }
                    tracing::trace!(lo, hi, "partition");
                    self.partition = Some(Partition {
                        lo,
                        hi,
                        pivot: self.values[hi],
                        i: lo,
                        j: lo,
                        compared: false,
                    });
                    return Some(Frame::compare(
                        snapshot_of(&self.values),
                        vec![hi],
                        Self::meta(hi, lo, hi),
                    ));
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
